use std::collections::HashSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use super::errors::VideoError;
use super::output::{resolve_output_path, validate_file_name};
use super::stream_selector::{BandwidthPolicy, BandwidthSelector, resolve_variant_url};
use super::time_range::TimeRange;
use crate::config::SelectConfig;

// 码率变体
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bandwidth {
    pub idx: usize, // 在来源列表中的位置
    pub bandwidth: u64, // 码率 bps
}

impl Bandwidth {
    pub fn new(idx: usize, bandwidth: u64) -> Self {
        Self { idx, bandwidth }
    }
}

// --------------------------------------------------------------------

/// 一个可下载的 HLS 视频
///
/// 构造时完成全部校验，之后不可原地修改：选择 / 取消选择码率都会
/// 消耗旧值并返回新值。`selected_bandwidth` 总是 `bandwidths` 中某一项。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDownloadableVideo")]
pub struct DownloadableVideo {
    hls_url: String,
    bandwidths: Vec<Bandwidth>,
    range_start: String,
    range_end: String,
    file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    selected_bandwidth: Option<Bandwidth>,
    #[serde(skip)]
    time_range: TimeRange,
}

impl DownloadableVideo {
    pub fn new(
        hls_url: impl Into<String>,
        bandwidths: Vec<Bandwidth>,
        range_start: impl Into<String>,
        range_end: impl Into<String>,
        file_name: impl Into<String>,
    ) -> Result<Self, VideoError> {
        let hls_url = hls_url.into();
        let range_start = range_start.into();
        let range_end = range_end.into();
        let file_name = file_name.into();

        if hls_url.trim().is_empty() {
            return Err(VideoError::validation("hls_url 不能为空"));
        }
        let url = Url::parse(hls_url.trim())
            .map_err(|e| VideoError::validation(format!("无效的URL {}: {}", hls_url, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(VideoError::validation(format!(
                "不支持的协议 {}: {}",
                url.scheme(),
                hls_url
            )));
        }

        check_bandwidths(&bandwidths)?;
        validate_file_name(&file_name)?;

        let time_range = TimeRange::parse(&range_start, &range_end).map_err(|e| match e {
            VideoError::InvalidTime(t) => VideoError::validation(format!("无效的时间: {}", t)),
            other => other,
        })?;

        debug!(
            "创建视频描述: {} ({} 个码率, {})",
            file_name,
            bandwidths.len(),
            time_range
        );

        Ok(Self {
            hls_url,
            bandwidths,
            range_start,
            range_end,
            file_name,
            selected_bandwidth: None,
            time_range,
        })
    }

    pub fn hls_url(&self) -> &str {
        &self.hls_url
    }

    pub fn bandwidths(&self) -> &[Bandwidth] {
        &self.bandwidths
    }

    pub fn range_start(&self) -> &str {
        &self.range_start
    }

    pub fn range_end(&self) -> &str {
        &self.range_end
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn selected_bandwidth(&self) -> Option<&Bandwidth> {
        self.selected_bandwidth.as_ref()
    }

    pub fn time_range(&self) -> TimeRange {
        self.time_range
    }

    /// 按 `idx` 在 `bandwidths` 中查找并选中
    pub fn select_bandwidth(self, idx: usize) -> Result<Self, VideoError> {
        let selected = *self
            .find_bandwidth(idx)
            .ok_or(VideoError::NotFound { idx })?;
        debug!("选择码率: idx={} bandwidth={}", selected.idx, selected.bandwidth);

        Ok(Self {
            selected_bandwidth: Some(selected),
            ..self
        })
    }

    pub fn clear_selection(self) -> Self {
        Self {
            selected_bandwidth: None,
            ..self
        }
    }

    /// 按策略选中码率；列表为空时返回校验错误
    pub fn select_by_policy(self, policy: BandwidthPolicy) -> Result<Self, VideoError> {
        let idx = BandwidthSelector::new(policy)
            .pick(&self.bandwidths)
            .map(|b| b.idx)
            .ok_or_else(|| VideoError::validation("没有可供选择的码率"))?;
        self.select_bandwidth(idx)
    }

    /// 实际要下载的码率：已选中的优先，否则按策略挑选
    pub fn effective_bandwidth(&self, policy: BandwidthPolicy) -> Option<Bandwidth> {
        if let Some(selected) = self.selected_bandwidth {
            return Some(selected);
        }
        let picked = BandwidthSelector::new(policy).pick(&self.bandwidths).copied();
        if picked.is_none() {
            debug!("{} 没有可用的码率变体", self.hls_url);
        }
        picked
    }

    /// 以 `hls_url` 为基准解析变体或分片的 URI
    pub fn resolve_uri(&self, uri: &str) -> Result<Url, VideoError> {
        let base = Url::parse(self.hls_url.trim())
            .map_err(|e| VideoError::validation(format!("无效的URL {}: {}", self.hls_url, e)))?;
        resolve_variant_url(&base, uri)
    }

    pub fn output_path(&self, config: &SelectConfig) -> PathBuf {
        resolve_output_path(&self.file_name, &config.default_extension)
    }

    fn find_bandwidth(&self, idx: usize) -> Option<&Bandwidth> {
        self.bandwidths.iter().find(|b| b.idx == idx)
    }
}

fn check_bandwidths(bandwidths: &[Bandwidth]) -> Result<(), VideoError> {
    let mut seen = HashSet::with_capacity(bandwidths.len());
    for b in bandwidths {
        if !seen.insert(b.idx) {
            return Err(VideoError::validation(format!("重复的码率 idx: {}", b.idx)));
        }
        if b.bandwidth == 0 {
            return Err(VideoError::validation(format!("码率必须大于 0: idx={}", b.idx)));
        }
    }
    Ok(())
}

// --------------------------------------------------------------------

// 反序列化用的原始结构，转换时走同样的校验
#[derive(Debug, Deserialize)]
struct RawDownloadableVideo {
    hls_url: String,
    bandwidths: Vec<Bandwidth>,
    range_start: String,
    range_end: String,
    file_name: String,
    selected_bandwidth: Option<Bandwidth>,
}

impl TryFrom<RawDownloadableVideo> for DownloadableVideo {
    type Error = VideoError;

    fn try_from(raw: RawDownloadableVideo) -> Result<Self, Self::Error> {
        let video = DownloadableVideo::new(
            raw.hls_url,
            raw.bandwidths,
            raw.range_start,
            raw.range_end,
            raw.file_name,
        )?;

        match raw.selected_bandwidth {
            None => Ok(video),
            Some(selected) => {
                if video.find_bandwidth(selected.idx) != Some(&selected) {
                    return Err(VideoError::validation(format!(
                        "selected_bandwidth {:?} 不在 bandwidths 中",
                        selected
                    )));
                }
                video.select_bandwidth(selected.idx)
            }
        }
    }
}
