use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use super::errors::VideoError;
use super::models::Bandwidth;

/// 未手动选择码率时使用的默认策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BandwidthPolicy {
    /// 最高码率
    Highest,
    /// 最低码率（默认，即升序列表中的 idx 0）
    #[default]
    Lowest,
    /// 最接近目标码率，距离相同时取较低者
    Closest(u64),
}

impl FromStr for BandwidthPolicy {
    type Err = VideoError;

    // 支持 highest / lowest / closest:<bps>
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            "highest" => Ok(Self::Highest),
            "lowest" => Ok(Self::Lowest),
            _ => match s.strip_prefix("closest:") {
                Some(target) => Ok(Self::Closest(target.trim().parse()?)),
                None => Err(VideoError::validation(format!("不支持的码率策略: {}", s))),
            },
        }
    }
}

impl fmt::Display for BandwidthPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Highest => write!(f, "highest"),
            Self::Lowest => write!(f, "lowest"),
            Self::Closest(target) => write!(f, "closest:{}", target),
        }
    }
}

pub struct BandwidthSelector {
    policy: BandwidthPolicy,
}

impl BandwidthSelector {
    pub fn new(policy: BandwidthPolicy) -> Self {
        Self { policy }
    }

    /// 根据策略从候选列表中挑选码率，列表为空时返回 `None`
    pub fn pick<'a>(&self, bandwidths: &'a [Bandwidth]) -> Option<&'a Bandwidth> {
        let picked = match self.policy {
            BandwidthPolicy::Highest => bandwidths.iter().max_by_key(|b| b.bandwidth),
            BandwidthPolicy::Lowest => bandwidths.iter().min_by_key(|b| b.bandwidth),
            BandwidthPolicy::Closest(target) => bandwidths
                .iter()
                .min_by_key(|b| (b.bandwidth.abs_diff(target), b.bandwidth)),
        };
        debug!("码率策略 {} 选择结果: {:?}", self.policy, picked);
        picked
    }
}

/// 由主播放列表中各变体的码率构造 `bandwidths`
///
/// 码率按升序排列，`idx` 为排序后的位置；码率为 0 的变体会被丢弃。
pub fn bandwidths_from_variants(variants: impl IntoIterator<Item = u64>) -> Vec<Bandwidth> {
    let mut rates: Vec<u64> = variants.into_iter().filter(|b| *b > 0).collect();
    rates.sort_unstable();

    rates
        .into_iter()
        .enumerate()
        .map(|(idx, bandwidth)| Bandwidth { idx, bandwidth })
        .collect()
}

/// 同 [`bandwidths_from_variants`]，输入为 `BANDWIDTH` 属性的原始文本
pub fn parse_variant_bandwidths<'a>(
    variants: impl IntoIterator<Item = &'a str>,
) -> Result<Vec<Bandwidth>, VideoError> {
    let rates = variants
        .into_iter()
        .map(|s| {
            s.trim()
                .parse::<u64>()
                .map_err(|e| VideoError::validation(format!("无效的码率 {:?}: {}", s, e)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(bandwidths_from_variants(rates))
}

/// 将变体或分片的 URI 解析为完整链接
///
/// 绝对链接直接使用，否则相对于 `base` 拼接。`base` 带有查询参数时会
/// 追加到结果上（部分 CDN 依赖播放列表链接中的签名参数）。
pub fn resolve_variant_url(base: &Url, uri: &str) -> Result<Url, VideoError> {
    let uri = uri.trim();
    if uri.is_empty() {
        return Err(VideoError::validation("变体 URI 不能为空"));
    }

    let mut resolved = match Url::parse(uri) {
        Ok(u) if !u.cannot_be_a_base() => u,
        _ => base
            .join(uri)
            .map_err(|e| VideoError::validation(format!("无法解析链接 {}: {}", uri, e)))?,
    };

    if let Some(base_query) = base.query().filter(|q| !q.is_empty()) {
        let query = match resolved.query().filter(|q| !q.is_empty()) {
            Some(own) => format!("{}&{}", own, base_query),
            None => base_query.to_string(),
        };
        resolved.set_query(Some(&query));
    }

    debug!("解析链接: {} -> {}", uri, resolved);
    Ok(resolved)
}
