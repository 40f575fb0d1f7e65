//! `range_start` / `range_end` 的时间偏移表示
//!
//! 时间格式为 `[[H:]M:]S`，秒可以带小数，例如 `90`、`1:30`、`0:01:30.5`。
//! 空字符串表示不限制（从头开始 / 直到结尾）。

use std::fmt;
use std::ops::Range;

use lazy_static::lazy_static;
use regex::Regex;

use super::errors::VideoError;

lazy_static! {
    static ref TIME_PATTERN: Regex =
        Regex::new(r"^(?:(?:(\d+):)?(\d+):)?(\d+(?:\.\d+)?)$").expect("时间正则无效");
}

/// 解析单个时间偏移，返回秒数。空字符串返回 `None`
pub fn parse_time_str(input: &str) -> Result<Option<f32>, VideoError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    let caps = TIME_PATTERN
        .captures(input)
        .ok_or_else(|| VideoError::InvalidTime(input.to_string()))?;

    let invalid = || VideoError::InvalidTime(input.to_string());
    let field = |idx: usize| -> Result<f32, VideoError> {
        match caps.get(idx) {
            Some(m) => m.as_str().parse::<f32>().map_err(|_| invalid()),
            None => Ok(0.0),
        }
    };

    let hours = field(1)?;
    let mins = field(2)?;
    let secs = field(3)?;

    Ok(Some(hours * 3600.0 + mins * 60.0 + secs))
}

// 格式化秒数
pub fn format_time(seconds: f32) -> String {
    let total = seconds.max(0.0).round() as u32;
    let hours = total / 3600;
    let mins = (total % 3600) / 60;
    let secs = total % 60;

    if hours != 0 {
        format!("{:02}:{:02}:{:02}", hours, mins, secs)
    } else {
        format!("{:02}:{:02}", mins, secs)
    }
}

/// 解析后的时间区间，单位为秒
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TimeRange {
    pub start: f32,
    /// `None` 表示一直到结尾
    pub end: Option<f32>,
}

impl TimeRange {
    pub fn new(start: f32, end: Option<f32>) -> Result<Self, VideoError> {
        // 结束时间为 0 视为不限制
        let end = end.filter(|e| *e > 0.0);
        if let Some(end) = end {
            if start > end {
                return Err(VideoError::validation(format!(
                    "起始时间 {} 晚于结束时间 {}",
                    format_time(start),
                    format_time(end)
                )));
            }
        }
        Ok(Self { start, end })
    }

    pub fn parse(range_start: &str, range_end: &str) -> Result<Self, VideoError> {
        let start = parse_time_str(range_start)?.unwrap_or(0.0);
        let end = parse_time_str(range_end)?;
        Self::new(start, end)
    }

    pub fn is_full(&self) -> bool {
        self.start <= 0.0 && self.end.is_none()
    }

    /// 根据媒体播放列表中各分片的时长，计算需要下载的分片下标区间
    ///
    /// 结束时间早于 `start` 的分片会被跳过；之后只要分片的起始时间不晚于
    /// `end` 就会被包含。
    pub fn segment_window(&self, durations: &[f32]) -> Range<usize> {
        let mut cumul = 0f32;
        let mut first = 0;

        if self.start > 0.0 {
            while first < durations.len() && cumul + durations[first] < self.start {
                cumul += durations[first];
                first += 1;
            }
        }

        let Some(end) = self.end else {
            return first..durations.len();
        };

        let mut last = first;
        while last < durations.len() && cumul <= end {
            cumul += durations[last];
            last += 1;
        }
        first..last
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Some(end) => write!(f, "{} - {}", format_time(self.start), format_time(end)),
            None => write!(f, "{} - 结尾", format_time(self.start)),
        }
    }
}
