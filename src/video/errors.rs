use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VideoError {
    #[error("参数校验失败: {0}")]
    Validation(String),
    #[error("未找到码率: idx={idx}")]
    NotFound { idx: usize },
    #[error("无效的时间格式: {0}")]
    InvalidTime(String),
    #[error("JSON 解析错误: {0}")]
    Json(#[from] serde_json::Error),
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),
}

impl VideoError {
    pub fn validation(msg: impl Into<String>) -> Self {
        VideoError::Validation(msg.into())
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, VideoError::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, VideoError::NotFound { .. })
    }
}

impl From<ParseIntError> for VideoError {
    fn from(err: ParseIntError) -> Self {
        VideoError::Validation(err.to_string())
    }
}
