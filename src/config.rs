use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::video::errors::VideoError;
use crate::video::output::DEFAULT_EXTENSION;
use crate::video::stream_selector::BandwidthPolicy;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectConfig {
    pub policy: BandwidthPolicy, // 未选择码率时的策略
    pub default_extension: String, // 文件名缺少扩展名时补充
}

impl Default for SelectConfig {
    fn default() -> Self {
        Self {
            policy: BandwidthPolicy::default(),
            default_extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

impl SelectConfig {
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, VideoError> {
        let path = path.as_ref();
        debug!("加载配置文件: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }
}
