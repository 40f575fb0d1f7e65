use std::path::Path;

use tracing::{debug, info};

use crate::config::SelectConfig;
use crate::video::errors::VideoError;
use crate::video::models::DownloadableVideo;
use crate::video::stream_selector::parse_variant_bandwidths;

/// `new` 子命令的输入
#[derive(Debug, Clone, Default)]
pub struct NewVideoArgs {
    pub url: String,
    pub name: String,
    pub start_at: String,
    pub end_at: String,
    pub bandwidths: Vec<String>,
    pub select: Option<usize>,
    pub auto_select: bool,
}

/// 从命令行参数构造视频描述
pub fn build_video(
    args: &NewVideoArgs,
    config: &SelectConfig,
) -> Result<DownloadableVideo, VideoError> {
    let bandwidths = parse_variant_bandwidths(args.bandwidths.iter().map(String::as_str))?;
    debug!("变体码率: {:?}", bandwidths);

    let video = DownloadableVideo::new(
        args.url.trim(),
        bandwidths,
        args.start_at.as_str(),
        args.end_at.as_str(),
        args.name.as_str(),
    )?;

    match (args.select, args.auto_select) {
        (Some(idx), _) => video.select_bandwidth(idx),
        (None, true) => video.select_by_policy(config.policy),
        (None, false) => Ok(video),
    }
}

pub fn load_video(path: impl AsRef<Path>) -> Result<DownloadableVideo, VideoError> {
    let path = path.as_ref();
    info!("读取视频描述: {:?}", path);
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn to_json(video: &DownloadableVideo, pretty: bool) -> Result<String, VideoError> {
    let json = if pretty {
        serde_json::to_string_pretty(video)?
    } else {
        serde_json::to_string(video)?
    };
    Ok(json)
}
