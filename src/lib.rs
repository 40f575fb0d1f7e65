pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod video;

pub use config::SelectConfig;
pub use video::{Bandwidth, BandwidthPolicy, DownloadableVideo, TimeRange, VideoError};
