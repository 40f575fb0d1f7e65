pub mod errors;
pub mod models;
pub mod output;
pub mod stream_selector;
pub mod time_range;

pub use errors::VideoError;
pub use models::{Bandwidth, DownloadableVideo};
pub use stream_selector::{BandwidthPolicy, BandwidthSelector};
pub use time_range::TimeRange;
