pub mod time;
pub mod types;

pub use time::{FormattedTime, TimeFormatOptions};
pub use types::{DeviceMetrics, ImageBox, Platform, ScaleFactors, UnknownPlatform};
