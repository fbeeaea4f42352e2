use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Host operating system reported by the UI framework.
///
/// Deserializes from the host's OS id case-insensitively (`"iOS"`, `"ios"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Platform {
    Ios,
    Android,
}

impl Platform {
    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown platform: {0:?}")]
pub struct UnknownPlatform(pub String);

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(os: &str) -> Result<Self, Self::Err> {
        match os.trim().to_ascii_lowercase().as_str() {
            "ios" => Ok(Platform::Ios),
            "android" => Ok(Platform::Android),
            _ => Err(UnknownPlatform(os.to_string())),
        }
    }
}

impl TryFrom<String> for Platform {
    type Error = UnknownPlatform;

    fn try_from(os: String) -> Result<Self, Self::Error> {
        os.parse()
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Snapshot of the device screen taken once at startup.
///
/// Rotation and resize are not tracked: the host builds a new snapshot if it
/// wants different numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceMetrics {
    /// Window width in logical pixels.
    pub screen_width: f64,
    /// Window height in logical pixels.
    pub screen_height: f64,
    /// The user's system-wide text size multiplier.
    #[serde(default = "default_font_scale")]
    pub font_scale: f64,
    pub platform: Platform,
}

fn default_font_scale() -> f64 {
    1.0
}

impl DeviceMetrics {
    pub fn new(screen_width: f64, screen_height: f64, font_scale: f64, platform: Platform) -> Self {
        Self {
            screen_width,
            screen_height,
            font_scale,
            platform,
        }
    }
}

/// Ratio of the actual screen to the reference design device, per axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleFactors {
    pub scale_x: f64,
    pub scale_y: f64,
}

impl ScaleFactors {
    /// The smaller of the two axis factors.
    pub fn min(&self) -> f64 {
        self.scale_x.min(self.scale_y)
    }
}

/// Size of an image after fitting it into a bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageBox {
    pub width: f64,
    pub height: f64,
}

impl ImageBox {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width over height. Useful for reserving a placeholder of the right
    /// shape before the fitted image has loaded.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }
}
