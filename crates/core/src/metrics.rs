use scalekit_protocol::{DeviceMetrics, Platform, UnknownPlatform};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("invalid metrics JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("screen dimensions must be positive and finite, got {width}x{height}")]
    InvalidScreen { width: f64, height: f64 },
    #[error("font scale must be positive and finite, got {0}")]
    InvalidFontScale(f64),
    #[error("unknown platform: {0:?}")]
    UnknownPlatform(String),
}

impl From<UnknownPlatform> for MetricsError {
    fn from(err: UnknownPlatform) -> Self {
        MetricsError::UnknownPlatform(err.0)
    }
}

/// Host bridge snapshot before the OS id is resolved.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct HostSnapshot {
    screen_width: f64,
    screen_height: f64,
    #[serde(default = "default_font_scale")]
    font_scale: f64,
    platform: String,
}

fn default_font_scale() -> f64 {
    1.0
}

/// Map the host's OS identifier onto a [`Platform`]. Case is ignored.
pub fn parse_platform(os: &str) -> Result<Platform, MetricsError> {
    Ok(os.parse::<Platform>()?)
}

/// Reject snapshots that would produce zero, negative or NaN scale factors.
pub fn validate_metrics(metrics: &DeviceMetrics) -> Result<(), MetricsError> {
    let (width, height) = (metrics.screen_width, metrics.screen_height);
    if !is_positive(width) || !is_positive(height) {
        return Err(MetricsError::InvalidScreen { width, height });
    }
    if !is_positive(metrics.font_scale) {
        return Err(MetricsError::InvalidFontScale(metrics.font_scale));
    }
    Ok(())
}

/// Parse the JSON snapshot the host bridge sends at startup.
///
/// Expected shape: `{"screenWidth":375,"screenHeight":667,"fontScale":1,"platform":"ios"}`.
/// `fontScale` may be omitted and defaults to `1`.
pub fn parse_metrics(data: &[u8]) -> Result<DeviceMetrics, MetricsError> {
    let snapshot: HostSnapshot = serde_json::from_slice(data)?;
    let metrics = DeviceMetrics::new(
        snapshot.screen_width,
        snapshot.screen_height,
        snapshot.font_scale,
        parse_platform(&snapshot.platform)?,
    );
    validate_metrics(&metrics)?;
    tracing::debug!(
        width = metrics.screen_width,
        height = metrics.screen_height,
        font_scale = metrics.font_scale,
        platform = %metrics.platform,
        "parsed device metrics"
    );
    Ok(metrics)
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
