use std::borrow::Cow;

use scalekit_protocol::{
    DeviceMetrics, FormattedTime, ImageBox, Platform, ScaleFactors, TimeFormatOptions,
};

use crate::fit::{self, FitError};
use crate::ident;
use crate::metrics::{self, MetricsError};
use crate::notify::{Notifier, NotifyError};
use crate::remote_image;
use crate::time_format::{self, TimeFormatError};

/// Width of the reference design device, in logical pixels.
pub const BASE_WIDTH: f64 = 375.0;
/// Height of the reference design device, in logical pixels.
pub const BASE_HEIGHT: f64 = 667.0;

const IPHONE_X_SHORT: f64 = 375.0;
const IPHONE_X_LONG: f64 = 812.0;

/// Per-axis factors that map reference-device sizes onto `metrics`.
pub fn scale_factors(metrics: &DeviceMetrics) -> ScaleFactors {
    ScaleFactors {
        scale_x: metrics.screen_width / BASE_WIDTH,
        scale_y: metrics.screen_height / BASE_HEIGHT,
    }
}

/// Sizing, formatting and notification helpers bound to one device snapshot.
///
/// Build one at startup and hand it to the views that need it. Sizes passed
/// in are measured on the 375x667 reference design.
pub struct ScalingUtility {
    metrics: DeviceMetrics,
    factors: ScaleFactors,
    notifier: Box<dyn Notifier>,
}

impl ScalingUtility {
    pub fn new(metrics: DeviceMetrics, notifier: Box<dyn Notifier>) -> Result<Self, MetricsError> {
        metrics::validate_metrics(&metrics)?;
        let factors = scale_factors(&metrics);
        tracing::debug!(
            scale_x = factors.scale_x,
            scale_y = factors.scale_y,
            platform = %metrics.platform,
            "scaling utility ready"
        );
        Ok(Self {
            metrics,
            factors,
            notifier,
        })
    }

    pub fn metrics(&self) -> &DeviceMetrics {
        &self.metrics
    }

    pub fn scale_factors(&self) -> ScaleFactors {
        self.factors
    }

    pub fn platform(&self) -> Platform {
        self.metrics.platform
    }

    pub fn screen_width(&self) -> f64 {
        self.metrics.screen_width
    }

    pub fn screen_height(&self) -> f64 {
        self.metrics.screen_height
    }

    /// iOS device with the 375x812 notched screen, in either orientation.
    pub fn is_iphone_x_like_device(&self) -> bool {
        let (w, h) = (self.metrics.screen_width, self.metrics.screen_height);
        self.metrics.platform == Platform::Ios
            && ((w == IPHONE_X_SHORT && h == IPHONE_X_LONG)
                || (w == IPHONE_X_LONG && h == IPHONE_X_SHORT))
    }

    /// Scale a horizontal measurement: width, horizontal padding and margins.
    pub fn scale_by_width(&self, size: f64) -> f64 {
        size * self.factors.scale_x
    }

    /// Scale a vertical measurement: height, vertical padding and margins.
    pub fn scale_by_height(&self, size: f64) -> f64 {
        size * self.factors.scale_y
    }

    /// Scale a font size by the smaller axis factor.
    ///
    /// Unless `allow_font_scaling` is set, the user's OS text-size setting is
    /// divided back out so the result renders at the designed size.
    pub fn scale_font_size(&self, size: f64, allow_font_scaling: bool) -> f64 {
        let divisor = if allow_font_scaling {
            1.0
        } else {
            self.metrics.font_scale
        };
        size * self.factors.min() / divisor
    }

    pub fn format_timestamp(
        &self,
        options: &TimeFormatOptions,
    ) -> Result<FormattedTime, TimeFormatError> {
        time_format::format_timestamp(options)
    }

    /// See [`ident::generate_uuid`]; not for security-sensitive ids.
    pub fn generate_uuid(&self) -> String {
        ident::generate_uuid()
    }

    pub fn fit_image(
        &self,
        max_width: f64,
        max_height: f64,
        img_width: f64,
        img_height: f64,
    ) -> Result<ImageBox, FitError> {
        fit::fit_image(max_width, max_height, img_width, img_height)
    }

    pub fn transform_remote_image_url<'a>(&self, url: &'a str, quality: u32) -> Cow<'a, str> {
        remote_image::transform_remote_image_url(url, quality)
    }

    /// Show a toast through the surface chosen for this platform.
    pub fn show_notification(&self, message: &str) -> Result<(), NotifyError> {
        self.notifier.show(message).inspect_err(|err| {
            tracing::warn!(error = %err, "notification failed");
        })
    }
}

impl std::fmt::Debug for ScalingUtility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScalingUtility")
            .field("metrics", &self.metrics)
            .field("factors", &self.factors)
            .finish_non_exhaustive()
    }
}
