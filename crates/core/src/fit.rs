use scalekit_protocol::ImageBox;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum FitError {
    #[error("{name} must be positive and finite, got {value}")]
    InvalidDimension { name: &'static str, value: f64 },
}

/// Fit an image into a `max_width` x `max_height` box, preserving its aspect
/// ratio.
///
/// Images strictly smaller than the box on both axes are returned unchanged.
/// The check is per axis, not aspect-aware: it never upscales. Otherwise the
/// image is pinned to whichever box edge it hits first; a tie in aspect ratio
/// pins to the width.
pub fn fit_image(
    max_width: f64,
    max_height: f64,
    img_width: f64,
    img_height: f64,
) -> Result<ImageBox, FitError> {
    check("max_width", max_width)?;
    check("max_height", max_height)?;
    check("img_width", img_width)?;
    check("img_height", img_height)?;

    if img_width < max_width && img_height < max_height {
        return Ok(ImageBox::new(img_width, img_height));
    }

    if max_width / max_height <= img_width / img_height {
        Ok(ImageBox::new(max_width, max_width * (img_height / img_width)))
    } else {
        Ok(ImageBox::new(max_height * (img_width / img_height), max_height))
    }
}

fn check(name: &'static str, value: f64) -> Result<(), FitError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(FitError::InvalidDimension { name, value })
    }
}
