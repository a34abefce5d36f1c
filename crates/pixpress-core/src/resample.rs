//! Downsampling to fit a maximum dimension.
//!
//! The resampler always uses bilinear interpolation
//! (`image::imageops::FilterType::Triangle`): deterministic, cheap, and free
//! of the aliasing a nearest-neighbor reduction would show. The filter is
//! fixed rather than configurable so that two calls with the same input are
//! byte-identical.
//!
//! All functions return new [`RasterImage`] instances without modifying the
//! input.

use crate::error::TranscodeError;
use crate::raster::RasterImage;

/// Fixed resampling filter. Triangle is the `image` crate's bilinear.
const FILTER: image::imageops::FilterType = image::imageops::FilterType::Triangle;

/// Resample an image to fit within a maximum edge length, preserving aspect
/// ratio.
///
/// The image is scaled so that its longest edge equals `max_dimension_px`.
/// If the image already fits, or the cap is `None` (unbounded), the source
/// dimensions are kept unchanged — the resampler never upscales.
///
/// # Arguments
///
/// * `image` - The source raster to resample
/// * `max_dimension_px` - Maximum length of the longest edge, or `None` for
///   a pass-through
///
/// # Returns
///
/// A new `RasterImage` that fits within the cap.
///
/// # Errors
///
/// Returns `TranscodeError::InvalidOptions` for a cap of 0 (a raster with a
/// zero edge cannot exist), and `TranscodeError::CorruptInput` if the source
/// buffer does not match its declared dimensions.
pub fn resample_to_fit(
    image: &RasterImage,
    max_dimension_px: Option<u32>,
) -> Result<RasterImage, TranscodeError> {
    let max_edge = match max_dimension_px {
        None => return Ok(image.clone()),
        Some(0) => {
            return Err(TranscodeError::InvalidOptions(
                "max_dimension_px must be at least 1".to_string(),
            ))
        }
        Some(cap) => cap,
    };

    // Already fits: never upscale
    if image.width <= max_edge && image.height <= max_edge {
        return Ok(image.clone());
    }

    let (new_width, new_height) = calculate_fit_dimensions(image.width, image.height, max_edge);

    let dynamic = image.to_dynamic().ok_or_else(|| {
        TranscodeError::CorruptInput("raster buffer does not match its dimensions".to_string())
    })?;
    let resized = dynamic.resize_exact(new_width, new_height, FILTER);

    Ok(RasterImage::from_dynamic(resized))
}

/// Calculate dimensions to fit within max_edge while preserving aspect ratio.
///
/// The longer edge becomes exactly `max_edge`; the shorter edge rounds to
/// the nearest pixel, floored at 1.
fn calculate_fit_dimensions(width: u32, height: u32, max_edge: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (0, 0);
    }

    let ratio = width as f64 / height as f64;

    if width >= height {
        // Landscape or square: constrain by width
        let new_width = max_edge;
        let new_height = (max_edge as f64 / ratio).round() as u32;
        (new_width, new_height.max(1))
    } else {
        // Portrait: constrain by height
        let new_height = max_edge;
        let new_width = (max_edge as f64 * ratio).round() as u32;
        (new_width.max(1), new_height)
    }
}
