//! Raster encoding to the target container formats.
//!
//! One submodule per codec:
//! - [`jpeg`] - Lossy baseline JPEG (alpha is dropped before encoding)
//! - [`png`] - Lossless PNG
//! - [`webp`] - Lossy VP8 WebP
//!
//! # Quality semantics
//!
//! The `quality` parameter (0-100) controls the lossy quantization level for
//! JPEG and WebP. PNG is always encoded losslessly: it accepts the quality
//! value like every other codec but the value has no effect on the output.
//! JPEG quality 100 is still lossy.

mod jpeg;
mod png;
mod webp;

pub use jpeg::encode_jpeg;
pub use png::encode_png;
pub use webp::encode_webp;

use crate::error::TranscodeError;
use crate::format::TargetFormat;
use crate::raster::RasterImage;

/// Encode a raster into the target format's byte buffer.
///
/// # Arguments
///
/// * `raster` - The pixel data to serialize
/// * `format` - Target container format
/// * `quality` - Lossy quality 0-100; ignored for PNG (see module docs)
///
/// # Errors
///
/// Returns `TranscodeError::EncodeFailure` if the raster is degenerate
/// (zero-sized or with a buffer/dimension mismatch) or the codec rejects it.
pub fn encode(
    raster: &RasterImage,
    format: TargetFormat,
    quality: u8,
) -> Result<Vec<u8>, TranscodeError> {
    validate_raster(raster)?;

    match format {
        TargetFormat::Jpeg => encode_jpeg(raster, quality),
        TargetFormat::Png => encode_png(raster),
        TargetFormat::Webp => encode_webp(raster, quality),
    }
}

/// Reject rasters no codec could serialize.
fn validate_raster(raster: &RasterImage) -> Result<(), TranscodeError> {
    if raster.width == 0 || raster.height == 0 {
        return Err(TranscodeError::EncodeFailure(format!(
            "cannot encode a {}x{} raster",
            raster.width, raster.height
        )));
    }

    let expected =
        (raster.width as usize) * (raster.height as usize) * raster.layout.channels() as usize;
    if raster.pixels.len() != expected {
        return Err(TranscodeError::EncodeFailure(format!(
            "pixel buffer is {} bytes, expected {} for {}x{} with {} channels",
            raster.pixels.len(),
            expected,
            raster.width,
            raster.height,
            raster.layout.channels()
        )));
    }

    Ok(())
}
