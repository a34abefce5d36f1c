//! PNG encoding.
//!
//! PNG is always lossless. There is no quality knob: the pipeline's quality
//! value is accepted by the dispatch in [`super::encode`] and deliberately
//! not threaded through to this module, because it cannot change the output.
//! This is a real semantic difference from JPEG/WebP — a budget search over
//! PNG output can only shrink the image, never coarsen it.

use std::io::Cursor;

use image::codecs::png::PngEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;

use crate::error::TranscodeError;
use crate::raster::{ChannelLayout, RasterImage};

/// Encode a raster to PNG bytes, losslessly.
///
/// Both `Rgb8` and `Rgba8` layouts are encoded as-is; alpha survives.
///
/// # Errors
///
/// Returns `TranscodeError::EncodeFailure` if the underlying encoder fails.
pub fn encode_png(raster: &RasterImage) -> Result<Vec<u8>, TranscodeError> {
    let color_type = match raster.layout {
        ChannelLayout::Rgb8 => ExtendedColorType::Rgb8,
        ChannelLayout::Rgba8 => ExtendedColorType::Rgba8,
    };

    let mut buffer = Cursor::new(Vec::new());
    PngEncoder::new(&mut buffer)
        .write_image(&raster.pixels, raster.width, raster.height, color_type)
        .map_err(|e| TranscodeError::EncodeFailure(format!("PNG encode failed: {e}")))?;

    Ok(buffer.into_inner())
}
