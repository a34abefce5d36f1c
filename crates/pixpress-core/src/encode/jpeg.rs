//! JPEG encoding.
//!
//! Uses the `image` crate's baseline JPEG encoder with configurable quality.
//! JPEG has no alpha channel: 4-channel rasters are flattened by dropping
//! the alpha samples before encoding. Quality 100 is still lossy — JPEG has
//! no lossless mode here.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;

use crate::error::TranscodeError;
use crate::raster::{ChannelLayout, RasterImage};

/// Encode a raster to JPEG bytes.
///
/// # Arguments
///
/// * `raster` - Pixel data; `Rgba8` rasters have their alpha channel dropped
/// * `quality` - JPEG quality (0-100; clamped to 1-100 by the encoder)
///
/// # Errors
///
/// Returns `TranscodeError::EncodeFailure` if the underlying encoder fails.
pub fn encode_jpeg(raster: &RasterImage, quality: u8) -> Result<Vec<u8>, TranscodeError> {
    let quality = quality.clamp(1, 100);

    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);

    match raster.layout {
        ChannelLayout::Rgb8 => encoder
            .write_image(
                &raster.pixels,
                raster.width,
                raster.height,
                ExtendedColorType::Rgb8,
            )
            .map_err(|e| TranscodeError::EncodeFailure(format!("JPEG encode failed: {e}")))?,
        ChannelLayout::Rgba8 => {
            // JPEG cannot carry alpha: drop the fourth sample of each pixel
            let rgb = strip_alpha(&raster.pixels);
            encoder
                .write_image(&rgb, raster.width, raster.height, ExtendedColorType::Rgb8)
                .map_err(|e| TranscodeError::EncodeFailure(format!("JPEG encode failed: {e}")))?
        }
    }

    Ok(buffer.into_inner())
}

/// Drop the alpha sample from interleaved RGBA data.
fn strip_alpha(rgba: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(rgba.len() / 4 * 3);
    for pixel in rgba.chunks_exact(4) {
        rgb.extend_from_slice(&pixel[0..3]);
    }
    rgb
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for generating image dimensions (keep small for speed).
    fn dimensions_strategy() -> impl Strategy<Value = (u32, u32)> {
        (1u32..=50, 1u32..=50)
    }

    /// Strategy for generating quality values.
    fn quality_strategy() -> impl Strategy<Value = u8> {
        0u8..=100
    }

    proptest! {
        /// Property: Encoding always produces a well-formed JPEG container.
        #[test]
        fn prop_valid_input_produces_valid_jpeg(
            (width, height) in dimensions_strategy(),
            quality in quality_strategy(),
        ) {
            let size = (width as usize) * (height as usize) * 3;
            let raster = RasterImage::new(width, height, ChannelLayout::Rgb8, vec![128u8; size]);

            let jpeg = encode_jpeg(&raster, quality).unwrap();

            prop_assert_eq!(&jpeg[0..2], &[0xFF, 0xD8], "Should have SOI marker");
            let len = jpeg.len();
            prop_assert!(len >= 4, "JPEG should have at least 4 bytes");
            prop_assert_eq!(&jpeg[len - 2..], &[0xFF, 0xD9], "Should have EOI marker");
        }

        /// Property: Same input always produces same output (deterministic).
        #[test]
        fn prop_deterministic_output(
            (width, height) in (1u32..=20, 1u32..=20),
            quality in quality_strategy(),
        ) {
            let size = (width as usize) * (height as usize) * 3;
            let raster = RasterImage::new(width, height, ChannelLayout::Rgb8, vec![100u8; size]);

            let first = encode_jpeg(&raster, quality).unwrap();
            let second = encode_jpeg(&raster, quality).unwrap();

            prop_assert_eq!(first, second, "Same input should produce same output");
        }

        /// Property: Alpha stripping produces the same container as RGB input.
        #[test]
        fn prop_rgba_encodes_like_rgb(
            (width, height) in (1u32..=20, 1u32..=20),
            quality in 1u8..=100,
        ) {
            let rgb_pixels = vec![77u8; (width * height * 3) as usize];
            let mut rgba_pixels = Vec::with_capacity((width * height * 4) as usize);
            for _ in 0..(width * height) {
                rgba_pixels.extend_from_slice(&[77, 77, 77, 200]);
            }

            let rgb = RasterImage::new(width, height, ChannelLayout::Rgb8, rgb_pixels);
            let rgba = RasterImage::new(width, height, ChannelLayout::Rgba8, rgba_pixels);

            let from_rgb = encode_jpeg(&rgb, quality).unwrap();
            let from_rgba = encode_jpeg(&rgba, quality).unwrap();

            prop_assert_eq!(from_rgb, from_rgba, "Alpha samples must not affect the output");
        }
    }
}
