//! WebP encoding.
//!
//! Lossy VP8 encoding through the `webp` crate (libwebp bindings) — the
//! `image` crate only writes lossless WebP, which defeats a quality-driven
//! size search. Both RGB and RGBA rasters encode directly; WebP carries
//! alpha natively.

use webp::Encoder;

use crate::error::TranscodeError;
use crate::raster::{ChannelLayout, RasterImage};

/// Encode a raster to lossy WebP bytes.
///
/// # Arguments
///
/// * `raster` - Pixel data, `Rgb8` or `Rgba8`
/// * `quality` - WebP quality 0-100
///
/// # Errors
///
/// Returns `TranscodeError::EncodeFailure` if libwebp rejects the input.
pub fn encode_webp(raster: &RasterImage, quality: u8) -> Result<Vec<u8>, TranscodeError> {
    let quality = quality.min(100);

    let encoder = match raster.layout {
        ChannelLayout::Rgb8 => Encoder::from_rgb(&raster.pixels, raster.width, raster.height),
        ChannelLayout::Rgba8 => Encoder::from_rgba(&raster.pixels, raster.width, raster.height),
    };

    let memory = encoder
        .encode_simple(false, f32::from(quality))
        .map_err(|e| TranscodeError::EncodeFailure(format!("WebP encode failed: {e:?}")))?;

    Ok(memory.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode;

    fn gradient_raster(width: u32, height: u32) -> RasterImage {
        let mut pixels = Vec::with_capacity((width * height * 3) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(((x * 255) / width.max(1)) as u8);
                pixels.push(((y * 255) / height.max(1)) as u8);
                pixels.push(128);
            }
        }
        RasterImage::new(width, height, ChannelLayout::Rgb8, pixels)
    }

    #[test]
    fn test_encode_webp_container() {
        let bytes = encode_webp(&gradient_raster(32, 32), 80).unwrap();

        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[8..12], b"WEBP");
    }

    #[test]
    fn test_encode_webp_decodes_back() {
        let raster = gradient_raster(32, 16);
        let bytes = encode_webp(&raster, 90).unwrap();

        let decoded = decode(&bytes).unwrap();
        assert_eq!(decoded.width, 32);
        assert_eq!(decoded.height, 16);
    }

    #[test]
    fn test_encode_webp_quality_affects_size() {
        let raster = gradient_raster(64, 64);

        let low_q = encode_webp(&raster, 5).unwrap();
        let high_q = encode_webp(&raster, 95).unwrap();

        assert!(
            high_q.len() > low_q.len(),
            "quality 95 ({} bytes) should out-size quality 5 ({} bytes)",
            high_q.len(),
            low_q.len()
        );
    }

    #[test]
    fn test_encode_webp_rgba() {
        let pixels = vec![100u8; 16 * 16 * 4];
        let raster = RasterImage::new(16, 16, ChannelLayout::Rgba8, pixels);

        let bytes = encode_webp(&raster, 80).unwrap();
        assert_eq!(&bytes[0..4], b"RIFF");
    }

    #[test]
    fn test_encode_webp_quality_above_100_clamped() {
        assert!(encode_webp(&gradient_raster(8, 8), 255).is_ok());
    }
}
