//! Image decoding: bytes in, pixel raster out.
//!
//! The decoder recognizes JPEG, PNG, and WebP inputs by content signature.
//! A caller-declared format is never trusted for codec selection; at most it
//! sharpens the error message when the signature is unrecognized.
//!
//! JPEG inputs get EXIF orientation correction before the pixels are handed
//! downstream, so the raster matches what a browser canvas would show.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::DynamicImage;
use image::ImageError;
use image::ImageReader;

use crate::error::TranscodeError;
use crate::format::SourceFormat;
use crate::raster::RasterImage;

/// Maximum allowed image dimension (width or height).
/// Images larger than 32768x32768 are rejected to prevent decompression bombs.
pub const MAX_DIMENSION: u32 = 32768;

/// Maximum allowed total pixels (width * height).
/// 100 megapixels = 400MB uncompressed RGBA.
pub const MAX_PIXELS: u64 = 100_000_000;

/// EXIF orientation values (1-8).
/// See: https://exiftool.org/TagNames/EXIF.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Orientation {
    /// Normal (no transformation needed).
    #[default]
    Normal = 1,
    /// Horizontal flip.
    FlipHorizontal = 2,
    /// Rotate 180 degrees.
    Rotate180 = 3,
    /// Vertical flip.
    FlipVertical = 4,
    /// Transpose (flip horizontal + rotate 270 CW).
    Transpose = 5,
    /// Rotate 90 degrees clockwise.
    Rotate90CW = 6,
    /// Transverse (flip horizontal + rotate 90 CW).
    Transverse = 7,
    /// Rotate 270 degrees clockwise (90 CCW).
    Rotate270CW = 8,
}

impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        match value {
            1 => Orientation::Normal,
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90CW,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270CW,
            _ => Orientation::Normal,
        }
    }
}

/// Decode an image from bytes, detecting the format by content signature.
///
/// # Arguments
///
/// * `bytes` - Raw image file bytes (JPEG, PNG, or WebP)
///
/// # Returns
///
/// A [`RasterImage`] with 8-bit pixel data. Sources with an alpha channel
/// decode to `Rgba8`, everything else to `Rgb8`. JPEG inputs have EXIF
/// orientation applied.
///
/// # Errors
///
/// Returns `TranscodeError::UnsupportedFormat` if the content signature is
/// unrecognized, `TranscodeError::CorruptInput` if the payload is malformed,
/// and `TranscodeError::ResourceExhausted` if the decoded raster would
/// exceed the engine's memory limits.
pub fn decode(bytes: &[u8]) -> Result<RasterImage, TranscodeError> {
    decode_with_hint(bytes, None)
}

/// Decode an image from bytes, with an optional caller-declared format.
///
/// The hint is never used to select a decoder — detection is always by
/// content signature — but it is included in the `UnsupportedFormat` error
/// when the signature is unrecognized, so the caller can report a mismatch
/// between what was claimed and what was received.
pub fn decode_with_hint(
    bytes: &[u8],
    hint: Option<SourceFormat>,
) -> Result<RasterImage, TranscodeError> {
    let format = SourceFormat::detect(bytes).ok_or_else(|| {
        let detail = match hint {
            Some(claimed) => format!(
                "unrecognized content signature (caller declared {}, which was not trusted)",
                claimed.name()
            ),
            None => "unrecognized content signature".to_string(),
        };
        TranscodeError::UnsupportedFormat(detail)
    })?;

    // Cheap header probe before committing to a full decode
    let (width, height) = ImageReader::with_format(Cursor::new(bytes), format.to_image_format())
        .into_dimensions()
        .map_err(|e| map_image_error(format, e))?;
    check_dimensions(format, width, height)?;

    let img = ImageReader::with_format(Cursor::new(bytes), format.to_image_format())
        .decode()
        .map_err(|e| map_image_error(format, e))?;

    // Canvas-equivalent behavior: honor the EXIF orientation tag for JPEG
    let img = if format == SourceFormat::Jpeg {
        apply_orientation(img, extract_orientation(bytes))
    } else {
        img
    };

    Ok(RasterImage::from_dynamic(img))
}

/// Reject rasters that would exceed the engine's memory limits.
fn check_dimensions(
    format: SourceFormat,
    width: u32,
    height: u32,
) -> Result<(), TranscodeError> {
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(TranscodeError::ResourceExhausted(format!(
            "{} input is {}x{}, exceeding the {}px dimension limit",
            format.name(),
            width,
            height,
            MAX_DIMENSION
        )));
    }
    let pixels = u64::from(width) * u64::from(height);
    if pixels > MAX_PIXELS {
        return Err(TranscodeError::ResourceExhausted(format!(
            "{} input has {} pixels, exceeding the {} pixel limit",
            format.name(),
            pixels,
            MAX_PIXELS
        )));
    }
    Ok(())
}

/// Map `image` crate errors onto the transcode taxonomy.
///
/// The signature was already recognized by the time decoding runs, so codec
/// errors mean a malformed payload, not an unknown format.
fn map_image_error(format: SourceFormat, err: ImageError) -> TranscodeError {
    match err {
        ImageError::Limits(e) => TranscodeError::ResourceExhausted(format!(
            "{} decode hit allocation limit: {}",
            format.name(),
            e
        )),
        ImageError::Unsupported(e) => TranscodeError::UnsupportedFormat(format!(
            "{} feature not supported by the decoder: {}",
            format.name(),
            e
        )),
        other => {
            TranscodeError::CorruptInput(format!("{} decode failed: {}", format.name(), other))
        }
    }
}

/// Extract EXIF orientation from JPEG bytes.
///
/// Returns `Orientation::Normal` if no EXIF data is found or orientation
/// cannot be determined.
fn extract_orientation(bytes: &[u8]) -> Orientation {
    let exif_reader = Reader::new();
    let mut cursor = Cursor::new(bytes);

    match exif_reader.read_from_container(&mut cursor) {
        Ok(exif) => {
            if let Some(field) = exif.get_field(Tag::Orientation, In::PRIMARY) {
                if let Some(value) = field.value.get_uint(0) {
                    return Orientation::from(value);
                }
            }
            Orientation::Normal
        }
        Err(_) => Orientation::Normal,
    }
}

/// Apply EXIF orientation transformation to an image.
fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}
