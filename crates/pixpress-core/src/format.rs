//! Image format identification and metadata.
//!
//! Input formats are always detected from content signatures, never from a
//! filename or a caller-declared type.

use serde::{Deserialize, Serialize};

/// Input image formats recognized by the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SourceFormat {
    Jpeg,
    Png,
    WebP,
}

impl SourceFormat {
    /// Detect format from magic bytes. Returns None if unrecognized.
    ///
    /// Checks the first few bytes of the data for known format signatures.
    pub fn detect(data: &[u8]) -> Option<Self> {
        // JPEG: FF D8 FF
        if data.len() >= 3 && data[0] == 0xFF && data[1] == 0xD8 && data[2] == 0xFF {
            return Some(SourceFormat::Jpeg);
        }

        // PNG: 89 50 4E 47 0D 0A 1A 0A
        if data.len() >= 8 && data[0..8] == [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A] {
            return Some(SourceFormat::Png);
        }

        // WebP: "RIFF....WEBP"
        if data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WEBP" {
            return Some(SourceFormat::WebP);
        }

        None
    }

    /// The corresponding `image` crate format, for the decoder.
    pub(crate) fn to_image_format(self) -> image::ImageFormat {
        match self {
            SourceFormat::Jpeg => image::ImageFormat::Jpeg,
            SourceFormat::Png => image::ImageFormat::Png,
            SourceFormat::WebP => image::ImageFormat::WebP,
        }
    }

    /// Human-readable format name for error messages.
    pub fn name(self) -> &'static str {
        match self {
            SourceFormat::Jpeg => "JPEG",
            SourceFormat::Png => "PNG",
            SourceFormat::WebP => "WebP",
        }
    }
}

/// Output formats the encoder can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetFormat {
    /// Lossy VP8 WebP. The default, matching the UI's format picker.
    #[default]
    Webp,
    /// Lossless PNG. Has no quality knob.
    Png,
    /// Lossy baseline JPEG. No alpha; 4-channel rasters are flattened.
    Jpeg,
}

impl TargetFormat {
    /// Whether this format has a lossy quality knob.
    ///
    /// PNG is always lossless: the quality value threaded through the
    /// pipeline is accepted but has no effect on PNG output.
    pub fn supports_quality(self) -> bool {
        match self {
            TargetFormat::Webp => true,
            TargetFormat::Png => false,
            TargetFormat::Jpeg => true,
        }
    }

    /// MIME type string, suitable for a download `Blob`.
    pub fn mime_type(self) -> &'static str {
        match self {
            TargetFormat::Webp => "image/webp",
            TargetFormat::Png => "image/png",
            TargetFormat::Jpeg => "image/jpeg",
        }
    }

    /// Suggested file extension for the encoded output.
    pub fn extension(self) -> &'static str {
        match self {
            TargetFormat::Webp => "webp",
            TargetFormat::Png => "png",
            TargetFormat::Jpeg => "jpg",
        }
    }

    /// Lowercase format name, as the UI's format picker spells it.
    pub fn name(self) -> &'static str {
        match self {
            TargetFormat::Webp => "webp",
            TargetFormat::Png => "png",
            TargetFormat::Jpeg => "jpeg",
        }
    }
}
