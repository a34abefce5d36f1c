//! Pixpress Core - Image transcoding engine
//!
//! This crate turns a single raster image into either a size-budgeted
//! compressed form or a different container format. The pipeline is
//! decode → resample → encode, with an iterative quality/dimension search
//! when a byte budget is set.
//!
//! The engine is pure and synchronous: one call, owned buffers in, owned
//! buffers out, no shared state between calls. Callers that need a timeout
//! should wrap the whole call externally.

pub mod decode;
pub mod encode;
pub mod error;
pub mod format;
pub mod raster;
pub mod resample;
mod search;
pub mod transcode;

pub use error::TranscodeError;
pub use format::{SourceFormat, TargetFormat};
pub use raster::{ChannelLayout, RasterImage};
pub use transcode::transcode;

/// Options for a single transcode call.
///
/// `None` for `max_dimension_px` / `max_output_bytes` means unbounded. An
/// unbounded byte budget selects the single-pass convert path; a bounded one
/// selects the compressing budget search.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TranscodeOptions {
    /// Output container format.
    pub target_format: TargetFormat,
    /// Maximum allowed value for the larger output axis, in pixels.
    pub max_dimension_px: Option<u32>,
    /// Maximum acceptable output size in bytes.
    pub max_output_bytes: Option<usize>,
    /// Quality for the first encode attempt (0-100).
    pub initial_quality: u8,
    /// Floor for the quality descent (0-100).
    pub min_quality: u8,
    /// Quality decrement per search step.
    pub quality_step: u8,
    /// Ceiling on encode attempts for the budget search.
    pub max_iterations: u32,
}

impl Default for TranscodeOptions {
    fn default() -> Self {
        Self {
            target_format: TargetFormat::default(),
            max_dimension_px: None,
            max_output_bytes: None,
            initial_quality: 92,
            min_quality: 10,
            quality_step: 10,
            max_iterations: 10,
        }
    }
}

impl TranscodeOptions {
    /// Create options with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// The web upload preset: at most 1 MB and 800 px, the limits the
    /// browser UI historically applied to compressed uploads.
    pub fn web_preset(target_format: TargetFormat) -> Self {
        Self {
            target_format,
            max_dimension_px: Some(800),
            max_output_bytes: Some(1_000_000),
            ..Self::default()
        }
    }

    /// Check every field for contradictions and out-of-range values.
    ///
    /// Runs before any decode work so a bad call fails fast.
    ///
    /// # Errors
    ///
    /// Returns `TranscodeError::InvalidOptions` naming the offending field.
    pub fn validate(&self) -> Result<(), TranscodeError> {
        if self.initial_quality > 100 {
            return Err(TranscodeError::InvalidOptions(format!(
                "initial_quality must be 0-100, got {}",
                self.initial_quality
            )));
        }
        if self.min_quality > 100 {
            return Err(TranscodeError::InvalidOptions(format!(
                "min_quality must be 0-100, got {}",
                self.min_quality
            )));
        }
        if self.min_quality > self.initial_quality {
            return Err(TranscodeError::InvalidOptions(format!(
                "min_quality ({}) exceeds initial_quality ({})",
                self.min_quality, self.initial_quality
            )));
        }
        if self.quality_step == 0 {
            return Err(TranscodeError::InvalidOptions(
                "quality_step must be at least 1".to_string(),
            ));
        }
        if self.max_iterations == 0 {
            return Err(TranscodeError::InvalidOptions(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        if self.max_dimension_px == Some(0) {
            return Err(TranscodeError::InvalidOptions(
                "max_dimension_px must be at least 1".to_string(),
            ));
        }
        if self.max_output_bytes == Some(0) {
            return Err(TranscodeError::InvalidOptions(
                "max_output_bytes must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Outcome of a successful transcode call.
#[derive(Debug, Clone, serde::Serialize)]
pub struct TranscodeResult {
    /// The encoded image.
    pub output: Vec<u8>,
    /// Container format of `output`.
    pub format: TargetFormat,
    /// Quality the final encode used; `None` for formats without a quality
    /// knob (PNG).
    pub quality: Option<u8>,
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Number of encode attempts performed.
    pub iterations: u32,
    /// Whether the byte budget was met. Always true in convert mode; false
    /// means `output` is the best-effort smallest candidate.
    pub budget_satisfied: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = TranscodeOptions::new();
        assert_eq!(options.target_format, TargetFormat::Webp);
        assert_eq!(options.max_dimension_px, None);
        assert_eq!(options.max_output_bytes, None);
        assert_eq!(options.initial_quality, 92);
        assert_eq!(options.min_quality, 10);
        assert_eq!(options.quality_step, 10);
        assert_eq!(options.max_iterations, 10);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_web_preset() {
        let options = TranscodeOptions::web_preset(TargetFormat::Jpeg);
        assert_eq!(options.target_format, TargetFormat::Jpeg);
        assert_eq!(options.max_dimension_px, Some(800));
        assert_eq!(options.max_output_bytes, Some(1_000_000));
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_validate_quality_range() {
        let mut options = TranscodeOptions::new();
        options.initial_quality = 101;
        assert!(options.validate().is_err());

        let mut options = TranscodeOptions::new();
        options.min_quality = 200;
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_validate_contradictory_qualities() {
        let mut options = TranscodeOptions::new();
        options.initial_quality = 50;
        options.min_quality = 60;
        let result = options.validate();
        assert!(matches!(result, Err(TranscodeError::InvalidOptions(_))));
    }

    #[test]
    fn test_validate_zero_step() {
        let mut options = TranscodeOptions::new();
        options.quality_step = 0;
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_validate_zero_iterations() {
        let mut options = TranscodeOptions::new();
        options.max_iterations = 0;
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_validate_zero_dimension_cap() {
        let mut options = TranscodeOptions::new();
        options.max_dimension_px = Some(0);
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_validate_zero_byte_budget() {
        let mut options = TranscodeOptions::new();
        options.max_output_bytes = Some(0);
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_validate_equal_qualities_ok() {
        let mut options = TranscodeOptions::new();
        options.initial_quality = 50;
        options.min_quality = 50;
        assert!(options.validate().is_ok());
    }
}
