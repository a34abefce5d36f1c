//! The transcode facade: the engine's single entry point.
//!
//! Validates options before any decode work, decodes the input exactly once,
//! then dispatches on the byte budget:
//! - unbounded → one resample + encode pass ("convert" mode)
//! - bounded → the budget search of [`crate::search`] ("compress" mode)
//!
//! Exactly one of result / error comes back; errors never carry partial
//! output.

use crate::decode::decode;
use crate::encode::encode;
use crate::error::TranscodeError;
use crate::resample::resample_to_fit;
use crate::search;
use crate::{TranscodeOptions, TranscodeResult};

/// Transcode a single image.
///
/// # Arguments
///
/// * `input` - Encoded image bytes (JPEG, PNG, or WebP, detected by content)
/// * `options` - Target format and constraints
///
/// # Returns
///
/// A [`TranscodeResult`] with the encoded output and the parameters that
/// produced it. With a bounded byte budget, `budget_satisfied = false`
/// signals a best-effort result that missed the budget.
///
/// # Errors
///
/// * `InvalidOptions` - contradictory or out-of-range options (checked
///   before the input is touched)
/// * `UnsupportedFormat` - input signature not recognized
/// * `CorruptInput` - recognized input with a malformed payload
/// * `ResourceExhausted` - input exceeds the engine's memory limits
/// * `EncodeFailure` - the target codec rejected the raster
pub fn transcode(
    input: &[u8],
    options: &TranscodeOptions,
) -> Result<TranscodeResult, TranscodeError> {
    options.validate()?;

    // The only decode in the call; both paths reuse this raster
    let source = decode(input)?;

    match options.max_output_bytes {
        None => {
            let resampled = resample_to_fit(&source, options.max_dimension_px)?;
            let quality = options.initial_quality;
            let output = encode(&resampled, options.target_format, quality)?;

            Ok(TranscodeResult {
                output,
                format: options.target_format,
                quality: options
                    .target_format
                    .supports_quality()
                    .then_some(quality),
                width: resampled.width,
                height: resampled.height,
                iterations: 1,
                budget_satisfied: true,
            })
        }
        Some(budget) => search::run(&source, options, budget),
    }
}
