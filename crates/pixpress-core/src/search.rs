//! Byte-budget search over quality and dimension.
//!
//! The controller drives resample + encode over a fixed schedule until the
//! output fits the caller's byte budget or the schedule is exhausted:
//!
//! 1. Quality descends from `initial_quality` in `quality_step` decrements,
//!    clamped to `min_quality` (92 → 82 → … → 12 → 10 with the defaults).
//! 2. At the quality floor, the dimension cap halves (never below
//!    [`MIN_DIMENSION_CAP`]) and quality resets to `initial_quality`.
//! 3. The loop stops at `max_iterations` encodes, or when both floors are
//!    reached, whichever comes first.
//!
//! Every transition strictly decreases quality or halves the cap, so the
//! expected output size is non-increasing per step and the walk is finite.
//!
//! The decoded source raster is cached for the whole search; resampling runs
//! once per dimension tier, always from the cached source. Targets without a
//! quality knob (PNG) skip the quality descent — every step halves the
//! dimension cap, since re-encoding lossless output at a different "quality"
//! would burn iterations without shrinking anything.

use crate::encode::encode;
use crate::error::TranscodeError;
use crate::raster::RasterImage;
use crate::resample::resample_to_fit;
use crate::{TranscodeOptions, TranscodeResult};

/// Floor for dimension-cap halving. The search never scales an image's
/// longest edge below this on its own (a source that is already smaller
/// stays at its own size).
pub const MIN_DIMENSION_CAP: u32 = 16;

/// One position in the search schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SearchStep {
    quality: u8,
    dimension_cap: u32,
}

/// The best (smallest) encode observed so far.
struct Candidate {
    output: Vec<u8>,
    width: u32,
    height: u32,
    quality: Option<u8>,
}

/// Advance the schedule by one step. Returns `None` when both the quality
/// and dimension floors are reached.
///
/// Quality moves within the current dimension tier and resets to
/// `initial_quality` when the tier changes. For quality-less targets
/// (`lossy == false`) only the dimension axis moves.
fn next_step(current: SearchStep, options: &TranscodeOptions, lossy: bool) -> Option<SearchStep> {
    if lossy && current.quality > options.min_quality {
        return Some(SearchStep {
            quality: current
                .quality
                .saturating_sub(options.quality_step)
                .max(options.min_quality),
            dimension_cap: current.dimension_cap,
        });
    }

    let halved = current.dimension_cap / 2;
    if halved >= MIN_DIMENSION_CAP {
        return Some(SearchStep {
            quality: if lossy {
                options.initial_quality
            } else {
                current.quality
            },
            dimension_cap: halved,
        });
    }

    None
}

/// Run the budget search against a cached source raster.
///
/// The caller has already validated `options` and decoded `source` exactly
/// once; this function never re-decodes.
///
/// # Returns
///
/// A satisfied result as soon as an encode fits `budget`, or a best-effort
/// result (`budget_satisfied = false`) carrying the smallest output seen
/// once the schedule or the iteration allowance runs out.
///
/// # Errors
///
/// The first hard failure from resample or encode propagates verbatim; no
/// partial result survives an error.
pub(crate) fn run(
    source: &RasterImage,
    options: &TranscodeOptions,
    budget: usize,
) -> Result<TranscodeResult, TranscodeError> {
    let lossy = options.target_format.supports_quality();

    let source_cap = source.max_dimension();
    let initial_cap = options
        .max_dimension_px
        .map_or(source_cap, |cap| cap.min(source_cap));

    let mut step = SearchStep {
        quality: options.initial_quality,
        dimension_cap: initial_cap,
    };
    let mut current = resample_to_fit(source, Some(step.dimension_cap))?;

    let mut iterations = 0u32;
    let mut best: Option<Candidate> = None;

    loop {
        let output = encode(&current, options.target_format, step.quality)?;
        iterations += 1;
        let output_len = output.len();

        // Replace only on strictly smaller output: among equal-length
        // candidates the earliest wins, which is the highest-quality /
        // largest-dimension one by schedule order.
        if best
            .as_ref()
            .map_or(true, |held| output_len < held.output.len())
        {
            best = Some(Candidate {
                output,
                width: current.width,
                height: current.height,
                quality: if lossy { Some(step.quality) } else { None },
            });
        }

        if output_len <= budget {
            return finish(best, options, iterations, true);
        }

        if iterations >= options.max_iterations {
            break;
        }

        match next_step(step, options, lossy) {
            Some(next) => {
                // Resample only when the tier changes, always from the
                // cached source rather than the previous tier's output
                if next.dimension_cap != step.dimension_cap {
                    current = resample_to_fit(source, Some(next.dimension_cap))?;
                }
                step = next;
            }
            None => break,
        }
    }

    finish(best, options, iterations, false)
}

fn finish(
    best: Option<Candidate>,
    options: &TranscodeOptions,
    iterations: u32,
    budget_satisfied: bool,
) -> Result<TranscodeResult, TranscodeError> {
    let candidate = best.ok_or_else(|| {
        TranscodeError::EncodeFailure("budget search finished without a candidate".to_string())
    })?;

    Ok(TranscodeResult {
        output: candidate.output,
        format: options.target_format,
        quality: candidate.quality,
        width: candidate.width,
        height: candidate.height,
        iterations,
        budget_satisfied,
    })
}


// ============================================================================
// Property-Based Tests
// ============================================================================
