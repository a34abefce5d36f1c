//! Error types for the transcoding pipeline.

use thiserror::Error;

/// Errors surfaced by [`transcode`](crate::transcode).
///
/// Failures from any pipeline stage propagate verbatim; there is no fallback
/// format and no partial output on error. Missing a size budget is not an
/// error — it produces a best-effort result with `budget_satisfied = false`.
#[derive(Debug, Error)]
pub enum TranscodeError {
    /// The input's content signature is not a recognized image format.
    #[error("Unsupported input format: {0}")]
    UnsupportedFormat(String),

    /// The input was recognized but its payload is malformed.
    #[error("Corrupt input: {0}")]
    CorruptInput(String),

    /// The transcode options are contradictory or out of range.
    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    /// Encoding to the target format failed.
    #[error("Encode failure: {0}")]
    EncodeFailure(String),

    /// The input would require more memory than the engine allows.
    #[error("Resource limit exceeded: {0}")]
    ResourceExhausted(String),
}
