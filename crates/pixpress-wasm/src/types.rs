//! WASM-compatible wrapper types for transcode results.
//!
//! This module provides a JavaScript-friendly view of the core
//! `TranscodeResult`, handling the conversion between Rust and JavaScript
//! data representations.

use js_sys::Uint8Array;
use pixpress_core::TranscodeResult;
use wasm_bindgen::prelude::*;

/// A transcode result wrapper for JavaScript.
///
/// # Memory Management
///
/// The encoded bytes are stored in WASM memory. The `output` getter copies
/// them into a JavaScript `Uint8Array`; everything else is plain scalar
/// metadata. The `free()` method can be called to explicitly release WASM
/// memory, but this is optional as wasm-bindgen's finalizer will handle
/// cleanup automatically.
#[wasm_bindgen]
pub struct JsTranscodeResult {
    output: Vec<u8>,
    format: &'static str,
    mime_type: &'static str,
    extension: &'static str,
    quality: Option<u8>,
    width: u32,
    height: u32,
    iterations: u32,
    budget_satisfied: bool,
}

#[wasm_bindgen]
impl JsTranscodeResult {
    /// The encoded image bytes, as a `Uint8Array` copy.
    #[wasm_bindgen(getter)]
    pub fn output(&self) -> Uint8Array {
        Uint8Array::from(&self.output[..])
    }

    /// Number of encoded bytes (without copying them out).
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.output.len()
    }

    /// Output format name ("webp", "png", or "jpeg").
    #[wasm_bindgen(getter)]
    pub fn format(&self) -> String {
        self.format.to_string()
    }

    /// MIME type for a download `Blob` (e.g. "image/webp").
    #[wasm_bindgen(getter)]
    pub fn mime_type(&self) -> String {
        self.mime_type.to_string()
    }

    /// Suggested file extension for the output (e.g. "webp").
    #[wasm_bindgen(getter)]
    pub fn extension(&self) -> String {
        self.extension.to_string()
    }

    /// Quality the final encode used; `undefined` for PNG.
    #[wasm_bindgen(getter)]
    pub fn quality(&self) -> Option<u8> {
        self.quality
    }

    /// Output width in pixels.
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Output height in pixels.
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of encode attempts the engine performed.
    #[wasm_bindgen(getter)]
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Whether the byte budget was met (always true without a budget).
    #[wasm_bindgen(getter)]
    pub fn budget_satisfied(&self) -> bool {
        self.budget_satisfied
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup
    /// automatically. Call this to immediately release a large output.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsTranscodeResult {
    /// Create a JsTranscodeResult from a core TranscodeResult.
    ///
    /// This is an internal constructor used by the transcode binding.
    pub(crate) fn from_result(result: TranscodeResult) -> Self {
        Self {
            output: result.output,
            format: result.format.name(),
            mime_type: result.format.mime_type(),
            extension: result.format.extension(),
            quality: result.quality,
            width: result.width,
            height: result.height,
            iterations: result.iterations,
            budget_satisfied: result.budget_satisfied,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixpress_core::TargetFormat;

    fn sample_result() -> TranscodeResult {
        TranscodeResult {
            output: vec![1, 2, 3, 4],
            format: TargetFormat::Webp,
            quality: Some(82),
            width: 640,
            height: 480,
            iterations: 2,
            budget_satisfied: true,
        }
    }

    #[test]
    fn test_from_result() {
        let js = JsTranscodeResult::from_result(sample_result());

        assert_eq!(js.byte_length(), 4);
        assert_eq!(js.format(), "webp");
        assert_eq!(js.mime_type(), "image/webp");
        assert_eq!(js.extension(), "webp");
        assert_eq!(js.quality(), Some(82));
        assert_eq!(js.width(), 640);
        assert_eq!(js.height(), 480);
        assert_eq!(js.iterations(), 2);
        assert!(js.budget_satisfied());
    }

    #[test]
    fn test_png_result_has_no_quality() {
        let mut result = sample_result();
        result.format = TargetFormat::Png;
        result.quality = None;

        let js = JsTranscodeResult::from_result(result);
        assert_eq!(js.quality(), None);
        assert_eq!(js.extension(), "png");
    }
}
