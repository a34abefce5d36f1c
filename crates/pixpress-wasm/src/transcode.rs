//! Transcode WASM bindings.
//!
//! This module exposes the pixpress-core facade to JavaScript. Options come
//! in as a plain JS object and are deserialized through serde; omitted
//! fields take the engine defaults.
//!
//! # Example
//!
//! ```typescript
//! import { transcode, detect_format } from '@pixpress/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! console.log(detect_format(bytes)); // "JPEG" | "PNG" | "WebP" | undefined
//!
//! const result = transcode(bytes, {
//!   target_format: 'jpeg',
//!   max_output_bytes: 1_000_000,
//! });
//! if (!result.budget_satisfied) {
//!   console.warn('budget missed, best effort returned');
//! }
//! ```

use pixpress_core::{SourceFormat, TranscodeOptions};
use wasm_bindgen::prelude::*;

use crate::types::JsTranscodeResult;

/// Transcode an image to the target format, optionally compressing it to a
/// byte budget.
///
/// # Arguments
///
/// * `bytes` - Encoded image bytes (JPEG, PNG, or WebP; detected by content,
///   never by the file's declared type)
/// * `options` - A plain object mirroring `TranscodeOptions`; pass
///   `undefined` (or `{}`) for the defaults. Unknown formats in
///   `target_format` reject during deserialization.
///
/// # Returns
///
/// A [`JsTranscodeResult`] with the encoded bytes and the parameters that
/// produced them, or an error string naming the failing stage.
///
/// # Example
///
/// ```typescript
/// const result = transcode(bytes, { target_format: 'webp', max_dimension_px: 800 });
/// const blob = new Blob([result.output], { type: result.mime_type });
/// const url = URL.createObjectURL(blob);
/// ```
#[wasm_bindgen]
pub fn transcode(bytes: &[u8], options: JsValue) -> Result<JsTranscodeResult, JsValue> {
    let options: TranscodeOptions = if options.is_undefined() || options.is_null() {
        TranscodeOptions::default()
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsValue::from_str(&format!("Invalid options: {e}")))?
    };

    let result = pixpress_core::transcode(bytes, &options)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    web_sys::console::log_1(&JsValue::from_str(&format!(
        "pixpress: {} bytes in -> {} bytes out ({}x{} {}, {} iteration(s), budget {})",
        bytes.len(),
        result.output.len(),
        result.width,
        result.height,
        result.format.name(),
        result.iterations,
        if result.budget_satisfied { "met" } else { "missed" },
    )));

    Ok(JsTranscodeResult::from_result(result))
}

/// Detect an image's format from its content signature.
///
/// Returns `"JPEG"`, `"PNG"`, or `"WebP"`, or `undefined` when the
/// signature is unrecognized. Useful for gating the UI before a full
/// transcode call.
#[wasm_bindgen]
pub fn detect_format(bytes: &[u8]) -> Option<String> {
    SourceFormat::detect(bytes).map(|format| format.name().to_string())
}


/// WASM-specific tests that require JsValue.
///
/// These tests use functions that return `Result<T, JsValue>` and can only
/// run on wasm32 targets. Use `wasm-pack test` to run these.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn png_bytes() -> Vec<u8> {
        // 1x1 opaque gray PNG, pre-encoded
        vec![
            0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48,
            0x44, 0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x02, 0x00, 0x00,
            0x00, 0x90, 0x77, 0x53, 0xDE, 0x00, 0x00, 0x00, 0x0C, 0x49, 0x44, 0x41, 0x54, 0x78,
            0x9C, 0x63, 0xC8, 0xC8, 0xC8, 0x00, 0x00, 0x02, 0x74, 0x01, 0x39, 0x6B, 0x66, 0x50,
            0x95, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
        ]
    }

    #[wasm_bindgen_test]
    fn test_transcode_defaults() {
        let result = transcode(&png_bytes(), JsValue::UNDEFINED);
        assert!(result.is_ok());

        let result = result.unwrap();
        assert_eq!(result.format(), "webp");
        assert!(result.budget_satisfied());
    }

    #[wasm_bindgen_test]
    fn test_transcode_invalid_input() {
        let result = transcode(&[0, 1, 2, 3], JsValue::UNDEFINED);
        assert!(result.is_err());
    }

    #[wasm_bindgen_test]
    fn test_transcode_empty_input() {
        let result = transcode(&[], JsValue::UNDEFINED);
        assert!(result.is_err());
    }
}
