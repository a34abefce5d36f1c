//! Pixpress WASM - WebAssembly bindings for Pixpress
//!
//! This crate exposes the pixpress-core transcoding engine to
//! JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper for the transcode result
//! - `transcode` - The transcode entry point and format detection
//!
//! # Usage
//!
//! ```typescript
//! import init, { transcode, detect_format } from '@pixpress/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const result = transcode(bytes, {
//!   target_format: 'webp',
//!   max_dimension_px: 800,
//!   max_output_bytes: 1_000_000,
//! });
//! const blob = new Blob([result.output], { type: result.mime_type });
//! ```

use wasm_bindgen::prelude::*;

mod transcode;
mod types;

// Re-export public types
pub use transcode::{detect_format, transcode};
pub use types::JsTranscodeResult;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
