//! Fuzz target for configuration documents.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config_parser
//! ```

#![no_main]

use extractor_codegen::GenerationConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // Loading should never panic, only return errors
        let _ = GenerationConfig::from_json_str(input);
    }
});
