//! Fuzz target for parsing followed by emission.
//!
//! Whatever parses must emit deterministically, starting with the header.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_schema_emit
//! ```

#![no_main]

use extractor_codegen::{GenerationConfig, HEADER, emit};
use extractor_schema::parse_schema;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(schema) = parse_schema(input) else {
        return;
    };

    let config = GenerationConfig::default();
    let first = emit(&schema, &config);
    assert!(first.source.starts_with(HEADER));
    assert_eq!(first.source, emit(&schema, &config).source);
});
