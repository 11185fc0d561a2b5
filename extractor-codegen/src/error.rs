//! Error types for configuration resolution and code generation.

// These warnings are false positives - the fields are used by derive macros
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

use crate::config::ConfigViolation;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for code generation operations.
pub type CodegenResult<T> = Result<T, CodegenError>;

/// Errors raised while loading, validating or writing a configuration
/// document.
#[derive(Error, Debug, Diagnostic)]
pub enum ConfigError {
    /// The configuration file exists but could not be read.
    #[error("failed to read configuration file: {path}")]
    #[diagnostic(code(extractor::config::io_error))]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The configuration document is not well-formed JSON.
    #[error("configuration at {path} is not valid JSON")]
    #[diagnostic(
        code(extractor::config::malformed),
        help("the configuration file must contain a single JSON object")
    )]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The document is JSON but breaks one or more shape rules.
    #[error("invalid configuration: {}", join_violations(.violations))]
    #[diagnostic(
        code(extractor::config::validation),
        help("run with --init to write a valid default configuration")
    )]
    Validation { violations: Vec<ConfigViolation> },

    /// The default document could not be written.
    #[error("failed to write configuration file: {path}")]
    #[diagnostic(code(extractor::config::write_error))]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

fn join_violations(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors raised while generating or writing output.
#[derive(Error, Debug, Diagnostic)]
pub enum CodegenError {
    /// Configuration could not be resolved.
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    /// An output directory or file could not be created or written.
    #[error("failed to write output: {path}")]
    #[diagnostic(code(extractor::codegen::output_write))]
    OutputWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The metadata document could not be serialized.
    #[error("failed to serialize metadata document")]
    #[diagnostic(code(extractor::codegen::metadata))]
    Metadata(#[from] serde_json::Error),
}

impl CodegenError {
    /// Create an output write error for a path.
    pub fn output_write(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::OutputWrite {
            path: path.display().to_string(),
            source,
        }
    }
}
