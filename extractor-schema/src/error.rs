//! Error types for schema parsing.

// These warnings are false positives - the fields are used by derive macros
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

/// Result type for schema operations.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Errors that can occur while reading and parsing a schema.
#[derive(Error, Debug, Diagnostic)]
pub enum SchemaError {
    /// The schema path does not resolve to a file.
    #[error("schema file not found at: {path}")]
    #[diagnostic(code(extractor::schema::not_found))]
    NotFound { path: String },

    /// The schema file exists but could not be read.
    #[error("failed to read schema file: {path}")]
    #[diagnostic(code(extractor::schema::io_error))]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The grammar rejected the schema text.
    #[error("syntax error in schema: {message}")]
    #[diagnostic(code(extractor::schema::syntax_error))]
    SyntaxError {
        #[source_code]
        src: String,
        #[label("error here")]
        span: miette::SourceSpan,
        message: String,
    },

    /// The same name was declared twice.
    #[error("duplicate {kind} `{name}`")]
    #[diagnostic(code(extractor::schema::duplicate))]
    Duplicate { kind: String, name: String },

    /// A model or enum uses a name reserved by the schema language or the
    /// generated TypeScript.
    #[error("{kind} `{name}` uses a reserved name")]
    #[diagnostic(
        code(extractor::schema::reserved_name),
        help("rename the {kind}; scalar keywords and TypeScript keywords cannot name a type")
    )]
    ReservedName { kind: String, name: String },
}

impl SchemaError {
    /// Create a syntax error with source location.
    pub fn syntax(
        src: impl Into<String>,
        offset: usize,
        len: usize,
        message: impl Into<String>,
    ) -> Self {
        Self::SyntaxError {
            src: src.into(),
            span: (offset, len).into(),
            message: message.into(),
        }
    }

    /// Create a duplicate definition error.
    pub fn duplicate(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Duplicate {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Create a reserved name error.
    pub fn reserved(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::ReservedName {
            kind: kind.into(),
            name: name.into(),
        }
    }
}
