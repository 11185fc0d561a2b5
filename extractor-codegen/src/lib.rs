//! # extractor-codegen
//!
//! Configuration resolution and TypeScript generation for prisma-extractor.
//!
//! This crate provides:
//! - [`GenerationConfig`]: defaults merged with an optional JSON document,
//!   validated as a whole
//! - [`emit`]: renders a [`SchemaModel`](extractor_schema::SchemaModel) as
//!   TypeScript enums and interfaces or type aliases
//! - [`write_outputs`]: writes the generated file and `metadata.json`
//!
//! ## Example
//!
//! ```rust
//! use extractor_codegen::{GenerationConfig, emit};
//! use extractor_schema::parse_schema;
//!
//! let schema = parse_schema(r#"
//!     enum Role {
//!         ADMIN
//!         USER
//!     }
//! "#).unwrap();
//!
//! let emission = emit(&schema, &GenerationConfig::default());
//! assert!(emission.source.contains("export enum Role {"));
//! ```

pub mod config;
pub mod error;
pub mod generators;
pub mod types;
pub mod writer;

pub use config::{
    CONFIG_FILE_NAME, ConfigViolation, EnumOutputKind, GenerationConfig, OutputKind, TypeMapping,
    write_default_config,
};
pub use error::{CodegenError, CodegenResult, ConfigError, ConfigResult};
pub use generators::{Emission, HEADER, emit};
pub use writer::{METADATA_FILE_NAME, WrittenOutputs, write_outputs};
