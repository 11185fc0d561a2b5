//! # prisma-extractor
//!
//! Generate TypeScript type declarations and a metadata document from a
//! Prisma schema.
//!
//! prisma-extractor provides:
//! - A parser for Prisma `schema.prisma` files into an ordered model of
//!   models, enums and fields
//! - A JSON configuration layer for output shape and scalar type mapping
//! - An emitter producing TypeScript enums, unions, interfaces or type
//!   aliases
//!
//! ## Quick Start
//!
//! ```rust
//! use prisma_extractor::prelude::*;
//!
//! let schema = parse_schema(r#"
//!     enum Role {
//!         ADMIN
//!         USER
//!     }
//!
//!     model User {
//!         id    Int    @id
//!         email String @unique
//!         role  Role
//!     }
//! "#).unwrap();
//!
//! let config = GenerationConfig::default();
//! let emission = emit(&schema, &config);
//!
//! assert!(emission.source.contains("export interface User {"));
//! assert!(emission.source.contains("  role: Role;"));
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Schema parsing and the normalized schema model.
pub mod schema {
    pub use extractor_schema::*;
}

/// Configuration and TypeScript generation.
pub mod codegen {
    pub use extractor_codegen::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::codegen::{
        EnumOutputKind, GenerationConfig, OutputKind, TypeMapping, emit, write_outputs,
    };
    pub use crate::schema::{SchemaModel, parse_schema, parse_schema_file};
}

// Re-export key types at the crate root
pub use codegen::{CodegenError, ConfigError, Emission, GenerationConfig};
pub use schema::{SchemaError, SchemaModel};

/// Parse schema text and render it as TypeScript in one step.
pub fn generate_source(schema: &str, config: &GenerationConfig) -> Result<String, SchemaError> {
    let model = schema::parse_schema(schema)?;
    Ok(codegen::emit(&model, config).source)
}
