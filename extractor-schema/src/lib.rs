//! # extractor-schema
//!
//! Prisma schema parser and normalized schema model for prisma-extractor.
//!
//! This crate provides:
//! - A pest grammar for Prisma `schema.prisma` files
//! - The normalized [`SchemaModel`] of models, enums and fields
//! - Name resolution of field types against declared models and enums
//!
//! ## Example
//!
//! ```rust
//! use extractor_schema::{FieldKind, parse_schema};
//!
//! let schema = parse_schema(r#"
//!     model User {
//!         id    Int    @id @default(autoincrement())
//!         email String @unique
//!         role  Role
//!     }
//!
//!     enum Role {
//!         USER
//!         ADMIN
//!     }
//! "#).unwrap();
//!
//! let user = schema.get_record("User").unwrap();
//! assert_eq!(user.get_field("role").unwrap().kind, FieldKind::Enum);
//! ```

pub mod ast;
pub mod error;
pub mod namespace;
pub mod parser;

pub use ast::*;
pub use error::{SchemaError, SchemaResult};
pub use namespace::{Declaration, Namespace};
pub use parser::{parse_schema, parse_schema_file, resolve_schema_path};
