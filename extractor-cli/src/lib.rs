//! prisma-extractor CLI.
//!
//! This crate provides the `prisma-extractor` binary, which reads a Prisma
//! schema and writes TypeScript declarations and an optional metadata
//! document.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logging;
pub mod output;
