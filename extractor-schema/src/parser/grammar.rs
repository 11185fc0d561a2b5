//! Pest grammar parser for Prisma schema files.

use pest_derive::Parser;

/// The Prisma schema parser.
#[derive(Parser)]
#[grammar = "parser/prisma.pest"]
pub struct PrismaParser;
