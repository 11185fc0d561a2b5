//! TypeScript generators for Prisma enums and models.

mod enum_gen;
mod model;

pub use enum_gen::generate_enum_block;
pub use model::generate_model_block;

use extractor_schema::SchemaModel;
use tracing::debug;

use crate::config::GenerationConfig;
use crate::error::CodegenResult;

/// Header written at the top of every generated file.
pub const HEADER: &str = "// This file is auto-generated by prisma-extractor.\n// Do not edit this file directly.\n";

/// The result of one emission: the generated source and the model it was
/// generated from.
#[derive(Debug, Clone, PartialEq)]
pub struct Emission<'a> {
    /// Generated TypeScript source.
    pub source: String,
    /// The schema model, exported as the metadata document.
    pub metadata: &'a SchemaModel,
}

impl Emission<'_> {
    /// Render the metadata document as pretty-printed JSON.
    pub fn metadata_json(&self) -> CodegenResult<String> {
        Ok(serde_json::to_string_pretty(self.metadata)?)
    }
}

/// Generate TypeScript declarations for a schema.
///
/// Enums come first, then models, each in declaration order and each
/// preceded by one blank line. The output depends only on the arguments.
pub fn emit<'a>(schema: &'a SchemaModel, config: &GenerationConfig) -> Emission<'a> {
    let mut source = String::from(HEADER);

    for enum_def in &schema.enums {
        source.push('\n');
        source.push_str(&generate_enum_block(enum_def, config.enum_output_kind));
    }

    for record in &schema.records {
        source.push('\n');
        source.push_str(&generate_model_block(record, config));
    }

    debug!(
        enums = schema.enums.len(),
        models = schema.records.len(),
        bytes = source.len(),
        "emitted declarations"
    );

    Emission {
        source,
        metadata: schema,
    }
}

/// Generate a JSDoc comment from an optional doc string.
///
/// Every line is prefixed with `indent`; an absent or blank doc yields an
/// empty string.
pub fn generate_doc_comment(doc: Option<&str>, indent: &str) -> String {
    let Some(doc) = doc.map(str::trim).filter(|d| !d.is_empty()) else {
        return String::new();
    };

    let lines: Vec<_> = doc
        .lines()
        .map(|line| line.trim().replace("*/", "*\\/"))
        .collect();

    if let [line] = lines.as_slice() {
        return format!("{indent}/** {line} */\n");
    }

    let mut out = format!("{indent}/**\n");
    for line in &lines {
        if line.is_empty() {
            out.push_str(&format!("{indent} *\n"));
        } else {
            out.push_str(&format!("{indent} * {line}\n"));
        }
    }
    out.push_str(&format!("{indent} */\n"));
    out
}
