//! Code generation for Prisma models.

use extractor_schema::RecordDefinition;

use super::generate_doc_comment;
use crate::config::{GenerationConfig, OutputKind};
use crate::types::render_member;

/// Generate the declaration block for a model.
pub fn generate_model_block(record: &RecordDefinition, config: &GenerationConfig) -> String {
    let mut out = generate_doc_comment(record.documentation.as_deref(), "");

    match config.output_kind {
        OutputKind::Interface => out.push_str(&format!("export interface {} {{\n", record.name)),
        OutputKind::Type => out.push_str(&format!("export type {} = {{\n", record.name)),
    }

    for field in &record.fields {
        out.push_str(&generate_doc_comment(field.documentation.as_deref(), "  "));
        out.push_str(&format!("  {};\n", render_member(field, config)));
    }

    out.push_str("}\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use extractor_schema::{FieldDefinition, FieldKind};
    use pretty_assertions::assert_eq;

    fn post() -> RecordDefinition {
        RecordDefinition::new("Post")
            .with_field(FieldDefinition::scalar("id", "Int"))
            .with_field(FieldDefinition::scalar("title", "String").optional())
            .with_field(FieldDefinition::new("author", "User", FieldKind::Object))
            .with_field(FieldDefinition::scalar("tags", "String").list())
    }

    #[test]
    fn test_interface() {
        let config = GenerationConfig {
            relation_fields_optional: false,
            ..GenerationConfig::default()
        };
        assert_eq!(
            generate_model_block(&post(), &config),
            "export interface Post {\n  id: number;\n  title?: string;\n  author: User;\n  tags: string[];\n}\n"
        );
    }

    #[test]
    fn test_type_alias_with_optional_relations() {
        let config = GenerationConfig {
            output_kind: OutputKind::Type,
            relation_fields_optional: true,
            ..GenerationConfig::default()
        };
        assert_eq!(
            generate_model_block(&post(), &config),
            "export type Post = {\n  id: number;\n  title?: string;\n  author?: User;\n  tags: string[];\n}\n"
        );
    }

    #[test]
    fn test_empty_model() {
        let empty = RecordDefinition::new("Marker");
        assert_eq!(
            generate_model_block(&empty, &GenerationConfig::default()),
            "export interface Marker {\n}\n"
        );
    }

    #[test]
    fn test_documented_fields() {
        let record = RecordDefinition::new("User")
            .with_documentation("A registered account.")
            .with_field(FieldDefinition::scalar("id", "Int").with_documentation("Primary key."));

        assert_eq!(
            generate_model_block(&record, &GenerationConfig::default()),
            "/** A registered account. */\nexport interface User {\n  /** Primary key. */\n  id: number;\n}\n"
        );
    }
}
