//! Code generation for Prisma enums.

use extractor_schema::EnumDefinition;

use super::generate_doc_comment;
use crate::config::EnumOutputKind;

/// Generate the declaration block for an enum.
///
/// A native enum assigns each variant its own name as a string value, not
/// an ordinal and not its `@map` value. A union lists the same names as
/// string literals.
pub fn generate_enum_block(enum_def: &EnumDefinition, kind: EnumOutputKind) -> String {
    let mut out = generate_doc_comment(enum_def.documentation.as_deref(), "");

    match kind {
        EnumOutputKind::Enum => {
            out.push_str(&format!("export enum {} {{\n", enum_def.name));
            for value in &enum_def.values {
                out.push_str(&generate_doc_comment(value.documentation.as_deref(), "  "));
                out.push_str(&format!("  {0} = \"{0}\",\n", value.name));
            }
            out.push_str("}\n");
        }
        EnumOutputKind::Union => {
            let union = if enum_def.values.is_empty() {
                "never".to_string()
            } else {
                enum_def
                    .values
                    .iter()
                    .map(|v| format!("\"{}\"", v.name))
                    .collect::<Vec<_>>()
                    .join(" | ")
            };
            out.push_str(&format!("export type {} = {};\n", enum_def.name, union));
        }
    }

    out
}
