//! Type mapping from Prisma field types to TypeScript types.

use extractor_schema::{FieldDefinition, FieldKind};

use crate::config::{GenerationConfig, TypeMapping};

/// Get the TypeScript type name for a field, without the list suffix.
///
/// Scalars go through the mapping and pass through unchanged when
/// unmapped. Enum and relation fields use the referenced name as is.
pub fn target_type<'a>(field: &'a FieldDefinition, mapping: &'a TypeMapping) -> &'a str {
    match field.kind {
        FieldKind::Scalar => mapping.resolve(&field.type_name),
        FieldKind::Enum | FieldKind::Object => field.type_name.as_str(),
    }
}

/// Check whether a field is rendered with `?`.
///
/// Optional fields always are. With `relation_fields_optional`, relation
/// fields are too, even when required in the schema.
pub fn renders_optional(field: &FieldDefinition, relation_fields_optional: bool) -> bool {
    !field.is_required || (field.kind == FieldKind::Object && relation_fields_optional)
}

/// Render a field as a member line body, e.g. `posts?: Post[]`.
pub fn render_member(field: &FieldDefinition, config: &GenerationConfig) -> String {
    let optional = if renders_optional(field, config.relation_fields_optional) {
        "?"
    } else {
        ""
    };
    let list = if field.is_list { "[]" } else { "" };

    format!(
        "{}{}: {}{}",
        field.name,
        optional,
        target_type(field, &config.type_mapping),
        list
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config(relation_fields_optional: bool) -> GenerationConfig {
        GenerationConfig {
            relation_fields_optional,
            ..GenerationConfig::default()
        }
    }

    #[test]
    fn test_target_type_scalar() {
        let mapping = TypeMapping::default();
        assert_eq!(target_type(&FieldDefinition::scalar("a", "Int"), &mapping), "number");
        assert_eq!(target_type(&FieldDefinition::scalar("a", "DateTime"), &mapping), "Date");
        assert_eq!(
            target_type(&FieldDefinition::scalar("a", "Geometry"), &mapping),
            "Geometry"
        );
    }

    #[test]
    fn test_target_type_reference_skips_mapping() {
        let mut mapping = TypeMapping::default();
        mapping.insert("Role", "string");
        let role = FieldDefinition::new("role", "Role", FieldKind::Enum);
        assert_eq!(target_type(&role, &mapping), "Role");
    }

    #[test]
    fn test_optionality_law() {
        let required = FieldDefinition::scalar("a", "String");
        let optional = FieldDefinition::scalar("a", "String").optional();
        let relation = FieldDefinition::new("a", "User", FieldKind::Object);
        let enum_field = FieldDefinition::new("a", "Role", FieldKind::Enum);

        for flag in [true, false] {
            assert!(!renders_optional(&required, flag));
            assert!(renders_optional(&optional, flag));
            assert!(!renders_optional(&enum_field, flag));
            assert_eq!(renders_optional(&relation, flag), flag);
        }
    }

    #[test]
    fn test_render_member() {
        let posts = FieldDefinition::new("posts", "Post", FieldKind::Object).list();
        assert_eq!(render_member(&posts, &config(true)), "posts?: Post[]");
        assert_eq!(render_member(&posts, &config(false)), "posts: Post[]");

        let tags = FieldDefinition::scalar("tags", "String").list();
        assert_eq!(render_member(&tags, &config(true)), "tags: string[]");

        let bio = FieldDefinition::scalar("bio", "String").optional();
        assert_eq!(render_member(&bio, &config(false)), "bio?: string");
    }
}
