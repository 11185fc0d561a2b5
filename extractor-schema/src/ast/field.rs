//! Field definitions for the normalized schema model.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use super::{AttributeValue, FieldKind};

/// One attribute of a model.
///
/// Serialized with camelCase keys in declaration order, which is the layout
/// of the `fields` entries in the metadata document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    /// Field name, unique within its model.
    pub name: SmolStr,
    /// What the type name refers to.
    pub kind: FieldKind,
    /// The field holds an ordered collection (`Type[]`).
    pub is_list: bool,
    /// The field must be present. `false` for `Type?`; list fields are
    /// always required.
    pub is_required: bool,
    /// Declared with `@unique`.
    #[serde(default)]
    pub is_unique: bool,
    /// Declared with `@id`.
    #[serde(default)]
    pub is_id: bool,
    /// Named in the `fields:` list of a relation in the same model.
    #[serde(default)]
    pub is_read_only: bool,
    /// Declared with `@updatedAt`.
    #[serde(default)]
    pub is_updated_at: bool,
    /// Declared with `@default(...)`.
    #[serde(default)]
    pub has_default_value: bool,
    /// The `@default(...)` value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<DefaultValue>,
    /// The type name as written: a scalar keyword or a model/enum name.
    #[serde(rename = "type")]
    pub type_name: SmolStr,
    /// Column name from `@map`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_name: Option<SmolStr>,
    /// Native database type from `@db.X(...)`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub native_type: Option<NativeType>,
    /// Relation name; present on every object field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation_name: Option<SmolStr>,
    /// Local fields holding the foreign key.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relation_from_fields: Vec<SmolStr>,
    /// Referenced fields on the related model.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relation_to_fields: Vec<SmolStr>,
    /// Referential action from `@relation(onDelete: ...)`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation_on_delete: Option<SmolStr>,
    /// Referential action from `@relation(onUpdate: ...)`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation_on_update: Option<SmolStr>,
    /// Text of the `///` comment above or trailing the field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

impl FieldDefinition {
    /// Create a required, single-valued field with no attributes.
    pub fn new(name: impl Into<SmolStr>, type_name: impl Into<SmolStr>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            is_list: false,
            is_required: true,
            is_unique: false,
            is_id: false,
            is_read_only: false,
            is_updated_at: false,
            has_default_value: false,
            default: None,
            type_name: type_name.into(),
            db_name: None,
            native_type: None,
            relation_name: None,
            relation_from_fields: vec![],
            relation_to_fields: vec![],
            relation_on_delete: None,
            relation_on_update: None,
            documentation: None,
        }
    }

    /// Create a scalar field.
    pub fn scalar(name: impl Into<SmolStr>, type_name: impl Into<SmolStr>) -> Self {
        Self::new(name, type_name, FieldKind::Scalar)
    }

    /// Mark the field optional.
    pub fn optional(mut self) -> Self {
        self.is_required = false;
        self
    }

    /// Mark the field as a list.
    pub fn list(mut self) -> Self {
        self.is_list = true;
        self.is_required = true;
        self
    }

    /// Set documentation.
    pub fn with_documentation(mut self, doc: impl Into<String>) -> Self {
        self.documentation = Some(doc.into());
        self
    }

    /// Get the field name as a string.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check if the field may be absent.
    pub fn is_optional(&self) -> bool {
        !self.is_required
    }

    /// Check if this is a relation field.
    pub fn is_relation(&self) -> bool {
        self.kind == FieldKind::Object
    }

    /// Check if this field's type is an enum.
    pub fn is_enum(&self) -> bool {
        self.kind == FieldKind::Enum
    }

    /// Check if this field's type is a scalar.
    pub fn is_scalar(&self) -> bool {
        self.kind == FieldKind::Scalar
    }
}

/// A `@default(...)` value as it appears in the metadata document.
///
/// Literals serialize as plain JSON values and enum values as their name.
/// Functions such as `autoincrement()` serialize as
/// `{ "name": "autoincrement", "args": [] }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DefaultValue {
    /// A generator function call.
    Function(DefaultFunction),
    /// A list literal.
    List(Vec<DefaultValue>),
    /// A boolean literal.
    Boolean(bool),
    /// A numeric literal.
    Number(serde_json::Number),
    /// A string literal or enum value.
    String(String),
}

/// A function call in a `@default(...)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultFunction {
    /// Function name, e.g. `now` or `dbgenerated`.
    pub name: SmolStr,
    /// Argument values.
    pub args: Vec<DefaultValue>,
}

impl From<&AttributeValue> for DefaultValue {
    fn from(value: &AttributeValue) -> Self {
        match value {
            AttributeValue::String(s) => Self::String(s.clone()),
            AttributeValue::Number(n) => number_literal(n),
            AttributeValue::Boolean(b) => Self::Boolean(*b),
            AttributeValue::Path(p) => Self::String(p.to_string()),
            AttributeValue::Function(name, args) => Self::Function(DefaultFunction {
                name: name.clone(),
                args: args.iter().map(|arg| Self::from(&arg.value)).collect(),
            }),
            AttributeValue::Array(values) => Self::List(values.iter().map(Self::from).collect()),
        }
    }
}

fn number_literal(literal: &str) -> DefaultValue {
    literal
        .parse::<i64>()
        .map(serde_json::Number::from)
        .ok()
        .or_else(|| literal.parse::<u64>().map(serde_json::Number::from).ok())
        .or_else(|| literal.parse::<f64>().ok().and_then(serde_json::Number::from_f64))
        .map(DefaultValue::Number)
        .unwrap_or_else(|| DefaultValue::String(literal.to_string()))
}

/// A native database type: the name after `@db.` and its arguments as
/// written. Serializes as `["VarChar", ["255"]]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NativeType(pub SmolStr, pub Vec<String>);

impl NativeType {
    /// Create a native type.
    pub fn new(name: impl Into<SmolStr>, args: Vec<String>) -> Self {
        Self(name.into(), args)
    }

    /// Get the type name, without the `db.` prefix.
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Get the arguments.
    pub fn args(&self) -> &[String] {
        &self.1
    }
}
