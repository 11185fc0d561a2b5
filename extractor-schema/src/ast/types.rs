//! Scalar keywords and field kinds.

use serde::{Deserialize, Serialize};

/// Built-in scalar types of the schema language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarType {
    String,
    Boolean,
    Int,
    BigInt,
    Float,
    Decimal,
    DateTime,
    Json,
    Bytes,
    /// Database type the schema language cannot represent, written as
    /// `Unsupported("...")`.
    Unsupported,
}

impl ScalarType {
    /// Every scalar keyword, in the order the default type mapping lists them.
    pub const ALL: [ScalarType; 10] = [
        Self::String,
        Self::Int,
        Self::Float,
        Self::BigInt,
        Self::Boolean,
        Self::DateTime,
        Self::Json,
        Self::Decimal,
        Self::Bytes,
        Self::Unsupported,
    ];

    /// Parse a scalar keyword. Keywords are case sensitive.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "String" => Some(Self::String),
            "Boolean" => Some(Self::Boolean),
            "Int" => Some(Self::Int),
            "BigInt" => Some(Self::BigInt),
            "Float" => Some(Self::Float),
            "Decimal" => Some(Self::Decimal),
            "DateTime" => Some(Self::DateTime),
            "Json" => Some(Self::Json),
            "Bytes" => Some(Self::Bytes),
            "Unsupported" => Some(Self::Unsupported),
            _ => None,
        }
    }

    /// Get the keyword as written in a schema.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "String",
            Self::Boolean => "Boolean",
            Self::Int => "Int",
            Self::BigInt => "BigInt",
            Self::Float => "Float",
            Self::Decimal => "Decimal",
            Self::DateTime => "DateTime",
            Self::Json => "Json",
            Self::Bytes => "Bytes",
            Self::Unsupported => "Unsupported",
        }
    }
}

impl std::fmt::Display for ScalarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What a field's type name refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// A scalar keyword, or a name that resolves to nothing in the schema.
    Scalar,
    /// An enum declared in the schema.
    Enum,
    /// Another model: the field is a relation.
    Object,
}

impl FieldKind {
    /// Get the kind tag used in the metadata document.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Enum => "enum",
            Self::Object => "object",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
