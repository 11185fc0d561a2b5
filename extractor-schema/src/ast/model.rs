//! Model and enum definitions for the normalized schema model.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use super::FieldDefinition;

/// A model: a named record with ordered fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordDefinition {
    /// Model name, unique across models and enums.
    pub name: SmolStr,
    /// Table name from `@@map`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_name: Option<SmolStr>,
    /// Fields in declaration order.
    pub fields: Vec<FieldDefinition>,
    /// Compound primary key from `@@id`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_key: Option<PrimaryKey>,
    /// Compound unique constraints from `@@unique`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unique_fields: Vec<Vec<SmolStr>>,
    /// Text of the `///` comment above the model.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

impl RecordDefinition {
    /// Create a model with no fields.
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            db_name: None,
            fields: vec![],
            primary_key: None,
            unique_fields: vec![],
            documentation: None,
        }
    }

    /// Get the model name as a string.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a field.
    pub fn add_field(&mut self, field: FieldDefinition) {
        self.fields.push(field);
    }

    /// Builder form of [`add_field`](Self::add_field).
    pub fn with_field(mut self, field: FieldDefinition) -> Self {
        self.add_field(field);
        self
    }

    /// Set documentation.
    pub fn with_documentation(mut self, doc: impl Into<String>) -> Self {
        self.documentation = Some(doc.into());
        self
    }

    /// Get a field by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Get all relation fields.
    pub fn relation_fields(&self) -> impl Iterator<Item = &FieldDefinition> {
        self.fields.iter().filter(|f| f.is_relation())
    }

    /// Get the database table name (from `@@map` or the model name).
    pub fn table_name(&self) -> &str {
        self.db_name.as_deref().unwrap_or(&self.name)
    }
}

/// A compound primary key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryKey {
    /// Explicit constraint name, if given.
    #[serde(default)]
    pub name: Option<SmolStr>,
    /// Fields making up the key.
    pub fields: Vec<SmolStr>,
}

/// An enum: a closed set of string-valued variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumDefinition {
    /// Enum name, unique across models and enums.
    pub name: SmolStr,
    /// Variants in declaration order.
    pub values: Vec<EnumValue>,
    /// Database enum name from `@@map`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_name: Option<SmolStr>,
    /// Text of the `///` comment above the enum.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

impl EnumDefinition {
    /// Create an enum with no variants.
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            values: vec![],
            db_name: None,
            documentation: None,
        }
    }

    /// Get the enum name as a string.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a variant.
    pub fn add_value(&mut self, value: EnumValue) {
        self.values.push(value);
    }

    /// Builder form of [`add_value`](Self::add_value).
    pub fn with_value(mut self, value: EnumValue) -> Self {
        self.add_value(value);
        self
    }

    /// Set documentation.
    pub fn with_documentation(mut self, doc: impl Into<String>) -> Self {
        self.documentation = Some(doc.into());
        self
    }

    /// Get a variant by name.
    pub fn get_value(&self, name: &str) -> Option<&EnumValue> {
        self.values.iter().find(|v| v.name == name)
    }
}

/// A single enum variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumValue {
    /// Variant name.
    pub name: SmolStr,
    /// Stored value from `@map`.
    #[serde(default)]
    pub db_name: Option<SmolStr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documentation: Option<String>,
}

impl EnumValue {
    /// Create a variant.
    pub fn new(name: impl Into<SmolStr>) -> Self {
        Self {
            name: name.into(),
            db_name: None,
            documentation: None,
        }
    }

    /// Get the value stored in the database (from `@map` or the name).
    pub fn db_value(&self) -> &str {
        self.db_name.as_deref().unwrap_or(&self.name)
    }
}
