//! Top-level schema model.

use serde::{Deserialize, Serialize};

use super::{EnumDefinition, RecordDefinition};

/// The normalized result of parsing a schema.
///
/// Models and enums keep their declaration order. Serializing this value
/// produces the metadata document, with models under the `models` key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaModel {
    /// All models, in declaration order.
    #[serde(rename = "models")]
    pub records: Vec<RecordDefinition>,
    /// All enums, in declaration order.
    pub enums: Vec<EnumDefinition>,
}

impl SchemaModel {
    /// Create a new empty schema model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a model.
    pub fn add_record(&mut self, record: RecordDefinition) {
        self.records.push(record);
    }

    /// Append an enum.
    pub fn add_enum(&mut self, e: EnumDefinition) {
        self.enums.push(e);
    }

    /// Get a model by name.
    pub fn get_record(&self, name: &str) -> Option<&RecordDefinition> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Get an enum by name.
    pub fn get_enum(&self, name: &str) -> Option<&EnumDefinition> {
        self.enums.iter().find(|e| e.name == name)
    }

    /// Check whether the schema declares nothing.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty() && self.enums.is_empty()
    }

    /// Get statistics about the schema.
    pub fn stats(&self) -> SchemaStats {
        SchemaStats {
            record_count: self.records.len(),
            enum_count: self.enums.len(),
            field_count: self.records.iter().map(|r| r.fields.len()).sum(),
            relation_count: self.records.iter().map(|r| r.relation_fields().count()).sum(),
        }
    }
}

/// Schema statistics for logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchemaStats {
    /// Number of models.
    pub record_count: usize,
    /// Number of enums.
    pub enum_count: usize,
    /// Total number of fields across all models.
    pub field_count: usize,
    /// Number of relation fields across all models.
    pub relation_count: usize,
}

impl std::fmt::Display for SchemaModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stats = self.stats();
        write!(
            f,
            "Schema({} models, {} enums, {} fields, {} relations)",
            stats.record_count, stats.enum_count, stats.field_count, stats.relation_count
        )
    }
}
