//! Scalar type name mapping.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use extractor_schema::ScalarType;

/// TypeScript type used for a scalar when no override is configured.
pub fn default_target(scalar: ScalarType) -> &'static str {
    match scalar {
        ScalarType::String => "string",
        ScalarType::Int => "number",
        ScalarType::Float => "number",
        ScalarType::BigInt => "bigint",
        ScalarType::Boolean => "boolean",
        ScalarType::DateTime => "Date",
        ScalarType::Json => "string",
        ScalarType::Decimal => "number",
        ScalarType::Bytes => "Buffer",
        ScalarType::Unsupported => "unknown",
    }
}

/// Mapping from schema scalar names to TypeScript type names.
///
/// Keys are unique; inserting an existing key replaces its target in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeMapping(IndexMap<SmolStr, SmolStr>);

impl Default for TypeMapping {
    fn default() -> Self {
        ScalarType::ALL
            .iter()
            .map(|scalar| (scalar.as_str(), default_target(*scalar)))
            .collect()
    }
}

impl TypeMapping {
    /// Create a mapping with no entries.
    pub fn empty() -> Self {
        Self(IndexMap::new())
    }

    /// Set the target type for a schema type name.
    pub fn insert(&mut self, from: impl Into<SmolStr>, to: impl Into<SmolStr>) {
        self.0.insert(from.into(), to.into());
    }

    /// Get the target type for a schema type name, if mapped.
    pub fn get(&self, from: &str) -> Option<&str> {
        self.0.get(from).map(SmolStr::as_str)
    }

    /// Get the target type for a schema type name, passing unmapped names
    /// through unchanged.
    pub fn resolve<'a>(&'a self, from: &'a str) -> &'a str {
        self.get(from).unwrap_or(from)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<SmolStr>, V: Into<SmolStr>> FromIterator<(K, V)> for TypeMapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
