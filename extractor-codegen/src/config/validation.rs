//! Shape checks for configuration documents.
//!
//! Validation runs on the merged JSON document before it is turned into a
//! [`GenerationConfig`](super::GenerationConfig), and reports every
//! violation it finds rather than stopping at the first.

use serde_json::{Map, Value};
use thiserror::Error;

/// Every top-level key a configuration document may contain.
pub const KNOWN_KEYS: &[&str] = &[
    "$schema",
    "outputType",
    "enumOutputType",
    "outputFile",
    "prismaSchema",
    "generateMetadata",
    "relationFieldsOptional",
    "mapTypes",
];

/// Accepted values of `outputType`.
pub const OUTPUT_TYPES: &[&str] = &["interface", "type"];

/// Accepted values of `enumOutputType`.
pub const ENUM_OUTPUT_TYPES: &[&str] = &["enum", "type"];

/// One broken rule in a configuration document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("configuration must be a JSON object")]
    NotAnObject,

    #[error("mapTypes must be an object")]
    MapTypesNotAnObject,

    #[error("mapTypes.{key} must be a string")]
    MapTypeNotString { key: String },

    #[error("{key} must be a string")]
    NotAString { key: &'static str },

    #[error("{key} must be a boolean")]
    NotABoolean { key: &'static str },

    #[error("{key} must be one of: {} (found `{value}`)", .allowed.join(", "))]
    InvalidChoice {
        key: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },

    #[error("unexpected property `{key}`")]
    UnknownKey { key: String },
}

/// Check a configuration document and return every violation found.
///
/// An empty result means the document can be deserialized.
pub fn validate(document: &Value) -> Vec<ConfigViolation> {
    let Some(object) = document.as_object() else {
        return vec![ConfigViolation::NotAnObject];
    };

    let mut violations = Vec::new();

    match object.get("mapTypes") {
        None => {}
        Some(Value::Object(entries)) => {
            for (key, value) in entries {
                if !value.is_string() {
                    violations.push(ConfigViolation::MapTypeNotString { key: key.clone() });
                }
            }
        }
        Some(_) => violations.push(ConfigViolation::MapTypesNotAnObject),
    }

    check_choice(object, "outputType", OUTPUT_TYPES, &mut violations);
    check_choice(object, "enumOutputType", ENUM_OUTPUT_TYPES, &mut violations);

    for key in ["outputFile", "prismaSchema", "$schema"] {
        if object.get(key).is_some_and(|v| !v.is_string()) {
            violations.push(ConfigViolation::NotAString { key });
        }
    }

    for key in ["generateMetadata", "relationFieldsOptional"] {
        if object.get(key).is_some_and(|v| !v.is_boolean()) {
            violations.push(ConfigViolation::NotABoolean { key });
        }
    }

    for key in object.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            violations.push(ConfigViolation::UnknownKey { key: key.clone() });
        }
    }

    violations
}

fn check_choice(
    object: &Map<String, Value>,
    key: &'static str,
    allowed: &'static [&'static str],
    violations: &mut Vec<ConfigViolation>,
) {
    match object.get(key) {
        None => {}
        Some(Value::String(value)) if allowed.contains(&value.as_str()) => {}
        Some(Value::String(value)) => violations.push(ConfigViolation::InvalidChoice {
            key,
            value: value.clone(),
            allowed,
        }),
        Some(_) => violations.push(ConfigViolation::NotAString { key }),
    }
}
