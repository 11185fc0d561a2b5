//! Generation configuration.
//!
//! A [`GenerationConfig`] is resolved once per run from the built-in
//! defaults and an optional JSON document (`prisma-extractor.json`):
//!
//! ```json
//! {
//!   "outputType": "type",
//!   "relationFieldsOptional": false,
//!   "mapTypes": { "DateTime": "string" }
//! }
//! ```
//!
//! Top-level keys replace the default value. `mapTypes` entries are merged
//! into the default mapping key by key. The merged document is validated
//! as a whole before it becomes a typed config.

mod mapping;
mod validation;

pub use mapping::{TypeMapping, default_target};
pub use validation::{
    ConfigViolation, ENUM_OUTPUT_TYPES, KNOWN_KEYS, OUTPUT_TYPES, validate,
};

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::{ConfigError, ConfigResult};

/// Default config file name (looked up in the working directory).
pub const CONFIG_FILE_NAME: &str = "prisma-extractor.json";

/// Default path of the generated TypeScript file.
pub const DEFAULT_OUTPUT_FILE: &str = "./src/interfaces/database.ts";

/// Default path of the Prisma schema.
pub const DEFAULT_SCHEMA_PATH: &str = "./prisma/schema.prisma";

const MAP_TYPES_KEY: &str = "mapTypes";

/// How models are emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    /// `export interface User { ... }`
    #[default]
    Interface,
    /// `export type User = { ... }`
    Type,
}

impl OutputKind {
    /// Get the configuration value for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Interface => "interface",
            Self::Type => "type",
        }
    }
}

/// How enums are emitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnumOutputKind {
    /// `export enum Role { ADMIN = "ADMIN" }`
    #[default]
    #[serde(rename = "enum")]
    Enum,
    /// `export type Role = "ADMIN" | "USER";`
    #[serde(rename = "type")]
    Union,
}

impl EnumOutputKind {
    /// Get the configuration value for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Enum => "enum",
            Self::Union => "type",
        }
    }
}

/// Resolved generation policy for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// JSON schema URL for editor support, passed through untouched.
    #[serde(rename = "$schema", default, skip_serializing_if = "Option::is_none")]
    pub schema_url: Option<String>,

    /// How models are emitted.
    #[serde(rename = "outputType")]
    pub output_kind: OutputKind,

    /// How enums are emitted.
    #[serde(rename = "enumOutputType")]
    pub enum_output_kind: EnumOutputKind,

    /// Where the generated TypeScript is written.
    pub output_file: PathBuf,

    /// Where the Prisma schema is read from.
    #[serde(rename = "prismaSchema")]
    pub schema_path: PathBuf,

    /// Also write `metadata.json` next to the output file.
    pub generate_metadata: bool,

    /// Render every relation field optional, regardless of `?`.
    pub relation_fields_optional: bool,

    /// Scalar type name mapping.
    #[serde(rename = "mapTypes")]
    pub type_mapping: TypeMapping,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            schema_url: None,
            output_kind: OutputKind::Interface,
            enum_output_kind: EnumOutputKind::Enum,
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            schema_path: PathBuf::from(DEFAULT_SCHEMA_PATH),
            generate_metadata: false,
            relation_fields_optional: true,
            type_mapping: TypeMapping::default(),
        }
    }
}

impl GenerationConfig {
    /// Resolve the configuration for a run.
    ///
    /// Reads the document at `override_path`, or `./prisma-extractor.json`
    /// when no path is given. A missing document means the defaults apply.
    pub fn resolve(override_path: Option<&Path>) -> ConfigResult<Self> {
        let path = override_path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));

        if !path.exists() {
            if override_path.is_some() {
                warn!(path = %path.display(), "configuration file not found, using defaults");
            } else {
                debug!(path = %path.display(), "no configuration file, using defaults");
            }
            return Ok(Self::default());
        }

        Self::from_file(&path)
    }

    /// Load and validate a configuration document from a file.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let config = Self::from_document(&content, &path.display().to_string())?;
        debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load and validate a configuration document from a JSON string.
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        Self::from_document(content, "<string>")
    }

    fn from_document(content: &str, origin: &str) -> ConfigResult<Self> {
        let malformed = |source: serde_json::Error| ConfigError::Malformed {
            path: origin.to_string(),
            source,
        };

        let overlay: Value = serde_json::from_str(content).map_err(malformed)?;
        let Value::Object(overlay) = overlay else {
            return Err(ConfigError::Validation {
                violations: vec![ConfigViolation::NotAnObject],
            });
        };

        let mut document = match serde_json::to_value(Self::default()).map_err(malformed)? {
            Value::Object(defaults) => defaults,
            _ => Map::new(),
        };
        merge_document(&mut document, overlay);

        let document = Value::Object(document);
        let violations = validate(&document);
        if !violations.is_empty() {
            return Err(ConfigError::Validation { violations });
        }

        serde_json::from_value(document).map_err(malformed)
    }

    /// Serialize this configuration as a pretty-printed JSON document.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Overlay a user document on the default document.
///
/// Top-level values are replaced; `mapTypes` entries are merged per key.
fn merge_document(base: &mut Map<String, Value>, overlay: Map<String, Value>) {
    for (key, value) in overlay {
        match value {
            Value::Object(entries) if key == MAP_TYPES_KEY => match base.get_mut(&key) {
                Some(Value::Object(existing)) => existing.extend(entries),
                _ => {
                    base.insert(key, Value::Object(entries));
                }
            },
            value => {
                base.insert(key, value);
            }
        }
    }
}

/// Write the default configuration document, replacing any existing file.
pub fn write_default_config(path: &Path) -> ConfigResult<()> {
    let write_error = |source: std::io::Error| ConfigError::Write {
        path: path.display().to_string(),
        source,
    };

    let mut content = GenerationConfig::default()
        .to_json_pretty()
        .map_err(|e| write_error(e.into()))?;
    content.push('\n');

    std::fs::write(path, content).map_err(write_error)?;
    debug!(path = %path.display(), "wrote default configuration");
    Ok(())
}
