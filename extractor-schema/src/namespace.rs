//! The combined model + enum namespace.
//!
//! Field types refer to models and enums by name only. The parser declares
//! every type name here once, rejecting collisions, and then resolves each
//! field's kind with a lookup. Nothing is dereferenced, so mutually
//! referencing models need no special handling.

use indexmap::IndexMap;
use smol_str::SmolStr;

use crate::ast::{FieldKind, ScalarType};
use crate::error::{SchemaError, SchemaResult};

/// TypeScript keywords and built-in type names that cannot name a generated
/// type.
const RESERVED_NAMES: &[&str] = &[
    "any", "as", "bigint", "boolean", "break", "case", "catch", "class", "const", "continue",
    "debugger", "declare", "default", "delete", "do", "else", "enum", "export", "extends",
    "false", "finally", "for", "function", "if", "implements", "import", "in", "instanceof",
    "interface", "let", "never", "new", "null", "number", "object", "package", "private",
    "protected", "public", "return", "static", "string", "super", "switch", "symbol", "this",
    "throw", "true", "try", "type", "typeof", "undefined", "unknown", "var", "void", "while",
    "with", "yield",
];

/// Check whether a name may not be used for a model or enum.
pub fn is_reserved(name: &str) -> bool {
    ScalarType::from_str(name).is_some() || RESERVED_NAMES.contains(&name)
}

/// What a declared name refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Declaration {
    /// A model.
    Record,
    /// An enum.
    Enum,
}

impl Declaration {
    /// Get the schema keyword for this declaration.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Record => "model",
            Self::Enum => "enum",
        }
    }

    fn field_kind(self) -> FieldKind {
        match self {
            Self::Record => FieldKind::Object,
            Self::Enum => FieldKind::Enum,
        }
    }
}

/// Every model and enum name in a schema.
#[derive(Debug, Clone, Default)]
pub struct Namespace {
    declarations: IndexMap<SmolStr, Declaration>,
}

impl Namespace {
    /// Create an empty namespace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a name.
    ///
    /// Fails when the name is reserved or already declared by any model or
    /// enum.
    pub fn declare(&mut self, name: &str, declaration: Declaration) -> SchemaResult<()> {
        if is_reserved(name) {
            return Err(SchemaError::reserved(declaration.as_str(), name));
        }
        if self.declarations.contains_key(name) {
            return Err(SchemaError::duplicate(declaration.as_str(), name));
        }
        self.declarations.insert(SmolStr::new(name), declaration);
        Ok(())
    }

    /// Look up a declared name.
    pub fn get(&self, name: &str) -> Option<Declaration> {
        self.declarations.get(name).copied()
    }

    /// Resolve the kind of a field type name.
    ///
    /// Returns `None` when the name is neither a scalar keyword nor declared.
    pub fn resolve(&self, type_name: &str) -> Option<FieldKind> {
        if ScalarType::from_str(type_name).is_some() {
            return Some(FieldKind::Scalar);
        }
        self.get(type_name).map(Declaration::field_kind)
    }

    /// Number of declared names.
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Check if nothing is declared.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}
