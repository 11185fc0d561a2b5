//! Attributes as they appear in the schema source.
//!
//! The parser keeps attributes in this raw form only long enough to fold
//! them into the flags and names of the normalized model.

use std::fmt;

use smol_str::SmolStr;

/// An attribute argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeValue {
    /// A string literal, unescaped.
    String(String),
    /// A numeric literal, kept as written.
    Number(SmolStr),
    /// A boolean literal.
    Boolean(bool),
    /// A bare or dotted name (e.g. an enum value or a field reference).
    Path(SmolStr),
    /// A function call (e.g. `now()`, `autoincrement()`, `title(sort: Desc)`).
    Function(SmolStr, Vec<AttributeArg>),
    /// An array of values.
    Array(Vec<AttributeValue>),
}

impl AttributeValue {
    /// Try to get the value as a string.
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get the value as a bare name.
    pub fn as_path(&self) -> Option<&str> {
        match self {
            Self::Path(p) => Some(p),
            _ => None,
        }
    }

    /// Interpret the value as a list of field names.
    ///
    /// `[a, b(sort: Desc)]` yields `a` and `b`; a single name yields itself.
    pub fn as_name_list(&self) -> Vec<SmolStr> {
        match self {
            Self::Array(values) => values
                .iter()
                .filter_map(|v| match v {
                    Self::Path(p) | Self::Function(p, _) => Some(p.clone()),
                    _ => None,
                })
                .collect(),
            Self::Path(p) => vec![p.clone()],
            _ => vec![],
        }
    }
}

/// Renders the value in schema syntax.
impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => write!(f, "{s:?}"),
            Self::Number(n) => f.write_str(n),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Path(p) => f.write_str(p),
            Self::Function(name, args) => {
                write!(f, "{name}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    if let Some(arg_name) = &arg.name {
                        write!(f, "{arg_name}: ")?;
                    }
                    write!(f, "{}", arg.value)?;
                }
                f.write_str(")")
            }
            Self::Array(values) => {
                f.write_str("[")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{value}")?;
                }
                f.write_str("]")
            }
        }
    }
}

/// An attribute argument (named or positional).
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeArg {
    /// Argument name (None for positional arguments).
    pub name: Option<SmolStr>,
    /// Argument value.
    pub value: AttributeValue,
}

impl AttributeArg {
    /// Create a positional argument.
    pub fn positional(value: AttributeValue) -> Self {
        Self { name: None, value }
    }

    /// Create a named argument.
    pub fn named(name: impl Into<SmolStr>, value: AttributeValue) -> Self {
        Self {
            name: Some(name.into()),
            value,
        }
    }

    /// Check if this is a positional argument.
    pub fn is_positional(&self) -> bool {
        self.name.is_none()
    }
}

/// A field attribute (`@name(...)`) or block attribute (`@@name(...)`).
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    /// Attribute name without the `@` prefix, dotted for native types
    /// (`db.VarChar`).
    pub name: SmolStr,
    /// Attribute arguments.
    pub args: Vec<AttributeArg>,
}

impl Attribute {
    /// Create a new attribute.
    pub fn new(name: impl Into<SmolStr>, args: Vec<AttributeArg>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    /// Check if this attribute has the given name.
    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }

    /// Get the first positional argument.
    pub fn first_arg(&self) -> Option<&AttributeValue> {
        self.args
            .iter()
            .find(|a| a.is_positional())
            .map(|a| &a.value)
    }

    /// Get a named argument.
    pub fn get_arg(&self, name: &str) -> Option<&AttributeValue> {
        self.args
            .iter()
            .find(|a| a.name.as_deref() == Some(name))
            .map(|a| &a.value)
    }

    /// Get a named argument, falling back to the first positional one.
    ///
    /// `@map("x")` and `@map(name: "x")` mean the same thing.
    pub fn named_or_first(&self, name: &str) -> Option<&AttributeValue> {
        self.get_arg(name).or_else(|| self.first_arg())
    }
}
