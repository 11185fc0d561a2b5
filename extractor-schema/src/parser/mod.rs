//! Schema parser for Prisma schema files.
//!
//! The pest grammar does the lexing and syntax checking. This module walks
//! the resulting pairs and folds them into a [`SchemaModel`], keeping
//! declaration order and resolving every field's kind against the
//! [`Namespace`] of declared models and enums.

mod grammar;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use pest::Parser;
use pest::error::InputLocation;
use pest::iterators::{Pair, Pairs};
use smol_str::SmolStr;
use tracing::{debug, warn};

use crate::ast::*;
use crate::error::{SchemaError, SchemaResult};
use crate::namespace::{Declaration, Namespace};

pub use grammar::{PrismaParser, Rule};

/// Parse a schema from a string.
pub fn parse_schema(input: &str) -> SchemaResult<SchemaModel> {
    let pairs =
        PrismaParser::parse(Rule::schema, input).map_err(|e| syntax_error(input, &e))?;

    let schema = SchemaReader::new(input).read(pairs)?;
    debug!(%schema, "parsed schema");
    Ok(schema)
}

/// Parse a schema from a file.
pub fn parse_schema_file(path: impl AsRef<Path>) -> SchemaResult<SchemaModel> {
    let path = resolve_schema_path(path)?;
    let content = std::fs::read_to_string(&path).map_err(|e| SchemaError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_schema(&content)
}

/// Resolve a schema path to an absolute path naming an existing file.
pub fn resolve_schema_path(path: impl AsRef<Path>) -> SchemaResult<PathBuf> {
    let path = path.as_ref();
    let resolved = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());

    if !resolved.is_file() {
        return Err(SchemaError::NotFound {
            path: resolved.display().to_string(),
        });
    }

    Ok(resolved)
}

fn syntax_error(input: &str, err: &pest::error::Error<Rule>) -> SchemaError {
    let (offset, len) = match &err.location {
        InputLocation::Pos(pos) => (*pos, 0),
        InputLocation::Span((start, end)) => (*start, end - start),
    };
    SchemaError::syntax(input, offset, len, err.to_string())
}

/// Walks the parse tree of one schema.
struct SchemaReader<'i> {
    input: &'i str,
    namespace: Namespace,
    /// Names of composite types and views, which are not emitted.
    skipped: HashSet<SmolStr>,
}

impl<'i> SchemaReader<'i> {
    fn new(input: &'i str) -> Self {
        Self {
            input,
            namespace: Namespace::new(),
            skipped: HashSet::new(),
        }
    }

    fn read(mut self, mut pairs: Pairs<'i, Rule>) -> SchemaResult<SchemaModel> {
        let schema_pair = pairs
            .next()
            .ok_or_else(|| SchemaError::syntax(self.input, 0, self.input.len(), "empty parse"))?;

        let mut schema = SchemaModel::new();
        let mut current_doc: Option<String> = None;

        for pair in schema_pair.into_inner() {
            match pair.as_rule() {
                Rule::documentation => {
                    current_doc = Some(read_documentation(pair));
                }
                Rule::model_def => {
                    let record = self.read_model(pair, current_doc.take())?;
                    self.namespace.declare(&record.name, Declaration::Record)?;
                    schema.add_record(record);
                }
                Rule::enum_def => {
                    let e = self.read_enum(pair, current_doc.take())?;
                    self.namespace.declare(&e.name, Declaration::Enum)?;
                    schema.add_enum(e);
                }
                Rule::config_block => {
                    current_doc = None;
                    debug!(block = pair.as_str().lines().next().unwrap_or(""), "skipping block");
                }
                Rule::skipped_block => {
                    current_doc = None;
                    let span = pair.as_span();
                    let mut inner = pair.into_inner();
                    let keyword = self.next_inner(&mut inner, &span, "block keyword")?;
                    let name = self.next_inner(&mut inner, &span, "block name")?;
                    debug!(keyword = keyword.as_str(), name = name.as_str(), "skipping block");
                    self.skipped.insert(SmolStr::new(name.as_str()));
                }
                _ => {}
            }
        }

        self.resolve_kinds(&mut schema);
        Ok(schema)
    }

    /// Second pass: every name is declared, so field kinds can be resolved.
    fn resolve_kinds(&self, schema: &mut SchemaModel) {
        for record in &mut schema.records {
            for field in &mut record.fields {
                field.kind = match self.namespace.resolve(&field.type_name) {
                    Some(kind) => kind,
                    None if self.skipped.contains(&field.type_name) => {
                        debug!(
                            model = %record.name,
                            field = %field.name,
                            type_name = %field.type_name,
                            "field refers to a composite type or view; passing the name through"
                        );
                        FieldKind::Scalar
                    }
                    None => {
                        warn!(
                            model = %record.name,
                            field = %field.name,
                            type_name = %field.type_name,
                            "type name does not resolve to a scalar, model or enum; treating it as a scalar"
                        );
                        FieldKind::Scalar
                    }
                };

                if field.kind == FieldKind::Object && field.relation_name.is_none() {
                    field.relation_name = Some(default_relation_name(&record.name, &field.type_name));
                }
            }
        }
    }

    fn read_model(&self, pair: Pair<'i, Rule>, doc: Option<String>) -> SchemaResult<RecordDefinition> {
        let span = pair.as_span();
        let mut inner = pair.into_inner();

        let name_pair = self.next_inner(&mut inner, &span, "model name")?;
        let mut record = RecordDefinition::new(name_pair.as_str());
        record.documentation = doc;

        let mut current_doc: Option<String> = None;
        let mut last_line: Option<usize> = None;
        let mut seen = HashSet::new();

        for item in inner {
            match item.as_rule() {
                Rule::documentation => {
                    let (trailing, leading) = split_documentation(item, last_line.take());
                    if let (Some(text), Some(field)) = (trailing, record.fields.last_mut()) {
                        append_documentation(&mut field.documentation, text);
                    }
                    current_doc = leading;
                }
                Rule::field_def => {
                    last_line = Some(end_line(&item));
                    let mut field = self.read_field(item)?;
                    field.documentation = current_doc.take();
                    if !seen.insert(field.name.clone()) {
                        return Err(SchemaError::duplicate(
                            "field",
                            format!("{}.{}", record.name, field.name),
                        ));
                    }
                    record.add_field(field);
                }
                Rule::block_attribute => {
                    current_doc = None;
                    last_line = None;
                    let attr = self.read_attribute(item)?;
                    apply_model_attribute(&mut record, &attr);
                }
                _ => {}
            }
        }

        mark_read_only(&mut record);
        Ok(record)
    }

    fn read_enum(&self, pair: Pair<'i, Rule>, doc: Option<String>) -> SchemaResult<EnumDefinition> {
        let span = pair.as_span();
        let mut inner = pair.into_inner();

        let name_pair = self.next_inner(&mut inner, &span, "enum name")?;
        let mut e = EnumDefinition::new(name_pair.as_str());
        e.documentation = doc;

        let mut current_doc: Option<String> = None;
        let mut last_line: Option<usize> = None;
        let mut seen = HashSet::new();

        for item in inner {
            match item.as_rule() {
                Rule::documentation => {
                    let (trailing, leading) = split_documentation(item, last_line.take());
                    if let (Some(text), Some(value)) = (trailing, e.values.last_mut()) {
                        append_documentation(&mut value.documentation, text);
                    }
                    current_doc = leading;
                }
                Rule::enum_value => {
                    last_line = Some(end_line(&item));
                    let mut value = self.read_enum_value(item)?;
                    value.documentation = current_doc.take();
                    if !seen.insert(value.name.clone()) {
                        return Err(SchemaError::duplicate(
                            "enum value",
                            format!("{}.{}", e.name, value.name),
                        ));
                    }
                    e.add_value(value);
                }
                Rule::block_attribute => {
                    current_doc = None;
                    last_line = None;
                    let attr = self.read_attribute(item)?;
                    if attr.is("map") {
                        e.db_name = string_arg(&attr, "name");
                    }
                }
                _ => {}
            }
        }

        Ok(e)
    }

    fn read_enum_value(&self, pair: Pair<'i, Rule>) -> SchemaResult<EnumValue> {
        let span = pair.as_span();
        let mut inner = pair.into_inner();

        let name_pair = self.next_inner(&mut inner, &span, "enum value")?;
        let mut value = EnumValue::new(name_pair.as_str());

        for item in inner {
            let attr = self.read_attribute(item)?;
            if attr.is("map") {
                value.db_name = string_arg(&attr, "name");
            }
        }

        Ok(value)
    }

    fn read_field(&self, pair: Pair<'i, Rule>) -> SchemaResult<FieldDefinition> {
        let span = pair.as_span();
        let mut inner = pair.into_inner();

        let name_pair = self.next_inner(&mut inner, &span, "field name")?;
        let type_pair = self.next_inner(&mut inner, &span, "field type")?;

        // Kind is provisional until every name in the schema is declared.
        let mut field = FieldDefinition::scalar(name_pair.as_str(), "");

        for part in type_pair.into_inner() {
            match part.as_rule() {
                Rule::type_name => field.type_name = SmolStr::new(part.as_str()),
                Rule::unsupported_type => {
                    field.type_name = SmolStr::new(ScalarType::Unsupported.as_str());
                }
                Rule::list_marker => field.is_list = true,
                Rule::optional_marker => field.is_required = false,
                _ => {}
            }
        }

        for item in inner {
            if item.as_rule() == Rule::field_attribute {
                let attr = self.read_attribute(item)?;
                apply_field_attribute(&mut field, &attr);
            }
        }

        Ok(field)
    }

    fn read_attribute(&self, pair: Pair<'i, Rule>) -> SchemaResult<Attribute> {
        let span = pair.as_span();
        let mut inner = pair.into_inner();

        let name_pair = self.next_inner(&mut inner, &span, "attribute name")?;
        let args = match inner.next() {
            Some(args) => self.read_args(args)?,
            None => vec![],
        };

        Ok(Attribute::new(name_pair.as_str(), args))
    }

    fn read_args(&self, pair: Pair<'i, Rule>) -> SchemaResult<Vec<AttributeArg>> {
        pair.into_inner().map(|arg| self.read_arg(arg)).collect()
    }

    fn read_arg(&self, pair: Pair<'i, Rule>) -> SchemaResult<AttributeArg> {
        let span = pair.as_span();
        let mut inner = pair.into_inner();

        let first = self.next_inner(&mut inner, &span, "attribute argument")?;
        if first.as_rule() == Rule::arg_name {
            let value = self.next_inner(&mut inner, &span, "argument value")?;
            Ok(AttributeArg::named(first.as_str(), self.read_value(value)?))
        } else {
            Ok(AttributeArg::positional(self.read_value(first)?))
        }
    }

    fn read_value(&self, pair: Pair<'i, Rule>) -> SchemaResult<AttributeValue> {
        match pair.as_rule() {
            Rule::string_literal => Ok(AttributeValue::String(unquote(pair.as_str()))),
            Rule::number_literal => Ok(AttributeValue::Number(SmolStr::new(pair.as_str()))),
            Rule::boolean_literal => Ok(AttributeValue::Boolean(pair.as_str() == "true")),
            Rule::path => Ok(AttributeValue::Path(SmolStr::new(pair.as_str()))),
            Rule::function_call => {
                let span = pair.as_span();
                let mut inner = pair.into_inner();
                let name = self.next_inner(&mut inner, &span, "function name")?;
                let args = match inner.next() {
                    Some(args) => self.read_args(args)?,
                    None => vec![],
                };
                Ok(AttributeValue::Function(SmolStr::new(name.as_str()), args))
            }
            Rule::array_literal => {
                let values = pair
                    .into_inner()
                    .map(|item| self.read_value(item))
                    .collect::<SchemaResult<Vec<_>>>()?;
                Ok(AttributeValue::Array(values))
            }
            other => {
                let span = pair.as_span();
                Err(self.error_at(&span, format!("unexpected {other:?} in attribute")))
            }
        }
    }

    fn next_inner(
        &self,
        inner: &mut Pairs<'i, Rule>,
        parent: &pest::Span<'i>,
        what: &str,
    ) -> SchemaResult<Pair<'i, Rule>> {
        inner
            .next()
            .ok_or_else(|| self.error_at(parent, format!("expected {what}")))
    }

    fn error_at(&self, span: &pest::Span<'i>, message: String) -> SchemaError {
        SchemaError::syntax(self.input, span.start(), span.end() - span.start(), message)
    }
}

fn read_documentation(pair: Pair<'_, Rule>) -> String {
    split_documentation(pair, None).1.unwrap_or_default()
}

/// Split a run of `///` lines into the comment trailing an item that ends on
/// `item_line`, if the first line sits there, and the lines documenting
/// whatever comes next.
fn split_documentation(
    pair: Pair<'_, Rule>,
    item_line: Option<usize>,
) -> (Option<String>, Option<String>) {
    let mut trailing = None;
    let mut leading = Vec::new();

    for (i, line) in pair.into_inner().enumerate() {
        let (row, _) = line.as_span().start_pos().line_col();
        let text = line.into_inner().next().map_or("", |t| t.as_str().trim());
        if i == 0 && item_line == Some(row) {
            trailing = Some(text.to_string()).filter(|t| !t.is_empty());
        } else {
            leading.push(text);
        }
    }

    let leading = (!leading.is_empty()).then(|| leading.join("\n"));
    (trailing, leading)
}

fn append_documentation(doc: &mut Option<String>, text: String) {
    match doc {
        Some(existing) => {
            existing.push('\n');
            existing.push_str(&text);
        }
        None => *doc = Some(text),
    }
}

/// Line on which an item's own text ends.
///
/// A pair's span runs through the whitespace skipped after its last token,
/// so trailing whitespace is trimmed before counting.
fn end_line(pair: &Pair<'_, Rule>) -> usize {
    let (start, _) = pair.as_span().start_pos().line_col();
    start + pair.as_str().trim_end().matches('\n').count()
}

fn apply_field_attribute(field: &mut FieldDefinition, attr: &Attribute) {
    match attr.name.as_str() {
        "id" => field.is_id = true,
        "unique" => field.is_unique = true,
        "default" => {
            field.has_default_value = true;
            field.default = attr.first_arg().map(DefaultValue::from);
        }
        "updatedAt" => field.is_updated_at = true,
        "map" => field.db_name = string_arg(attr, "name"),
        "relation" => {
            if let Some(name) = string_arg(attr, "name") {
                field.relation_name = Some(name);
            }
            if let Some(fields) = attr.get_arg("fields") {
                field.relation_from_fields = fields.as_name_list();
            }
            if let Some(references) = attr.get_arg("references") {
                field.relation_to_fields = references.as_name_list();
            }
            field.relation_on_delete = path_arg(attr, "onDelete");
            field.relation_on_update = path_arg(attr, "onUpdate");
        }
        name => {
            if let Some(native) = name.strip_prefix("db.") {
                let args = attr.args.iter().map(|arg| native_arg(&arg.value)).collect();
                field.native_type = Some(NativeType::new(native, args));
            }
        }
    }
}

fn path_arg(attr: &Attribute, name: &str) -> Option<SmolStr> {
    attr.get_arg(name)
        .and_then(|v| v.as_path())
        .map(SmolStr::new)
}

/// Native type arguments are kept as written, without string quotes.
fn native_arg(value: &AttributeValue) -> String {
    match value {
        AttributeValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn apply_model_attribute(record: &mut RecordDefinition, attr: &Attribute) {
    match attr.name.as_str() {
        "map" => record.db_name = string_arg(attr, "name"),
        "id" => {
            record.primary_key = Some(PrimaryKey {
                name: attr
                    .get_arg("name")
                    .and_then(|v| v.as_string())
                    .map(SmolStr::new),
                fields: attr
                    .named_or_first("fields")
                    .map(|v| v.as_name_list())
                    .unwrap_or_default(),
            });
        }
        "unique" => {
            let fields = attr
                .named_or_first("fields")
                .map(|v| v.as_name_list())
                .unwrap_or_default();
            if !fields.is_empty() {
                record.unique_fields.push(fields);
            }
        }
        _ => {}
    }
}

/// Foreign-key fields named by a relation are read-only on the model.
fn mark_read_only(record: &mut RecordDefinition) {
    let foreign_keys: HashSet<SmolStr> = record
        .fields
        .iter()
        .flat_map(|f| f.relation_from_fields.iter().cloned())
        .collect();

    for field in &mut record.fields {
        if foreign_keys.contains(&field.name) {
            field.is_read_only = true;
        }
    }
}

fn string_arg(attr: &Attribute, name: &str) -> Option<SmolStr> {
    attr.named_or_first(name)
        .and_then(|v| v.as_string())
        .map(SmolStr::new)
}

/// Name given to a relation without an explicit `@relation("...")`: both
/// model names in lexical order, joined by `To`.
fn default_relation_name(a: &str, b: &str) -> SmolStr {
    let (first, second) = if a <= b { (a, b) } else { (b, a) };
    SmolStr::new(format!("{first}To{second}"))
}

fn unquote(literal: &str) -> String {
    let body = literal
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(literal);

    let mut out = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some(escaped) => out.push(escaped),
            None => out.push('\\'),
        }
    }
    out
}
