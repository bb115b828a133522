//! Field descriptors and the ordered schema a form is laid out from

use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Kind of input control a field maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    MultilineText,
    Choice,
    /// Choice whose options are looked up from the parent field's value
    DependentChoice,
}

/// A single field descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub key: String,
    pub label: String,
    pub kind: FieldKind,
    /// Fixed options, only used by `FieldKind::Choice`
    pub options: Vec<String>,
    /// Parent field key, only used by `FieldKind::DependentChoice`
    pub depends_on: Option<String>,
}

impl Field {
    fn new(key: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            kind,
            options: Vec::new(),
            depends_on: None,
        }
    }

    /// Create a single-line text field
    pub fn text(key: &str, label: &str) -> Self {
        Self::new(key, label, FieldKind::Text)
    }

    /// Create a multi-line text field
    pub fn multiline(key: &str, label: &str) -> Self {
        Self::new(key, label, FieldKind::MultilineText)
    }

    /// Create a choice field with a fixed option list
    pub fn choice<I, S>(key: &str, label: &str, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
            ..Self::new(key, label, FieldKind::Choice)
        }
    }

    /// Create a choice field whose options follow `parent`
    pub fn dependent_choice(key: &str, label: &str, parent: &str) -> Self {
        Self {
            depends_on: Some(parent.to_string()),
            ..Self::new(key, label, FieldKind::DependentChoice)
        }
    }

    pub fn is_multiline(&self) -> bool {
        self.kind == FieldKind::MultilineText
    }

    pub fn is_choice(&self) -> bool {
        matches!(self.kind, FieldKind::Choice | FieldKind::DependentChoice)
    }
}

/// Schema construction errors. These are programming mistakes in a
/// publication definition, never user input problems.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("duplicate field key `{0}`")]
    DuplicateKey(String),
    #[error("dependent field `{0}` does not name a parent field")]
    MissingParent(String),
    #[error("dependent field `{key}` depends on unknown field `{parent}`")]
    UnknownParent { key: String, parent: String },
    #[error("field `{0}` depends on itself")]
    SelfDependency(String),
    #[error("dependency chain starting at field `{0}` loops back on itself")]
    Cycle(String),
}

/// Walk each field's parent chain; a repeated key means clearing would
/// never terminate.
fn check_acyclic(fields: &[Field]) -> Result<(), SchemaError> {
    let parents: HashMap<&str, &str> = fields
        .iter()
        .filter_map(|f| Some((f.key.as_str(), f.depends_on.as_deref()?)))
        .collect();

    for field in fields {
        let mut visited = HashSet::new();
        let mut current = field.key.as_str();
        while let Some(&parent) = parents.get(current) {
            if !visited.insert(current) {
                return Err(SchemaError::Cycle(field.key.clone()));
            }
            current = parent;
        }
    }
    Ok(())
}

/// Ordered list of fields, walked top-to-bottom by the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSchema {
    fields: Vec<Field>,
}

impl FieldSchema {
    pub fn new(fields: Vec<Field>) -> Result<Self, SchemaError> {
        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.key.as_str()) {
                return Err(SchemaError::DuplicateKey(field.key.clone()));
            }
        }

        for field in &fields {
            if field.kind == FieldKind::DependentChoice && field.depends_on.is_none() {
                return Err(SchemaError::MissingParent(field.key.clone()));
            }
            let Some(parent) = field.depends_on.as_deref() else {
                continue;
            };
            if parent == field.key {
                return Err(SchemaError::SelfDependency(field.key.clone()));
            }
            if !seen.contains(parent) {
                return Err(SchemaError::UnknownParent {
                    key: field.key.clone(),
                    parent: parent.to_string(),
                });
            }
        }

        check_acyclic(&fields)?;

        Ok(Self { fields })
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn field(&self, key: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.field(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.key.as_str())
    }

    /// Fields whose options are recomputed when `key` changes
    pub fn dependents_of<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a Field> + 'a {
        self.fields
            .iter()
            .filter(move |f| f.depends_on.as_deref() == Some(key))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
