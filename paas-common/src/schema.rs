//! Declarative form field descriptions
//!
//! A [`FormSchema`] is checked once when it is built, so the form engine can
//! render any schema it is handed without second-guessing it.

use crate::error::SchemaError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One `value`/`label` pair of a select field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Where a select field gets its choices from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectSource {
    /// Declared with the schema, never empty
    Fixed(Vec<SelectOption>),
    /// Supplied at render time by the owning controller (template choices)
    External,
}

/// Input kind, carrying only the attributes that kind understands
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Inclusive bounds, advisory to the input widget
    Number { min: Option<i64>, max: Option<i64> },
    Select(SelectSource),
    TextArea { rows: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: Option<String>,
}

impl FieldDescriptor {
    fn new(name: &str, label: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            required: false,
            placeholder: None,
        }
    }

    pub fn text(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    pub fn number(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Number { min: None, max: None })
    }

    pub fn number_between(name: &str, label: &str, min: i64, max: i64) -> Self {
        Self::new(
            name,
            label,
            FieldKind::Number {
                min: Some(min),
                max: Some(max),
            },
        )
    }

    pub fn select<I>(name: &str, label: &str, options: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, &'static str)>,
    {
        let options = options
            .into_iter()
            .map(|(value, label)| SelectOption::new(value, label))
            .collect();
        Self::new(name, label, FieldKind::Select(SelectSource::Fixed(options)))
    }

    /// Select whose options are provided by the controller at render time
    pub fn external_select(name: &str, label: &str) -> Self {
        Self::new(name, label, FieldKind::Select(SelectSource::External))
    }

    pub fn text_area(name: &str, label: &str, rows: u32) -> Self {
        Self::new(name, label, FieldKind::TextArea { rows })
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    pub fn is_number(&self) -> bool {
        matches!(self.kind, FieldKind::Number { .. })
    }

    /// Label of the explicit "nothing selected" option
    pub fn unselected_label(&self) -> String {
        self.placeholder
            .clone()
            .unwrap_or_else(|| format!("Select {}", self.label.to_lowercase()))
    }

    /// Options to render, resolving external sources against `external`
    pub fn options<'a>(&'a self, external: &'a [SelectOption]) -> &'a [SelectOption] {
        match &self.kind {
            FieldKind::Select(SelectSource::Fixed(options)) => options,
            FieldKind::Select(SelectSource::External) => external,
            _ => &[],
        }
    }

    fn check(&self) -> Result<(), SchemaError> {
        if self.name.is_empty() {
            return Err(SchemaError::UnnamedField);
        }

        match &self.kind {
            FieldKind::Select(SelectSource::Fixed(options)) if options.is_empty() => {
                Err(SchemaError::EmptyOptions(self.name.clone()))
            }
            FieldKind::Number {
                min: Some(min),
                max: Some(max),
            } if min > max => Err(SchemaError::InvertedRange {
                field: self.name.clone(),
                min: *min,
                max: *max,
            }),
            _ => Ok(()),
        }
    }
}

/// Ordered, validated list of fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSchema {
    fields: Vec<FieldDescriptor>,
}

impl FormSchema {
    pub fn new(fields: Vec<FieldDescriptor>) -> Result<Self, SchemaError> {
        let mut seen = HashSet::new();
        for field in &fields {
            field.check()?;
            if !seen.insert(field.name.as_str()) {
                return Err(SchemaError::DuplicateField(field.name.clone()));
            }
        }
        Ok(Self { fields })
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn has_external_options(&self) -> bool {
        self.fields
            .iter()
            .any(|f| f.kind == FieldKind::Select(SelectSource::External))
    }
}
