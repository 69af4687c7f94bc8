//! Form engine state
//!
//! [`FormState`] holds the in-progress values of an open form. It is seeded
//! from an [`EditSession`] and reset whenever a session with a different id
//! is handed to it, which is how the edit modal re-hydrates when the
//! controller swaps the target without tearing the form down.

use crate::resource::{display_value, Resource};
use crate::schema::FormSchema;
use std::collections::BTreeMap;

/// Field name to raw input value
pub type FormValues = BTreeMap<String, String>;
/// Field name to validation message
pub type FieldErrors = BTreeMap<String, String>;

pub const REQUIRED_MESSAGE: &str = "This field is required";

/// One opening of the create/edit form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditSession {
    id: u64,
    target: Option<Resource>,
    initial: FormValues,
}

impl EditSession {
    /// Blank form for a new resource
    pub fn create(id: u64) -> Self {
        Self {
            id,
            target: None,
            initial: FormValues::new(),
        }
    }

    /// Form seeded from the schema's fields of an existing resource
    pub fn edit(id: u64, schema: &FormSchema, target: Resource) -> Self {
        let initial = schema
            .fields()
            .iter()
            .filter_map(|field| {
                target
                    .get(&field.name)
                    .filter(|v| !v.is_null())
                    .map(|v| (field.name.clone(), display_value(v)))
            })
            .collect();

        Self {
            id,
            target: Some(target),
            initial,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn target(&self) -> Option<&Resource> {
        self.target.as_ref()
    }

    pub fn is_create(&self) -> bool {
        self.target.is_none()
    }

    pub fn initial(&self) -> &FormValues {
        &self.initial
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    session: u64,
    values: FormValues,
    errors: FieldErrors,
}

impl FormState {
    pub fn new(session: &EditSession) -> Self {
        Self {
            session: session.id,
            values: session.initial.clone(),
            errors: FieldErrors::new(),
        }
    }

    /// Reset to `session` if it is not the one this state was seeded from.
    /// Returns whether a reset happened.
    pub fn rehydrate(&mut self, session: &EditSession) -> bool {
        if self.session == session.id {
            return false;
        }
        *self = Self::new(session);
        true
    }

    pub fn session_id(&self) -> u64 {
        self.session
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Record a change to a single field. No validation happens here.
    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_string(), value.into());
    }

    /// Validate every field. On success the current values are returned for
    /// the caller to hand to its submit callback; on failure the errors
    /// replace whatever was shown before.
    pub fn submit(&mut self, schema: &FormSchema) -> Option<FormValues> {
        self.errors = validate(schema, &self.values);
        if self.errors.is_empty() {
            Some(self.values.clone())
        } else {
            None
        }
    }
}

/// Full validation pass: every required field without a value is reported
pub fn validate(schema: &FormSchema, values: &FormValues) -> FieldErrors {
    schema
        .fields()
        .iter()
        .filter(|field| field.required)
        .filter(|field| {
            values
                .get(&field.name)
                .map_or(true, |value| value.is_empty())
        })
        .map(|field| (field.name.clone(), REQUIRED_MESSAGE.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldDescriptor;
    use serde_json::Value;

    fn vm_schema() -> FormSchema {
        FormSchema::new(vec![
            FieldDescriptor::text("name", "Name").required(),
            FieldDescriptor::number_between("cpu", "CPU", 1, 16).required(),
            FieldDescriptor::select("os", "OS", [("debian-11", "Debian 11")]).required(),
            FieldDescriptor::text("description", "Description"),
        ])
        .unwrap()
    }

    #[test]
    fn test_submit_collects_all_violations() {
        let schema = vm_schema();
        let mut form = FormState::new(&EditSession::create(1));

        assert_eq!(form.submit(&schema), None);
        assert_eq!(form.errors().len(), 3);
        assert_eq!(form.error("name"), Some(REQUIRED_MESSAGE));
        assert_eq!(form.error("cpu"), Some(REQUIRED_MESSAGE));
        assert_eq!(form.error("os"), Some(REQUIRED_MESSAGE));
        assert_eq!(form.error("description"), None);
    }

    #[test]
    fn test_revalidation_clears_fixed_fields() {
        let schema = vm_schema();
        let mut form = FormState::new(&EditSession::create(1));
        form.submit(&schema);

        form.set("cpu", "2");
        form.set("os", "debian-11");
        assert_eq!(form.submit(&schema), None);
        assert_eq!(form.errors().keys().collect::<Vec<_>>(), vec!["name"]);

        form.set("name", "web-1");
        let values = form.submit(&schema).unwrap();
        assert!(form.errors().is_empty());
        assert_eq!(values.get("cpu").map(String::as_str), Some("2"));
    }

    #[test]
    fn test_change_does_not_validate() {
        let schema = vm_schema();
        let mut form = FormState::new(&EditSession::create(1));
        form.submit(&schema);
        form.set("name", "");
        assert_eq!(form.error("name"), Some(REQUIRED_MESSAGE));
        assert_eq!(form.errors().len(), 3);
    }

    #[test]
    fn test_whitespace_counts_as_filled() {
        let schema = vm_schema();
        let mut form = FormState::new(&EditSession::create(1));
        form.set("name", " ");
        form.set("cpu", "1");
        form.set("os", "debian-11");
        let values = form.submit(&schema).unwrap();
        assert!(form.errors().is_empty());
        assert_eq!(values.get("name").map(String::as_str), Some(" "));
    }

    #[test]
    fn test_edit_session_projects_schema_fields() {
        let schema = vm_schema();
        let vm = Resource::new()
            .with("id", 42)
            .with("name", "db-1")
            .with("cpu", 8)
            .with("os", "debian-11")
            .with("description", Value::Null);
        let session = EditSession::edit(7, &schema, vm);

        assert!(!session.is_create());
        assert_eq!(session.initial().get("cpu").map(String::as_str), Some("8"));
        assert!(!session.initial().contains_key("id"));
        assert!(!session.initial().contains_key("description"));
    }

    #[test]
    fn test_rehydrate_on_new_session_only() {
        let schema = vm_schema();
        let first = EditSession::edit(1, &schema, Resource::new().with("name", "a"));
        let mut form = FormState::new(&first);
        form.set("name", "typed");

        assert!(!form.rehydrate(&first));
        assert_eq!(form.value("name"), "typed");

        let second = EditSession::edit(2, &schema, Resource::new().with("name", "b"));
        assert!(form.rehydrate(&second));
        assert_eq!(form.value("name"), "b");
        assert_eq!(form.session_id(), 2);
    }

    #[test]
    fn test_rehydrate_clears_errors() {
        let schema = vm_schema();
        let mut form = FormState::new(&EditSession::create(1));
        form.submit(&schema);
        form.rehydrate(&EditSession::create(2));
        assert!(form.errors().is_empty());
        assert!(form.values().is_empty());
    }
}
