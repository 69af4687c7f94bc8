//! Resource representation shared by every resource kind
//!
//! Resources are kept as opaque attribute maps so the same engine can list,
//! show and edit virtual machines, clusters and templates.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Attribute carrying the persisted identity of a resource
pub const ID: &str = "id";
/// Foreign key linking a resource to the template it was provisioned from
pub const TEMPLATE_ID: &str = "templateId";
/// Provisioning output set by the backend on create/update
pub const RENDERED_TEMPLATE: &str = "renderedTemplate";
/// Human readable name, used to identify a resource in prompts
pub const NAME: &str = "name";

/// A provisioned or provisionable entity
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Resource(Map<String, Value>);

impl Resource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Builder-style insert, handy for fixtures and payload assembly
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// The persisted id, if any. Numeric ids are rendered as strings.
    pub fn id(&self) -> Option<String> {
        self.get(ID)
            .filter(|v| !is_blank(v))
            .map(display_value)
    }

    /// Name shown in confirmations: `name`, falling back to `id`
    pub fn display_name(&self) -> String {
        self.get(NAME)
            .filter(|v| !is_blank(v))
            .map(display_value)
            .or_else(|| self.id())
            .unwrap_or_default()
    }

    /// Raw attribute formatted for a table cell
    pub fn attribute_text(&self, key: &str) -> String {
        self.get(key).map(display_value).unwrap_or_default()
    }

    /// Non-empty `renderedTemplate` text, if the backend produced one
    pub fn rendered_template(&self) -> Option<&str> {
        self.get(RENDERED_TEMPLATE)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Format a JSON value for display. Strings are shown without quotes and
/// null renders as nothing.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Falsy in the sense the detail view uses: null, `false`, zero or an
/// empty string
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64().map_or(false, |f| f == 0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_name_prefers_name() {
        let vm = Resource::new().with("id", "vm-1").with("name", "web-1");
        assert_eq!(vm.display_name(), "web-1");

        let unnamed = Resource::new().with("id", 42);
        assert_eq!(unnamed.display_name(), "42");
    }

    #[test]
    fn test_attribute_text() {
        let vm = Resource::new()
            .with("cpu", 4)
            .with("os", "debian-11")
            .with("gpu", Value::Null);

        assert_eq!(vm.attribute_text("cpu"), "4");
        assert_eq!(vm.attribute_text("os"), "debian-11");
        assert_eq!(vm.attribute_text("gpu"), "");
        assert_eq!(vm.attribute_text("missing"), "");
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(&json!(null)));
        assert!(is_blank(&json!("")));
        assert!(is_blank(&json!(0)));
        assert!(is_blank(&json!(false)));
        assert!(!is_blank(&json!("x")));
        assert!(!is_blank(&json!(3)));
        assert!(!is_blank(&json!([])));
    }

    #[test]
    fn test_rendered_template_ignores_empty() {
        let empty = Resource::new().with(RENDERED_TEMPLATE, "");
        assert_eq!(empty.rendered_template(), None);

        let rendered = Resource::new().with(RENDERED_TEMPLATE, "cpu: 4\n");
        assert_eq!(rendered.rendered_template(), Some("cpu: 4\n"));
    }

    #[test]
    fn test_deserialize_transparent() {
        let vm: Resource = serde_json::from_value(json!({"id": "1", "cpu": 2})).unwrap();
        assert_eq!(vm.id().as_deref(), Some("1"));
        assert_eq!(vm.get("cpu"), Some(&json!(2)));
    }
}
