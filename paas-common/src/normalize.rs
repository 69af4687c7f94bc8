//! Conversion of submitted form values into an outgoing payload

use crate::error::NormalizeError;
use crate::form::FormValues;
use crate::resource::{is_blank, Resource, ID, TEMPLATE_ID};
use crate::schema::FormSchema;

/// Build the payload for `values`.
///
/// Number fields are sent as integers and left out when empty. When editing,
/// the target's `id` and `templateId` are always carried over.
pub fn normalize_submission(
    schema: &FormSchema,
    values: &FormValues,
    target: Option<&Resource>,
) -> Result<Resource, NormalizeError> {
    let mut payload = Resource::new();

    for field in schema.fields() {
        let Some(raw) = values.get(&field.name) else {
            continue;
        };

        if field.is_number() {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                continue;
            }
            let number: i64 = trimmed.parse().map_err(|_| NormalizeError::NotAnInteger {
                label: field.label.clone(),
                value: raw.clone(),
            })?;
            payload.insert(field.name.clone(), number);
        } else {
            payload.insert(field.name.clone(), raw.clone());
        }
    }

    if let Some(target) = target {
        if let Some(id) = target.get(ID).filter(|v| !is_blank(v)) {
            payload.insert(ID, id.clone());
        }

        if let Some(template_id) = target.get(TEMPLATE_ID).filter(|v| !is_blank(v)) {
            payload.insert(TEMPLATE_ID, template_id.clone());
        }
    }

    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldDescriptor;
    use serde_json::json;

    fn values(pairs: &[(&str, &str)]) -> FormValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn cluster_schema() -> FormSchema {
        FormSchema::new(vec![
            FieldDescriptor::text("name", "Name").required(),
            FieldDescriptor::number_between("nodeCount", "Node count", 1, 10).required(),
            FieldDescriptor::number("diskGb", "Disk (GB)"),
        ])
        .unwrap()
    }

    #[test]
    fn test_numbers_become_integers() {
        let payload = normalize_submission(
            &cluster_schema(),
            &values(&[("name", "prod"), ("nodeCount", " 4 ")]),
            None,
        )
        .unwrap();

        assert_eq!(payload.get("nodeCount"), Some(&json!(4)));
        assert_eq!(payload.get("name"), Some(&json!("prod")));
        assert!(!payload.contains("diskGb"));
        assert!(!payload.contains("id"));
    }

    #[test]
    fn test_non_numeric_is_rejected() {
        let result = normalize_submission(
            &cluster_schema(),
            &values(&[("name", "prod"), ("nodeCount", "four")]),
            None,
        );
        assert_eq!(
            result,
            Err(NormalizeError::NotAnInteger {
                label: "Node count".to_string(),
                value: "four".to_string(),
            })
        );
    }

    #[test]
    fn test_update_preserves_identity_and_template() {
        let schema = FormSchema::new(vec![FieldDescriptor::text("name", "Name")]).unwrap();
        let target = Resource::new()
            .with("id", 42)
            .with("templateId", "tpl-1")
            .with("name", "old");

        let payload =
            normalize_submission(&schema, &values(&[("name", "new")]), Some(&target)).unwrap();

        assert_eq!(payload.get("id"), Some(&json!(42)));
        assert_eq!(payload.get("templateId"), Some(&json!("tpl-1")));
        assert_eq!(payload.get("name"), Some(&json!("new")));
    }

    #[test]
    fn test_stored_template_survives_edit() {
        let schema = FormSchema::new(vec![
            FieldDescriptor::text("name", "Name").required(),
            FieldDescriptor::external_select("templateId", "Template").required(),
        ])
        .unwrap();
        let target = Resource::new().with("id", 42).with("templateId", "tpl-1");

        let payload = normalize_submission(
            &schema,
            &values(&[("name", "web-1"), ("templateId", "tpl-2")]),
            Some(&target),
        )
        .unwrap();
        assert_eq!(payload.get("id"), Some(&json!(42)));
        assert_eq!(payload.get("templateId"), Some(&json!("tpl-1")));

        let unlinked = Resource::new().with("id", 43);
        let payload = normalize_submission(
            &schema,
            &values(&[("name", "web-2"), ("templateId", "tpl-2")]),
            Some(&unlinked),
        )
        .unwrap();
        assert_eq!(payload.get("templateId"), Some(&json!("tpl-2")));
    }
}
