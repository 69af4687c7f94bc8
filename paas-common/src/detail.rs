//! Read-only projection of a single resource

use crate::column::{Cell, ColumnDescriptor};
use crate::resource::{is_blank, Resource};

/// Shown instead of a blank value so "empty" differs from "not rendered"
pub const EMPTY_PLACEHOLDER: &str = "—";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRow {
    pub key: String,
    pub label: String,
    pub value: Cell,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub rows: Vec<DetailRow>,
    /// Provisioning output, always shown when the resource has one
    pub rendered_template: Option<String>,
}

impl DetailView {
    pub fn project(resource: &Resource, fields: &[ColumnDescriptor]) -> Self {
        let rows = fields
            .iter()
            .map(|field| {
                let value = if field.render.is_none()
                    && resource.get(&field.key).map_or(true, is_blank)
                {
                    Cell::Text(EMPTY_PLACEHOLDER.to_string())
                } else {
                    match field.cell(resource) {
                        cell if cell.is_empty() => Cell::Text(EMPTY_PLACEHOLDER.to_string()),
                        cell => cell,
                    }
                };

                DetailRow {
                    key: field.key.clone(),
                    label: field.label.clone(),
                    value,
                }
            })
            .collect();

        Self {
            rows,
            rendered_template: resource.rendered_template().map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::RENDERED_TEMPLATE;

    fn fields() -> Vec<ColumnDescriptor> {
        vec![
            ColumnDescriptor::new("id", "ID"),
            ColumnDescriptor::new("name", "Name"),
            ColumnDescriptor::new("templateId", "Template ID"),
        ]
    }

    #[test]
    fn test_blank_values_render_placeholder() {
        let vm = Resource::new().with("id", "vm-1").with("name", "");
        let view = DetailView::project(&vm, &fields());

        assert_eq!(view.rows[0].value, Cell::Text("vm-1".to_string()));
        assert_eq!(view.rows[1].value.text(), EMPTY_PLACEHOLDER);
        assert_eq!(view.rows[2].value.text(), EMPTY_PLACEHOLDER);
        assert_eq!(view.rendered_template, None);
    }

    #[test]
    fn test_rendered_template_shown_outside_fields() {
        let vm = Resource::new()
            .with("id", "vm-1")
            .with(RENDERED_TEMPLATE, "instance:\n  cpu: 4\n");
        let view = DetailView::project(&vm, &fields());

        assert_eq!(view.rows.len(), 3);
        assert_eq!(view.rendered_template.as_deref(), Some("instance:\n  cpu: 4\n"));
    }

    #[test]
    fn test_custom_render_is_used() {
        let fields = vec![ColumnDescriptor::new("rawTemplate", "Template")
            .render(|r| Cell::Code(r.attribute_text("rawTemplate")))];
        let template = Resource::new().with("rawTemplate", "name: {{ .Name }}");
        let view = DetailView::project(&template, &fields);
        assert_eq!(view.rows[0].value, Cell::Code("name: {{ .Name }}".to_string()));
    }

    #[test]
    fn test_zero_is_falsy() {
        let fields = vec![ColumnDescriptor::new("nodeCount", "Nodes")];
        let cluster = Resource::new().with("nodeCount", 0);
        let view = DetailView::project(&cluster, &fields);
        assert_eq!(view.rows[0].value.text(), EMPTY_PLACEHOLDER);
    }
}
