//! Column descriptors for list tables and detail views

use crate::resource::Resource;
use std::fmt;
use std::rc::Rc;

/// Rendered content of one cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    /// Preformatted, monospace content such as template sources
    Code(String),
}

impl Cell {
    pub fn text(&self) -> &str {
        match self {
            Cell::Text(s) | Cell::Code(s) => s,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }
}

pub type RenderFn = Rc<dyn Fn(&Resource) -> Cell>;

#[derive(Clone)]
pub struct ColumnDescriptor {
    pub key: String,
    pub label: String,
    pub render: Option<RenderFn>,
}

impl ColumnDescriptor {
    pub fn new(key: &str, label: &str) -> Self {
        Self {
            key: key.to_string(),
            label: label.to_string(),
            render: None,
        }
    }

    pub fn render(mut self, render: impl Fn(&Resource) -> Cell + 'static) -> Self {
        self.render = Some(Rc::new(render));
        self
    }

    /// Custom render if one is declared, raw attribute otherwise
    pub fn cell(&self, resource: &Resource) -> Cell {
        match &self.render {
            Some(render) => render(resource),
            None => Cell::Text(resource.attribute_text(&self.key)),
        }
    }
}

impl fmt::Debug for ColumnDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDescriptor")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("render", &self.render.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_attribute_cell() {
        let column = ColumnDescriptor::new("memory", "Memory (MB)");
        let vm = Resource::new().with("memory", 2048);
        assert_eq!(column.cell(&vm), Cell::Text("2048".to_string()));
    }

    #[test]
    fn test_custom_render_wins() {
        let column = ColumnDescriptor::new("memory", "Memory")
            .render(|r| Cell::Text(format!("{} MB", r.attribute_text("memory"))));
        let vm = Resource::new().with("memory", 512);
        assert_eq!(column.cell(&vm).text(), "512 MB");
    }
}
