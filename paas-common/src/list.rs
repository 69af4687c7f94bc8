//! List engine state: table projection and the two-step delete protocol

use crate::column::{Cell, ColumnDescriptor};
use crate::resource::Resource;

/// Which row actions a list offers. An action is shown iff its callback
/// was supplied by the owner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowActions {
    pub view: bool,
    pub edit: bool,
    pub delete: bool,
}

impl RowActions {
    pub fn any(&self) -> bool {
        self.view || self.edit || self.delete
    }
}

/// A rendered table row
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub key: String,
    pub cells: Vec<Cell>,
    pub resource: Resource,
}

/// What the list renders: an empty-state message or a table
#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    Empty(String),
    Table { headers: Vec<String>, rows: Vec<Row> },
}

impl ListView {
    pub fn project(
        resources: &[Resource],
        columns: &[ColumnDescriptor],
        empty_message: &str,
    ) -> Self {
        if resources.is_empty() {
            return ListView::Empty(empty_message.to_string());
        }

        let headers = columns.iter().map(|c| c.label.clone()).collect();
        let rows = resources
            .iter()
            .enumerate()
            .map(|(index, resource)| Row {
                key: resource.id().unwrap_or_else(|| format!("row-{}", index)),
                cells: columns.iter().map(|c| c.cell(resource)).collect(),
                resource: resource.clone(),
            })
            .collect();

        ListView::Table { headers, rows }
    }
}

/// Pending deletion target. At most one resource waits for confirmation;
/// a second delete click replaces the first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteConfirmation {
    pending: Option<Resource>,
}

impl DeleteConfirmation {
    pub fn request(&mut self, resource: Resource) {
        self.pending = Some(resource);
    }

    pub fn pending(&self) -> Option<&Resource> {
        self.pending.as_ref()
    }

    /// Prompt text naming the pending target
    pub fn prompt(&self) -> Option<String> {
        self.pending.as_ref().map(|r| {
            format!(
                "Are you sure you want to delete \"{}\"?",
                r.display_name()
            )
        })
    }

    /// Take the target for deletion. Returns it exactly once.
    pub fn confirm(&mut self) -> Option<Resource> {
        self.pending.take()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
