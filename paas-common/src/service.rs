//! Remote CRUD contract the controller depends on
//!
//! Services are injected into the controller as `Rc<dyn ResourceService>`;
//! the browser build talks to the provisioning backend, tests hand in fakes.

use crate::error::ServiceError;
use crate::resource::Resource;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Template type tag distinguishing VM templates from cluster templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemplateType {
    #[serde(rename = "TYPE_VM")]
    Vm,
    #[serde(rename = "TYPE_KUBERNETES")]
    Kubernetes,
}

impl TemplateType {
    /// Wire name of the tag
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateType::Vm => "TYPE_VM",
            TemplateType::Kubernetes => "TYPE_KUBERNETES",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TemplateType::Vm => "Virtual machine",
            TemplateType::Kubernetes => "Kubernetes cluster",
        }
    }

    /// Read a tag from either its enum name or its numeric value
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => match s.as_str() {
                "TYPE_VM" | "1" => Some(TemplateType::Vm),
                "TYPE_KUBERNETES" | "2" => Some(TemplateType::Kubernetes),
                _ => None,
            },
            Value::Number(n) => match n.as_u64() {
                Some(1) => Some(TemplateType::Vm),
                Some(2) => Some(TemplateType::Kubernetes),
                _ => None,
            },
            _ => None,
        }
    }
}

impl fmt::Display for TemplateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Filter for list calls
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub template_type: Option<TemplateType>,
}

impl ListFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn templates_of(template_type: TemplateType) -> Self {
        Self {
            template_type: Some(template_type),
        }
    }
}

#[async_trait(?Send)]
pub trait ResourceService {
    async fn list(&self, filter: ListFilter) -> Result<Vec<Resource>, ServiceError>;

    /// Create from a payload without `id`; returns the stored entity
    async fn create(&self, entity: Resource) -> Result<Resource, ServiceError>;

    /// Update a payload carrying `id`; returns the stored entity
    async fn update(&self, entity: Resource) -> Result<Resource, ServiceError>;

    async fn delete(&self, id: &str) -> Result<(), ServiceError>;
}

/// Wire coordinates of a resource kind's remote service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Fully qualified service name, e.g. `template.v1.TemplateService`
    pub service: &'static str,
    /// Entity name used in method names, e.g. `VirtualMachine`
    pub entity: &'static str,
    /// Plural entity name used by the list method
    pub entities: &'static str,
    /// JSON field wrapping a single entity in requests and responses
    pub entity_field: &'static str,
    /// JSON field holding the collection in list responses
    pub collection_field: &'static str,
}

impl Endpoint {
    pub fn list_method(&self) -> String {
        format!("List{}", self.entities)
    }

    pub fn create_method(&self) -> String {
        format!("Create{}", self.entity)
    }

    pub fn update_method(&self) -> String {
        format!("Update{}", self.entity)
    }

    pub fn delete_method(&self) -> String {
        format!("Delete{}", self.entity)
    }

    /// Path of a unary method relative to the API base URL
    pub fn path(&self, method: &str) -> String {
        format!("/{}/{}", self.service, method)
    }
}
