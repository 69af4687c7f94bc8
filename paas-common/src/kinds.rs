//! Resource kind declarations
//!
//! Everything that differs between virtual machines, Kubernetes clusters and
//! templates lives here as data; the engine itself is kind-agnostic.

use crate::column::{Cell, ColumnDescriptor};
use crate::error::SchemaError;
use crate::resource::{Resource, NAME, TEMPLATE_ID};
use crate::schema::{FieldDescriptor, FormSchema};
use crate::service::{Endpoint, TemplateType};
use std::rc::Rc;

/// Characters of template source shown in the list preview
const TEMPLATE_PREVIEW_CHARS: usize = 30;

#[derive(Debug)]
pub struct ResourceKind {
    pub key: &'static str,
    pub title: &'static str,
    pub singular: &'static str,
    pub plural: &'static str,
    pub endpoint: Endpoint,
    pub form: FormSchema,
    pub columns: Vec<ColumnDescriptor>,
    pub detail: Vec<ColumnDescriptor>,
    /// Templates of this type populate the form's external template select
    pub template_type: Option<TemplateType>,
    pub empty_message: &'static str,
}

impl ResourceKind {
    pub fn create_title(&self) -> String {
        format!("Create {}", self.singular)
    }

    pub fn edit_title(&self) -> String {
        format!("Edit {}", self.singular)
    }

    pub fn view_title(&self) -> String {
        format!("{} details", capitalize(self.singular))
    }

    pub fn create_label(&self) -> String {
        format!("+ Create {}", capitalize(self.singular))
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn virtual_machines() -> Result<ResourceKind, SchemaError> {
    let form = FormSchema::new(vec![
        FieldDescriptor::text(NAME, "Name")
            .required()
            .placeholder("Enter a virtual machine name"),
        FieldDescriptor::number_between("cpu", "CPU (cores)", 1, 16)
            .required()
            .placeholder("Number of cores"),
        FieldDescriptor::number_between("memory", "Memory (MB)", 512, 32768)
            .required()
            .placeholder("Memory in MB"),
        FieldDescriptor::select(
            "os",
            "Operating System",
            [
                ("ubuntu-20.04", "Ubuntu 20.04"),
                ("ubuntu-22.04", "Ubuntu 22.04"),
                ("centos-7", "CentOS 7"),
                ("centos-8", "CentOS 8"),
                ("debian-10", "Debian 10"),
                ("debian-11", "Debian 11"),
                ("windows-server-2019", "Windows Server 2019"),
                ("windows-server-2022", "Windows Server 2022"),
            ],
        )
        .required(),
        FieldDescriptor::external_select(TEMPLATE_ID, "Template").required(),
    ])?;

    Ok(ResourceKind {
        key: "vms",
        title: "Virtual Machines",
        singular: "virtual machine",
        plural: "virtual machines",
        endpoint: Endpoint {
            service: "virtual_machine.v1.VirtualMachineService",
            entity: "VirtualMachine",
            entities: "VirtualMachines",
            entity_field: "virtualMachine",
            collection_field: "virtualMachines",
        },
        form,
        columns: vec![
            ColumnDescriptor::new(NAME, "Name"),
            ColumnDescriptor::new("cpu", "CPU (cores)"),
            ColumnDescriptor::new("memory", "Memory (MB)"),
            ColumnDescriptor::new("os", "OS"),
        ],
        detail: vec![
            ColumnDescriptor::new("id", "ID"),
            ColumnDescriptor::new(NAME, "Name"),
            ColumnDescriptor::new("cpu", "CPU (cores)"),
            ColumnDescriptor::new("memory", "Memory (MB)"),
            ColumnDescriptor::new("os", "Operating System"),
            ColumnDescriptor::new(TEMPLATE_ID, "Template ID"),
        ],
        template_type: Some(TemplateType::Vm),
        empty_message: "No virtual machines yet. Create one to get started!",
    })
}

pub fn kubernetes_clusters() -> Result<ResourceKind, SchemaError> {
    let form = FormSchema::new(vec![
        FieldDescriptor::text(NAME, "Name")
            .required()
            .placeholder("Enter a cluster name"),
        FieldDescriptor::select(
            "region",
            "Region",
            [
                ("us-east-1", "US East (N. Virginia)"),
                ("us-west-1", "US West (N. California)"),
                ("eu-west-1", "EU (Ireland)"),
                ("eu-central-1", "EU (Frankfurt)"),
                ("ap-southeast-1", "Asia Pacific (Singapore)"),
                ("ap-northeast-1", "Asia Pacific (Tokyo)"),
            ],
        )
        .required(),
        FieldDescriptor::number_between("nodeCount", "Node Count", 1, 10)
            .required()
            .placeholder("Number of nodes"),
        FieldDescriptor::select(
            "version",
            "Kubernetes Version",
            [
                ("1.22", "Kubernetes 1.22"),
                ("1.23", "Kubernetes 1.23"),
                ("1.24", "Kubernetes 1.24"),
                ("1.25", "Kubernetes 1.25"),
            ],
        )
        .required(),
        FieldDescriptor::external_select(TEMPLATE_ID, "Template").required(),
    ])?;

    Ok(ResourceKind {
        key: "clusters",
        title: "Kubernetes Clusters",
        singular: "Kubernetes cluster",
        plural: "Kubernetes clusters",
        endpoint: Endpoint {
            service: "kubernetes_cluster.v1.KubernetesClusterService",
            entity: "KubernetesCluster",
            entities: "KubernetesClusters",
            entity_field: "kubernetesCluster",
            collection_field: "kubernetesClusters",
        },
        form,
        columns: vec![
            ColumnDescriptor::new(NAME, "Name"),
            ColumnDescriptor::new("region", "Region"),
            ColumnDescriptor::new("nodeCount", "Nodes"),
            ColumnDescriptor::new("version", "Kubernetes Version"),
        ],
        detail: vec![
            ColumnDescriptor::new("id", "ID"),
            ColumnDescriptor::new(NAME, "Name"),
            ColumnDescriptor::new("region", "Region"),
            ColumnDescriptor::new("nodeCount", "Nodes"),
            ColumnDescriptor::new("version", "Kubernetes Version"),
            ColumnDescriptor::new(TEMPLATE_ID, "Template ID"),
        ],
        template_type: Some(TemplateType::Kubernetes),
        empty_message: "No Kubernetes clusters yet.",
    })
}

pub fn templates() -> Result<ResourceKind, SchemaError> {
    let form = FormSchema::new(vec![
        FieldDescriptor::text(NAME, "Name")
            .required()
            .placeholder("Enter a template name"),
        FieldDescriptor::select(
            "type",
            "Type",
            [
                (TemplateType::Vm.as_str(), TemplateType::Vm.label()),
                (TemplateType::Kubernetes.as_str(), TemplateType::Kubernetes.label()),
            ],
        )
        .required(),
        FieldDescriptor::text_area("rawTemplate", "Template", 12)
            .required()
            .placeholder("Enter the template source"),
    ])?;

    Ok(ResourceKind {
        key: "templates",
        title: "Templates",
        singular: "template",
        plural: "templates",
        endpoint: Endpoint {
            service: "template.v1.TemplateService",
            entity: "Template",
            entities: "Templates",
            entity_field: "template",
            collection_field: "templates",
        },
        form,
        columns: vec![
            ColumnDescriptor::new(NAME, "Name"),
            ColumnDescriptor::new("type", "Type").render(template_type_cell),
            ColumnDescriptor::new("rawTemplate", "Template").render(|t| {
                Cell::Code(preview(&t.attribute_text("rawTemplate"), TEMPLATE_PREVIEW_CHARS))
            }),
        ],
        detail: vec![
            ColumnDescriptor::new("id", "ID"),
            ColumnDescriptor::new(NAME, "Name"),
            ColumnDescriptor::new("type", "Type").render(template_type_cell),
            ColumnDescriptor::new("rawTemplate", "Template")
                .render(|t| Cell::Code(t.attribute_text("rawTemplate"))),
        ],
        template_type: None,
        empty_message: "No templates yet.",
    })
}

fn template_type_cell(template: &Resource) -> Cell {
    let label = template
        .get("type")
        .and_then(TemplateType::from_value)
        .map_or("Unknown", |t| t.label());
    Cell::Text(label.to_string())
}

fn preview(source: &str, limit: usize) -> String {
    if source.chars().count() > limit {
        let head: String = source.chars().take(limit).collect();
        format!("{}...", head)
    } else {
        source.to_string()
    }
}

/// All resource kinds the console manages
#[derive(Debug, Clone)]
pub struct Catalog {
    pub virtual_machines: Rc<ResourceKind>,
    pub kubernetes_clusters: Rc<ResourceKind>,
    pub templates: Rc<ResourceKind>,
}

impl Catalog {
    pub fn new() -> Result<Self, SchemaError> {
        Ok(Self {
            virtual_machines: Rc::new(virtual_machines()?),
            kubernetes_clusters: Rc::new(kubernetes_clusters()?),
            templates: Rc::new(templates()?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldKind, SelectSource};
    use serde_json::json;

    #[test]
    fn test_catalog_builds() {
        let catalog = Catalog::new().unwrap();
        assert_eq!(catalog.virtual_machines.form.fields().len(), 5);
        assert_eq!(catalog.kubernetes_clusters.template_type, Some(TemplateType::Kubernetes));
        assert_eq!(catalog.templates.template_type, None);
        assert!(!catalog.templates.form.has_external_options());
    }

    #[test]
    fn test_vm_template_field_is_external() {
        let vms = virtual_machines().unwrap();
        let field = vms.form.field(TEMPLATE_ID).unwrap();
        assert_eq!(field.kind, FieldKind::Select(SelectSource::External));
        assert!(field.required);
    }

    #[test]
    fn test_template_columns_render() {
        let templates = templates().unwrap();
        let template = Resource::new()
            .with("type", "TYPE_KUBERNETES")
            .with("rawTemplate", "apiVersion: v1\nkind: Cluster\nmetadata: {}");

        assert_eq!(templates.columns[1].cell(&template).text(), "Kubernetes cluster");
        assert_eq!(
            templates.columns[2].cell(&template),
            Cell::Code("apiVersion: v1\nkind: Cluster\nm...".to_string())
        );

        let unknown = Resource::new().with("type", json!(0));
        assert_eq!(templates.columns[1].cell(&unknown).text(), "Unknown");
    }

    #[test]
    fn test_short_template_preview_untouched() {
        assert_eq!(preview("cpu: 1", 30), "cpu: 1");
    }

    #[test]
    fn test_titles() {
        let clusters = kubernetes_clusters().unwrap();
        assert_eq!(clusters.create_title(), "Create Kubernetes cluster");
        assert_eq!(clusters.view_title(), "Kubernetes cluster details");
        assert_eq!(clusters.create_label(), "+ Create Kubernetes cluster");
    }
}
