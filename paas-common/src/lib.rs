//! Metadata-driven CRUD engine shared by the console front end
//!
//! Resource kinds are declared as data (fields, columns, endpoints) in
//! [`kinds`]; the form, list and detail engines turn those declarations into
//! view state, and [`controller`] binds them to a remote [`service`].

pub mod column;
pub mod controller;
pub mod detail;
pub mod error;
pub mod form;
pub mod kinds;
pub mod list;
pub mod normalize;
pub mod resource;
pub mod schema;
pub mod service;

pub use column::{Cell, ColumnDescriptor};
pub use controller::{
    ControllerCell, ControllerState, Editor, ListState, Modal, ProvisioningOutput,
    ResourceController, SharedState,
};
pub use detail::{DetailView, EMPTY_PLACEHOLDER};
pub use error::{NormalizeError, SchemaError, ServiceError};
pub use form::{EditSession, FieldErrors, FormState, FormValues};
pub use kinds::{Catalog, ResourceKind};
pub use list::{DeleteConfirmation, ListView, Row, RowActions};
pub use resource::Resource;
pub use schema::{FieldDescriptor, FieldKind, FormSchema, SelectOption, SelectSource};
pub use service::{Endpoint, ListFilter, ResourceService, TemplateType};
