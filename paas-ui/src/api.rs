//! API client for the provisioning backend
//!
//! The backend exposes Connect services; every call is a unary POST of a JSON
//! body to `{base}/{package.Service}/{Method}`. Failed calls answer with a
//! non-2xx status and `{"code": ..., "message": ...}`.

use async_trait::async_trait;
use paas_common::resource::{is_blank, ID};
use paas_common::{Endpoint, ListFilter, Resource, ResourceService, ServiceError};
use serde::Deserialize;
use serde_json::{json, Map, Value};
use tracing::debug;

/// HTTP transport shared by every resource service
#[derive(Debug, Clone)]
pub struct ConnectClient {
    base_url: String,
}

impl ConnectClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, endpoint: &Endpoint, method: &str) -> String {
        format!("{}{}", self.base_url, endpoint.path(method))
    }

    /// Unary call with the JSON codec
    pub async fn call(
        &self,
        endpoint: &Endpoint,
        method: &str,
        body: &Value,
    ) -> Result<Value, ServiceError> {
        let url = self.url(endpoint, method);
        debug!(%url, "Connect request");

        let response = reqwasm::http::Request::post(&url)
            .header("Content-Type", "application/json")
            .body(body.to_string())
            .send()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        if response.ok() {
            parse_body(&text)
        } else {
            Err(rejection(status, &text))
        }
    }
}

/// Error body of a failed Connect call
#[derive(Debug, Default, Deserialize)]
struct ConnectError {
    code: Option<String>,
    message: Option<String>,
}

fn rejection(status: u16, body: &str) -> ServiceError {
    let ConnectError { code, message } = serde_json::from_str(body).unwrap_or_default();
    ServiceError::Rejected {
        status,
        code,
        message,
    }
}

fn parse_body(text: &str) -> Result<Value, ServiceError> {
    if text.trim().is_empty() {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_str(text).map_err(|e| ServiceError::Decode(e.to_string()))
}

fn list_request(filter: &ListFilter) -> Value {
    match filter.template_type {
        Some(template_type) => json!({ "type": template_type.as_str() }),
        None => json!({}),
    }
}

/// `{ <field>: entity }`
fn wrap(field: &str, entity: Resource) -> Value {
    let mut body = Map::new();
    body.insert(field.to_string(), Value::Object(entity.into_inner()));
    Value::Object(body)
}

/// Collection from a list response. Empty repeated fields are omitted by
/// the JSON mapping, so a missing field is an empty list.
fn collection(endpoint: &Endpoint, body: Value) -> Result<Vec<Resource>, ServiceError> {
    match body.get(endpoint.collection_field) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(items) => serde_json::from_value(items.clone()).map_err(|e| {
            ServiceError::Decode(format!("{}: {}", endpoint.collection_field, e))
        }),
    }
}

/// Stored entity from a create/update response: the wrapped entity when the
/// server returns one, otherwise the submitted payload with any returned id.
fn saved_entity(
    endpoint: &Endpoint,
    submitted: Resource,
    body: Value,
) -> Result<Resource, ServiceError> {
    if let Some(entity) = body.get(endpoint.entity_field).filter(|v| v.is_object()) {
        return serde_json::from_value(entity.clone())
            .map_err(|e| ServiceError::Decode(format!("{}: {}", endpoint.entity_field, e)));
    }

    let mut entity = submitted;
    if let Some(id) = body.get(ID).filter(|v| !is_blank(v)) {
        entity.insert(ID, id.clone());
    }
    Ok(entity)
}

/// [`ResourceService`] for one resource kind's Connect service
#[derive(Debug, Clone)]
pub struct ConnectService {
    client: ConnectClient,
    endpoint: Endpoint,
}

impl ConnectService {
    pub fn new(client: ConnectClient, endpoint: Endpoint) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait(?Send)]
impl ResourceService for ConnectService {
    async fn list(&self, filter: ListFilter) -> Result<Vec<Resource>, ServiceError> {
        let body = self
            .client
            .call(&self.endpoint, &self.endpoint.list_method(), &list_request(&filter))
            .await?;
        collection(&self.endpoint, body)
    }

    async fn create(&self, entity: Resource) -> Result<Resource, ServiceError> {
        let request = wrap(self.endpoint.entity_field, entity.clone());
        let body = self
            .client
            .call(&self.endpoint, &self.endpoint.create_method(), &request)
            .await?;
        saved_entity(&self.endpoint, entity, body)
    }

    async fn update(&self, entity: Resource) -> Result<Resource, ServiceError> {
        let request = wrap(self.endpoint.entity_field, entity.clone());
        let body = self
            .client
            .call(&self.endpoint, &self.endpoint.update_method(), &request)
            .await?;
        saved_entity(&self.endpoint, entity, body)
    }

    async fn delete(&self, id: &str) -> Result<(), ServiceError> {
        self.client
            .call(&self.endpoint, &self.endpoint.delete_method(), &json!({ "id": id }))
            .await?;
        Ok(())
    }
}
