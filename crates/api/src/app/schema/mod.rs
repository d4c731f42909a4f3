//! GraphQL boundary: request envelope and operation dispatch.
//!
//! The boundary is deliberately thin. We resolve the **first field of the
//! query's top-level selection set** to an operation and take its arguments
//! from `variables`; a full query-language implementation is outside this
//! repository's scope. Responses use the standard envelopes:
//! `{"data": {...}}` on success, `{"errors": [{"message": ...}]}` on failure.

use std::sync::Arc;

use axum::{Extension, Json, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use storefront_core::{DomainError, DomainResult};

use crate::app::errors;
use crate::app::services::AppServices;

pub mod mutation;
pub mod query;

/// Decoded `POST /graphql` payload.
#[derive(Debug, Deserialize)]
pub struct GraphQlRequest {
    pub query: String,
    #[serde(default)]
    pub variables: Option<Value>,
}

pub async fn graphql_handler(
    Extension(services): Extension<Arc<AppServices>>,
    Json(request): Json<GraphQlRequest>,
) -> impl IntoResponse {
    let (status, body) = execute(&services, &request);
    (status, Json(body))
}

/// Resolve and run the requested operation. Pure apart from the services it
/// is handed, which keeps it callable from tests without a server.
pub fn execute(services: &AppServices, request: &GraphQlRequest) -> (StatusCode, Value) {
    let Some(op) = operation_name(&request.query) else {
        return errors::error_response(&DomainError::invalid_input(
            "could not determine requested operation",
        ));
    };
    let variables = request.variables.clone().unwrap_or_else(|| json!({}));

    let result = match op {
        "categories" => query::categories(services),
        "products" => query::products(services),
        "product" => query::product(services, &variables),
        "orders" => query::orders(services),
        "createOrder" => mutation::create_order(services, &variables),
        "createProduct" => mutation::create_product(services, &variables),
        "updateProduct" => mutation::update_product(services, &variables),
        "deleteProduct" => mutation::delete_product(services, &variables),
        other => Err(DomainError::invalid_input(format!(
            "unknown operation: {other}"
        ))),
    };

    match result {
        Ok(value) => {
            tracing::debug!(operation = op, "query executed");
            let mut data = serde_json::Map::new();
            data.insert(op.to_string(), value);
            (StatusCode::OK, json!({"data": data}))
        }
        Err(err) => {
            tracing::warn!(operation = op, error = %err, "operation failed");
            errors::error_response(&err)
        }
    }
}

/// First field name of the query's top-level selection set.
///
/// Skips the optional `query`/`mutation` keyword, operation name, and variable
/// definitions by scanning to the first `{`.
pub fn operation_name(query: &str) -> Option<&str> {
    let brace = query.find('{')?;
    let rest = query[brace + 1..].trim_start();
    let end = rest
        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
        .unwrap_or(rest.len());
    if end == 0 { None } else { Some(&rest[..end]) }
}

/// Decode operation arguments from the `variables` object.
pub(crate) fn decode<T: DeserializeOwned>(variables: &Value) -> DomainResult<T> {
    serde_json::from_value(variables.clone())
        .map_err(|e| DomainError::invalid_input(format!("invalid variables: {e}")))
}
