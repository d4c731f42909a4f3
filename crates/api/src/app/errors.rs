//! Error envelopes.
//!
//! Failures surface GraphQL-style: `{"errors": [{"message": ...}]}` with an
//! HTTP status matching the domain error class.

use axum::http::StatusCode;
use serde_json::{Value, json};

use storefront_core::DomainError;

pub fn error_response(err: &DomainError) -> (StatusCode, Value) {
    let status = match err {
        DomainError::NotFound(_) => StatusCode::NOT_FOUND,
        DomainError::InvalidInput(_) | DomainError::InvalidId(_) => StatusCode::BAD_REQUEST,
        DomainError::Transaction(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, json!({"errors": [{"message": err.to_string()}]}))
}
