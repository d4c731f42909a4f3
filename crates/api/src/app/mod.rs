//! HTTP application wiring (Axum router + service wiring).
//!
//! Layout:
//! - `services.rs`: application context (store + category registry, seeded)
//! - `schema/`: GraphQL request envelope, operation dispatch, resolvers
//! - `dto.rs`: request DTOs and JSON view mapping
//! - `errors.rs`: consistent error envelopes

use std::sync::Arc;

use axum::{
    Extension, Router,
    http::StatusCode,
    routing::{get, post},
};
use tower::ServiceBuilder;

pub mod dto;
pub mod errors;
pub mod schema;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app() -> Router {
    let services = Arc::new(services::build_services());

    Router::new()
        .route("/health", get(health))
        .route("/graphql", post(schema::graphql_handler))
        .layer(Extension(services))
        .layer(ServiceBuilder::new())
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}
