//! HTTP API: server, routing, and GraphQL operation resolution.

pub mod app;
