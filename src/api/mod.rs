//! HTTP API layer for the SaaS Demo API.
//!
//! Route registration, request handlers, and response types.

pub mod handlers;
mod routes;
mod types;

pub use routes::build_router;
