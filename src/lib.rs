//! SaaS Demo API - a demonstration SaaS service.
//!
//! Exposes read-only mock resources (devices, users, tickets, policies)
//! behind a single shared-secret bearer token. All records are seeded at
//! startup and never mutated.

pub mod api;
pub mod auth;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod state;
pub mod store;
