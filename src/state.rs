//! Shared application state.

use std::sync::Arc;

use crate::store::ResourceStore;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Seeded, read-only resource store.
    pub store: Arc<ResourceStore>,
    /// Environment label reported by the status endpoint.
    pub environment: String,
}
