//! Ticket domain type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A support ticket.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Ticket {
    /// Unique identifier.
    pub id: String,
    /// Short summary.
    pub title: String,
    /// Full description.
    pub description: String,
    /// Workflow status.
    #[serde(default = "default_status")]
    pub status: String,
    /// Priority level.
    #[serde(default = "default_priority")]
    pub priority: String,
    /// When the ticket was created.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

fn default_status() -> String {
    "open".to_string()
}

fn default_priority() -> String {
    "medium".to_string()
}

impl Ticket {
    /// Create an open, medium-priority ticket.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            status: default_status(),
            priority: default_priority(),
            created_at: Utc::now(),
        }
    }
}
