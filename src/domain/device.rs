//! Device domain type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A monitored infrastructure device.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Device {
    /// Unique identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// Device category, e.g. "server" or "database".
    #[serde(rename = "type")]
    pub kind: String,
    /// Operational status.
    #[serde(default = "default_status")]
    pub status: String,
    /// When the device last reported in.
    #[serde(default = "Utc::now")]
    pub last_seen: DateTime<Utc>,
}

fn default_status() -> String {
    "active".to_string()
}

impl Device {
    /// Create a device with default status, last seen now.
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind: kind.into(),
            status: default_status(),
            last_seen: Utc::now(),
        }
    }
}
