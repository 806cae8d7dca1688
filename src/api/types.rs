//! API request and response types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ==================== Health ====================

/// Health payload returned by `GET /status`.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    /// Service status.
    pub status: String,
    /// Current time, RFC 3339.
    pub timestamp: String,
    /// Service version.
    pub version: String,
    /// Environment label.
    pub environment: String,
}

// ==================== Service metadata ====================

/// Service metadata returned by `GET /`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceInfo {
    /// Service name.
    pub name: String,
    /// Service version.
    pub version: String,
    /// Service description.
    pub description: String,
    /// Available endpoint paths.
    pub endpoints: EndpointIndex,
    /// How to authenticate.
    pub authentication: String,
    /// Current time, RFC 3339.
    pub timestamp: String,
}

/// The available endpoint paths.
#[derive(Debug, Serialize, ToSchema)]
pub struct EndpointIndex {
    pub status: String,
    pub devices: String,
    pub users: String,
    pub tickets: String,
    pub policies: String,
    pub docs: String,
}

// ==================== Tickets ====================

/// Query parameters for listing tickets.
#[derive(Debug, Deserialize, ToSchema)]
pub struct TicketsQuery {
    /// Return only tickets with this exact status.
    #[serde(default)]
    pub status: Option<String>,
}
