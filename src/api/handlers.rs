//! HTTP request handlers.

use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};

use crate::api::types::{EndpointIndex, ServiceInfo, StatusResponse, TicketsQuery};
use crate::auth::ApiKeyContext;
use crate::domain::{Device, Policy, Ticket, User};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

const SERVICE_NAME: &str = "SaaS Demo API";
const SERVICE_DESCRIPTION: &str = "A demonstration SaaS API with typical endpoints";

// ==================== Health / Metadata ====================

/// Health check endpoint.
///
/// GET /status
#[utoipa::path(
    get,
    path = "/status",
    responses(
        (status = 200, description = "Service is healthy", body = StatusResponse)
    ),
    tag = "health"
)]
pub async fn get_status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        environment: state.environment.clone(),
    })
}

/// Root endpoint with service metadata.
///
/// GET /
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service metadata", body = ServiceInfo)
    ),
    tag = "health"
)]
pub async fn service_info() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: SERVICE_DESCRIPTION.to_string(),
        endpoints: EndpointIndex {
            status: "/status".to_string(),
            devices: "/devices".to_string(),
            users: "/users".to_string(),
            tickets: "/tickets".to_string(),
            policies: "/policies".to_string(),
            docs: "/swagger-ui".to_string(),
        },
        authentication: "Bearer token required (set DEMO__AUTH__API_KEY)".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

// ==================== Devices ====================

/// Get all devices.
///
/// GET /devices
#[utoipa::path(
    get,
    path = "/devices",
    responses(
        (status = 200, description = "All devices", body = [Device]),
        (status = 401, description = "Missing or invalid API key")
    ),
    security(("bearer_auth" = [])),
    tag = "devices"
)]
pub async fn list_devices(
    State(state): State<AppState>,
    Extension(key): Extension<ApiKeyContext>,
) -> Json<Vec<Device>> {
    tracing::info!(key_prefix = %key.prefix, "Fetching devices");
    Json(state.store.devices().to_vec())
}

/// Get a specific device by ID.
///
/// GET /devices/{id}
#[utoipa::path(
    get,
    path = "/devices/{id}",
    params(
        ("id" = String, Path, description = "Device ID")
    ),
    responses(
        (status = 200, description = "The device", body = Device),
        (status = 401, description = "Missing or invalid API key"),
        (status = 404, description = "Device not found")
    ),
    security(("bearer_auth" = [])),
    tag = "devices"
)]
pub async fn get_device(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Device>> {
    let device = state
        .store
        .device(&id)
        .ok_or_else(|| ApiError::NotFound("Device not found".to_string()))?;

    Ok(Json(device.clone()))
}

// ==================== Users ====================

/// Get all users.
///
/// GET /users
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users", body = [User]),
        (status = 401, description = "Missing or invalid API key")
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
pub async fn list_users(
    State(state): State<AppState>,
    Extension(key): Extension<ApiKeyContext>,
) -> Json<Vec<User>> {
    tracing::info!(key_prefix = %key.prefix, "Fetching users");
    Json(state.store.users().to_vec())
}

/// Get a specific user by ID.
///
/// GET /users/{id}
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(
        ("id" = String, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "The user", body = User),
        (status = 401, description = "Missing or invalid API key"),
        (status = 404, description = "User not found")
    ),
    security(("bearer_auth" = [])),
    tag = "users"
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<User>> {
    let user = state
        .store
        .user(&id)
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    Ok(Json(user.clone()))
}

// ==================== Tickets ====================

/// Get all tickets, optionally filtered by status.
///
/// GET /tickets
#[utoipa::path(
    get,
    path = "/tickets",
    params(
        ("status" = Option<String>, Query, description = "Exact status to filter by")
    ),
    responses(
        (status = 200, description = "Matching tickets", body = [Ticket]),
        (status = 401, description = "Missing or invalid API key")
    ),
    security(("bearer_auth" = [])),
    tag = "tickets"
)]
pub async fn list_tickets(
    State(state): State<AppState>,
    Extension(key): Extension<ApiKeyContext>,
    Query(query): Query<TicketsQuery>,
) -> Json<Vec<Ticket>> {
    tracing::info!(key_prefix = %key.prefix, "Fetching tickets");

    let tickets = match query.status.as_deref() {
        Some(status) => state.store.tickets_with_status(status),
        None => state.store.tickets().to_vec(),
    };

    Json(tickets)
}

/// Get a specific ticket by ID.
///
/// GET /tickets/{id}
#[utoipa::path(
    get,
    path = "/tickets/{id}",
    params(
        ("id" = String, Path, description = "Ticket ID")
    ),
    responses(
        (status = 200, description = "The ticket", body = Ticket),
        (status = 401, description = "Missing or invalid API key"),
        (status = 404, description = "Ticket not found")
    ),
    security(("bearer_auth" = [])),
    tag = "tickets"
)]
pub async fn get_ticket(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Ticket>> {
    let ticket = state
        .store
        .ticket(&id)
        .ok_or_else(|| ApiError::NotFound("Ticket not found".to_string()))?;

    Ok(Json(ticket.clone()))
}

// ==================== Policies ====================

/// Get all policies.
///
/// GET /policies
#[utoipa::path(
    get,
    path = "/policies",
    responses(
        (status = 200, description = "All policies", body = [Policy]),
        (status = 401, description = "Missing or invalid API key")
    ),
    security(("bearer_auth" = [])),
    tag = "policies"
)]
pub async fn list_policies(
    State(state): State<AppState>,
    Extension(key): Extension<ApiKeyContext>,
) -> Json<Vec<Policy>> {
    tracing::info!(key_prefix = %key.prefix, "Fetching policies");
    Json(state.store.policies().to_vec())
}

/// Get a specific policy by ID.
///
/// GET /policies/{id}
#[utoipa::path(
    get,
    path = "/policies/{id}",
    params(
        ("id" = String, Path, description = "Policy ID")
    ),
    responses(
        (status = 200, description = "The policy", body = Policy),
        (status = 401, description = "Missing or invalid API key"),
        (status = 404, description = "Policy not found")
    ),
    security(("bearer_auth" = [])),
    tag = "policies"
)]
pub async fn get_policy(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Policy>> {
    let policy = state
        .store
        .policy(&id)
        .ok_or_else(|| ApiError::NotFound("Policy not found".to_string()))?;

    Ok(Json(policy.clone()))
}
