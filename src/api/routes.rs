//! Route definitions for the API.

use std::sync::Arc;

use axum::{middleware, routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers;
use crate::auth::{require_api_key, CredentialValidator};
use crate::state::AppState;

/// Security scheme modifier for OpenAPI.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
            );
        }
    }
}

/// OpenAPI documentation.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::get_status,
        handlers::service_info,
        handlers::list_devices,
        handlers::get_device,
        handlers::list_users,
        handlers::get_user,
        handlers::list_tickets,
        handlers::get_ticket,
        handlers::list_policies,
        handlers::get_policy,
    ),
    components(schemas(
        crate::api::types::StatusResponse,
        crate::api::types::ServiceInfo,
        crate::api::types::EndpointIndex,
        crate::domain::Device,
        crate::domain::User,
        crate::domain::Ticket,
        crate::domain::Policy,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Health and service metadata endpoints"),
        (name = "devices", description = "Device inventory"),
        (name = "users", description = "User directory"),
        (name = "tickets", description = "Support tickets"),
        (name = "policies", description = "Configuration policies")
    ),
    info(
        title = "SaaS Demo API",
        version = "1.0.0",
        description = "A demonstration SaaS API with typical endpoints",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Build the API router.
///
/// Resource routes sit behind the API key middleware; the status and root
/// endpoints stay public.
pub fn build_router(state: AppState, validator: Arc<dyn CredentialValidator>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let resource_routes = Router::new()
        .route("/devices", get(handlers::list_devices))
        .route("/devices/{id}", get(handlers::get_device))
        .route("/users", get(handlers::list_users))
        .route("/users/{id}", get(handlers::get_user))
        .route("/tickets", get(handlers::list_tickets))
        .route("/tickets/{id}", get(handlers::get_ticket))
        .route("/policies", get(handlers::list_policies))
        .route("/policies/{id}", get(handlers::get_policy))
        .layer(middleware::from_fn_with_state(validator, require_api_key))
        .with_state(state.clone());

    let public_routes = Router::new()
        .route("/", get(handlers::service_info))
        .route("/status", get(handlers::get_status))
        .with_state(state);

    Router::new()
        .merge(resource_routes)
        .merge(public_routes)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
