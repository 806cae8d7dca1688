//! Common test utilities for integration tests.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use saas_demo_api::api::build_router;
use saas_demo_api::auth::{CredentialValidator, SharedSecretValidator};
use saas_demo_api::state::AppState;
use saas_demo_api::store::ResourceStore;

pub const TEST_API_KEY: &str = "test-secret-key";

/// Build the app router with seed data and a known API key.
pub fn test_app() -> Router {
    let state = AppState {
        store: Arc::new(ResourceStore::with_seed_data()),
        environment: "test".to_string(),
    };
    let validator: Arc<dyn CredentialValidator> =
        Arc::new(SharedSecretValidator::new(TEST_API_KEY));

    build_router(state, validator)
}

/// Issue a GET and return the status code with the parsed JSON body.
pub async fn get_json(
    app: Router,
    uri: &str,
    token: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::get(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }

    let response = app
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&body).expect("response body should be JSON");

    (status, json)
}
