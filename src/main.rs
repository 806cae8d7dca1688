use std::sync::Arc;

use tokio::net::TcpListener;

use saas_demo_api::api::build_router;
use saas_demo_api::auth::{CredentialValidator, SharedSecretValidator};
use saas_demo_api::config::Config;
use saas_demo_api::logging;
use saas_demo_api::state::AppState;
use saas_demo_api::store::ResourceStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file (if present)
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("Note: No .env file loaded ({e})");
    }

    // Initialize logging
    logging::init();

    tracing::info!("Starting SaaS Demo API v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = Config::load().map_err(|e| {
        tracing::error!(error = %e, "Failed to load configuration");
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    tracing::info!(
        host = %config.server.host,
        port = %config.server.port,
        environment = %config.service.environment,
        "Configuration loaded"
    );

    // Seed the read-only resource store
    let store = Arc::new(ResourceStore::with_seed_data());
    tracing::info!(
        devices = store.devices().len(),
        users = store.users().len(),
        tickets = store.tickets().len(),
        policies = store.policies().len(),
        "Resource store seeded"
    );

    // Build authentication components
    let validator: Arc<dyn CredentialValidator> =
        Arc::new(SharedSecretValidator::new(&config.auth.api_key));

    // Build application state
    let state = AppState {
        store,
        environment: config.service.environment.clone(),
    };

    // Build router
    let app = build_router(state, validator);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;

    tracing::info!(address = %addr, "Server listening");
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
