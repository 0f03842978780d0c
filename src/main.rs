use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::{router, AppState};
use triage_core::{EngineConfig, DEFAULT_REST_ADDR};

/// Main entry point for the triage service
///
/// Loads `.env`, resolves the engine configuration once and serves the REST API.
///
/// # Environment Variables
/// - `TRIAGE_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `TRIAGE_CONFIG_FILE`: Optional YAML file overriding the built-in engine tables
/// - `RUST_LOG`: Log filter, on top of `info` for the triage crates
///
/// # Returns
/// * `Ok(())` - If the server starts and runs successfully
/// * `Err(anyhow::Error)` - If configuration, startup or serving fails
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("triage_run=info".parse()?)
                .add_directive("triage_core=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr = std::env::var("TRIAGE_REST_ADDR").unwrap_or_else(|_| DEFAULT_REST_ADDR.into());
    let config_file = std::env::var("TRIAGE_CONFIG_FILE").ok().map(PathBuf::from);

    let cfg = Arc::new(EngineConfig::load(config_file.as_deref())?);
    tracing::info!(
        conditions = cfg.profiles().count(),
        categories = cfg.categories().len(),
        "engine configuration resolved"
    );

    let rest_app = router(AppState::in_memory(cfg));

    tracing::info!("++ Starting triage REST on {}", rest_addr);
    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, rest_app).await?;

    Ok(())
}
