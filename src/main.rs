//! CyberZone server binary.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use secrecy::{ExposeSecret, SecretString};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use cyberzone::adapters::auth::HmacTokenSigner;
use cyberzone::adapters::http::{api_router, ApiState};
use cyberzone::adapters::memory::{
    InMemoryCatalogStore, InMemoryProgressStore, InMemorySessionStore, InMemoryUserStore,
};
use cyberzone::adapters::seed;
use cyberzone::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    config.validate().context("invalid configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    // Seed stores once at startup; they are the process's only state.
    let users = match &config.seed.users_path {
        Some(path) => seed::load_users(path)
            .with_context(|| format!("failed to load user seed from {}", path.display()))?,
        None => seed::users_from_json(seed::DEFAULT_USERS_JSON)
            .context("compiled-in user seed is invalid")?,
    };
    let (modules, labs) = seed::default_catalog();
    tracing::info!(
        users = users.len(),
        modules = modules.len(),
        labs = labs.len(),
        "seed data loaded"
    );

    let state = ApiState::new(
        Arc::new(InMemoryUserStore::new(users)),
        Arc::new(InMemoryCatalogStore::new(modules, labs)),
        Arc::new(InMemoryProgressStore::new()),
        Arc::new(InMemorySessionStore::new()),
        Arc::new(HmacTokenSigner::new(SecretString::new(
            config.auth.session_key.expose_secret().clone(),
        ))),
        config.auth.session_ttl(),
    );

    let cors = if config.server.cors_origins_list().is_empty() {
        CorsLayer::permissive()
    } else {
        let origins: Vec<_> = config
            .server
            .cors_origins_list()
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new().allow_origin(AllowOrigin::list(origins))
    };

    let app = api_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid));

    let addr = config.server.socket_addr();
    tracing::info!(%addr, "cyberzone listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app)
        .await
        .context("server exited with error")?;

    Ok(())
}
