use std::sync::Arc;

use anyhow::Context;
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tokio::sync::RwLock;
use tower_http::{
    cors::{AllowCredentials, AllowHeaders, AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

mod config;
mod error;
mod handlers;
mod models;
mod store;

use crate::config::Config;
use crate::store::ItemStore;

/// Shared application state, cheap to clone (all heap behind Arc).
#[derive(Clone)]
pub struct AppState {
    pub items: Arc<RwLock<ItemStore>>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present (deployments inject real env vars instead)
    dotenv::dotenv().ok();

    // Structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,item_service=debug".parse().unwrap()),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;

    info!("╔══════════════════════════════╗");
    info!("║  Item Service — Rust + Axum  ║");
    info!("╚══════════════════════════════╝");

    let cors_origin: HeaderValue = config
        .cors_origin
        .parse()
        .with_context(|| format!("CORS_ORIGIN is not a valid origin: {}", config.cors_origin))?;

    let store = ItemStore::seeded();
    info!(count = store.len(), "Seeded in-memory item store");

    let state = AppState {
        items: Arc::new(RwLock::new(store)),
    };

    let app = build_router(state, cors_origin);

    let addr = format!("{}:{}", config.host, config.port);
    info!("Listening on http://{}", addr);
    info!(
        "Allowing credentialed cross-origin requests from {}",
        config.cors_origin
    );

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState, cors_origin: HeaderValue) -> Router {
    // Credentialed CORS cannot use wildcards; mirroring the preflight request
    // grants the configured origin every method and header it asks for. The
    // origin goes in as a list rather than an exact value: an exact value is
    // stamped on every response, while list semantics echo the origin only
    // when the request matches. Credentials are gated on the same match.
    let allowed = cors_origin.clone();
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list([cors_origin]))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(AllowCredentials::predicate(move |origin, _| {
            origin == &allowed
        }));

    Router::new()
        // ── Status ──────────────────────────────────────────────────────────
        .route("/", get(handlers::root))
        .route("/api/health", get(handlers::health))

        // ── Items ───────────────────────────────────────────────────────────
        .route(
            "/api/items",
            get(handlers::items::list_items).post(handlers::items::create_item),
        )
        .route("/api/items/:id", get(handlers::items::get_item))

        // ── Echo ────────────────────────────────────────────────────────────
        .route("/api/message", post(handlers::message::post_message))

        // ── Middleware ──────────────────────────────────────────────────────
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
