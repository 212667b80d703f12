pub mod api;

use crate::constants::MAX_CSV_SIZE;
use crate::services::SharedHealthStats;
use crate::utils::get_public_dir;
use axum::extract::{DefaultBodyLimit, FromRef};
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

/// Application state shared across all handlers
///
/// Holds health counters only. No uploaded series lives here: every upload is
/// one pure ingest -> derive -> describe pass inside its own request, so
/// nothing can leak between uploads.
#[derive(Clone)]
pub struct AppState {
    pub health: SharedHealthStats,
}

impl FromRef<AppState> for SharedHealthStats {
    fn from_ref(app_state: &AppState) -> SharedHealthStats {
        app_state.health.clone()
    }
}

/// Start the axum server
pub async fn serve(
    shared_health_stats: SharedHealthStats,
    port: u16,
) -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    tracing::info!("Starting stockboard server");

    let app_state = AppState {
        health: shared_health_stats,
    };

    // The dashboard is served same-origin; keep CORS open for tools that
    // post CSVs from elsewhere
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
        .allow_headers(Any);

    let public_dir = get_public_dir();
    tracing::info!("Using public directory: {}", public_dir.display());

    tracing::info!("Registering routes:");
    tracing::info!("  GET  /          (dashboard page)");
    tracing::info!("  POST /dashboard (multipart CSV upload -> chart JSON)");
    tracing::info!("  GET  /health");
    tracing::info!("  GET  /public/*  (static files from {})", public_dir.display());

    // Build router with routes
    let app = Router::new()
        .route("/", get(api::index_handler))
        .route("/dashboard", post(api::dashboard_handler))
        .route("/health", get(api::health_handler))
        .nest_service("/public", ServeDir::new(public_dir))
        .layer(DefaultBodyLimit::max(MAX_CSV_SIZE + 64 * 1024))
        .layer(cors)
        .with_state(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!(%addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
