use std::env;

use axum::middleware as axum_mw;
use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

mod error;
mod middleware;
mod routes;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let addr = env::var("ATTUNE_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let state = AppState::default();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        // Health (no auth)
        .route("/health", get(routes::health::health_check))
        // Domain configuration (public schema data)
        .route("/domains", get(routes::domains::list_domains))
        .route("/domains/{name}", get(routes::domains::get_domain_detail))
        // Submission intake and report retrieval
        .route(
            "/submissions",
            post(routes::submissions::create_submission),
        )
        .route("/reports", get(routes::reports::list_reports))
        .route("/reports/{id}", get(routes::reports::get_report))
        .route(
            "/reports/{id}/insights",
            put(routes::reports::attach_insights),
        )
        .layer(axum_mw::from_fn(middleware::audit::audit_log))
        .layer(cors)
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "attune api listening");
    axum::serve(listener, app).await?;

    Ok(())
}
