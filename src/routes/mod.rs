//! API Routes
//!
//! HTTP endpoints exposed by the proxy:
//! - `/api/podcasts` - Podcast search relayed to the upstream listing API
//! - `/api/health` - Health checks

pub mod health;
pub mod podcasts;

use axum::Router;
use tower_http::trace::TraceLayer;
use crate::middleware::apply_cors;
use crate::models::AppState;
use tracing::info;

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    let api_router = Router::new()
        .merge(podcasts::router(state.clone()))
        .merge(health::router(state));

    apply_cors(api_router).layer(TraceLayer::new_for_http())
}
