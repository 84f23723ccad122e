// Podcast Proxy - relays podcast search results from a third-party listing API

pub mod config;
pub mod models;
pub mod types;
pub mod upstream;  // Upstream podcast listing API client
pub mod routes;
pub mod middleware;

// Re-exports for convenience
pub use config::Config;
pub use models::AppState;

pub fn create_router(state: AppState) -> axum::Router {
    routes::create_router(state)
}
