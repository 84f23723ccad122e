use axum::{
    Router,
    routing::get,
    Json,
    extract::{rejection::QueryRejection, Query, State},
    http::header,
    response::IntoResponse,
};
use crate::models::{AppState, PodcastsQuery, PodcastsResponse};
use crate::types::AppResult;
use tracing::info;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/podcasts", get(list_podcasts))
        .with_state(state)
}

/// GET /api/podcasts?search=<text>&page=<page>
pub async fn list_podcasts(
    State(state): State<AppState>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> AppResult<impl IntoResponse> {
    let Query(pairs) = pairs?;
    let query = PodcastsQuery::from_pairs(pairs);
    info!(search = %query.search, page = %query.page, "Received podcasts request");

    let items = state
        .podcasts
        .search_podcasts(&query.search, &query.page)
        .await?;

    Ok((
        [(header::ACCESS_CONTROL_ALLOW_ORIGIN, "*")],
        Json(PodcastsResponse { items }),
    ))
}
