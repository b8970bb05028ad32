use crate::api::{internal, ApiError};
use crate::engagement::refresh_all_trending;
use axum::{extract::State, Json};
use diesel::Connection;
use serde::Serialize;
use utoipa::ToSchema;

use crate::state::SharedState;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RefreshTrendingResponse {
    /// Number of published recipes rescored.
    pub refreshed: usize,
}

#[utoipa::path(
    post,
    path = "/api/trending/refresh",
    tag = "trending",
    responses(
        (status = 200, description = "Every published recipe rescored and upserted", body = RefreshTrendingResponse)
    )
)]
pub async fn refresh_trending(
    State(state): State<SharedState>,
) -> Result<Json<RefreshTrendingResponse>, ApiError> {
    let mut conn = state
        .pool
        .get()
        .map_err(|_| internal("Database connection failed"))?;

    let refreshed = conn
        .transaction(|conn| refresh_all_trending(conn))
        .map_err(|e| {
            tracing::error!("Trending refresh failed: {}", e);
            internal("Trending refresh failed")
        })?;

    tracing::info!(refreshed = refreshed, "trending scores refreshed");

    Ok(Json(RefreshTrendingResponse { refreshed }))
}
