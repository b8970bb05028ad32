use crate::api::{internal, not_found, ApiError, ErrorResponse};
use crate::engagement::refresh_trending_row;
use crate::schema::recipes;
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use diesel::prelude::*;
use uuid::Uuid;

use crate::state::SharedState;

#[utoipa::path(
    post,
    path = "/api/recipes/{id}/view",
    tag = "recipes",
    params(("id" = Uuid, Path, description = "Recipe ID")),
    responses(
        (status = 204, description = "View counted"),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn record_view(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let mut conn = state
        .pool
        .get()
        .map_err(|_| internal("Database connection failed"))?;

    // Views sit in the score's denominator, so the trending row moves too.
    let updated = conn
        .transaction(|conn| {
            let updated = diesel::update(recipes::table.find(id))
                .set(recipes::views_count.eq(recipes::views_count + 1))
                .execute(conn)?;

            if updated > 0 {
                refresh_trending_row(conn, id)?;
            }

            Ok::<usize, diesel::result::Error>(updated)
        })
        .map_err(|e| {
            tracing::error!("Failed to count view: {}", e);
            internal("Failed to count view")
        })?;

    if updated == 0 {
        return Err(not_found("Recipe not found"));
    }

    Ok(StatusCode::NO_CONTENT)
}
