use crate::api::{internal, not_found, ApiError, ErrorResponse};
use crate::schema::recipes;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
};
use diesel::prelude::*;
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::state::SharedState;

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct DeleteParams {
    /// Author performing the deletion.
    pub user_id: Uuid,
}

#[utoipa::path(
    delete,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(
        ("id" = Uuid, Path, description = "Recipe ID"),
        DeleteParams
    ),
    responses(
        (status = 204, description = "Recipe deleted; likes, saves, reviews, and plan items cascade"),
        (status = 404, description = "Recipe not found for this author", body = ErrorResponse)
    )
)]
pub async fn delete_recipe(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Query(params): Query<DeleteParams>,
) -> Result<StatusCode, ApiError> {
    let mut conn = state
        .pool
        .get()
        .map_err(|_| internal("Database connection failed"))?;

    let deleted = diesel::delete(
        recipes::table
            .filter(recipes::id.eq(id))
            .filter(recipes::user_id.eq(params.user_id)),
    )
    .execute(&mut conn)
    .map_err(|e| {
        tracing::error!("Failed to delete recipe: {}", e);
        internal("Failed to delete recipe")
    })?;

    if deleted == 0 {
        return Err(not_found("Recipe not found"));
    }

    Ok(StatusCode::NO_CONTENT)
}
