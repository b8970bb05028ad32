use crate::api::{internal, not_found, ApiError, ErrorResponse};
use crate::engagement::{is_unique_violation, refresh_trending_row};
use crate::models::NewRecipeLike;
use crate::schema::{recipe_likes, recipes};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use diesel::prelude::*;
use uuid::Uuid;

use super::ActorRequest;
use crate::state::SharedState;

#[utoipa::path(
    put,
    path = "/api/recipes/{id}/like",
    tag = "recipes",
    params(("id" = Uuid, Path, description = "Recipe ID")),
    request_body = ActorRequest,
    responses(
        (status = 204, description = "Like recorded (or already present)"),
        (status = 404, description = "Recipe or user not found", body = ErrorResponse)
    )
)]
pub async fn like_recipe(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ActorRequest>,
) -> Result<StatusCode, ApiError> {
    let mut conn = state
        .pool
        .get()
        .map_err(|_| internal("Database connection failed"))?;

    // Join row, counter, and trending row move together or not at all.
    let result = conn.transaction(|conn| {
        diesel::insert_into(recipe_likes::table)
            .values(&NewRecipeLike {
                recipe_id: id,
                user_id: req.user_id,
            })
            .execute(conn)?;

        diesel::update(recipes::table.find(id))
            .set(recipes::likes_count.eq(recipes::likes_count + 1))
            .execute(conn)?;

        refresh_trending_row(conn, id)
    });

    match result {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        // Second like from the same user: toggle is idempotent, counter untouched.
        Err(ref e) if is_unique_violation(e) => Ok(StatusCode::NO_CONTENT),
        Err(diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::ForeignKeyViolation,
            _,
        )) => Err(not_found("Recipe or user not found")),
        Err(e) => {
            tracing::error!("Failed to like recipe: {}", e);
            Err(internal("Failed to like recipe"))
        }
    }
}

#[utoipa::path(
    delete,
    path = "/api/recipes/{id}/like",
    tag = "recipes",
    params(("id" = Uuid, Path, description = "Recipe ID")),
    request_body = ActorRequest,
    responses(
        (status = 204, description = "Like removed (or never existed)")
    )
)]
pub async fn unlike_recipe(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ActorRequest>,
) -> Result<StatusCode, ApiError> {
    let mut conn = state
        .pool
        .get()
        .map_err(|_| internal("Database connection failed"))?;

    conn.transaction(|conn| {
        let removed = diesel::delete(
            recipe_likes::table
                .filter(recipe_likes::recipe_id.eq(id))
                .filter(recipe_likes::user_id.eq(req.user_id)),
        )
        .execute(conn)?;

        // Nothing to undo for a like that was never there.
        if removed == 0 {
            return Ok(());
        }

        diesel::update(recipes::table.find(id))
            .set(recipes::likes_count.eq(recipes::likes_count - 1))
            .execute(conn)?;

        refresh_trending_row(conn, id)
    })
    .map_err(|e| {
        tracing::error!("Failed to unlike recipe: {}", e);
        internal("Failed to unlike recipe")
    })?;

    Ok(StatusCode::NO_CONTENT)
}
