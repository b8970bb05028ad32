use crate::api::{internal, not_found, ApiError, ErrorResponse};
use crate::engagement::{is_unique_violation, refresh_trending_row};
use crate::models::NewSavedRecipe;
use crate::schema::{recipes, saved_recipes};
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
    path = "/api/recipes/{id}/save",
    tag = "recipes",
    params(("id" = Uuid, Path, description = "Recipe ID")),
    request_body = ActorRequest,
    responses(
        (status = 204, description = "Save recorded (or already present)"),
        (status = 404, description = "Recipe or user not found", body = ErrorResponse)
    )
)]
pub async fn save_recipe(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ActorRequest>,
) -> Result<StatusCode, ApiError> {
    let mut conn = state
        .pool
        .get()
        .map_err(|_| internal("Database connection failed"))?;

    let result = conn.transaction(|conn| {
        diesel::insert_into(saved_recipes::table)
            .values(&NewSavedRecipe {
                recipe_id: id,
                user_id: req.user_id,
            })
            .execute(conn)?;

        diesel::update(recipes::table.find(id))
            .set(recipes::saves_count.eq(recipes::saves_count + 1))
            .execute(conn)?;

        refresh_trending_row(conn, id)
    });

    match result {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(ref e) if is_unique_violation(e) => Ok(StatusCode::NO_CONTENT),
        Err(diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::ForeignKeyViolation,
            _,
        )) => Err(not_found("Recipe or user not found")),
        Err(e) => {
            tracing::error!("Failed to save recipe: {}", e);
            Err(internal("Failed to save recipe"))
        }
    }
}

#[utoipa::path(
    delete,
    path = "/api/recipes/{id}/save",
    tag = "recipes",
    params(("id" = Uuid, Path, description = "Recipe ID")),
    request_body = ActorRequest,
    responses(
        (status = 204, description = "Save removed (or never existed)")
    )
)]
pub async fn unsave_recipe(
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
            saved_recipes::table
                .filter(saved_recipes::recipe_id.eq(id))
                .filter(saved_recipes::user_id.eq(req.user_id)),
        )
        .execute(conn)?;

        if removed == 0 {
            return Ok(());
        }

        diesel::update(recipes::table.find(id))
            .set(recipes::saves_count.eq(recipes::saves_count - 1))
            .execute(conn)?;

        refresh_trending_row(conn, id)
    })
    .map_err(|e| {
        tracing::error!("Failed to unsave recipe: {}", e);
        internal("Failed to unsave recipe")
    })?;

    Ok(StatusCode::NO_CONTENT)
}
