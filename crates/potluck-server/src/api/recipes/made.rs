use crate::api::{bad_request, internal, not_found, ApiError, ErrorResponse};
use crate::engagement::refresh_trending_row;
use crate::models::NewMadeRecipe;
use crate::schema::{made_recipes, recipes};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use diesel::prelude::*;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::state::SharedState;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct MadeRequest {
    pub user_id: Uuid,
    #[serde(default)]
    pub rating: Option<i32>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub photo_urls: Vec<String>,
}

#[utoipa::path(
    post,
    path = "/api/recipes/{id}/made",
    tag = "recipes",
    params(("id" = Uuid, Path, description = "Recipe ID")),
    request_body = MadeRequest,
    responses(
        (status = 201, description = "Cook recorded; repeat cooks stack"),
        (status = 400, description = "Rating out of range", body = ErrorResponse),
        (status = 404, description = "Recipe or user not found", body = ErrorResponse)
    )
)]
pub async fn record_made(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(req): Json<MadeRequest>,
) -> Result<StatusCode, ApiError> {
    if let Some(rating) = req.rating {
        if !(1..=5).contains(&rating) {
            return Err(bad_request("Rating must be between 1 and 5"));
        }
    }

    let mut conn = state
        .pool
        .get()
        .map_err(|_| internal("Database connection failed"))?;

    let photo_urls: Vec<Option<String>> = req.photo_urls.iter().cloned().map(Some).collect();

    let result = conn.transaction(|conn| {
        diesel::insert_into(made_recipes::table)
            .values(&NewMadeRecipe {
                recipe_id: id,
                user_id: req.user_id,
                rating: req.rating,
                notes: req.notes.as_deref(),
                photo_urls: &photo_urls,
            })
            .execute(conn)?;

        diesel::update(recipes::table.find(id))
            .set(recipes::made_count.eq(recipes::made_count + 1))
            .execute(conn)?;

        refresh_trending_row(conn, id)
    });

    match result {
        Ok(()) => Ok(StatusCode::CREATED),
        Err(diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::ForeignKeyViolation,
            _,
        )) => Err(not_found("Recipe or user not found")),
        Err(e) => {
            tracing::error!("Failed to record made: {}", e);
            Err(internal("Failed to record made"))
        }
    }
}
