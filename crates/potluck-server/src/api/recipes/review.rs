use crate::api::{bad_request, internal, not_found, ApiError, ErrorResponse};
use crate::engagement::refresh_review_stats;
use crate::models::NewRecipeReview;
use crate::schema::recipe_reviews;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use diesel::prelude::*;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::state::SharedState;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ReviewRequest {
    pub user_id: Uuid,
    /// 1 to 5 stars.
    pub rating: i32,
    #[serde(default)]
    pub comment: Option<String>,
}

#[utoipa::path(
    put,
    path = "/api/recipes/{id}/review",
    tag = "recipes",
    params(("id" = Uuid, Path, description = "Recipe ID")),
    request_body = ReviewRequest,
    responses(
        (status = 204, description = "Review written; a second review from the same user replaces the first"),
        (status = 400, description = "Rating out of range", body = ErrorResponse),
        (status = 404, description = "Recipe or user not found", body = ErrorResponse)
    )
)]
pub async fn review_recipe(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ReviewRequest>,
) -> Result<StatusCode, ApiError> {
    if !(1..=5).contains(&req.rating) {
        return Err(bad_request("Rating must be between 1 and 5"));
    }

    let mut conn = state
        .pool
        .get()
        .map_err(|_| internal("Database connection failed"))?;

    let result = conn.transaction(|conn| {
        // One review per (recipe, user): the unique pair turns a second
        // submission into an update.
        diesel::insert_into(recipe_reviews::table)
            .values(&NewRecipeReview {
                recipe_id: id,
                user_id: req.user_id,
                rating: req.rating,
                comment: req.comment.as_deref(),
            })
            .on_conflict((recipe_reviews::recipe_id, recipe_reviews::user_id))
            .do_update()
            .set((
                recipe_reviews::rating.eq(req.rating),
                recipe_reviews::comment.eq(req.comment.as_deref()),
                recipe_reviews::updated_at.eq(Utc::now()),
            ))
            .execute(conn)?;

        refresh_review_stats(conn, id)
    });

    match result {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::ForeignKeyViolation,
            _,
        )) => Err(not_found("Recipe or user not found")),
        Err(e) => {
            tracing::error!("Failed to write review: {}", e);
            Err(internal("Failed to write review"))
        }
    }
}

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct DeleteReviewParams {
    pub user_id: Uuid,
}

#[utoipa::path(
    delete,
    path = "/api/recipes/{id}/review",
    tag = "recipes",
    params(
        ("id" = Uuid, Path, description = "Recipe ID"),
        DeleteReviewParams
    ),
    responses(
        (status = 204, description = "Review removed (or never existed)")
    )
)]
pub async fn delete_review(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Query(params): Query<DeleteReviewParams>,
) -> Result<StatusCode, ApiError> {
    let mut conn = state
        .pool
        .get()
        .map_err(|_| internal("Database connection failed"))?;

    conn.transaction(|conn| {
        let removed = diesel::delete(
            recipe_reviews::table
                .filter(recipe_reviews::recipe_id.eq(id))
                .filter(recipe_reviews::user_id.eq(params.user_id)),
        )
        .execute(conn)?;

        if removed == 0 {
            return Ok(());
        }

        refresh_review_stats(conn, id)
    })
    .map_err(|e| {
        tracing::error!("Failed to delete review: {}", e);
        internal("Failed to delete review")
    })?;

    Ok(StatusCode::NO_CONTENT)
}
