use crate::api::{bad_request, internal, not_found, ApiError, ErrorResponse};
use crate::engagement::is_unique_violation;
use crate::models::NewFollow;
use crate::schema::follows;
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
pub struct FollowRequest {
    pub follower_id: Uuid,
}

#[utoipa::path(
    put,
    path = "/api/users/{id}/follow",
    tag = "users",
    params(("id" = Uuid, Path, description = "User being followed")),
    request_body = FollowRequest,
    responses(
        (status = 204, description = "Follow edge exists (created or already present)"),
        (status = 400, description = "Self-follow rejected", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn follow_user(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(req): Json<FollowRequest>,
) -> Result<StatusCode, ApiError> {
    // The unique-pair constraint alone would allow it, so the guard lives here.
    if req.follower_id == id {
        return Err(bad_request("Users cannot follow themselves"));
    }

    let mut conn = state
        .pool
        .get()
        .map_err(|_| internal("Database connection failed"))?;

    let result = diesel::insert_into(follows::table)
        .values(&NewFollow {
            follower_id: req.follower_id,
            following_id: id,
        })
        .execute(&mut conn);

    match result {
        Ok(_) => Ok(StatusCode::NO_CONTENT),
        // Already following: idempotent no-op.
        Err(ref e) if is_unique_violation(e) => Ok(StatusCode::NO_CONTENT),
        Err(diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::ForeignKeyViolation,
            _,
        )) => Err(not_found("User not found")),
        Err(e) => {
            tracing::error!("Failed to create follow: {}", e);
            Err(internal("Failed to create follow"))
        }
    }
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}/follow",
    tag = "users",
    params(("id" = Uuid, Path, description = "User being unfollowed")),
    request_body = FollowRequest,
    responses(
        (status = 204, description = "Follow edge removed (or never existed)")
    )
)]
pub async fn unfollow_user(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(req): Json<FollowRequest>,
) -> Result<StatusCode, ApiError> {
    let mut conn = state
        .pool
        .get()
        .map_err(|_| internal("Database connection failed"))?;

    diesel::delete(
        follows::table
            .filter(follows::follower_id.eq(req.follower_id))
            .filter(follows::following_id.eq(id)),
    )
    .execute(&mut conn)
    .map_err(|_| internal("Failed to remove follow"))?;

    Ok(StatusCode::NO_CONTENT)
}
