use crate::api::{internal, not_found, ApiError, ErrorResponse};
use crate::models::User;
use crate::schema::{follows, recipes, users};
use axum::{
    extract::{Path, State},
    Json,
};
use diesel::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::UserResponse;
use crate::state::SharedState;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserProfileResponse {
    #[serde(flatten)]
    pub user: UserResponse,
    pub recipe_count: i64,
    pub follower_count: i64,
    pub following_count: i64,
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 200, description = "User profile with graph counts", body = UserProfileResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn get_user(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<UserProfileResponse>, ApiError> {
    let mut conn = state
        .pool
        .get()
        .map_err(|_| internal("Database connection failed"))?;

    let user: User = users::table
        .find(id)
        .select(User::as_select())
        .first(&mut conn)
        .optional()
        .map_err(|_| internal("Failed to fetch user"))?
        .ok_or_else(|| not_found("User not found"))?;

    let recipe_count: i64 = recipes::table
        .filter(recipes::user_id.eq(id))
        .count()
        .get_result(&mut conn)
        .map_err(|_| internal("Failed to count recipes"))?;

    let follower_count: i64 = follows::table
        .filter(follows::following_id.eq(id))
        .count()
        .get_result(&mut conn)
        .map_err(|_| internal("Failed to count followers"))?;

    let following_count: i64 = follows::table
        .filter(follows::follower_id.eq(id))
        .count()
        .get_result(&mut conn)
        .map_err(|_| internal("Failed to count following"))?;

    Ok(Json(UserProfileResponse {
        user: user.into(),
        recipe_count,
        follower_count,
        following_count,
    }))
}
