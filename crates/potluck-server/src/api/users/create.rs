use crate::api::{bad_request, conflict, internal, ApiError, ErrorResponse};
use crate::models::{NewUser, User};
use crate::schema::users;
use axum::{extract::State, http::StatusCode, Json};
use diesel::prelude::*;
use serde::Deserialize;
use utoipa::ToSchema;

use super::UserResponse;
use crate::state::SharedState;

pub const PATH: &str = "/api/users";

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub email: String,
    pub username: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 409, description = "Email or username already taken", body = ErrorResponse)
    )
)]
pub async fn create_user(
    State(state): State<SharedState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    if req.email.trim().is_empty() || req.username.trim().is_empty() {
        return Err(bad_request("Email and username are required"));
    }

    let mut conn = state
        .pool
        .get()
        .map_err(|_| internal("Database connection failed"))?;

    let new_user = NewUser {
        email: req.email.trim(),
        username: req.username.trim(),
        display_name: req.display_name.as_deref(),
        bio: req.bio.as_deref(),
        avatar_url: req.avatar_url.as_deref(),
    };

    let user: User = diesel::insert_into(users::table)
        .values(&new_user)
        .returning(User::as_returning())
        .get_result(&mut conn)
        .map_err(|e| match e {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::UniqueViolation,
                _,
            ) => conflict("Email or username already taken"),
            _ => internal("Failed to create user"),
        })?;

    Ok((StatusCode::CREATED, Json(user.into())))
}
