use crate::api::{internal, not_found, ApiError, ErrorResponse};
use crate::schema::users;
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use diesel::prelude::*;
use uuid::Uuid;

use crate::state::SharedState;

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "users",
    params(("id" = Uuid, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted; owned rows cascade, food image references null out"),
        (status = 404, description = "User not found", body = ErrorResponse)
    )
)]
pub async fn delete_user(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let mut conn = state
        .pool
        .get()
        .map_err(|_| internal("Database connection failed"))?;

    // The schema owns the fan-out: recipes, interactions, plans, lists, and
    // follow edges cascade with the user row.
    let deleted = diesel::delete(users::table.find(id))
        .execute(&mut conn)
        .map_err(|e| {
            tracing::error!("Failed to delete user: {}", e);
            internal("Failed to delete user")
        })?;

    if deleted == 0 {
        return Err(not_found("User not found"));
    }

    Ok(StatusCode::NO_CONTENT)
}
