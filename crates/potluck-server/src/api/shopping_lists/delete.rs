use crate::api::{internal, not_found, ApiError, ErrorResponse};
use crate::schema::shopping_lists;
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use diesel::prelude::*;
use uuid::Uuid;

use crate::state::SharedState;

#[utoipa::path(
    delete,
    path = "/api/shopping-lists/{id}",
    tag = "shopping-lists",
    params(("id" = Uuid, Path, description = "Shopping list ID")),
    responses(
        (status = 204, description = "Shopping list deleted"),
        (status = 404, description = "Shopping list not found", body = ErrorResponse)
    )
)]
pub async fn delete_list(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let mut conn = state
        .pool
        .get()
        .map_err(|_| internal("Database connection failed"))?;

    let deleted = diesel::delete(shopping_lists::table.find(id))
        .execute(&mut conn)
        .map_err(|_| internal("Failed to delete shopping list"))?;

    if deleted == 0 {
        return Err(not_found("Shopping list not found"));
    }

    Ok(StatusCode::NO_CONTENT)
}
