use crate::api::{internal, not_found, ApiError, ErrorResponse};
use crate::models::ShoppingList;
use crate::schema::shopping_lists;
use axum::{
    extract::{Path, State},
    Json,
};
use diesel::prelude::*;
use uuid::Uuid;

use super::ShoppingListResponse;
use crate::state::SharedState;

#[utoipa::path(
    get,
    path = "/api/shopping-lists/{id}",
    tag = "shopping-lists",
    params(("id" = Uuid, Path, description = "Shopping list ID")),
    responses(
        (status = 200, description = "Shopping list", body = ShoppingListResponse),
        (status = 404, description = "Shopping list not found", body = ErrorResponse)
    )
)]
pub async fn get_list(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ShoppingListResponse>, ApiError> {
    let mut conn = state
        .pool
        .get()
        .map_err(|_| internal("Database connection failed"))?;

    let found: ShoppingList = shopping_lists::table
        .find(id)
        .select(ShoppingList::as_select())
        .first(&mut conn)
        .optional()
        .map_err(|_| internal("Failed to fetch shopping list"))?
        .ok_or_else(|| not_found("Shopping list not found"))?;

    Ok(Json(found.into()))
}
