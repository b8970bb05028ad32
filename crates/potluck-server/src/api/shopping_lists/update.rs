use crate::api::{bad_request, internal, not_found, ApiError, ErrorResponse};
use crate::models::ShoppingList;
use crate::schema::shopping_lists;
use axum::{
    extract::{Path, State},
    Json,
};
use diesel::prelude::*;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::ShoppingListResponse;
use crate::state::SharedState;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateShoppingListRequest {
    #[serde(default)]
    pub name: Option<String>,
    /// Replaces the whole items document when present.
    #[serde(default)]
    pub items: Option<serde_json::Value>,
}

#[utoipa::path(
    put,
    path = "/api/shopping-lists/{id}",
    tag = "shopping-lists",
    params(("id" = Uuid, Path, description = "Shopping list ID")),
    request_body = UpdateShoppingListRequest,
    responses(
        (status = 200, description = "Updated shopping list", body = ShoppingListResponse),
        (status = 400, description = "Empty update", body = ErrorResponse),
        (status = 404, description = "Shopping list not found", body = ErrorResponse)
    )
)]
pub async fn update_list(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateShoppingListRequest>,
) -> Result<Json<ShoppingListResponse>, ApiError> {
    if req.name.is_none() && req.items.is_none() {
        return Err(bad_request("Nothing to update"));
    }
    if let Some(name) = &req.name {
        if name.trim().is_empty() {
            return Err(bad_request("Name cannot be empty"));
        }
    }

    let mut conn = state
        .pool
        .get()
        .map_err(|_| internal("Database connection failed"))?;

    let updated: Option<ShoppingList> = match (req.name, req.items) {
        (Some(name), Some(items)) => diesel::update(shopping_lists::table.find(id))
            .set((
                shopping_lists::name.eq(name.trim().to_string()),
                shopping_lists::items.eq(items),
            ))
            .returning(ShoppingList::as_returning())
            .get_result(&mut conn)
            .optional(),
        (Some(name), None) => diesel::update(shopping_lists::table.find(id))
            .set(shopping_lists::name.eq(name.trim().to_string()))
            .returning(ShoppingList::as_returning())
            .get_result(&mut conn)
            .optional(),
        (None, Some(items)) => diesel::update(shopping_lists::table.find(id))
            .set(shopping_lists::items.eq(items))
            .returning(ShoppingList::as_returning())
            .get_result(&mut conn)
            .optional(),
        (None, None) => unreachable!("guarded above"),
    }
    .map_err(|_| internal("Failed to update shopping list"))?;

    let list = updated.ok_or_else(|| not_found("Shopping list not found"))?;

    Ok(Json(list.into()))
}
