use crate::api::{internal, ApiError};
use crate::models::ShoppingList;
use crate::schema::shopping_lists;
use axum::{
    extract::{Query, State},
    Json,
};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use super::ShoppingListResponse;
use crate::state::SharedState;

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ListsParams {
    /// Owner whose lists to return.
    pub user_id: Uuid,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ShoppingListsResponse {
    pub lists: Vec<ShoppingListResponse>,
}

#[utoipa::path(
    get,
    path = "/api/shopping-lists",
    tag = "shopping-lists",
    params(ListsParams),
    responses(
        (status = 200, description = "User's shopping lists, most recently updated first", body = ShoppingListsResponse)
    )
)]
pub async fn list_lists(
    State(state): State<SharedState>,
    Query(params): Query<ListsParams>,
) -> Result<Json<ShoppingListsResponse>, ApiError> {
    let mut conn = state
        .pool
        .get()
        .map_err(|_| internal("Database connection failed"))?;

    let results: Vec<ShoppingList> = shopping_lists::table
        .filter(shopping_lists::user_id.eq(params.user_id))
        .select(ShoppingList::as_select())
        .order(shopping_lists::updated_at.desc())
        .load(&mut conn)
        .map_err(|_| internal("Failed to fetch shopping lists"))?;

    Ok(Json(ShoppingListsResponse {
        lists: results.into_iter().map(Into::into).collect(),
    }))
}
