use crate::api::{bad_request, internal, ApiError, ErrorResponse};
use crate::models::{NewShoppingList, ShoppingList};
use crate::schema::shopping_lists;
use axum::{extract::State, http::StatusCode, Json};
use diesel::prelude::*;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::ShoppingListResponse;
use crate::state::SharedState;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateShoppingListRequest {
    pub user_id: Uuid,
    pub name: String,
    #[serde(default = "empty_items")]
    pub items: serde_json::Value,
}

fn empty_items() -> serde_json::Value {
    serde_json::json!([])
}

#[utoipa::path(
    post,
    path = "/api/shopping-lists",
    tag = "shopping-lists",
    request_body = CreateShoppingListRequest,
    responses(
        (status = 201, description = "Shopping list created", body = ShoppingListResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse)
    )
)]
pub async fn create_list(
    State(state): State<SharedState>,
    Json(req): Json<CreateShoppingListRequest>,
) -> Result<(StatusCode, Json<ShoppingListResponse>), ApiError> {
    if req.name.trim().is_empty() {
        return Err(bad_request("Name is required"));
    }

    let mut conn = state
        .pool
        .get()
        .map_err(|_| internal("Database connection failed"))?;

    let created: ShoppingList = diesel::insert_into(shopping_lists::table)
        .values(&NewShoppingList {
            user_id: req.user_id,
            name: req.name.trim(),
            items: req.items,
        })
        .returning(ShoppingList::as_returning())
        .get_result(&mut conn)
        .map_err(|e| match e {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::ForeignKeyViolation,
                _,
            ) => bad_request("User does not exist"),
            _ => internal("Failed to create shopping list"),
        })?;

    Ok((StatusCode::CREATED, Json(created.into())))
}
