pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use axum::routing::{get as get_route, post};
use axum::Router;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::ShoppingList;
use crate::state::SharedState;

pub fn router() -> Router<SharedState> {
    Router::new()
        .route(
            "/api/shopping-lists",
            post(create::create_list).get(list::list_lists),
        )
        .route(
            "/api/shopping-lists/{id}",
            get_route(get::get_list)
                .put(update::update_list)
                .delete(delete::delete_list),
        )
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ShoppingListResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    /// Opaque line items; the shape is owned by the client.
    pub items: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ShoppingList> for ShoppingListResponse {
    fn from(list: ShoppingList) -> Self {
        Self {
            id: list.id,
            user_id: list.user_id,
            name: list.name,
            items: list.items,
            created_at: list.created_at,
            updated_at: list.updated_at,
        }
    }
}
