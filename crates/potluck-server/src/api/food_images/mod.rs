pub mod analyze;
pub mod create;
pub mod get;

use axum::routing::{get as get_route, post};
use axum::Router;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::FoodImage;
use crate::state::SharedState;

pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/api/food-images", post(create::create_food_image))
        .route("/api/food-images/{id}", get_route(get::get_food_image))
        .route(
            "/api/food-images/{id}/analyze",
            post(analyze::analyze_food_image),
        )
}

/// Image metadata. The stored bytes are not echoed back; `size_bytes` and
/// the analysis blob are what clients act on.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FoodImageResponse {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub recipe_id: Option<Uuid>,
    pub content_type: String,
    pub size_bytes: usize,
    pub analysis: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

impl From<FoodImage> for FoodImageResponse {
    fn from(image: FoodImage) -> Self {
        Self {
            id: image.id,
            user_id: image.user_id,
            recipe_id: image.recipe_id,
            content_type: image.content_type,
            size_bytes: image.data.len(),
            analysis: image.analysis,
            created_at: image.created_at,
        }
    }
}
