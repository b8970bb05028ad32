pub mod add_item;
pub mod create;
pub mod delete;
pub mod get;
pub mod remove_item;

use axum::routing::{get as get_route, post};
use axum::Router;
use chrono::{DateTime, NaiveDate, Utc};
use potluck_core::types::MealType;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{MealPlan, MealPlanItem};
use crate::state::SharedState;

pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/api/meal-plans", post(create::create_meal_plan))
        .route(
            "/api/meal-plans/{id}",
            get_route(get::get_meal_plan).delete(delete::delete_meal_plan),
        )
        .route("/api/meal-plans/{id}/items", post(add_item::add_item))
        .route(
            "/api/meal-plans/{id}/items/{item_id}",
            axum::routing::delete(remove_item::remove_item),
        )
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MealPlanItemResponse {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub date: NaiveDate,
    pub meal_type: MealType,
    pub servings: f64,
}

impl From<MealPlanItem> for MealPlanItemResponse {
    fn from(item: MealPlanItem) -> Self {
        Self {
            id: item.id,
            recipe_id: item.recipe_id,
            date: item.plan_date,
            // The column is check-constrained; snack is the conservative
            // fallback for rows edited outside the API.
            meal_type: MealType::parse(&item.meal_type).unwrap_or(MealType::Snack),
            servings: item.servings,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MealPlanResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: DateTime<Utc>,
    pub items: Vec<MealPlanItemResponse>,
}

impl MealPlanResponse {
    pub fn from_parts(plan: MealPlan, items: Vec<MealPlanItem>) -> Self {
        Self {
            id: plan.id,
            user_id: plan.user_id,
            name: plan.name,
            start_date: plan.start_date,
            end_date: plan.end_date,
            created_at: plan.created_at,
            items: items.into_iter().map(Into::into).collect(),
        }
    }
}
