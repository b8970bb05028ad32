use crate::api::{internal, not_found, ApiError, ErrorResponse};
use crate::models::{MealPlan, MealPlanItem};
use crate::schema::{meal_plan_items, meal_plans};
use axum::{
    extract::{Path, State},
    Json,
};
use diesel::prelude::*;
use uuid::Uuid;

use super::MealPlanResponse;
use crate::state::SharedState;

#[utoipa::path(
    get,
    path = "/api/meal-plans/{id}",
    tag = "meal-plans",
    params(("id" = Uuid, Path, description = "Meal plan ID")),
    responses(
        (status = 200, description = "Meal plan with its items in date order", body = MealPlanResponse),
        (status = 404, description = "Meal plan not found", body = ErrorResponse)
    )
)]
pub async fn get_meal_plan(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MealPlanResponse>, ApiError> {
    let mut conn = state
        .pool
        .get()
        .map_err(|_| internal("Database connection failed"))?;

    let plan: MealPlan = meal_plans::table
        .find(id)
        .select(MealPlan::as_select())
        .first(&mut conn)
        .optional()
        .map_err(|_| internal("Failed to fetch meal plan"))?
        .ok_or_else(|| not_found("Meal plan not found"))?;

    let items: Vec<MealPlanItem> = meal_plan_items::table
        .filter(meal_plan_items::meal_plan_id.eq(id))
        .select(MealPlanItem::as_select())
        .order((
            meal_plan_items::plan_date.asc(),
            meal_plan_items::created_at.asc(),
        ))
        .load(&mut conn)
        .map_err(|_| internal("Failed to fetch meal plan items"))?;

    Ok(Json(MealPlanResponse::from_parts(plan, items)))
}
