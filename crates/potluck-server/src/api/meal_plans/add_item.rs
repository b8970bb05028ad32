use crate::api::{bad_request, internal, not_found, ApiError, ErrorResponse};
use crate::models::{MealPlan, MealPlanItem, NewMealPlanItem};
use crate::schema::{meal_plan_items, meal_plans};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use diesel::prelude::*;
use potluck_core::types::MealType;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::MealPlanItemResponse;
use crate::state::SharedState;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AddItemRequest {
    pub recipe_id: Uuid,
    pub date: NaiveDate,
    pub meal_type: MealType,
    /// Servings multiplier for the planned cook.
    #[serde(default = "default_servings")]
    pub servings: f64,
}

fn default_servings() -> f64 {
    1.0
}

#[utoipa::path(
    post,
    path = "/api/meal-plans/{id}/items",
    tag = "meal-plans",
    params(("id" = Uuid, Path, description = "Meal plan ID")),
    request_body = AddItemRequest,
    responses(
        (status = 201, description = "Recipe slotted into the plan", body = MealPlanItemResponse),
        (status = 400, description = "Date outside the plan range", body = ErrorResponse),
        (status = 404, description = "Meal plan or recipe not found", body = ErrorResponse)
    )
)]
pub async fn add_item(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(req): Json<AddItemRequest>,
) -> Result<(StatusCode, Json<MealPlanItemResponse>), ApiError> {
    if req.servings <= 0.0 {
        return Err(bad_request("Servings must be positive"));
    }

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

    if req.date < plan.start_date || req.date > plan.end_date {
        return Err(bad_request(format!(
            "Date {} is outside the plan range {}..{}",
            req.date, plan.start_date, plan.end_date
        )));
    }

    let item: MealPlanItem = diesel::insert_into(meal_plan_items::table)
        .values(&NewMealPlanItem {
            meal_plan_id: id,
            recipe_id: req.recipe_id,
            plan_date: req.date,
            meal_type: req.meal_type.as_str(),
            servings: req.servings,
        })
        .returning(MealPlanItem::as_returning())
        .get_result(&mut conn)
        .map_err(|e| match e {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::ForeignKeyViolation,
                _,
            ) => not_found("Recipe not found"),
            _ => internal("Failed to add meal plan item"),
        })?;

    Ok((StatusCode::CREATED, Json(item.into())))
}
