use crate::api::{bad_request, internal, ApiError, ErrorResponse};
use crate::models::{MealPlan, NewMealPlan};
use crate::schema::meal_plans;
use axum::{extract::State, http::StatusCode, Json};
use chrono::NaiveDate;
use diesel::prelude::*;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::MealPlanResponse;
use crate::state::SharedState;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateMealPlanRequest {
    pub user_id: Uuid,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[utoipa::path(
    post,
    path = "/api/meal-plans",
    tag = "meal-plans",
    request_body = CreateMealPlanRequest,
    responses(
        (status = 201, description = "Meal plan created", body = MealPlanResponse),
        (status = 400, description = "Invalid date range", body = ErrorResponse)
    )
)]
pub async fn create_meal_plan(
    State(state): State<SharedState>,
    Json(req): Json<CreateMealPlanRequest>,
) -> Result<(StatusCode, Json<MealPlanResponse>), ApiError> {
    if req.name.trim().is_empty() {
        return Err(bad_request("Name is required"));
    }
    if req.start_date > req.end_date {
        return Err(bad_request("start_date must not be after end_date"));
    }

    let mut conn = state
        .pool
        .get()
        .map_err(|_| internal("Database connection failed"))?;

    let plan: MealPlan = diesel::insert_into(meal_plans::table)
        .values(&NewMealPlan {
            user_id: req.user_id,
            name: req.name.trim(),
            start_date: req.start_date,
            end_date: req.end_date,
        })
        .returning(MealPlan::as_returning())
        .get_result(&mut conn)
        .map_err(|e| match e {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::ForeignKeyViolation,
                _,
            ) => bad_request("User does not exist"),
            _ => internal("Failed to create meal plan"),
        })?;

    Ok((
        StatusCode::CREATED,
        Json(MealPlanResponse::from_parts(plan, vec![])),
    ))
}
