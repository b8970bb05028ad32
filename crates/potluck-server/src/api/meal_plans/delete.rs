use crate::api::{internal, not_found, ApiError, ErrorResponse};
use crate::schema::meal_plans;
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use diesel::prelude::*;
use uuid::Uuid;

use crate::state::SharedState;

#[utoipa::path(
    delete,
    path = "/api/meal-plans/{id}",
    tag = "meal-plans",
    params(("id" = Uuid, Path, description = "Meal plan ID")),
    responses(
        (status = 204, description = "Meal plan and its items deleted"),
        (status = 404, description = "Meal plan not found", body = ErrorResponse)
    )
)]
pub async fn delete_meal_plan(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let mut conn = state
        .pool
        .get()
        .map_err(|_| internal("Database connection failed"))?;

    let deleted = diesel::delete(meal_plans::table.find(id))
        .execute(&mut conn)
        .map_err(|_| internal("Failed to delete meal plan"))?;

    if deleted == 0 {
        return Err(not_found("Meal plan not found"));
    }

    Ok(StatusCode::NO_CONTENT)
}
