use crate::api::{internal, not_found, ApiError, ErrorResponse};
use crate::schema::meal_plan_items;
use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use diesel::prelude::*;
use uuid::Uuid;

use crate::state::SharedState;

#[utoipa::path(
    delete,
    path = "/api/meal-plans/{id}/items/{item_id}",
    tag = "meal-plans",
    params(
        ("id" = Uuid, Path, description = "Meal plan ID"),
        ("item_id" = Uuid, Path, description = "Item ID")
    ),
    responses(
        (status = 204, description = "Item removed from the plan"),
        (status = 404, description = "Item not found in this plan", body = ErrorResponse)
    )
)]
pub async fn remove_item(
    State(state): State<SharedState>,
    Path((id, item_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, ApiError> {
    let mut conn = state
        .pool
        .get()
        .map_err(|_| internal("Database connection failed"))?;

    let deleted = diesel::delete(
        meal_plan_items::table
            .filter(meal_plan_items::id.eq(item_id))
            .filter(meal_plan_items::meal_plan_id.eq(id)),
    )
    .execute(&mut conn)
    .map_err(|_| internal("Failed to remove meal plan item"))?;

    if deleted == 0 {
        return Err(not_found("Meal plan item not found"));
    }

    Ok(StatusCode::NO_CONTENT)
}
