use crate::api::{internal, not_found, ApiError, ErrorResponse};
use crate::models::FoodImage;
use crate::schema::food_images;
use axum::{
    extract::{Path, State},
    Json,
};
use diesel::prelude::*;
use uuid::Uuid;

use super::FoodImageResponse;
use crate::state::SharedState;

#[utoipa::path(
    get,
    path = "/api/food-images/{id}",
    tag = "food-images",
    params(("id" = Uuid, Path, description = "Image ID")),
    responses(
        (status = 200, description = "Image metadata and analysis, without the raw bytes", body = FoodImageResponse),
        (status = 404, description = "Image not found", body = ErrorResponse)
    )
)]
pub async fn get_food_image(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<FoodImageResponse>, ApiError> {
    let mut conn = state
        .pool
        .get()
        .map_err(|_| internal("Database connection failed"))?;

    let image: FoodImage = food_images::table
        .find(id)
        .select(FoodImage::as_select())
        .first(&mut conn)
        .optional()
        .map_err(|_| internal("Failed to fetch image"))?
        .ok_or_else(|| not_found("Image not found"))?;

    Ok(Json(image.into()))
}
