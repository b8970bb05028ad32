use crate::api::{bad_request, internal, not_found, ApiError, ErrorResponse};
use crate::models::{FoodImage, NewFoodImage};
use crate::schema::food_images;
use axum::{extract::State, http::StatusCode, Json};
use base64::Engine;
use diesel::prelude::*;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::FoodImageResponse;
use crate::state::SharedState;

const ALLOWED_CONTENT_TYPES: &[&str] = &["image/jpeg", "image/png", "image/gif", "image/webp"];
const MAX_FILE_SIZE: usize = 10 * 1024 * 1024; // 10MB

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateFoodImageRequest {
    #[serde(default)]
    pub user_id: Option<Uuid>,
    #[serde(default)]
    pub recipe_id: Option<Uuid>,
    pub content_type: String,
    /// Base64-encoded image bytes.
    pub data: String,
}

#[utoipa::path(
    post,
    path = "/api/food-images",
    tag = "food-images",
    request_body = CreateFoodImageRequest,
    responses(
        (status = 201, description = "Image stored", body = FoodImageResponse),
        (status = 400, description = "Invalid content type, encoding, or size", body = ErrorResponse),
        (status = 404, description = "Referenced user or recipe not found", body = ErrorResponse)
    )
)]
pub async fn create_food_image(
    State(state): State<SharedState>,
    Json(req): Json<CreateFoodImageRequest>,
) -> Result<(StatusCode, Json<FoodImageResponse>), ApiError> {
    if !ALLOWED_CONTENT_TYPES.contains(&req.content_type.as_str()) {
        return Err(bad_request(format!(
            "Invalid content type '{}'. Allowed: {}",
            req.content_type,
            ALLOWED_CONTENT_TYPES.join(", ")
        )));
    }

    let data = base64::engine::general_purpose::STANDARD
        .decode(&req.data)
        .map_err(|_| bad_request("Image data is not valid base64"))?;

    if data.is_empty() {
        return Err(bad_request("Image data is empty"));
    }
    if data.len() > MAX_FILE_SIZE {
        return Err(bad_request(format!(
            "File too large. Maximum size is {} bytes",
            MAX_FILE_SIZE
        )));
    }

    let mut conn = state
        .pool
        .get()
        .map_err(|_| internal("Database connection failed"))?;

    let image: FoodImage = diesel::insert_into(food_images::table)
        .values(&NewFoodImage {
            user_id: req.user_id,
            recipe_id: req.recipe_id,
            content_type: &req.content_type,
            data: &data,
        })
        .returning(FoodImage::as_returning())
        .get_result(&mut conn)
        .map_err(|e| match e {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::ForeignKeyViolation,
                _,
            ) => not_found("Referenced user or recipe not found"),
            _ => internal("Failed to save image"),
        })?;

    Ok((StatusCode::CREATED, Json(image.into())))
}
