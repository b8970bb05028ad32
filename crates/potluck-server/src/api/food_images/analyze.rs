use crate::api::{bad_gateway, internal, not_found, ApiError, ErrorResponse};
use crate::models::FoodImage;
use crate::schema::food_images;
use axum::{
    extract::{Path, State},
    Json,
};
use base64::Engine;
use diesel::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::state::SharedState;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AnalyzeImageResponse {
    pub id: Uuid,
    /// The collaborator's dish analysis, persisted verbatim.
    pub analysis: serde_json::Value,
}

#[utoipa::path(
    post,
    path = "/api/food-images/{id}/analyze",
    tag = "food-images",
    params(("id" = Uuid, Path, description = "Image ID")),
    responses(
        (status = 200, description = "Dish recognized; analysis stored on the image", body = AnalyzeImageResponse),
        (status = 404, description = "Image not found", body = ErrorResponse),
        (status = 502, description = "ML backend unavailable", body = ErrorResponse)
    )
)]
pub async fn analyze_food_image(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AnalyzeImageResponse>, ApiError> {
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

    let encoded = base64::engine::general_purpose::STANDARD.encode(&image.data);

    let analysis = state.ml.analyze_dish(&encoded).await.map_err(|e| {
        tracing::warn!("ML analysis failed for image {}: {}", id, e);
        bad_gateway("ML backend unavailable")
    })?;

    let payload = serde_json::to_value(&analysis).map_err(|_| internal("Invalid analysis"))?;

    diesel::update(food_images::table.find(id))
        .set(food_images::analysis.eq(Some(payload.clone())))
        .execute(&mut conn)
        .map_err(|_| internal("Failed to store analysis"))?;

    Ok(Json(AnalyzeImageResponse {
        id,
        analysis: payload,
    }))
}
