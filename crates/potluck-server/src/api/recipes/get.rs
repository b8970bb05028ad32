use crate::api::{internal, not_found, ApiError, ErrorResponse};
use crate::models::Recipe;
use crate::schema::recipes;
use axum::{
    extract::{Path, State},
    Json,
};
use diesel::prelude::*;
use uuid::Uuid;

use super::{load_ingredient_lines, RecipeResponse};
use crate::state::SharedState;

#[utoipa::path(
    get,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(("id" = Uuid, Path, description = "Recipe ID")),
    responses(
        (status = 200, description = "Recipe with ingredient lines", body = RecipeResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    )
)]
pub async fn get_recipe(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
) -> Result<Json<RecipeResponse>, ApiError> {
    let mut conn = state
        .pool
        .get()
        .map_err(|_| internal("Database connection failed"))?;

    let recipe: Recipe = recipes::table
        .find(id)
        .select(Recipe::as_select())
        .first(&mut conn)
        .optional()
        .map_err(|_| internal("Failed to fetch recipe"))?
        .ok_or_else(|| not_found("Recipe not found"))?;

    let ingredients =
        load_ingredient_lines(&mut conn, id).map_err(|_| internal("Failed to load ingredients"))?;

    Ok(Json(RecipeResponse::from_parts(recipe, ingredients)))
}
