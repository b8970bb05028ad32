use crate::api::{bad_gateway, internal, not_found, ApiError, ErrorResponse};
use crate::models::Recipe;
use crate::schema::recipes;
use axum::{
    extract::{Path, State},
    Json,
};
use diesel::prelude::*;
use potluck_core::ml::{IngredientInput, RecipeAnalysisRequest};
use uuid::Uuid;

use super::{load_ingredient_lines, RecipeResponse};
use crate::state::SharedState;

#[utoipa::path(
    post,
    path = "/api/recipes/{id}/analyze",
    tag = "recipes",
    params(("id" = Uuid, Path, description = "Recipe ID")),
    responses(
        (status = 200, description = "AI tags, nutrition, and pairings refreshed from the ML backend", body = RecipeResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse),
        (status = 502, description = "ML backend unavailable", body = ErrorResponse)
    )
)]
pub async fn analyze_recipe(
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

    let lines =
        load_ingredient_lines(&mut conn, id).map_err(|_| internal("Failed to load ingredients"))?;

    let request = RecipeAnalysisRequest {
        ingredients: lines
            .iter()
            .map(|line| IngredientInput {
                name: line.name.clone(),
                amount: line.amount,
                unit: line.unit.clone(),
                preparation: line.preparation.clone(),
            })
            .collect(),
        instructions: serde_json::from_value(recipe.instructions.clone()).unwrap_or_default(),
        cuisine: recipe.cuisine.clone(),
        category: recipe.category.clone(),
        servings: recipe.servings,
    };

    let analysis = state.ml.analyze_recipe(&request).await.map_err(|e| {
        tracing::warn!("ML analysis failed for recipe {}: {}", id, e);
        bad_gateway("ML backend unavailable")
    })?;

    let ai_tags: Vec<Option<String>> = analysis.tags.iter().cloned().map(Some).collect();
    let nutrition =
        serde_json::to_value(&analysis.nutrition).map_err(|_| internal("Invalid analysis"))?;
    let pairings = serde_json::json!(analysis.pairings);

    let updated: Recipe = diesel::update(recipes::table.find(id))
        .set((
            recipes::ai_tags.eq(ai_tags),
            recipes::nutrition.eq(Some(nutrition)),
            recipes::pairings.eq(Some(pairings)),
        ))
        .returning(Recipe::as_returning())
        .get_result(&mut conn)
        .map_err(|_| internal("Failed to store analysis"))?;

    Ok(Json(RecipeResponse::from_parts(updated, lines)))
}
