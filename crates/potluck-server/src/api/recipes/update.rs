use crate::api::{bad_request, internal, not_found, ApiError, ErrorResponse};
use crate::models::{Recipe, RecipeChanges};
use crate::schema::{recipe_ingredients, recipes};
use axum::{
    extract::{Path, State},
    Json,
};
use diesel::prelude::*;
use potluck_core::types::Difficulty;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::{
    has_duplicate_lines, insert_ingredient_lines, load_ingredient_lines, IngredientLineRequest,
    RecipeResponse,
};
use crate::state::SharedState;

/// Partial content update. Absent fields are untouched; `ingredients`, when
/// present, replaces the whole line set.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateRecipeRequest {
    pub user_id: Uuid,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub instructions: Option<Vec<String>>,
    #[serde(default)]
    pub prep_time_minutes: Option<i32>,
    #[serde(default)]
    pub cook_time_minutes: Option<i32>,
    #[serde(default)]
    pub servings: Option<i32>,
    #[serde(default)]
    pub difficulty: Option<Difficulty>,
    #[serde(default)]
    pub cuisine: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub image_urls: Option<Vec<String>>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub ingredients: Option<Vec<IngredientLineRequest>>,
}

#[utoipa::path(
    patch,
    path = "/api/recipes/{id}",
    tag = "recipes",
    params(("id" = Uuid, Path, description = "Recipe ID")),
    request_body = UpdateRecipeRequest,
    responses(
        (status = 200, description = "Updated recipe", body = RecipeResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse),
        (status = 404, description = "Recipe not found for this author", body = ErrorResponse)
    )
)]
pub async fn update_recipe(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateRecipeRequest>,
) -> Result<Json<RecipeResponse>, ApiError> {
    if let Some(title) = &req.title {
        if title.trim().is_empty() {
            return Err(bad_request("Title cannot be empty"));
        }
    }
    if let Some(lines) = &req.ingredients {
        if has_duplicate_lines(lines) {
            return Err(bad_request("Duplicate ingredient in payload"));
        }
    }

    let mut conn = state
        .pool
        .get()
        .map_err(|_| internal("Database connection failed"))?;

    let has_content_changes = req.title.is_some()
        || req.description.is_some()
        || req.instructions.is_some()
        || req.prep_time_minutes.is_some()
        || req.cook_time_minutes.is_some()
        || req.servings.is_some()
        || req.difficulty.is_some()
        || req.cuisine.is_some()
        || req.category.is_some()
        || req.image_urls.is_some()
        || req.tags.is_some();

    let changes = RecipeChanges {
        title: req.title.map(|t| t.trim().to_string()),
        description: req.description,
        instructions: req.instructions.map(|steps| serde_json::json!(steps)),
        prep_time_minutes: req.prep_time_minutes,
        cook_time_minutes: req.cook_time_minutes,
        servings: req.servings,
        difficulty: req.difficulty.map(|d| d.as_str().to_string()),
        cuisine: req.cuisine,
        category: req.category,
        image_urls: req
            .image_urls
            .map(|urls| urls.into_iter().map(Some).collect()),
        user_tags: req.tags.map(|tags| tags.into_iter().map(Some).collect()),
        ..Default::default()
    };

    let recipe: Recipe = conn
        .transaction(|conn| {
            // An empty changeset is a diesel error, so a payload that only
            // touches ingredients falls back to an ownership check.
            let updated: Option<Recipe> = if has_content_changes {
                diesel::update(
                    recipes::table
                        .filter(recipes::id.eq(id))
                        .filter(recipes::user_id.eq(req.user_id)),
                )
                .set(&changes)
                .returning(Recipe::as_returning())
                .get_result(conn)
                .optional()?
            } else {
                recipes::table
                    .filter(recipes::id.eq(id))
                    .filter(recipes::user_id.eq(req.user_id))
                    .select(Recipe::as_select())
                    .first(conn)
                    .optional()?
            };

            let Some(recipe) = updated else {
                return Err(diesel::result::Error::NotFound);
            };

            if let Some(lines) = &req.ingredients {
                diesel::delete(
                    recipe_ingredients::table.filter(recipe_ingredients::recipe_id.eq(id)),
                )
                .execute(conn)?;
                insert_ingredient_lines(conn, id, lines)?;
            }

            Ok(recipe)
        })
        .map_err(|e| match e {
            diesel::result::Error::NotFound => not_found("Recipe not found"),
            _ => {
                tracing::error!("Failed to update recipe: {}", e);
                internal("Failed to update recipe")
            }
        })?;

    let ingredients =
        load_ingredient_lines(&mut conn, id).map_err(|_| internal("Failed to load ingredients"))?;

    Ok(Json(RecipeResponse::from_parts(recipe, ingredients)))
}
