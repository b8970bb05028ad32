use crate::api::{bad_request, internal, ApiError, ErrorResponse};
use crate::models::{NewRecipe, Recipe};
use crate::schema::recipes;
use axum::{extract::State, http::StatusCode, Json};
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

pub const PATH: &str = "/api/recipes";

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateRecipeRequest {
    pub user_id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Ordered instruction steps.
    #[serde(default)]
    pub instructions: Vec<String>,
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
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub ingredients: Vec<IngredientLineRequest>,
}

#[utoipa::path(
    post,
    path = "/api/recipes",
    tag = "recipes",
    request_body = CreateRecipeRequest,
    responses(
        (status = 201, description = "Recipe created as a draft", body = RecipeResponse),
        (status = 400, description = "Invalid request", body = ErrorResponse)
    )
)]
pub async fn create_recipe(
    State(state): State<SharedState>,
    Json(req): Json<CreateRecipeRequest>,
) -> Result<(StatusCode, Json<RecipeResponse>), ApiError> {
    if req.title.trim().is_empty() {
        return Err(bad_request("Title is required"));
    }
    if has_duplicate_lines(&req.ingredients) {
        return Err(bad_request("Duplicate ingredient in payload"));
    }

    let mut conn = state
        .pool
        .get()
        .map_err(|_| internal("Database connection failed"))?;

    let image_urls: Vec<Option<String>> = req.image_urls.iter().cloned().map(Some).collect();
    let user_tags: Vec<Option<String>> = req.tags.iter().cloned().map(Some).collect();

    let recipe: Recipe = conn
        .transaction(|conn| {
            let recipe: Recipe = diesel::insert_into(recipes::table)
                .values(&NewRecipe {
                    user_id: req.user_id,
                    title: req.title.trim(),
                    description: req.description.as_deref(),
                    instructions: serde_json::json!(req.instructions),
                    prep_time_minutes: req.prep_time_minutes,
                    cook_time_minutes: req.cook_time_minutes,
                    servings: req.servings,
                    difficulty: req.difficulty.map(|d| d.as_str()),
                    cuisine: req.cuisine.as_deref(),
                    category: req.category.as_deref(),
                    image_urls: &image_urls,
                    user_tags: &user_tags,
                })
                .returning(Recipe::as_returning())
                .get_result(conn)?;

            insert_ingredient_lines(conn, recipe.id, &req.ingredients)?;

            Ok::<Recipe, diesel::result::Error>(recipe)
        })
        .map_err(|e| match e {
            diesel::result::Error::DatabaseError(
                diesel::result::DatabaseErrorKind::ForeignKeyViolation,
                _,
            ) => bad_request("Author does not exist"),
            _ => {
                tracing::error!("Failed to create recipe: {}", e);
                internal("Failed to create recipe")
            }
        })?;

    let ingredients = load_ingredient_lines(&mut conn, recipe.id)
        .map_err(|_| internal("Failed to load ingredients"))?;

    Ok((
        StatusCode::CREATED,
        Json(RecipeResponse::from_parts(recipe, ingredients)),
    ))
}
