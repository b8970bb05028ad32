pub mod analyze;
pub mod create;
pub mod delete;
pub mod get;
pub mod like;
pub mod list;
pub mod made;
pub mod publish;
pub mod review;
pub mod save;
pub mod trending;
pub mod update;
pub mod view;

use axum::routing::{get as get_route, post, put};
use axum::Router;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use potluck_core::merge_tags;
use potluck_core::types::Difficulty;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{NewIngredient, NewRecipeIngredient, Recipe};
use crate::schema::{ingredients, recipe_ingredients};
use crate::state::SharedState;

pub fn router() -> Router<SharedState> {
    Router::new()
        .route(
            "/api/recipes",
            post(create::create_recipe).get(list::list_recipes),
        )
        .route("/api/recipes/trending", get_route(trending::trending_recipes))
        .route(
            "/api/recipes/{id}",
            get_route(get::get_recipe)
                .patch(update::update_recipe)
                .delete(delete::delete_recipe),
        )
        .route("/api/recipes/{id}/publish", post(publish::publish_recipe))
        .route("/api/recipes/{id}/analyze", post(analyze::analyze_recipe))
        .route(
            "/api/recipes/{id}/like",
            put(like::like_recipe).delete(like::unlike_recipe),
        )
        .route(
            "/api/recipes/{id}/save",
            put(save::save_recipe).delete(save::unsave_recipe),
        )
        .route(
            "/api/recipes/{id}/review",
            put(review::review_recipe).delete(review::delete_review),
        )
        .route("/api/recipes/{id}/made", post(made::record_made))
        .route("/api/recipes/{id}/view", post(view::record_view))
}

/// Body for engagement actions that only need to know who is acting.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ActorRequest {
    pub user_id: Uuid,
}

/// One ingredient line in a create/update payload. Ingredients are looked up
/// by name and created on first use.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct IngredientLineRequest {
    pub name: String,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub preparation: Option<String>,
    #[serde(default)]
    pub optional: bool,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeIngredientResponse {
    pub ingredient_id: Uuid,
    pub name: String,
    pub amount: Option<f64>,
    pub unit: Option<String>,
    pub preparation: Option<String>,
    pub is_optional: bool,
}

/// Full recipe representation.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub instructions: Vec<String>,
    pub prep_time_minutes: Option<i32>,
    pub cook_time_minutes: Option<i32>,
    pub servings: Option<i32>,
    pub difficulty: Option<Difficulty>,
    pub cuisine: Option<String>,
    pub category: Option<String>,
    pub image_urls: Vec<String>,
    pub user_tags: Vec<String>,
    pub ai_tags: Vec<String>,
    /// Combined searchable set: user tags first, AI tags deduped in after.
    pub tags: Vec<String>,
    pub pairings: Option<serde_json::Value>,
    pub nutrition: Option<serde_json::Value>,
    pub likes_count: i32,
    pub saves_count: i32,
    pub made_count: i32,
    pub views_count: i32,
    pub reviews_count: i32,
    pub avg_rating: f64,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub ingredients: Vec<RecipeIngredientResponse>,
}

impl RecipeResponse {
    pub fn from_parts(recipe: Recipe, ingredients: Vec<RecipeIngredientResponse>) -> Self {
        let user_tags: Vec<String> = recipe.user_tags.into_iter().flatten().collect();
        let ai_tags: Vec<String> = recipe.ai_tags.into_iter().flatten().collect();
        let tags = merge_tags(&user_tags, &ai_tags);

        Self {
            id: recipe.id,
            user_id: recipe.user_id,
            title: recipe.title,
            description: recipe.description,
            instructions: serde_json::from_value(recipe.instructions).unwrap_or_default(),
            prep_time_minutes: recipe.prep_time_minutes,
            cook_time_minutes: recipe.cook_time_minutes,
            servings: recipe.servings,
            difficulty: recipe.difficulty.as_deref().and_then(Difficulty::parse),
            cuisine: recipe.cuisine,
            category: recipe.category,
            image_urls: recipe.image_urls.into_iter().flatten().collect(),
            user_tags,
            ai_tags,
            tags,
            pairings: recipe.pairings,
            nutrition: recipe.nutrition,
            likes_count: recipe.likes_count,
            saves_count: recipe.saves_count,
            made_count: recipe.made_count,
            views_count: recipe.views_count,
            reviews_count: recipe.reviews_count,
            avg_rating: recipe.avg_rating,
            is_published: recipe.is_published,
            published_at: recipe.published_at,
            created_at: recipe.created_at,
            updated_at: recipe.updated_at,
            ingredients,
        }
    }
}

/// Resolve an ingredient by normalized name, creating it on first use.
/// Names are stored lowercase so "Basil" and "basil" share a row.
pub(crate) fn resolve_ingredient(
    conn: &mut PgConnection,
    name: &str,
) -> Result<Uuid, diesel::result::Error> {
    let normalized = name.trim().to_lowercase();

    if let Some(id) = ingredients::table
        .filter(ingredients::name.eq(&normalized))
        .select(ingredients::id)
        .first::<Uuid>(conn)
        .optional()?
    {
        return Ok(id);
    }

    diesel::insert_into(ingredients::table)
        .values(&NewIngredient {
            name: &normalized,
            category: None,
            default_unit: None,
            aliases: &[],
            nutrition_per_100g: None,
        })
        .on_conflict(ingredients::name)
        .do_nothing()
        .execute(conn)?;

    ingredients::table
        .filter(ingredients::name.eq(&normalized))
        .select(ingredients::id)
        .first(conn)
}

/// Attach ingredient lines to a recipe. Callers reject duplicate names in
/// the payload up front, so a unique violation here is a real error.
pub(crate) fn insert_ingredient_lines(
    conn: &mut PgConnection,
    recipe_id: Uuid,
    lines: &[IngredientLineRequest],
) -> Result<(), diesel::result::Error> {
    for line in lines {
        let ingredient_id = resolve_ingredient(conn, &line.name)?;
        diesel::insert_into(recipe_ingredients::table)
            .values(&NewRecipeIngredient {
                recipe_id,
                ingredient_id,
                amount: line.amount,
                unit: line.unit.as_deref(),
                preparation: line.preparation.as_deref(),
                is_optional: line.optional,
            })
            .execute(conn)?;
    }
    Ok(())
}

/// True when the payload names the same ingredient twice after
/// normalization; the (recipe, ingredient) pair is unique.
pub(crate) fn has_duplicate_lines(lines: &[IngredientLineRequest]) -> bool {
    let mut seen: Vec<String> = Vec::with_capacity(lines.len());
    for line in lines {
        let normalized = line.name.trim().to_lowercase();
        if seen.contains(&normalized) {
            return true;
        }
        seen.push(normalized);
    }
    false
}

/// Load a recipe's ingredient lines joined to their ingredient rows.
pub(crate) fn load_ingredient_lines(
    conn: &mut PgConnection,
    recipe_id: Uuid,
) -> Result<Vec<RecipeIngredientResponse>, diesel::result::Error> {
    let rows: Vec<(crate::models::RecipeIngredient, String)> = recipe_ingredients::table
        .inner_join(ingredients::table)
        .filter(recipe_ingredients::recipe_id.eq(recipe_id))
        .select((
            crate::models::RecipeIngredient::as_select(),
            ingredients::name,
        ))
        .order(ingredients::name.asc())
        .load(conn)?;

    Ok(rows
        .into_iter()
        .map(|(link, name)| RecipeIngredientResponse {
            ingredient_id: link.ingredient_id,
            name,
            amount: link.amount,
            unit: link.unit,
            preparation: link.preparation,
            is_optional: link.is_optional,
        })
        .collect())
}

/// Listing row: enough to render a card without the full payload.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeSummary {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub cuisine: Option<String>,
    pub category: Option<String>,
    pub image_urls: Vec<String>,
    pub tags: Vec<String>,
    pub likes_count: i32,
    pub saves_count: i32,
    pub made_count: i32,
    pub views_count: i32,
    pub reviews_count: i32,
    pub avg_rating: f64,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<Recipe> for RecipeSummary {
    fn from(recipe: Recipe) -> Self {
        let user_tags: Vec<String> = recipe.user_tags.into_iter().flatten().collect();
        let ai_tags: Vec<String> = recipe.ai_tags.into_iter().flatten().collect();

        Self {
            id: recipe.id,
            user_id: recipe.user_id,
            title: recipe.title,
            description: recipe.description,
            difficulty: recipe.difficulty.as_deref().and_then(Difficulty::parse),
            cuisine: recipe.cuisine,
            category: recipe.category,
            image_urls: recipe.image_urls.into_iter().flatten().collect(),
            tags: merge_tags(&user_tags, &ai_tags),
            likes_count: recipe.likes_count,
            saves_count: recipe.saves_count,
            made_count: recipe.made_count,
            views_count: recipe.views_count,
            reviews_count: recipe.reviews_count,
            avg_rating: recipe.avg_rating,
            published_at: recipe.published_at,
            created_at: recipe.created_at,
        }
    }
}
