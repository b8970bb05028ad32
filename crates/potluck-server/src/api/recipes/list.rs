use crate::api::{internal, ApiError};
use crate::models::Recipe;
use crate::schema::recipes;
use axum::{
    extract::{Query, State},
    Json,
};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::RecipeSummary;
use crate::state::SharedState;

const DEFAULT_LIMIT: i64 = 20;
const MAX_LIMIT: i64 = 100;

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ListParams {
    /// Case-sensitive cuisine filter.
    pub cuisine: Option<String>,
    /// Matches either author tags or AI tags.
    pub tag: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ListRecipesResponse {
    pub recipes: Vec<RecipeSummary>,
}

#[utoipa::path(
    get,
    path = "/api/recipes",
    tag = "recipes",
    params(ListParams),
    responses(
        (status = 200, description = "Published recipes, newest first", body = ListRecipesResponse)
    )
)]
pub async fn list_recipes(
    State(state): State<SharedState>,
    Query(params): Query<ListParams>,
) -> Result<Json<ListRecipesResponse>, ApiError> {
    let mut conn = state
        .pool
        .get()
        .map_err(|_| internal("Database connection failed"))?;

    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
    let offset = params.offset.unwrap_or(0).max(0);

    let mut query = recipes::table
        .filter(recipes::is_published.eq(true))
        .select(Recipe::as_select())
        .into_boxed();

    if let Some(cuisine) = params.cuisine {
        query = query.filter(recipes::cuisine.eq(cuisine));
    }

    if let Some(tag) = params.tag {
        query = query.filter(
            recipes::user_tags
                .contains(vec![Some(tag.clone())])
                .or(recipes::ai_tags.contains(vec![Some(tag)])),
        );
    }

    let results: Vec<Recipe> = query
        .order(recipes::published_at.desc())
        .limit(limit)
        .offset(offset)
        .load(&mut conn)
        .map_err(|_| internal("Failed to fetch recipes"))?;

    Ok(Json(ListRecipesResponse {
        recipes: results.into_iter().map(RecipeSummary::from).collect(),
    }))
}
