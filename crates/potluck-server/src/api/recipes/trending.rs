use crate::api::{internal, ApiError};
use crate::models::Recipe;
use crate::schema::{recipes, trending_recipes};
use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::RecipeSummary;
use crate::state::SharedState;

const DEFAULT_LIMIT: i64 = 10;
const MAX_LIMIT: i64 = 50;

#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct TrendingParams {
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TrendingEntry {
    pub score: f64,
    pub trending_at: DateTime<Utc>,
    #[serde(flatten)]
    pub recipe: RecipeSummary,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TrendingResponse {
    pub recipes: Vec<TrendingEntry>,
}

#[utoipa::path(
    get,
    path = "/api/recipes/trending",
    tag = "recipes",
    params(TrendingParams),
    responses(
        (status = 200, description = "Published recipes by trending score; ties break newest-first", body = TrendingResponse)
    )
)]
pub async fn trending_recipes(
    State(state): State<SharedState>,
    Query(params): Query<TrendingParams>,
) -> Result<Json<TrendingResponse>, ApiError> {
    let mut conn = state
        .pool
        .get()
        .map_err(|_| internal("Database connection failed"))?;

    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);

    // Same ordering contract as potluck_core::trending::rank_order.
    let rows: Vec<(f64, DateTime<Utc>, Recipe)> = trending_recipes::table
        .inner_join(recipes::table)
        .filter(recipes::is_published.eq(true))
        .select((
            trending_recipes::score,
            trending_recipes::trending_at,
            Recipe::as_select(),
        ))
        .order((
            trending_recipes::score.desc(),
            recipes::created_at.desc(),
        ))
        .limit(limit)
        .load(&mut conn)
        .map_err(|_| internal("Failed to fetch trending recipes"))?;

    Ok(Json(TrendingResponse {
        recipes: rows
            .into_iter()
            .map(|(score, trending_at, recipe)| TrendingEntry {
                score,
                trending_at,
                recipe: recipe.into(),
            })
            .collect(),
    }))
}
