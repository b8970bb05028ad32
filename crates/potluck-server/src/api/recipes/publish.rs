use crate::api::{internal, not_found, ApiError, ErrorResponse};
use crate::engagement::refresh_trending_row;
use crate::models::Recipe;
use crate::schema::recipes;
use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use diesel::prelude::*;
use uuid::Uuid;

use super::{load_ingredient_lines, ActorRequest, RecipeResponse};
use crate::state::SharedState;

#[utoipa::path(
    post,
    path = "/api/recipes/{id}/publish",
    tag = "recipes",
    params(("id" = Uuid, Path, description = "Recipe ID")),
    request_body = ActorRequest,
    responses(
        (status = 200, description = "Recipe published; republishing keeps the original timestamp", body = RecipeResponse),
        (status = 404, description = "Recipe not found for this author", body = ErrorResponse)
    )
)]
pub async fn publish_recipe(
    State(state): State<SharedState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ActorRequest>,
) -> Result<Json<RecipeResponse>, ApiError> {
    let mut conn = state
        .pool
        .get()
        .map_err(|_| internal("Database connection failed"))?;

    let recipe: Recipe = conn
        .transaction(|conn| {
            let existing: Option<(bool, Option<chrono::DateTime<Utc>>)> = recipes::table
                .filter(recipes::id.eq(id))
                .filter(recipes::user_id.eq(req.user_id))
                .select((recipes::is_published, recipes::published_at))
                .first(conn)
                .optional()?;

            let Some((is_published, published_at)) = existing else {
                return Err(diesel::result::Error::NotFound);
            };

            // published_at is write-once.
            let stamp = match (is_published, published_at) {
                (true, Some(at)) => at,
                _ => Utc::now(),
            };

            let recipe: Recipe = diesel::update(recipes::table.find(id))
                .set((
                    recipes::is_published.eq(true),
                    recipes::published_at.eq(Some(stamp)),
                ))
                .returning(Recipe::as_returning())
                .get_result(conn)?;

            // A freshly published recipe enters the trending surface.
            refresh_trending_row(conn, id)?;

            Ok(recipe)
        })
        .map_err(|e| match e {
            diesel::result::Error::NotFound => not_found("Recipe not found"),
            _ => {
                tracing::error!("Failed to publish recipe: {}", e);
                internal("Failed to publish recipe")
            }
        })?;

    let ingredients =
        load_ingredient_lines(&mut conn, id).map_err(|_| internal("Failed to load ingredients"))?;

    Ok(Json(RecipeResponse::from_parts(recipe, ingredients)))
}
