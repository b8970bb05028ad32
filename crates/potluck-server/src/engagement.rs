//! Counter maintenance and trending materialization.
//!
//! The join tables (recipe_likes, saved_recipes, recipe_reviews,
//! made_recipes) are the source of truth; the denormalized counters on
//! recipes are caches that every handler updates inside the same transaction
//! as the join-row change. Each counter change also refreshes the recipe's
//! trending_recipes row so the trending surface never lags a mutation.

use chrono::Utc;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use potluck_core::trending::{trending_score_at, EngagementCounts};
use uuid::Uuid;

use crate::models::NewTrendingRecipe;
use crate::schema::{recipe_reviews, recipes, trending_recipes};

/// True when the error is a unique-constraint violation. Toggle-style
/// endpoints map this to "already exists" and treat it as a no-op.
pub fn is_unique_violation(err: &DieselError) -> bool {
    matches!(
        err,
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)
    )
}

/// Recompute and upsert the trending row for one recipe from its current
/// counters. Must run inside the transaction that mutated the counters so
/// the materialized score never reflects a half-applied change.
pub fn refresh_trending_row(conn: &mut PgConnection, recipe_id: Uuid) -> Result<(), DieselError> {
    let (likes, saves, made, views, created_at) = recipes::table
        .find(recipe_id)
        .select((
            recipes::likes_count,
            recipes::saves_count,
            recipes::made_count,
            recipes::views_count,
            recipes::created_at,
        ))
        .first::<(i32, i32, i32, i32, chrono::DateTime<Utc>)>(conn)?;

    let counts = EngagementCounts {
        likes: i64::from(likes),
        saves: i64::from(saves),
        made: i64::from(made),
        views: i64::from(views),
    };

    let now = Utc::now();
    let score = trending_score_at(&counts, created_at, now);

    diesel::insert_into(trending_recipes::table)
        .values(&NewTrendingRecipe {
            recipe_id,
            score,
            trending_at: now,
        })
        .on_conflict(trending_recipes::recipe_id)
        .do_update()
        .set((
            trending_recipes::score.eq(score),
            trending_recipes::trending_at.eq(now),
        ))
        .execute(conn)?;

    Ok(())
}

/// Recompute reviews_count and avg_rating from the review rows.
///
/// Review volume per recipe is small, so the mean is computed here rather
/// than pulling in numeric aggregate support.
pub fn refresh_review_stats(conn: &mut PgConnection, recipe_id: Uuid) -> Result<(), DieselError> {
    let ratings: Vec<i32> = recipe_reviews::table
        .filter(recipe_reviews::recipe_id.eq(recipe_id))
        .select(recipe_reviews::rating)
        .load(conn)?;

    let reviews_count = ratings.len() as i32;
    let avg_rating = if ratings.is_empty() {
        0.0
    } else {
        ratings.iter().map(|r| f64::from(*r)).sum::<f64>() / ratings.len() as f64
    };

    diesel::update(recipes::table.find(recipe_id))
        .set((
            recipes::reviews_count.eq(reviews_count),
            recipes::avg_rating.eq(avg_rating),
        ))
        .execute(conn)?;

    Ok(())
}

/// Recompute trending scores for every published recipe. Returns the number
/// of refreshed rows.
pub fn refresh_all_trending(conn: &mut PgConnection) -> Result<usize, DieselError> {
    let published: Vec<Uuid> = recipes::table
        .filter(recipes::is_published.eq(true))
        .select(recipes::id)
        .load(conn)?;

    for recipe_id in &published {
        refresh_trending_row(conn, *recipe_id)?;
    }

    Ok(published.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_violation_is_detected() {
        let err = DieselError::DatabaseError(
            DatabaseErrorKind::UniqueViolation,
            Box::new("duplicate key value".to_string()),
        );
        assert!(is_unique_violation(&err));

        let other = DieselError::DatabaseError(
            DatabaseErrorKind::ForeignKeyViolation,
            Box::new("missing parent".to_string()),
        );
        assert!(!is_unique_violation(&other));
        assert!(!is_unique_violation(&DieselError::NotFound));
    }
}
