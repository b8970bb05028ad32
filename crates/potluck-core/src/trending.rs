//! Trending score computation for recipe listings.
//!
//! A recipe's score is its engagement rate (weighted interactions per view)
//! decayed linearly over a 30-day window. Recipes older than the window score
//! exactly zero no matter how much engagement they have, which keeps the
//! trending surface fresh without any background pruning.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

/// Weight of a like. Cheapest interaction, lowest weight.
pub const LIKE_WEIGHT: f64 = 2.0;

/// Weight of a save.
pub const SAVE_WEIGHT: f64 = 3.0;

/// Weight of a made record. Cooking the dish is the strongest signal.
pub const MADE_WEIGHT: f64 = 5.0;

/// Days until a recipe's age weight decays to zero.
pub const TRENDING_WINDOW_DAYS: f64 = 30.0;

/// Engagement counters read from a recipe row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngagementCounts {
    pub likes: i64,
    pub saves: i64,
    pub made: i64,
    pub views: i64,
}

/// Fractional age in days of a row created at `created_at`, as observed at `now`.
pub fn age_in_days(created_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    (now - created_at).num_milliseconds() as f64 / 86_400_000.0
}

/// Linear decay from 1.0 at creation to 0.0 at [`TRENDING_WINDOW_DAYS`].
///
/// Clamped to [0, 1] on both sides: ages past the window pin at zero, and a
/// `created_at` in the future (negative age) is treated as brand new rather
/// than letting the weight exceed 1 and inflate the score.
pub fn age_weight(age_days: f64) -> f64 {
    (1.0 - age_days / TRENDING_WINDOW_DAYS).clamp(0.0, 1.0)
}

/// Weighted interactions per view.
///
/// Views are floored at 1 so an unviewed recipe divides by one instead of
/// zero. The result is a rate, not a count: a recipe seen once and cooked
/// once outranks one seen a thousand times and cooked once.
pub fn engagement_score(counts: &EngagementCounts) -> f64 {
    let weighted = counts.likes as f64 * LIKE_WEIGHT
        + counts.saves as f64 * SAVE_WEIGHT
        + counts.made as f64 * MADE_WEIGHT;
    weighted / counts.views.max(1) as f64
}

/// Trending score for a recipe of the given age.
///
/// Total over its numeric domain; no error cases. Zero exactly when the age
/// weight is zero or all of likes/saves/made are zero.
pub fn trending_score(counts: &EngagementCounts, age_days: f64) -> f64 {
    engagement_score(counts) * age_weight(age_days)
}

/// Convenience wrapper computing the age from timestamps.
pub fn trending_score_at(
    counts: &EngagementCounts,
    created_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> f64 {
    trending_score(counts, age_in_days(created_at, now))
}

/// Ordering for trending listings: score descending, then `created_at`
/// descending so equal scores paginate deterministically (newer first).
pub fn rank_order(
    (score_a, created_a): (f64, DateTime<Utc>),
    (score_b, created_b): (f64, DateTime<Utc>),
) -> Ordering {
    score_b
        .total_cmp(&score_a)
        .then_with(|| created_b.cmp(&created_a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn counts(likes: i64, saves: i64, made: i64, views: i64) -> EngagementCounts {
        EngagementCounts {
            likes,
            saves,
            made,
            views,
        }
    }

    #[test]
    fn zero_engagement_scores_zero() {
        assert_eq!(trending_score(&counts(0, 0, 0, 0), 0.0), 0.0);
        assert_eq!(trending_score(&counts(0, 0, 0, 500), 3.0), 0.0);
    }

    #[test]
    fn score_is_never_negative() {
        for age in [0.0, 0.5, 15.0, 29.99, 30.0, 365.0] {
            let score = trending_score(&counts(7, 3, 1, 42), age);
            assert!(score >= 0.0, "negative score {score} at age {age}");
        }
    }

    #[test]
    fn window_boundary() {
        let engaged = counts(100, 50, 20, 10);
        assert!(trending_score(&engaged, 29.999) > 0.0);
        assert_eq!(trending_score(&engaged, 30.0), 0.0);
        assert_eq!(trending_score(&engaged, 30.001), 0.0);
    }

    #[test]
    fn future_created_at_is_treated_as_brand_new() {
        // Negative age must not push the weight above 1.
        assert_eq!(age_weight(-5.0), 1.0);
        let c = counts(10, 0, 0, 1);
        assert_eq!(trending_score(&c, -5.0), trending_score(&c, 0.0));
    }

    #[test]
    fn made_outweighs_saves_outweighs_likes() {
        let base = counts(10, 10, 10, 100);
        let base_score = trending_score(&base, 0.0);
        let plus_like = trending_score(&counts(11, 10, 10, 100), 0.0);
        let plus_save = trending_score(&counts(10, 11, 10, 100), 0.0);
        let plus_made = trending_score(&counts(10, 10, 11, 100), 0.0);
        assert!(plus_like > base_score);
        assert!(plus_save > plus_like);
        assert!(plus_made > plus_save);
    }

    #[test]
    fn views_inflation_reduces_score() {
        let exposed = trending_score(&counts(10, 0, 0, 100), 0.0);
        let fresh = trending_score(&counts(10, 0, 0, 1), 0.0);
        assert!(exposed < fresh);
    }

    #[test]
    fn worked_example_fresh() {
        // (10*2 + 5*3 + 2*5) / 50 = 0.9 at age zero.
        let score = trending_score(&counts(10, 5, 2, 50), 0.0);
        assert!((score - 0.9).abs() < 1e-12);
    }

    #[test]
    fn worked_example_half_decayed() {
        // Same counters 15 days in: age weight 0.5, score 0.45.
        let score = trending_score(&counts(10, 5, 2, 50), 15.0);
        assert!((score - 0.45).abs() < 1e-12);
    }

    #[test]
    fn age_is_fractional_not_floored() {
        let now = Utc::now();
        let created = now - Duration::hours(36);
        let age = age_in_days(created, now);
        assert!((age - 1.5).abs() < 1e-6);
    }

    #[test]
    fn rank_order_breaks_ties_by_recency() {
        let now = Utc::now();
        let older = now - Duration::days(2);
        assert_eq!(rank_order((1.0, older), (0.5, now)), Ordering::Less);
        assert_eq!(rank_order((0.5, older), (1.0, now)), Ordering::Greater);
        // Equal scores: newer first.
        assert_eq!(rank_order((0.5, now), (0.5, older)), Ordering::Less);
    }
}
