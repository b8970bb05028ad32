pub mod ml;
pub mod tags;
pub mod trending;
pub mod types;

pub use tags::merge_tags;
pub use trending::{
    age_in_days, age_weight, engagement_score, rank_order, trending_score, trending_score_at,
    EngagementCounts, LIKE_WEIGHT, MADE_WEIGHT, SAVE_WEIGHT, TRENDING_WINDOW_DAYS,
};
pub use types::{Difficulty, MealType};
