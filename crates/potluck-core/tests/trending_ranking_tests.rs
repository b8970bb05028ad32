//! Feed-level ranking tests: score a set of recipes the way the server's
//! trending surface does and check the resulting order.

use chrono::{DateTime, Duration, Utc};
use potluck_core::trending::{rank_order, trending_score_at, EngagementCounts};

struct Candidate {
    name: &'static str,
    counts: EngagementCounts,
    created_at: DateTime<Utc>,
}

fn rank(candidates: Vec<Candidate>, now: DateTime<Utc>) -> Vec<&'static str> {
    let mut scored: Vec<(f64, DateTime<Utc>, &'static str)> = candidates
        .into_iter()
        .map(|c| {
            (
                trending_score_at(&c.counts, c.created_at, now),
                c.created_at,
                c.name,
            )
        })
        .collect();

    scored.sort_by(|a, b| rank_order((a.0, a.1), (b.0, b.1)));
    scored.into_iter().map(|(_, _, name)| name).collect()
}

fn counts(likes: i64, saves: i64, made: i64, views: i64) -> EngagementCounts {
    EngagementCounts {
        likes,
        saves,
        made,
        views,
    }
}

#[test]
fn fresh_high_rate_recipe_beats_popular_but_overexposed() {
    let now = Utc::now();

    let ranked = rank(
        vec![
            Candidate {
                // 100 likes but 10k views: rate 0.02.
                name: "viral-but-diluted",
                counts: counts(100, 0, 0, 10_000),
                created_at: now - Duration::days(1),
            },
            Candidate {
                // 3 makes on 10 views: rate 1.5.
                name: "small-but-loved",
                counts: counts(0, 0, 3, 10),
                created_at: now - Duration::days(1),
            },
        ],
        now,
    );

    assert_eq!(ranked, vec!["small-but-loved", "viral-but-diluted"]);
}

#[test]
fn recipes_past_the_window_sink_to_zero() {
    let now = Utc::now();

    let ranked = rank(
        vec![
            Candidate {
                name: "heavily-engaged-but-stale",
                counts: counts(500, 300, 100, 50),
                created_at: now - Duration::days(45),
            },
            Candidate {
                name: "modest-but-fresh",
                counts: counts(2, 1, 0, 20),
                created_at: now - Duration::hours(6),
            },
        ],
        now,
    );

    // 45 days old scores exactly zero regardless of engagement.
    assert_eq!(ranked, vec!["modest-but-fresh", "heavily-engaged-but-stale"]);
}

#[test]
fn equal_scores_order_newest_first() {
    let now = Utc::now();
    let older = now - Duration::days(40);
    let newer = now - Duration::days(35);

    // Both outside the window: both score zero, recency decides.
    let ranked = rank(
        vec![
            Candidate {
                name: "older-zero",
                counts: counts(10, 5, 2, 50),
                created_at: older,
            },
            Candidate {
                name: "newer-zero",
                counts: counts(1, 0, 0, 5),
                created_at: newer,
            },
        ],
        now,
    );

    assert_eq!(ranked, vec!["newer-zero", "older-zero"]);
}

#[test]
fn decay_halves_the_score_mid_window() {
    let now = Utc::now();
    let counts = counts(10, 5, 2, 50);

    let fresh = trending_score_at(&counts, now, now);
    let mid = trending_score_at(&counts, now - Duration::days(15), now);

    assert!((fresh - 0.9).abs() < 1e-9);
    assert!((mid - fresh / 2.0).abs() < 1e-6);
}
