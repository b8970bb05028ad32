pub mod create;
pub mod delete;
pub mod follow;
pub mod get;

use axum::routing::{get as get_route, post, put};
use axum::Router;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::User;
use crate::state::SharedState;

pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/api/users", post(create::create_user))
        .route(
            "/api/users/{id}",
            get_route(get::get_user).delete(delete::delete_user),
        )
        .route(
            "/api/users/{id}/follow",
            put(follow::follow_user).delete(follow::unfollow_user),
        )
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            username: user.username,
            display_name: user.display_name,
            bio: user.bio,
            avatar_url: user.avatar_url,
            is_verified: user.is_verified,
            created_at: user.created_at,
        }
    }
}
