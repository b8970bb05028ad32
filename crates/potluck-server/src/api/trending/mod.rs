pub mod refresh;

use axum::routing::post;
use axum::Router;

use crate::state::SharedState;

pub fn router() -> Router<SharedState> {
    Router::new().route("/api/trending/refresh", post(refresh::refresh_trending))
}
