use std::sync::Arc;

use potluck_core::ml::MlBackend;

use crate::db::DbPool;

/// Application state shared across all handlers.
pub struct AppState {
    pub pool: DbPool,
    pub ml: Arc<dyn MlBackend>,
}

pub type SharedState = Arc<AppState>;
