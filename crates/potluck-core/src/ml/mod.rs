//! Client for the external ML service (food recognition, tag generation,
//! nutrition analysis). The service itself is a separate deployment; only
//! its HTTP contract lives here.

mod client;
mod config;
mod types;

pub use client::{MlBackend, MlClient, MlError, MockMlBackend};
pub use config::{MlConfig, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
pub use types::{
    DishAnalysis, DishAnalysisRequest, HealthResponse, IngredientInput, NutritionFacts,
    NutritionInfo, RecipeAnalysisRequest, RecipeAnalysisResponse,
};
