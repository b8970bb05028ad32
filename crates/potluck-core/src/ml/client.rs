//! HTTP client for the external ML backend.
//!
//! The service does the heavy lifting (vision, NLP, nutrition lookup); this
//! client only speaks its JSON contract. Handlers depend on the [`MlBackend`]
//! trait so tests can substitute [`MockMlBackend`].

use async_trait::async_trait;
use thiserror::Error;

use super::config::MlConfig;
use super::types::{
    DishAnalysis, DishAnalysisRequest, HealthResponse, RecipeAnalysisRequest,
    RecipeAnalysisResponse,
};

#[derive(Error, Debug)]
pub enum MlError {
    #[error("ML backend request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("ML backend returned {status}: {message}")]
    Backend { status: u16, message: String },
}

/// Trait for ML backend clients, enabling mockability in tests.
#[async_trait]
pub trait MlBackend: Send + Sync {
    /// Recognize the dish in a photo and describe it.
    async fn analyze_dish(&self, image_base64: &str) -> Result<DishAnalysis, MlError>;

    /// Compute tags, nutrition, and pairing suggestions for a recipe.
    async fn analyze_recipe(
        &self,
        request: &RecipeAnalysisRequest,
    ) -> Result<RecipeAnalysisResponse, MlError>;

    /// Whether the service is up.
    async fn health(&self) -> bool;
}

/// Production client backed by reqwest.
pub struct MlClient {
    http: reqwest::Client,
    base_url: String,
}

impl MlClient {
    pub fn new(config: MlConfig) -> Result<Self, MlError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Create a client from environment configuration.
    pub fn from_env() -> Result<Self, MlError> {
        Self::new(MlConfig::from_env())
    }

    async fn post_json<Req, Resp>(&self, path: &str, body: &Req) -> Result<Resp, MlError>
    where
        Req: serde::Serialize + Sync,
        Resp: serde::de::DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(path = path, "calling ML backend");

        let response = self.http.post(&url).json(body).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(MlError::Backend {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl MlBackend for MlClient {
    async fn analyze_dish(&self, image_base64: &str) -> Result<DishAnalysis, MlError> {
        let request = DishAnalysisRequest {
            image: image_base64.to_string(),
        };
        self.post_json("/recipe_analysis", &request).await
    }

    async fn analyze_recipe(
        &self,
        request: &RecipeAnalysisRequest,
    ) -> Result<RecipeAnalysisResponse, MlError> {
        self.post_json("/recipe/analyze", request).await
    }

    async fn health(&self) -> bool {
        let url = format!("{}/health", self.base_url);
        match self.http.get(&url).send().await {
            Ok(response) => response
                .json::<HealthResponse>()
                .await
                .map(|h| h.status == "healthy")
                .unwrap_or(false),
            Err(e) => {
                tracing::debug!("ML backend health check failed: {}", e);
                false
            }
        }
    }
}

/// Canned-response backend for tests and offline development.
#[derive(Default)]
pub struct MockMlBackend {
    pub dish: Option<DishAnalysis>,
    pub recipe: Option<RecipeAnalysisResponse>,
}

#[async_trait]
impl MlBackend for MockMlBackend {
    async fn analyze_dish(&self, _image_base64: &str) -> Result<DishAnalysis, MlError> {
        self.dish.clone().ok_or(MlError::Backend {
            status: 503,
            message: "no canned dish analysis".to_string(),
        })
    }

    async fn analyze_recipe(
        &self,
        _request: &RecipeAnalysisRequest,
    ) -> Result<RecipeAnalysisResponse, MlError> {
        self.recipe.clone().ok_or(MlError::Backend {
            status: 503,
            message: "no canned recipe analysis".to_string(),
        })
    }

    async fn health(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_returns_canned_dish() {
        let mock = MockMlBackend {
            dish: Some(DishAnalysis {
                dish_name: "Ramen".to_string(),
                description: None,
                tags: vec!["noodles".to_string()],
                recipe: None,
                ingredients: vec![],
                nutrition_facts: Default::default(),
                food_pairings: vec![],
            }),
            recipe: None,
        };

        let analysis = mock.analyze_dish("aGk=").await.unwrap();
        assert_eq!(analysis.dish_name, "Ramen");

        let err = mock
            .analyze_recipe(&RecipeAnalysisRequest {
                ingredients: vec![],
                instructions: vec![],
                cuisine: None,
                category: None,
                servings: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, MlError::Backend { status: 503, .. }));
    }
}
