//! Request and response types for the ML backend's JSON contract.
//!
//! The shapes mirror what the service actually emits; anything the server
//! merely persists (analysis blobs on food images, nutrition payloads on
//! recipes) stays an opaque `serde_json::Value` at the storage layer.

use serde::{Deserialize, Serialize};

/// One ingredient line sent for recipe analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngredientInput {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preparation: Option<String>,
}

/// Request body for recipe analysis (tags, nutrition, pairings).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeAnalysisRequest {
    pub ingredients: Vec<IngredientInput>,
    pub instructions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<i32>,
}

/// Nutrition breakdown as the service computes it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionInfo {
    pub calories: f64,
    /// Grams.
    pub protein: f64,
    /// Grams.
    pub carbs: f64,
    /// Grams.
    pub fat: f64,
    /// Grams.
    #[serde(default)]
    pub fiber: f64,
    /// Grams.
    #[serde(default)]
    pub sugar: f64,
    /// Milligrams.
    #[serde(default)]
    pub sodium: f64,
    #[serde(default)]
    pub per_serving: bool,
}

/// Response from recipe analysis.
#[derive(Debug, Clone, Deserialize)]
pub struct RecipeAnalysisResponse {
    pub tags: Vec<String>,
    pub nutrition: NutritionInfo,
    pub pairings: Vec<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub estimated_cost: Option<f64>,
    pub processing_time: f64,
}

/// Request body for dish analysis from a photo. The image travels as a
/// base64 data string, matching the service's contract.
#[derive(Debug, Clone, Serialize)]
pub struct DishAnalysisRequest {
    pub image: String,
}

/// Nutrition facts block inside a dish analysis. The service fills what it
/// can; every field is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NutritionFacts {
    #[serde(default)]
    pub serving_size: Option<String>,
    #[serde(default)]
    pub calories: Option<f64>,
    #[serde(default)]
    pub protein: Option<f64>,
    #[serde(default)]
    pub carbohydrates: Option<f64>,
    #[serde(default)]
    pub fat: Option<f64>,
}

/// What the service recognized in a food photo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DishAnalysis {
    pub dish_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Free-form recipe text for the recognized dish.
    #[serde(default)]
    pub recipe: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub nutrition_facts: NutritionFacts,
    #[serde(default)]
    pub food_pairings: Vec<String>,
}

/// Health probe response.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dish_analysis_decodes_service_payload() {
        // Shape as emitted by the collaborator's /recipe_analysis endpoint.
        let body = r#"{
            "dish_name": "Shakshuka",
            "description": "Eggs poached in spiced tomato sauce",
            "tags": ["breakfast", "vegetarian"],
            "recipe": "Simmer the sauce, crack in the eggs.",
            "ingredients": ["eggs", "tomatoes", "paprika"],
            "nutrition_facts": {
                "serving_size": "1 skillet",
                "calories": 420,
                "protein": 18,
                "carbohydrates": 22,
                "fat": 28
            },
            "food_pairings": ["crusty bread", "labneh"]
        }"#;

        let analysis: DishAnalysis = serde_json::from_str(body).unwrap();
        assert_eq!(analysis.dish_name, "Shakshuka");
        assert_eq!(analysis.tags.len(), 2);
        assert_eq!(analysis.nutrition_facts.calories, Some(420.0));
        assert_eq!(analysis.food_pairings[0], "crusty bread");
    }

    #[test]
    fn dish_analysis_tolerates_sparse_payload() {
        let analysis: DishAnalysis = serde_json::from_str(r#"{"dish_name": "Toast"}"#).unwrap();
        assert!(analysis.tags.is_empty());
        assert!(analysis.nutrition_facts.calories.is_none());
    }

    #[test]
    fn analysis_request_omits_empty_optionals() {
        let req = RecipeAnalysisRequest {
            ingredients: vec![IngredientInput {
                name: "flour".to_string(),
                amount: Some(250.0),
                unit: Some("g".to_string()),
                preparation: None,
            }],
            instructions: vec!["Mix".to_string()],
            cuisine: None,
            category: None,
            servings: Some(4),
        };

        let json = serde_json::to_value(&req).unwrap();
        assert!(json.get("cuisine").is_none());
        assert_eq!(json["servings"], 4);
        assert!(json["ingredients"][0].get("preparation").is_none());
    }
}
