pub mod food_images;
pub mod meal_plans;
pub mod recipes;
pub mod shopping_lists;
pub mod trending;
pub mod users;

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

/// Shared error response used by all endpoints.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Error half of every handler's return type.
pub type ApiError = (StatusCode, Json<ErrorResponse>);

fn error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
}

pub(crate) fn internal(message: &str) -> ApiError {
    error(StatusCode::INTERNAL_SERVER_ERROR, message)
}

pub(crate) fn not_found(message: &str) -> ApiError {
    error(StatusCode::NOT_FOUND, message)
}

pub(crate) fn bad_request(message: impl Into<String>) -> ApiError {
    error(StatusCode::BAD_REQUEST, message)
}

pub(crate) fn conflict(message: &str) -> ApiError {
    error(StatusCode::CONFLICT, message)
}

pub(crate) fn bad_gateway(message: &str) -> ApiError {
    error(StatusCode::BAD_GATEWAY, message)
}

#[derive(OpenApi)]
#[openapi(
    paths(
        users::create::create_user,
        users::get::get_user,
        users::delete::delete_user,
        users::follow::follow_user,
        users::follow::unfollow_user,
        recipes::create::create_recipe,
        recipes::get::get_recipe,
        recipes::list::list_recipes,
        recipes::update::update_recipe,
        recipes::delete::delete_recipe,
        recipes::publish::publish_recipe,
        recipes::analyze::analyze_recipe,
        recipes::like::like_recipe,
        recipes::like::unlike_recipe,
        recipes::save::save_recipe,
        recipes::save::unsave_recipe,
        recipes::review::review_recipe,
        recipes::review::delete_review,
        recipes::made::record_made,
        recipes::view::record_view,
        recipes::trending::trending_recipes,
        trending::refresh::refresh_trending,
        meal_plans::create::create_meal_plan,
        meal_plans::get::get_meal_plan,
        meal_plans::delete::delete_meal_plan,
        meal_plans::add_item::add_item,
        meal_plans::remove_item::remove_item,
        shopping_lists::create::create_list,
        shopping_lists::get::get_list,
        shopping_lists::list::list_lists,
        shopping_lists::update::update_list,
        shopping_lists::delete::delete_list,
        food_images::create::create_food_image,
        food_images::get::get_food_image,
        food_images::analyze::analyze_food_image,
    ),
    components(schemas(
        ErrorResponse,
        users::create::CreateUserRequest,
        users::UserResponse,
        users::get::UserProfileResponse,
        users::follow::FollowRequest,
        recipes::ActorRequest,
        recipes::IngredientLineRequest,
        recipes::RecipeIngredientResponse,
        recipes::RecipeResponse,
        recipes::RecipeSummary,
        recipes::create::CreateRecipeRequest,
        recipes::list::ListRecipesResponse,
        recipes::update::UpdateRecipeRequest,
        recipes::review::ReviewRequest,
        recipes::made::MadeRequest,
        recipes::trending::TrendingEntry,
        recipes::trending::TrendingResponse,
        trending::refresh::RefreshTrendingResponse,
        meal_plans::create::CreateMealPlanRequest,
        meal_plans::MealPlanResponse,
        meal_plans::MealPlanItemResponse,
        meal_plans::add_item::AddItemRequest,
        shopping_lists::ShoppingListResponse,
        shopping_lists::create::CreateShoppingListRequest,
        shopping_lists::list::ShoppingListsResponse,
        shopping_lists::update::UpdateShoppingListRequest,
        food_images::FoodImageResponse,
        food_images::create::CreateFoodImageRequest,
        food_images::analyze::AnalyzeImageResponse,
        potluck_core::types::Difficulty,
        potluck_core::types::MealType,
    )),
    tags(
        (name = "users", description = "User accounts and the follow graph"),
        (name = "recipes", description = "Recipe CRUD, publishing, and engagement"),
        (name = "trending", description = "Materialized trending scores"),
        (name = "meal-plans", description = "Meal planning"),
        (name = "shopping-lists", description = "Shopping lists"),
        (name = "food-images", description = "Uploaded food photos and ML analysis")
    )
)]
struct ApiDoc;

pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
