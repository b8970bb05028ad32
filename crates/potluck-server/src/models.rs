use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub username: String,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser<'a> {
    pub email: &'a str,
    pub username: &'a str,
    pub display_name: Option<&'a str>,
    pub bio: Option<&'a str>,
    pub avatar_url: Option<&'a str>,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Recipe {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub instructions: serde_json::Value,
    pub prep_time_minutes: Option<i32>,
    pub cook_time_minutes: Option<i32>,
    pub servings: Option<i32>,
    pub difficulty: Option<String>,
    pub cuisine: Option<String>,
    pub category: Option<String>,
    pub image_urls: Vec<Option<String>>,
    pub user_tags: Vec<Option<String>>,
    pub ai_tags: Vec<Option<String>>,
    pub pairings: Option<serde_json::Value>,
    pub nutrition: Option<serde_json::Value>,
    pub likes_count: i32,
    pub saves_count: i32,
    pub made_count: i32,
    pub views_count: i32,
    pub reviews_count: i32,
    pub avg_rating: f64,
    pub is_published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::recipes)]
pub struct NewRecipe<'a> {
    pub user_id: Uuid,
    pub title: &'a str,
    pub description: Option<&'a str>,
    pub instructions: serde_json::Value,
    pub prep_time_minutes: Option<i32>,
    pub cook_time_minutes: Option<i32>,
    pub servings: Option<i32>,
    pub difficulty: Option<&'a str>,
    pub cuisine: Option<&'a str>,
    pub category: Option<&'a str>,
    pub image_urls: &'a [Option<String>],
    pub user_tags: &'a [Option<String>],
}

/// Partial update for recipe content. `None` fields are left untouched.
#[derive(AsChangeset, Default)]
#[diesel(table_name = crate::schema::recipes)]
pub struct RecipeChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub instructions: Option<serde_json::Value>,
    pub prep_time_minutes: Option<i32>,
    pub cook_time_minutes: Option<i32>,
    pub servings: Option<i32>,
    pub difficulty: Option<String>,
    pub cuisine: Option<String>,
    pub category: Option<String>,
    pub image_urls: Option<Vec<Option<String>>>,
    pub user_tags: Option<Vec<Option<String>>>,
    pub ai_tags: Option<Vec<Option<String>>>,
    pub pairings: Option<serde_json::Value>,
    pub nutrition: Option<serde_json::Value>,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::ingredients)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Ingredient {
    pub id: Uuid,
    pub name: String,
    pub category: Option<String>,
    pub default_unit: Option<String>,
    pub aliases: Vec<Option<String>>,
    pub nutrition_per_100g: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::ingredients)]
pub struct NewIngredient<'a> {
    pub name: &'a str,
    pub category: Option<&'a str>,
    pub default_unit: Option<&'a str>,
    pub aliases: &'a [Option<String>],
    pub nutrition_per_100g: Option<serde_json::Value>,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::recipe_ingredients)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RecipeIngredient {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub ingredient_id: Uuid,
    pub amount: Option<f64>,
    pub unit: Option<String>,
    pub preparation: Option<String>,
    pub is_optional: bool,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::recipe_ingredients)]
pub struct NewRecipeIngredient<'a> {
    pub recipe_id: Uuid,
    pub ingredient_id: Uuid,
    pub amount: Option<f64>,
    pub unit: Option<&'a str>,
    pub preparation: Option<&'a str>,
    pub is_optional: bool,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::recipe_likes)]
pub struct NewRecipeLike {
    pub recipe_id: Uuid,
    pub user_id: Uuid,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::saved_recipes)]
pub struct NewSavedRecipe {
    pub recipe_id: Uuid,
    pub user_id: Uuid,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::recipe_reviews)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RecipeReview {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub user_id: Uuid,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::recipe_reviews)]
pub struct NewRecipeReview<'a> {
    pub recipe_id: Uuid,
    pub user_id: Uuid,
    pub rating: i32,
    pub comment: Option<&'a str>,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::made_recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MadeRecipe {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub user_id: Uuid,
    pub rating: Option<i32>,
    pub notes: Option<String>,
    pub photo_urls: Vec<Option<String>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::made_recipes)]
pub struct NewMadeRecipe<'a> {
    pub recipe_id: Uuid,
    pub user_id: Uuid,
    pub rating: Option<i32>,
    pub notes: Option<&'a str>,
    pub photo_urls: &'a [Option<String>],
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::follows)]
pub struct NewFollow {
    pub follower_id: Uuid,
    pub following_id: Uuid,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::meal_plans)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MealPlan {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::meal_plans)]
pub struct NewMealPlan<'a> {
    pub user_id: Uuid,
    pub name: &'a str,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::meal_plan_items)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MealPlanItem {
    pub id: Uuid,
    pub meal_plan_id: Uuid,
    pub recipe_id: Uuid,
    pub plan_date: NaiveDate,
    pub meal_type: String,
    pub servings: f64,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::meal_plan_items)]
pub struct NewMealPlanItem<'a> {
    pub meal_plan_id: Uuid,
    pub recipe_id: Uuid,
    pub plan_date: NaiveDate,
    pub meal_type: &'a str,
    pub servings: f64,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::shopping_lists)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ShoppingList {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub items: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::shopping_lists)]
pub struct NewShoppingList<'a> {
    pub user_id: Uuid,
    pub name: &'a str,
    pub items: serde_json::Value,
}

#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = crate::schema::food_images)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct FoodImage {
    pub id: Uuid,
    pub user_id: Option<Uuid>,
    pub recipe_id: Option<Uuid>,
    pub content_type: String,
    pub data: Vec<u8>,
    pub analysis: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::food_images)]
pub struct NewFoodImage<'a> {
    pub user_id: Option<Uuid>,
    pub recipe_id: Option<Uuid>,
    pub content_type: &'a str,
    pub data: &'a [u8],
}

#[derive(Queryable, Selectable, Debug, Serialize, Deserialize)]
#[diesel(table_name = crate::schema::trending_recipes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TrendingRecipe {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub score: f64,
    pub trending_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::trending_recipes)]
pub struct NewTrendingRecipe {
    pub recipe_id: Uuid,
    pub score: f64,
    pub trending_at: DateTime<Utc>,
}
