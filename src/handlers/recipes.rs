use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::database::models::NewRecipe;
use crate::database::recipes;
use crate::error::ApiError;
use crate::query::RecipeProjection;

/// GET /recipe - every recipe, ordered by id
pub async fn list() -> Result<impl IntoResponse, ApiError> {
    let recipes = recipes::fetch_all().await?;
    Ok(Json(json!({ "data": recipes })))
}

/// POST /initiate-recipe - drop and recreate the recipe table
pub async fn initiate() -> Result<impl IntoResponse, ApiError> {
    recipes::initiate_table().await?;
    Ok(Json(json!({ "success": true })))
}

/// POST /insert-recipe - guarded insert; rejections carry a descriptive message
pub async fn insert(Json(new): Json<NewRecipe>) -> Result<impl IntoResponse, ApiError> {
    recipes::insert(new).await?;
    Ok(Json(json!({ "success": true })))
}

#[derive(Debug, Deserialize)]
pub struct IngredientSearchRequest {
    pub ing1: Option<String>,
    pub ing2: Option<String>,
    pub ing3: Option<String>,
    pub ing4: Option<String>,
    pub ing5: Option<String>,
}

/// POST /findAllRecipesTable - recipes containing all the given ingredients
pub async fn find_by_ingredients(
    Json(req): Json<IngredientSearchRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let names: Vec<String> = [req.ing1, req.ing2, req.ing3, req.ing4, req.ing5]
        .into_iter()
        .flatten()
        .collect();

    let recipes = recipes::find_by_ingredients(names).await?;
    Ok(Json(json!({ "data": recipes, "success": true })))
}

#[derive(Debug, Deserialize)]
pub struct ProjectionRequest {
    pub attributes: Vec<String>,
}

/// POST /recipes/projection - caller-chosen columns, validated against the
/// allow-list before any SQL text is assembled
pub async fn projection(
    Json(req): Json<ProjectionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let projection = RecipeProjection::parse(&req.attributes)?;
    let rows = recipes::project(projection).await?;
    Ok(Json(json!({ "success": true, "data": rows })))
}

#[derive(Debug, Deserialize)]
pub struct AvgRatingRequest {
    pub threshold: f64,
}

/// POST /recipes/avg-rating - recipes whose average rating reaches the threshold
pub async fn above_avg_rating(
    Json(req): Json<AvgRatingRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let recipes = recipes::above_avg_rating(req.threshold).await?;
    Ok(Json(json!({ "data": recipes, "success": true })))
}
