use axum::extract::Path;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::database::customers;
use crate::error::ApiError;
use crate::query::BoolOp;

/// GET /customer - every customer with both specializations joined in
pub async fn list() -> Result<impl IntoResponse, ApiError> {
    let customers = customers::fetch_all().await?;
    Ok(Json(json!({ "data": customers })))
}

#[derive(Debug, Deserialize)]
pub struct SelectCustomerRequest {
    #[serde(rename = "type")]
    pub customer_type: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "andOr")]
    pub and_or: Option<String>,
}

/// POST /select-customer - optional type/name filters joined by `andOr`
pub async fn select(
    Json(req): Json<SelectCustomerRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let op = match req.and_or.as_deref() {
        None => BoolOp::default(),
        Some(raw) => BoolOp::parse(raw)?,
    };

    let customers = customers::select(req.customer_type, req.name, op).await?;
    Ok(Json(json!({ "data": customers, "success": true })))
}

#[derive(Debug, Deserialize)]
pub struct UpdateCustomerRequest {
    #[serde(rename = "newName")]
    pub new_name: Option<String>,
    #[serde(rename = "newEmail")]
    pub new_email: Option<String>,
}

/// PUT /customer/:id - update whichever fields were provided
pub async fn update(
    Path(id): Path<i32>,
    Json(req): Json<UpdateCustomerRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if req.new_name.is_none() && req.new_email.is_none() {
        return Err(ApiError::validation("newName or newEmail is required."));
    }

    customers::update(id, req.new_name, req.new_email).await?;
    Ok(Json(json!({ "success": true })))
}

#[derive(Debug, Deserialize)]
pub struct CustomersByRecipeRequest {
    #[serde(rename = "recipeTitle")]
    pub recipe_title: Option<String>,
    #[serde(rename = "minStars")]
    pub min_stars: Option<Value>,
}

/// POST /customers-by-recipe - customers who rated a matching recipe at or
/// above the star floor
pub async fn by_recipe(
    Json(req): Json<CustomersByRecipeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let title = match req.recipe_title {
        Some(t) if !t.trim().is_empty() => t,
        _ => {
            return Err(ApiError::validation(
                "recipeTitle and minStars are required.",
            ))
        }
    };

    let min_stars = match &req.min_stars {
        None => {
            return Err(ApiError::validation(
                "recipeTitle and minStars are required.",
            ))
        }
        Some(v) => number_value(v).ok_or_else(|| ApiError::validation("minStars must be a number."))?,
    };

    let customers = customers::by_recipe_rating(title, min_stars).await?;
    Ok(Json(json!({ "data": customers })))
}

// Form inputs arrive as text, so numeric strings count too.
fn number_value(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
