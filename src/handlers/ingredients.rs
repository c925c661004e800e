use axum::extract::Path;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::database::ingredients;
use crate::database::DbError;
use crate::error::ApiError;

/// GET /ingredients
pub async fn list() -> Result<impl IntoResponse, ApiError> {
    let ingredients = ingredients::fetch_all().await?;
    Ok(Json(json!({ "data": ingredients })))
}

/// DELETE /ingredient/:id - deleting an id that does not exist is a failure
pub async fn remove(Path(id): Path<i32>) -> Result<impl IntoResponse, ApiError> {
    ingredients::delete(id).await.map_err(|err| match err {
        DbError::NotFound(_) => ApiError::validation("Failed to delete ingredient."),
        other => ApiError::from(other),
    })?;

    Ok(Json(json!({
        "success": true,
        "message": "Ingredient deleted successfully."
    })))
}
