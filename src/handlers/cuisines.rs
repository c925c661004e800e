use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::database::cuisines;
use crate::error::ApiError;

/// GET /top-cuisines - cuisine styles tying the best average rating
pub async fn top() -> Result<impl IntoResponse, ApiError> {
    let cuisines = cuisines::top_by_avg_rating().await?;
    Ok(Json(json!({ "data": cuisines })))
}
