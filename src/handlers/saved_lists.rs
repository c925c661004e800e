use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::database::saved_lists;
use crate::error::ApiError;

/// POST /savedListCountTable - recipe counts per saved list and owner
pub async fn counts() -> Result<impl IntoResponse, ApiError> {
    let counts = saved_lists::count_by_list().await?;
    Ok(Json(json!({ "data": counts, "success": true })))
}
