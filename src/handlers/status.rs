use axum::response::{IntoResponse, Json};
use serde_json::{json, Value};

use crate::database::Database;

/// GET / - service banner
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");
    let now = chrono::Utc::now();

    Json(json!({
        "success": true,
        "data": {
            "name": "Recipe Book API",
            "version": version,
            "description": "CRUD service for recipes, customers, and ingredients (Axum + Postgres)",
            "timestamp": now,
            "endpoints": {
                "home": "/",
                "status": "/check-db-connection",
                "recipes": "/recipe, /initiate-recipe, /insert-recipe, /findAllRecipesTable, /recipes/projection, /recipes/avg-rating",
                "customers": "/customer, /select-customer, /customer/:id, /customers-by-recipe",
                "ingredients": "/ingredients, /ingredient/:id",
                "reports": "/savedListCountTable, /top-cuisines",
            }
        }
    }))
}

/// GET /check-db-connection - plain-text connectivity probe
pub async fn check_db_connection() -> impl IntoResponse {
    match Database::health_check().await {
        Ok(()) => "connected",
        Err(_) => "unable to connect",
    }
}
