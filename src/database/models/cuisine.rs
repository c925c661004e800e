use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A cuisine style with the average rating across all its recipes.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CuisineRating {
    pub style: String,
    pub avg_rating: f64,
}
