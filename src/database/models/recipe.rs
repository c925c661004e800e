use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Recipe {
    pub id: i32,
    pub title: String,
    pub time_consumed: Option<i32>,
    pub difficulty: Option<String>,
    pub cuisine_id: Option<i32>,
}

/// Insert payload. `customer_id` is optional; when present, the customer is
/// validated and linked to the new recipe.
#[derive(Debug, Clone, Deserialize)]
pub struct NewRecipe {
    #[serde(rename = "customerID")]
    pub customer_id: Option<i32>,
    pub id: i32,
    pub title: String,
    pub time_consumed: Option<i32>,
    pub difficulty: Option<String>,
    #[serde(rename = "cuisineID")]
    pub cuisine_id: Option<i32>,
}

/// Id and title only, for search results.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RecipeSummary {
    pub id: i32,
    pub title: String,
}

/// A recipe title with its average star rating.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct RecipeRating {
    pub title: String,
    pub avg_rating: f64,
}
