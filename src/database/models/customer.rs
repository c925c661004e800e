use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A customer joined with both specializations. `cooking_history` is set for
/// recipe creators, `rating_history` for food critics; plain customers have
/// neither.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CustomerDetail {
    pub id: i32,
    pub name: String,
    pub email_address: Option<String>,
    pub cooking_history: Option<String>,
    pub rating_history: Option<String>,
}

/// A customer together with the stars they gave one recipe.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CustomerRating {
    pub id: i32,
    pub name: String,
    pub email_address: Option<String>,
    pub stars: i32,
}
