use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One saved list with its owner and how many recipes it holds.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SavedListCount {
    pub saved_list_name: String,
    pub owner_name: String,
    pub recipe_count: i64,
}
