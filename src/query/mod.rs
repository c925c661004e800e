pub mod builder;
pub mod error;
pub mod projection;

pub use builder::{bind_value, bind_value_as, BoolOp, PredicateList, SqlQuery};
pub use error::QueryError;
pub use projection::{RecipeProjection, RECIPE_COLUMNS};
