pub mod cuisine;
pub mod customer;
pub mod ingredient;
pub mod recipe;
pub mod saved_list;

pub use cuisine::CuisineRating;
pub use customer::{CustomerDetail, CustomerRating};
pub use ingredient::Ingredient;
pub use recipe::{NewRecipe, Recipe, RecipeRating, RecipeSummary};
pub use saved_list::SavedListCount;
