pub mod manager;
pub mod models;
pub mod rows;

pub mod cuisines;
pub mod customers;
pub mod ingredients;
pub mod recipes;
pub mod saved_lists;

pub use manager::{Database, DbError};
