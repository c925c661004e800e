pub mod cuisines;
pub mod customers;
pub mod ingredients;
pub mod recipes;
pub mod saved_lists;
pub mod status;
