//! # Nutrition
//!
//! Calorie lookup over the food table and food-based remedies for
//! everyday conditions.

pub mod food;
pub mod remedies;

pub use food::FoodCatalog;
pub use remedies::FoodHealthMatcher;
