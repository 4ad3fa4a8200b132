//! Reference data
//!
//! The static nutrition database and meal templates, and the exercise
//! catalog loaded from disk at startup.

pub mod exercises;
pub mod foods;
pub mod templates;

pub use exercises::{CatalogError, CatalogResult, ExerciseCatalog};
pub use foods::{all_foods, find_food, FoodCategory, FoodSubcategory};
pub use templates::{meal_distribution, template_for, ComponentTag, FoodPool, MealTemplate};
