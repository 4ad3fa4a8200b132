//! Nutrition planning
//!
//! Calorie targets, meal plan composition, goal guidance and food lookup.

pub mod analysis;
pub mod calculator;
pub mod composer;
pub mod recommendations;

pub use analysis::{analyze_food_item, FoodAnalysis, PortionNutrition, DEFAULT_PORTION_GRAMS};
pub use calculator::{compute_calorie_targets, macro_breakdown, mifflin_st_jeor};
pub use composer::{candidate_pool, compose_meal_plan, MAX_PLAN_DAYS};
pub use recommendations::{nutrition_recommendations, Recommendations};
