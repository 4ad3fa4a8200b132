//! Food lookup and portion analysis

use serde::Serialize;

use crate::catalog::find_food;
use crate::error::{ensure_finite, PlanError, PlanResult};
use crate::models::round1;

/// Portion used when the caller gives none
pub const DEFAULT_PORTION_GRAMS: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortionNutrition {
    pub calories: f64,
    pub protein: f64,
    pub carbohydrates: f64,
    pub fat: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodAnalysis {
    pub food_name: String,
    pub portion_size_grams: f64,
    pub nutrition: PortionNutrition,
    pub prep_time_minutes: u32,
}

/// Nutrition of `portion_grams` of the first database food whose name
/// contains `food_name`.
pub fn analyze_food_item(food_name: &str, portion_grams: f64) -> PlanResult<FoodAnalysis> {
    let portion_grams = ensure_finite("portion_size_grams", portion_grams)?;
    let food = find_food(food_name)
        .ok_or_else(|| PlanError::DataUnavailable(format!("Food '{}' not found in database", food_name)))?;

    let n = food.portion(portion_grams);
    Ok(FoodAnalysis {
        food_name: food.name.to_string(),
        portion_size_grams: portion_grams,
        nutrition: PortionNutrition {
            calories: round1(n.calories),
            protein: round1(n.protein),
            carbohydrates: round1(n.carbs),
            fat: round1(n.fat),
        },
        prep_time_minutes: food.prep_time_minutes,
    })
}
