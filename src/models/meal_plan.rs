//! Meal plan model
//!
//! Days of meals, each meal a list of sized food portions.

use serde::{Deserialize, Serialize};

use super::nutrition::round1;
use super::Nutrition;

/// Meal slot label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
        }
    }

    /// Label for a slot position in a day of `slot_count` meals
    pub fn for_slot(index: usize, slot_count: usize, has_lunch: bool) -> Self {
        if index == 0 {
            MealType::Breakfast
        } else if index + 1 == slot_count {
            MealType::Dinner
        } else if index == 1 && has_lunch {
            MealType::Lunch
        } else {
            MealType::Snack
        }
    }
}

/// One food in a meal, sized to its calorie allocation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedFood {
    pub name: &'static str,
    pub portion_grams: f64,
    pub calories: i64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub prep_time: u32,
}

impl PlannedFood {
    /// Build from allocated calories and the unrounded portion nutrition
    pub fn new(name: &'static str, grams: f64, nutrition: &Nutrition, prep_time: u32) -> Self {
        Self {
            name,
            portion_grams: round1(grams),
            calories: nutrition.calories.round() as i64,
            protein: round1(nutrition.protein),
            carbs: round1(nutrition.carbs),
            fat: round1(nutrition.fat),
            prep_time,
        }
    }
}

/// Macronutrient grams of a meal
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MealMacros {
    pub protein: f64,
    pub carbohydrates: f64,
    pub fat: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Meal {
    pub meal_type: MealType,
    pub target_calories: i64,
    pub foods: Vec<PlannedFood>,
    pub total_calories: i64,
    pub macronutrients: MealMacros,
}

impl Meal {
    pub fn new(meal_type: MealType, target_calories: i64, foods: Vec<PlannedFood>, totals: &Nutrition) -> Self {
        Self {
            meal_type,
            target_calories,
            foods,
            total_calories: totals.calories.round() as i64,
            macronutrients: MealMacros {
                protein: round1(totals.protein),
                carbohydrates: round1(totals.carbs),
                fat: round1(totals.fat),
            },
        }
    }
}

/// Sum of a day's meal totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DailyTotals {
    pub calories: i64,
    pub protein: f64,
    pub carbohydrates: f64,
    pub fat: f64,
}

impl DailyTotals {
    pub fn from_meals(meals: &[Meal]) -> Self {
        let calories = meals.iter().map(|m| m.total_calories).sum();
        let protein: f64 = meals.iter().map(|m| m.macronutrients.protein).sum();
        let carbohydrates: f64 = meals.iter().map(|m| m.macronutrients.carbohydrates).sum();
        let fat: f64 = meals.iter().map(|m| m.macronutrients.fat).sum();

        Self {
            calories,
            protein: round1(protein),
            carbohydrates: round1(carbohydrates),
            fat: round1(fat),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayPlan {
    pub day: u32,
    pub meals: Vec<Meal>,
    pub daily_totals: DailyTotals,
}

/// A complete multi-day meal plan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealPlan {
    pub meal_plan: Vec<DayPlan>,
    pub target_calories: i64,
    pub goal: String,
    pub dietary_restrictions: Vec<String>,
    pub days: u32,
}
