//! Data models
//!
//! Value objects for reference data, requests and generated plans.

mod exercise;
mod food_item;
mod meal_plan;
mod nutrition;
mod profile;
mod workout_plan;

pub use exercise::{ExerciseCategory, ExerciseItem, SkillLevel, DEFAULT_CALORIE_RATE};
pub use food_item::{DietaryRestriction, FoodItem, FoodSource, Restrictions};
pub use meal_plan::{DailyTotals, DayPlan, Meal, MealMacros, MealPlan, MealType, PlannedFood};
pub use nutrition::{round1, Nutrition};
pub use profile::{
    ActivityLevel, Gender, Goal, MacroBreakdown, MacroRatios, MacroTarget, NutritionProfile,
    DEFAULT_ACTIVITY_MULTIPLIER, KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN,
};
pub use workout_plan::{TargetMuscles, WorkoutExercise, WorkoutPlan};
