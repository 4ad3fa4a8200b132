//! Calorie and macro calculator
//!
//! Mifflin-St Jeor BMR, activity-scaled TDEE, goal-adjusted target
//! calories and a goal-keyed macro split.

use tracing::debug;

use crate::error::{ensure_finite, PlanResult};
use crate::models::{
    ActivityLevel, Gender, Goal, MacroBreakdown, MacroTarget, NutritionProfile,
    DEFAULT_ACTIVITY_MULTIPLIER, KCAL_PER_G_CARBS, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN,
};

/// Basal metabolic rate (kcal/day), Mifflin-St Jeor:
/// `10 × weight_kg + 6.25 × height_cm − 5 × age + offset`
/// where the offset is +5 for men and −161 for women.
pub fn mifflin_st_jeor(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> f64 {
    10.0 * weight_kg + 6.25 * height_cm - 5.0 * f64::from(age) + gender.bmr_offset()
}

/// TDEE multiplier for an activity label; unknown labels use 1.55
pub fn activity_multiplier(activity_level: &str) -> f64 {
    ActivityLevel::from_str(activity_level)
        .map(|a| a.multiplier())
        .unwrap_or(DEFAULT_ACTIVITY_MULTIPLIER)
}

pub fn target_calories(tdee: f64, goal: Goal) -> f64 {
    tdee + goal.calorie_adjustment()
}

pub fn macro_breakdown(target_calories: f64, goal: Goal) -> MacroBreakdown {
    let ratios = goal.macro_ratios();
    MacroBreakdown {
        protein: MacroTarget::new(target_calories, ratios.protein, KCAL_PER_G_PROTEIN),
        carbohydrates: MacroTarget::new(target_calories, ratios.carbs, KCAL_PER_G_CARBS),
        fats: MacroTarget::new(target_calories, ratios.fat, KCAL_PER_G_FAT),
    }
}

/// Compute BMR, TDEE, target calories and macros for one person.
///
/// Unrecognized gender, activity level and goal values fall back to
/// female, 1.55 and maintenance respectively. Measurements are only
/// required to be finite; zero or negative values still go through the
/// formula.
pub fn compute_calorie_targets(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: &str,
    activity_level: &str,
    goal: &str,
) -> PlanResult<NutritionProfile> {
    let weight_kg = ensure_finite("weight_kg", weight_kg)?;
    let height_cm = ensure_finite("height_cm", height_cm)?;

    let goal = Goal::resolve(goal);
    let bmr = mifflin_st_jeor(weight_kg, height_cm, age, Gender::from_str(gender));
    let tdee = bmr * activity_multiplier(activity_level);
    let target = target_calories(tdee, goal);

    debug!(bmr, tdee, target, goal = goal.as_str(), "Computed calorie targets");

    Ok(NutritionProfile {
        bmr,
        tdee,
        target_calories: target,
        macros: macro_breakdown(target, goal),
    })
}
