//! Nutrition tools
//!
//! Calorie targets, meal plans, goal guidance and food analysis.

use rand::Rng;
use serde::Serialize;

use crate::models::{MacroTarget, MealPlan};
use crate::nutrition::{self, FoodAnalysis, Recommendations};

use super::envelope::ToolResponse;

pub const CALORIE_FAILURE: &str = "Calorie calculation failed";
pub const MEAL_PLAN_FAILURE: &str = "Meal plan creation failed";
pub const FOOD_ANALYSIS_FAILURE: &str = "Food analysis failed";

/// One macro with whole-number calories, grams and percentage
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacroSummary {
    pub calories: i64,
    pub grams: i64,
    pub percentage: i64,
}

impl From<&MacroTarget> for MacroSummary {
    fn from(m: &MacroTarget) -> Self {
        Self {
            calories: m.calories.round() as i64,
            grams: m.grams.round() as i64,
            percentage: (m.ratio * 100.0).round() as i64,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Macronutrients {
    pub protein: MacroSummary,
    pub carbohydrates: MacroSummary,
    pub fats: MacroSummary,
}

/// Response for calculate_daily_calories
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalorieTargetsResponse {
    pub bmr: i64,
    pub tdee: i64,
    pub target_calories: i64,
    pub macronutrients: Macronutrients,
    pub goal: String,
    pub activity_level: String,
}

/// Response for get_nutrition_recommendations
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationsResponse {
    pub goal: String,
    pub activity_level: String,
    pub recommendations: Recommendations,
}

pub fn calculate_daily_calories(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: &str,
    activity_level: &str,
    goal: &str,
) -> ToolResponse<CalorieTargetsResponse> {
    let result = nutrition::compute_calorie_targets(weight_kg, height_cm, age, gender, activity_level, goal)
        .map(|p| CalorieTargetsResponse {
            bmr: p.bmr.round() as i64,
            tdee: p.tdee.round() as i64,
            target_calories: p.target_calories.round() as i64,
            macronutrients: Macronutrients {
                protein: (&p.macros.protein).into(),
                carbohydrates: (&p.macros.carbohydrates).into(),
                fats: (&p.macros.fats).into(),
            },
            goal: goal.to_string(),
            activity_level: activity_level.to_string(),
        });
    ToolResponse::from_result(result, CALORIE_FAILURE)
}

pub fn create_meal_plan<R: Rng + ?Sized>(
    rng: &mut R,
    target_calories: i64,
    goal: &str,
    dietary_restrictions: &[String],
    meals_per_day: u32,
    days: u32,
) -> ToolResponse<MealPlan> {
    let result = nutrition::compose_meal_plan(
        rng,
        target_calories,
        goal,
        dietary_restrictions,
        meals_per_day,
        days,
    );
    ToolResponse::from_result(result, MEAL_PLAN_FAILURE)
}

pub fn get_nutrition_recommendations(goal: &str, activity_level: &str) -> ToolResponse<RecommendationsResponse> {
    ToolResponse::success(RecommendationsResponse {
        goal: goal.to_string(),
        activity_level: activity_level.to_string(),
        recommendations: nutrition::nutrition_recommendations(goal, activity_level),
    })
}

pub fn analyze_food_item(food_name: &str, portion_size_grams: f64) -> ToolResponse<FoodAnalysis> {
    ToolResponse::from_result(
        nutrition::analyze_food_item(food_name, portion_size_grams),
        FOOD_ANALYSIS_FAILURE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    #[test]
    fn test_calorie_response_is_rounded() {
        let r = calculate_daily_calories(70.0, 175.0, 30, "male", "moderate", "maintenance");
        let data = r.data().unwrap();
        assert_eq!(data.bmr, 1649);
        assert_eq!(data.tdee, 2556);
        assert_eq!(data.target_calories, 2556);
        assert_eq!(data.macronutrients.protein.percentage, 25);
        assert_eq!(data.macronutrients.carbohydrates.percentage, 45);
        assert_eq!(data.macronutrients.fats.percentage, 30);
        assert_eq!(data.macronutrients.fats.grams, 85);
    }

    #[test]
    fn test_unknown_labels_are_echoed() {
        let r = calculate_daily_calories(70.0, 175.0, 30, "male", "couch", "recomp");
        let value = serde_json::to_value(&r).unwrap();
        assert_eq!(value["status"], "success");
        assert_eq!(value["data"]["goal"], "recomp");
        assert_eq!(value["data"]["activity_level"], "couch");
        assert_eq!(value["data"]["tdee"], 2556);
    }

    #[test]
    fn test_non_finite_weight_is_an_error_envelope() {
        let r = calculate_daily_calories(f64::NAN, 175.0, 30, "male", "moderate", "maintenance");
        let value = serde_json::to_value(&r).unwrap();
        assert_eq!(value["status"], "error");
        assert!(value.get("error_kind").is_none());
        assert_eq!(r.error_kind(), Some(crate::error::ErrorKind::Computation));
        assert!(value["error_message"]
            .as_str()
            .unwrap()
            .starts_with("Calorie calculation failed: "));
        assert!(value.get("data").is_none());
    }

    #[test]
    fn test_meal_plan_envelope() {
        let mut rng = StdRng::seed_from_u64(21);
        let r = create_meal_plan(&mut rng, 2000, "weight_loss", &["vegetarian".to_string()], 3, 2);
        let value = serde_json::to_value(&r).unwrap();
        assert_eq!(value["status"], "success");
        assert_eq!(value["data"]["days"], 2);
        assert_eq!(value["data"]["dietary_restrictions"], json!(["vegetarian"]));
        assert_eq!(value["data"]["meal_plan"][1]["day"], 2);
        assert_eq!(value["data"]["meal_plan"][0]["meals"][0]["meal_type"], "Breakfast");
        assert_eq!(value["data"]["meal_plan"][0]["meals"][0]["target_calories"], 500);
    }

    #[test]
    fn test_oversized_meal_plan_is_an_error_envelope() {
        let mut rng = StdRng::seed_from_u64(22);
        let r = create_meal_plan(&mut rng, 2000, "maintenance", &[], 3, u32::MAX);
        assert_eq!(r.error_kind(), Some(crate::error::ErrorKind::InvalidInput));
        assert!(r.error_message().unwrap().starts_with("Meal plan creation failed: days must be at most 366"));
    }

    #[test]
    fn test_recommendations_envelope() {
        let r = get_nutrition_recommendations("weight_loss", "very_active");
        let value = serde_json::to_value(&r).unwrap();
        assert_eq!(value["data"]["goal"], "weight_loss");
        assert_eq!(value["data"]["recommendations"]["key_principles"].as_array().unwrap().len(), 7);
    }

    #[test]
    fn test_food_analysis_envelope() {
        let r = analyze_food_item("tofu", 200.0);
        assert_eq!(r.data().unwrap().nutrition.protein, 16.0);

        let r = analyze_food_item("Pizza", 100.0);
        assert_eq!(r.error_message(), Some("Food 'Pizza' not found in database"));
    }
}
