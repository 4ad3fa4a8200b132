//! Fitness profile assessment
//!
//! BMI classification, training volume and a priority focus used to steer
//! the nutrition and workout tools.

use serde::Serialize;

use crate::error::{ensure_finite, PlanError, PlanResult};
use crate::models::{round1, ActivityLevel};

/// Marker for "nothing reported" in free-text fields
pub const NONE_REPORTED: &str = "none";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BmiCategory {
    #[serde(rename = "underweight")]
    Underweight,
    #[serde(rename = "normal weight")]
    NormalWeight,
    #[serde(rename = "overweight")]
    Overweight,
    #[serde(rename = "obese")]
    Obese,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::NormalWeight
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn needs_consultation(&self) -> bool {
        matches!(self, BmiCategory::Underweight | BmiCategory::Obese)
    }
}

pub fn bmi(weight_kg: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}

/// Where to focus first; body composition outranks the stated goal
pub fn priority_focus(goal: &str, category: BmiCategory) -> &'static str {
    match (category, goal) {
        (BmiCategory::Underweight, _) => "muscle_gain_and_nutrition",
        (BmiCategory::Obese, _) => "weight_loss_and_movement",
        (_, "weight_loss") => "caloric_deficit_and_cardio",
        (_, "muscle_gain") => "strength_training_and_nutrition",
        (_, "strength") => "progressive_overload_training",
        (_, "endurance") => "cardiovascular_conditioning",
        _ => "balanced_fitness_approach",
    }
}

/// Inputs to a profile assessment
#[derive(Debug, Clone)]
pub struct ProfileRequest {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: u32,
    pub gender: String,
    pub fitness_level: String,
    pub primary_goal: String,
    pub minutes_per_workout: u32,
    pub workouts_per_week: u32,
    pub equipment: String,
    pub dietary_restrictions: String,
    pub previous_injuries: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BasicInfo {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: u32,
    pub gender: String,
    pub bmi: f64,
    pub bmi_category: BmiCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FitnessInfo {
    pub fitness_level: String,
    pub primary_goal: String,
    pub activity_level: ActivityLevel,
    pub weekly_training_minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preferences {
    pub workout_duration: u32,
    pub workout_frequency: u32,
    pub equipment: String,
    pub dietary_restrictions: String,
    pub previous_injuries: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileRecommendations {
    pub consultation_needed: bool,
    pub priority_focus: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FitnessProfile {
    pub basic_info: BasicInfo,
    pub fitness_info: FitnessInfo,
    pub preferences: Preferences,
    pub recommendations: ProfileRecommendations,
}

pub fn assess_fitness_profile(request: ProfileRequest) -> PlanResult<FitnessProfile> {
    let weight_kg = ensure_finite("current_weight_kg", request.weight_kg)?;
    let height_cm = ensure_finite("height_cm", request.height_cm)?;
    if height_cm <= 0.0 {
        return Err(PlanError::InvalidInput(format!(
            "height_cm must be positive, got {}",
            height_cm
        )));
    }

    let bmi = bmi(weight_kg, height_cm);
    let category = BmiCategory::from_bmi(bmi);
    let weekly_minutes = request.minutes_per_workout.saturating_mul(request.workouts_per_week);
    let consultation_needed =
        category.needs_consultation() || request.previous_injuries != NONE_REPORTED;

    Ok(FitnessProfile {
        recommendations: ProfileRecommendations {
            consultation_needed,
            priority_focus: priority_focus(&request.primary_goal, category),
        },
        basic_info: BasicInfo {
            weight_kg,
            height_cm,
            age: request.age,
            gender: request.gender,
            bmi: round1(bmi),
            bmi_category: category,
        },
        fitness_info: FitnessInfo {
            fitness_level: request.fitness_level,
            primary_goal: request.primary_goal,
            activity_level: ActivityLevel::from_weekly_minutes(weekly_minutes),
            weekly_training_minutes: weekly_minutes,
        },
        preferences: Preferences {
            workout_duration: request.minutes_per_workout,
            workout_frequency: request.workouts_per_week,
            equipment: request.equipment,
            dietary_restrictions: request.dietary_restrictions,
            previous_injuries: request.previous_injuries,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(weight_kg: f64, goal: &str) -> ProfileRequest {
        ProfileRequest {
            weight_kg,
            height_cm: 175.0,
            age: 30,
            gender: "female".into(),
            fitness_level: "beginner".into(),
            primary_goal: goal.into(),
            minutes_per_workout: 45,
            workouts_per_week: 3,
            equipment: "gym access".into(),
            dietary_restrictions: NONE_REPORTED.into(),
            previous_injuries: NONE_REPORTED.into(),
        }
    }

    #[test]
    fn test_bmi_categories() {
        assert_eq!(BmiCategory::from_bmi(18.4), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::NormalWeight);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obese);
        assert_eq!(
            serde_json::to_value(BmiCategory::NormalWeight).unwrap(),
            serde_json::json!("normal weight")
        );
    }

    #[test]
    fn test_profile_for_normal_weight() {
        let p = assess_fitness_profile(request(70.0, "strength")).unwrap();
        assert_eq!(p.basic_info.bmi, 22.9);
        assert_eq!(p.basic_info.bmi_category, BmiCategory::NormalWeight);
        assert_eq!(p.fitness_info.weekly_training_minutes, 135);
        assert_eq!(p.fitness_info.activity_level, ActivityLevel::Light);
        assert!(!p.recommendations.consultation_needed);
        assert_eq!(p.recommendations.priority_focus, "progressive_overload_training");
    }

    #[test]
    fn test_body_composition_overrides_goal() {
        let p = assess_fitness_profile(request(100.0, "strength")).unwrap();
        assert_eq!(p.basic_info.bmi_category, BmiCategory::Obese);
        assert!(p.recommendations.consultation_needed);
        assert_eq!(p.recommendations.priority_focus, "weight_loss_and_movement");

        let p = assess_fitness_profile(request(50.0, "weight_loss")).unwrap();
        assert_eq!(p.recommendations.priority_focus, "muscle_gain_and_nutrition");
    }

    #[test]
    fn test_injuries_need_consultation() {
        let mut r = request(70.0, "endurance");
        r.previous_injuries = "left knee".into();
        let p = assess_fitness_profile(r).unwrap();
        assert!(p.recommendations.consultation_needed);
        assert_eq!(p.recommendations.priority_focus, "cardiovascular_conditioning");
    }

    #[test]
    fn test_weekly_volume_sets_activity_level() {
        let mut r = request(70.0, "general_fitness");
        r.minutes_per_workout = 60;
        r.workouts_per_week = 6;
        let p = assess_fitness_profile(r).unwrap();
        assert_eq!(p.fitness_info.activity_level, ActivityLevel::Active);
        assert_eq!(p.recommendations.priority_focus, "balanced_fitness_approach");
    }

    #[test]
    fn test_zero_height_is_rejected() {
        let mut r = request(70.0, "strength");
        r.height_cm = 0.0;
        assert!(matches!(assess_fitness_profile(r), Err(PlanError::InvalidInput(_))));
    }
}
