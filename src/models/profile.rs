//! Nutrition profile model
//!
//! Inputs and the derived energy/macro targets for one person.

use serde::{Deserialize, Serialize};

/// Gender for BMR calculations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Anything other than "male" uses the female equation
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "male" => Gender::Male,
            _ => Gender::Female,
        }
    }

    /// Constant term of the Mifflin-St Jeor equation
    pub fn bmr_offset(&self) -> f64 {
        match self {
            Gender::Male => 5.0,
            Gender::Female => -161.0,
        }
    }
}

/// Activity level for TDEE calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::Active => "active",
            ActivityLevel::VeryActive => "very_active",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "sedentary" => Some(ActivityLevel::Sedentary),
            "light" => Some(ActivityLevel::Light),
            "moderate" => Some(ActivityLevel::Moderate),
            "active" => Some(ActivityLevel::Active),
            "very_active" => Some(ActivityLevel::VeryActive),
            _ => None,
        }
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    /// Classify a weekly training volume
    pub fn from_weekly_minutes(minutes: u32) -> Self {
        if minutes < 150 {
            ActivityLevel::Light
        } else if minutes < 300 {
            ActivityLevel::Moderate
        } else if minutes < 450 {
            ActivityLevel::Active
        } else {
            ActivityLevel::VeryActive
        }
    }
}

/// Fallback multiplier for unrecognized activity levels (same as moderate)
pub const DEFAULT_ACTIVITY_MULTIPLIER: f64 = 1.55;

/// Nutrition goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    WeightLoss,
    MuscleGain,
    Maintenance,
}

impl Goal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::WeightLoss => "weight_loss",
            Goal::MuscleGain => "muscle_gain",
            Goal::Maintenance => "maintenance",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "weight_loss" => Some(Goal::WeightLoss),
            "muscle_gain" => Some(Goal::MuscleGain),
            "maintenance" => Some(Goal::Maintenance),
            _ => None,
        }
    }

    /// Resolve a goal label, treating unknown goals as maintenance
    pub fn resolve(s: &str) -> Self {
        Self::from_str(s).unwrap_or(Goal::Maintenance)
    }

    /// Daily calorie adjustment relative to TDEE
    pub fn calorie_adjustment(&self) -> f64 {
        match self {
            Goal::WeightLoss => -500.0,
            Goal::MuscleGain => 300.0,
            Goal::Maintenance => 0.0,
        }
    }

    /// Share of calories from (protein, carbohydrate, fat)
    pub fn macro_ratios(&self) -> MacroRatios {
        match self {
            Goal::MuscleGain => MacroRatios { protein: 0.30, carbs: 0.40, fat: 0.30 },
            Goal::WeightLoss => MacroRatios { protein: 0.35, carbs: 0.30, fat: 0.35 },
            Goal::Maintenance => MacroRatios { protein: 0.25, carbs: 0.45, fat: 0.30 },
        }
    }
}

/// Calorie share per macronutrient; each row sums to 1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroRatios {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Kilocalories per gram of protein and carbohydrate
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
/// Kilocalories per gram of fat
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// One macronutrient's daily target
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroTarget {
    pub calories: f64,
    pub grams: f64,
    pub ratio: f64,
}

impl MacroTarget {
    pub fn new(total_calories: f64, ratio: f64, kcal_per_gram: f64) -> Self {
        let calories = total_calories * ratio;
        Self {
            calories,
            grams: calories / kcal_per_gram,
            ratio,
        }
    }
}

/// Macro split of the target calories
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroBreakdown {
    pub protein: MacroTarget,
    pub carbohydrates: MacroTarget,
    pub fats: MacroTarget,
}

/// Derived energy targets; computed per request, never stored
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NutritionProfile {
    pub bmr: f64,
    pub tdee: f64,
    pub target_calories: f64,
    pub macros: MacroBreakdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_binary_fallback() {
        assert_eq!(Gender::from_str("Male"), Gender::Male);
        assert_eq!(Gender::from_str("female"), Gender::Female);
        assert_eq!(Gender::from_str("other"), Gender::Female);
        assert_eq!(Gender::Male.bmr_offset() - Gender::Female.bmr_offset(), 166.0);
    }

    #[test]
    fn test_macro_ratios_sum_to_one() {
        for goal in [Goal::WeightLoss, Goal::MuscleGain, Goal::Maintenance] {
            let r = goal.macro_ratios();
            assert!((r.protein + r.carbs + r.fat - 1.0).abs() < 1e-9, "{:?}", goal);
        }
    }

    #[test]
    fn test_activity_from_weekly_minutes() {
        assert_eq!(ActivityLevel::from_weekly_minutes(135), ActivityLevel::Light);
        assert_eq!(ActivityLevel::from_weekly_minutes(150), ActivityLevel::Moderate);
        assert_eq!(ActivityLevel::from_weekly_minutes(300), ActivityLevel::Active);
        assert_eq!(ActivityLevel::from_weekly_minutes(450), ActivityLevel::VeryActive);
    }

    #[test]
    fn test_unknown_goal_resolves_to_maintenance() {
        assert_eq!(Goal::from_str("bulk"), None);
        assert_eq!(Goal::resolve("bulk"), Goal::Maintenance);
    }
}
