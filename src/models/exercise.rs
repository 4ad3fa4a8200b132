//! Exercise model
//!
//! Exercise catalog records and the closed category/level vocabularies
//! used to derive sets, reps and calorie estimates.

use serde::{Deserialize, Deserializer, Serialize};

/// Exercise category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseCategory {
    Strength,
    Cardio,
    Stretching,
    Plyometrics,
    Powerlifting,
    OlympicWeightlifting,
    Strongman,
}

impl ExerciseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExerciseCategory::Strength => "strength",
            ExerciseCategory::Cardio => "cardio",
            ExerciseCategory::Stretching => "stretching",
            ExerciseCategory::Plyometrics => "plyometrics",
            ExerciseCategory::Powerlifting => "powerlifting",
            ExerciseCategory::OlympicWeightlifting => "olympic weightlifting",
            ExerciseCategory::Strongman => "strongman",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "strength" => Some(ExerciseCategory::Strength),
            "cardio" => Some(ExerciseCategory::Cardio),
            "stretching" => Some(ExerciseCategory::Stretching),
            "plyometrics" => Some(ExerciseCategory::Plyometrics),
            "powerlifting" => Some(ExerciseCategory::Powerlifting),
            "olympic weightlifting" | "olympic_weightlifting" => {
                Some(ExerciseCategory::OlympicWeightlifting)
            }
            "strongman" => Some(ExerciseCategory::Strongman),
            _ => None,
        }
    }

    /// Calories burned per minute at intermediate level
    pub fn base_calorie_rate(&self) -> f64 {
        match self {
            ExerciseCategory::Cardio => 8.0,
            ExerciseCategory::Strength => 6.0,
            ExerciseCategory::Stretching => 3.0,
            ExerciseCategory::Plyometrics => 10.0,
            ExerciseCategory::Powerlifting => 7.0,
            ExerciseCategory::OlympicWeightlifting => 7.0,
            ExerciseCategory::Strongman => 8.0,
        }
    }
}

/// Rate used for workout types outside the category table (including "mixed")
pub const DEFAULT_CALORIE_RATE: f64 = 6.0;

/// Training level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Expert,
}

impl SkillLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillLevel::Beginner => "beginner",
            SkillLevel::Intermediate => "intermediate",
            SkillLevel::Expert => "expert",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Some(SkillLevel::Beginner),
            "intermediate" => Some(SkillLevel::Intermediate),
            "expert" => Some(SkillLevel::Expert),
            _ => None,
        }
    }

    pub fn calorie_multiplier(&self) -> f64 {
        match self {
            SkillLevel::Beginner => 0.8,
            SkillLevel::Intermediate => 1.0,
            SkillLevel::Expert => 1.2,
        }
    }
}

/// A catalog exercise, in the catalog's own record shape
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub level: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub equipment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub force: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mechanic: Option<String>,
    #[serde(default)]
    pub primary_muscles: Vec<String>,
    #[serde(default)]
    pub secondary_muscles: Vec<String>,
    #[serde(default)]
    pub instructions: Vec<String>,
}

/// Catalog records use `null` for "no equipment"
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl ExerciseItem {
    pub fn category_kind(&self) -> Option<ExerciseCategory> {
        ExerciseCategory::from_str(&self.category)
    }

    /// Primary then secondary muscles
    pub fn all_muscles(&self) -> impl Iterator<Item = &String> {
        self.primary_muscles.iter().chain(self.secondary_muscles.iter())
    }

    /// Whether any primary muscle is in `targets` (lowercased)
    pub fn hits_primary(&self, targets: &[String]) -> bool {
        self.primary_muscles
            .iter()
            .any(|m| targets.contains(&m.to_lowercase()))
    }

    /// Whether any primary or secondary muscle is in `targets` (lowercased)
    pub fn hits_any(&self, targets: &[String]) -> bool {
        self.all_muscles().any(|m| targets.contains(&m.to_lowercase()))
    }
}
