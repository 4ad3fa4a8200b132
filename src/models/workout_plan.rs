//! Workout plan model

use serde::Serialize;

use super::ExerciseItem;

/// One prescribed exercise
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutExercise {
    pub exercise: ExerciseItem,
    pub sets: u32,
    pub reps: &'static str,
    pub rest_seconds: u32,
}

/// Requested muscles, or "Full body" when none were given
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TargetMuscles {
    Listed(Vec<String>),
    FullBody(&'static str),
}

impl TargetMuscles {
    pub fn from_request(muscles: Option<&[String]>) -> Self {
        match muscles {
            Some(m) if !m.is_empty() => TargetMuscles::Listed(m.to_vec()),
            _ => TargetMuscles::FullBody("Full body"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutPlan {
    pub title: String,
    pub duration_minutes: u32,
    pub exercises: Vec<WorkoutExercise>,
    pub total_exercises: usize,
    pub target_muscles: TargetMuscles,
    pub equipment_needed: String,
    pub estimated_calories: i64,
}
