//! Workout composer
//!
//! Picks a varied set of exercises for a level and workout type, then
//! prescribes sets, reps and rest for each one.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::catalog::ExerciseCatalog;
use crate::error::{PlanError, PlanResult};
use crate::models::{
    ExerciseCategory, ExerciseItem, SkillLevel, TargetMuscles, WorkoutExercise, WorkoutPlan,
    DEFAULT_CALORIE_RATE,
};

use super::selector::contains_ignore_case;

/// Minutes budgeted per exercise, rest included
const MINUTES_PER_EXERCISE: u32 = 3;
const MIN_EXERCISES: u32 = 3;
const MAX_EXERCISES: u32 = 10;

/// Workout type that disables category filtering
pub const MIXED_WORKOUT: &str = "mixed";

#[derive(Debug, Clone)]
pub struct WorkoutRequest {
    pub fitness_level: String,
    pub target_muscles: Option<Vec<String>>,
    pub workout_type: String,
    pub duration_minutes: u32,
    pub equipment: Option<String>,
}

impl Default for WorkoutRequest {
    fn default() -> Self {
        Self {
            fitness_level: "beginner".to_string(),
            target_muscles: None,
            workout_type: "strength".to_string(),
            duration_minutes: 45,
            equipment: None,
        }
    }
}

impl WorkoutRequest {
    fn admits(&self, exercise: &ExerciseItem, muscles: &[String]) -> bool {
        if !exercise.level.eq_ignore_ascii_case(&self.fitness_level) {
            return false;
        }
        if self.workout_type != MIXED_WORKOUT
            && !exercise.category.eq_ignore_ascii_case(&self.workout_type)
        {
            return false;
        }
        if let Some(equipment) = self.equipment.as_deref().filter(|e| !e.is_empty()) {
            if !contains_ignore_case(&exercise.equipment, equipment) {
                return false;
            }
        }
        muscles.is_empty() || exercise.hits_primary(muscles)
    }
}

pub fn target_exercise_count(duration_minutes: u32) -> usize {
    (duration_minutes / MINUTES_PER_EXERCISE).clamp(MIN_EXERCISES, MAX_EXERCISES) as usize
}

/// Sets and reps for an exercise category at a training level.
/// Unrecognised levels get the most demanding prescription.
pub fn sets_and_reps(category: Option<ExerciseCategory>, level: Option<SkillLevel>) -> (u32, &'static str) {
    use SkillLevel::{Beginner, Intermediate};

    match category {
        Some(ExerciseCategory::Cardio) => match level {
            Some(Beginner) => (3, "30 seconds"),
            Some(Intermediate) => (4, "45 seconds"),
            _ => (5, "60 seconds"),
        },
        Some(ExerciseCategory::Stretching) => (1, "30 seconds hold"),
        Some(ExerciseCategory::Strength) => match level {
            Some(Beginner) => (3, "8-10 reps"),
            Some(Intermediate) => (3, "10-12 reps"),
            _ => (4, "12-15 reps"),
        },
        _ => match level {
            Some(Beginner) => (2, "5-8 reps"),
            Some(Intermediate) => (3, "8-10 reps"),
            _ => (4, "10-12 reps"),
        },
    }
}

pub fn rest_seconds(category: Option<ExerciseCategory>) -> u32 {
    match category {
        Some(ExerciseCategory::Strength) => 60,
        _ => 30,
    }
}

/// `duration × base rate × level multiplier`, truncated
pub fn estimate_calories(duration_minutes: u32, workout_type: &str, fitness_level: &str) -> i64 {
    let rate = ExerciseCategory::from_str(workout_type)
        .map(|c| c.base_calorie_rate())
        .unwrap_or(DEFAULT_CALORIE_RATE);
    let multiplier = SkillLevel::from_str(fitness_level)
        .map(|l| l.calorie_multiplier())
        .unwrap_or(1.0);
    (f64::from(duration_minutes) * rate * multiplier) as i64
}

/// Uppercase the first letter of every alphabetic run, lowercase the rest
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

/// Greedy selection favouring exercises whose primary muscles have not
/// been used yet. Once every remaining candidate overlaps, the used set is
/// cleared and all remaining candidates become eligible again.
fn select_diverse<'a, R: Rng + ?Sized>(
    rng: &mut R,
    mut pool: Vec<&'a ExerciseItem>,
    count: usize,
) -> Vec<&'a ExerciseItem> {
    let mut selected = Vec::with_capacity(count);
    let mut used: Vec<&'a str> = Vec::new();

    for _ in 0..count {
        if pool.is_empty() {
            break;
        }

        let mut eligible: Vec<usize> = (0..pool.len())
            .filter(|&i| !pool[i].primary_muscles.iter().any(|m| used.contains(&m.as_str())))
            .collect();
        if eligible.is_empty() {
            used.clear();
            eligible = (0..pool.len()).collect();
        }

        if let Some(&index) = eligible.choose(rng) {
            let exercise = pool.remove(index);
            used.extend(exercise.primary_muscles.iter().map(String::as_str));
            selected.push(exercise);
        }
    }

    selected
}

/// Build a workout plan from the catalog
pub fn compose_workout_plan<R: Rng + ?Sized>(
    rng: &mut R,
    catalog: &ExerciseCatalog,
    request: &WorkoutRequest,
) -> PlanResult<WorkoutPlan> {
    if catalog.is_empty() {
        return Err(PlanError::catalog_unavailable());
    }

    let muscles: Vec<String> = request
        .target_muscles
        .iter()
        .flatten()
        .map(|m| m.to_lowercase())
        .collect();
    let pool: Vec<&ExerciseItem> = catalog
        .exercises()
        .iter()
        .filter(|e| request.admits(e, &muscles))
        .collect();
    if pool.is_empty() {
        return Err(PlanError::DataUnavailable(
            "No exercises found matching criteria".to_string(),
        ));
    }

    let wanted = target_exercise_count(request.duration_minutes);
    let candidates = pool.len();
    let level = SkillLevel::from_str(&request.fitness_level);

    let exercises: Vec<WorkoutExercise> = select_diverse(rng, pool, wanted)
        .into_iter()
        .map(|exercise| {
            let category = exercise.category_kind();
            let (sets, reps) = sets_and_reps(category, level);
            WorkoutExercise {
                exercise: exercise.clone(),
                sets,
                reps,
                rest_seconds: rest_seconds(category),
            }
        })
        .collect();

    debug!(wanted, candidates, selected = exercises.len(), "Composed workout plan");

    Ok(WorkoutPlan {
        title: format!(
            "{} {} Workout",
            title_case(&request.fitness_level),
            title_case(&request.workout_type)
        ),
        duration_minutes: request.duration_minutes,
        total_exercises: exercises.len(),
        exercises,
        target_muscles: TargetMuscles::from_request(request.target_muscles.as_deref()),
        equipment_needed: request
            .equipment
            .clone()
            .filter(|e| !e.is_empty())
            .unwrap_or_else(|| "Various".to_string()),
        estimated_calories: estimate_calories(
            request.duration_minutes,
            &request.workout_type,
            &request.fitness_level,
        ),
    })
}
