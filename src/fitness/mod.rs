//! Fitness planning
//!
//! Exercise search, workout composition and profile assessment.

pub mod composer;
pub mod profile;
pub mod selector;

pub use composer::{compose_workout_plan, estimate_calories, target_exercise_count, WorkoutRequest};
pub use profile::{assess_fitness_profile, FitnessProfile, ProfileRequest};
pub use selector::{
    exercise_by_name, exercise_categories, muscle_groups, search_exercises, CategoryCount,
    ExerciseQuery, MuscleGroupCount, SearchCriteria, DEFAULT_SEARCH_LIMIT,
};
