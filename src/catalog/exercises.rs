//! Exercise catalog
//!
//! Loads the exercise list from a JSON file once at startup. The catalog
//! is read-only afterwards and shared between tool calls.

use std::path::Path;

use thiserror::Error;
use tracing::{info, warn};

use crate::models::ExerciseItem;

/// Catalog loading errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read exercise catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse exercise catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Immutable list of exercises in catalog order
#[derive(Debug, Clone, Default)]
pub struct ExerciseCatalog {
    exercises: Vec<ExerciseItem>,
}

impl ExerciseCatalog {
    pub fn new(exercises: Vec<ExerciseItem>) -> Self {
        Self { exercises }
    }

    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let exercises: Vec<ExerciseItem> = serde_json::from_str(json)?;
        Ok(Self::new(exercises))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> CatalogResult<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Load the catalog, falling back to an empty one on any failure.
    /// Tools report an empty catalog as "data unavailable".
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(catalog) => {
                info!(path = %path.display(), count = catalog.len(), "Loaded exercise catalog");
                catalog
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Exercise catalog unavailable");
                Self::default()
            }
        }
    }

    pub fn exercises(&self) -> &[ExerciseItem] {
        &self.exercises
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::ExerciseCatalog;

    /// Small catalog covering every category/level combination the tests use
    pub fn sample_catalog() -> ExerciseCatalog {
        let json = serde_json::json!([
            {"name": "Push-Up", "category": "strength", "level": "beginner", "equipment": "body only",
             "primaryMuscles": ["chest"], "secondaryMuscles": ["shoulders", "triceps"], "instructions": ["Push."]},
            {"name": "Bodyweight Squat", "category": "strength", "level": "beginner", "equipment": "body only",
             "primaryMuscles": ["quadriceps"], "secondaryMuscles": ["glutes", "hamstrings"], "instructions": ["Squat."]},
            {"name": "Dumbbell Row", "category": "strength", "level": "beginner", "equipment": "dumbbell",
             "primaryMuscles": ["middle back"], "secondaryMuscles": ["biceps", "lats"], "instructions": ["Row."]},
            {"name": "Dumbbell Curl", "category": "strength", "level": "beginner", "equipment": "dumbbell",
             "primaryMuscles": ["biceps"], "secondaryMuscles": ["forearms"], "instructions": ["Curl."]},
            {"name": "Dumbbell Shoulder Press", "category": "strength", "level": "beginner", "equipment": "dumbbell",
             "primaryMuscles": ["shoulders"], "secondaryMuscles": ["triceps"], "instructions": ["Press."]},
            {"name": "Glute Bridge", "category": "strength", "level": "beginner", "equipment": "body only",
             "primaryMuscles": ["glutes"], "secondaryMuscles": ["hamstrings"], "instructions": ["Bridge."]},
            {"name": "Incline Push-Up", "category": "strength", "level": "beginner", "equipment": "body only",
             "primaryMuscles": ["chest"], "secondaryMuscles": ["triceps"], "instructions": ["Push."]},
            {"name": "Crunch", "category": "strength", "level": "beginner", "equipment": "body only",
             "primaryMuscles": ["abdominals"], "secondaryMuscles": [], "instructions": ["Crunch."]},
            {"name": "Barbell Squat", "category": "strength", "level": "intermediate", "equipment": "barbell",
             "primaryMuscles": ["quadriceps"], "secondaryMuscles": ["glutes"], "instructions": ["Squat."]},
            {"name": "Deadlift", "category": "strength", "level": "expert", "equipment": "barbell",
             "primaryMuscles": ["lower back"], "secondaryMuscles": ["hamstrings", "glutes"], "instructions": ["Lift."]},
            {"name": "Jumping Jacks", "category": "cardio", "level": "beginner", "equipment": "body only",
             "primaryMuscles": ["quadriceps"], "secondaryMuscles": ["calves"], "instructions": ["Jump."]},
            {"name": "Jog In Place", "category": "cardio", "level": "beginner", "equipment": null,
             "primaryMuscles": ["quadriceps"], "secondaryMuscles": ["hamstrings"], "instructions": ["Jog."]},
            {"name": "Stationary Bike", "category": "Cardio", "level": "Beginner", "equipment": "machine",
             "primaryMuscles": ["quadriceps"], "secondaryMuscles": ["calves"], "instructions": ["Pedal."]},
            {"name": "Rowing Machine", "category": "cardio", "level": "intermediate", "equipment": "machine",
             "primaryMuscles": ["quadriceps"], "secondaryMuscles": ["biceps", "lats"], "instructions": ["Row."]},
            {"name": "Hamstring Stretch", "category": "stretching", "level": "beginner", "equipment": "body only",
             "primaryMuscles": ["hamstrings"], "secondaryMuscles": [], "instructions": ["Stretch."]},
            {"name": "Box Jump", "category": "plyometrics", "level": "intermediate", "equipment": "other",
             "primaryMuscles": ["quadriceps"], "secondaryMuscles": ["glutes", "calves"], "instructions": ["Jump."]}
        ]);
        ExerciseCatalog::from_json_str(&json.to_string()).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_str() {
        let catalog = fixtures::sample_catalog();
        assert_eq!(catalog.len(), 16);
        assert_eq!(catalog.exercises()[0].name, "Push-Up");
        assert_eq!(catalog.exercises()[11].equipment, "");
    }

    #[test]
    fn test_missing_file_yields_empty_catalog() {
        let catalog = ExerciseCatalog::load_or_empty("/nonexistent/fitplan/exercises.json");
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_parse_failure_is_reported() {
        let err = ExerciseCatalog::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
        assert!(err.to_string().starts_with("Failed to parse exercise catalog"));
    }

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog = ExerciseCatalog::load(concat!(env!("CARGO_MANIFEST_DIR"), "/data/exercises.json")).unwrap();
        assert_eq!(catalog.len(), 38);
        assert!(catalog.exercises().iter().all(|e| !e.primary_muscles.is_empty()));
    }

    #[test]
    fn test_unreadable_path_is_io_error() {
        let err = ExerciseCatalog::load("/nonexistent/fitplan/exercises.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
