//! Fitplan Status Tool
//!
//! Runtime status of the service and the planning guide for assistants.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Planning instructions for AI assistants
pub const PLANNING_INSTRUCTIONS: &str = r#"
# Fitplan Planning Instructions

This guide explains how to build nutrition and workout plans with the Fitplan tools.
Every tool answers with a JSON envelope:

```
{"status": "success", "data": { ... }}
{"status": "error", "error_message": "..."}
```

Always check `status` before reading `data`.

---

## 1. Start With a Profile

**Tool:** `get_user_fitness_profile`
- Needs weight (kg), height (cm), age, gender, fitness level and primary goal
- Numbers must be JSON numbers; anything else comes back as an error envelope
- Returns BMI and category, weekly training minutes, an activity level and a priority focus
- If `consultation_needed` is true, suggest the user talk to a healthcare professional
  before starting an aggressive plan

Use the returned `activity_level` for the calorie calculation below.

---

## 2. Nutrition Workflow

1. `calculate_daily_calories` - BMR (Mifflin-St Jeor), TDEE and a goal-adjusted target
   - activity_level: sedentary | light | moderate | active | very_active (unknown → moderate)
   - goal: weight_loss (−500 kcal) | muscle_gain (+300 kcal) | maintenance
2. `create_meal_plan` - pass `target_calories` from step 1
   - meals_per_day: 3 to 6 (other values produce 6 meals)
   - days: 1 to 366
   - dietary_restrictions: any of vegan, vegetarian, gluten_free
   - Pass `seed` to get the same plan again
3. `get_nutrition_recommendations` - principles, meal timing, supplements and foods to avoid
4. `analyze_food_item` - nutrition for a portion of one food (default 100 g)

Meal calories are allocated component by component, so a meal's total is usually
below its target. That is expected; do not "top up" portions.

---

## 3. Workout Workflow

1. `get_exercise_categories` / `get_muscle_groups` - see what the catalog offers
2. `search_exercises` - filter by category, level, equipment (substring) and muscles
3. `create_workout_plan` - level, workout type ("mixed" for any category), duration,
   optional target muscles and equipment
   - Roughly one exercise per 3 minutes, between 3 and 10 exercises
   - Pass `seed` to get the same plan again
4. `get_exercise_by_name` - full instructions for one exercise

If a workout plan fails with "No exercises found matching criteria", relax the
equipment or muscle filters, or try workout type "mixed".

---

## Notes

- Plans are generated fresh on every call; nothing is stored
- Calorie burn estimates are rough and assume steady effort for the whole session
"#;

/// Runtime status of the Fitplan service
#[derive(Debug, Clone, Serialize)]
pub struct FitplanStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Exercise catalog information
    pub exercises_path: String,
    pub exercise_count: usize,

    /// Process information
    pub started_at: String,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    started_at: DateTime<Utc>,
    exercises_path: PathBuf,
    exercise_count: usize,
}

impl StatusTracker {
    pub fn new(exercises_path: PathBuf, exercise_count: usize) -> Self {
        Self {
            start_time: Instant::now(),
            started_at: Utc::now(),
            exercises_path,
            exercise_count,
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> FitplanStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        FitplanStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            exercises_path: self.exercises_path.display().to_string(),
            exercise_count: self.exercise_count,
            started_at: self.started_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reports_catalog() {
        let tracker = StatusTracker::new(PathBuf::from("/data/exercises.json"), 873);
        let status = tracker.get_status();
        assert_eq!(status.exercises_path, "/data/exercises.json");
        assert_eq!(status.exercise_count, 873);
        assert_eq!(status.process_id, std::process::id());
        assert_eq!(status.version, crate::build_info::VERSION);
        assert!(status.started_at.ends_with('Z'));
    }

    #[test]
    fn test_instructions_name_every_planning_tool() {
        for tool in [
            "get_user_fitness_profile",
            "calculate_daily_calories",
            "create_meal_plan",
            "get_nutrition_recommendations",
            "analyze_food_item",
            "search_exercises",
            "create_workout_plan",
            "get_exercise_by_name",
        ] {
            assert!(PLANNING_INSTRUCTIONS.contains(tool), "{}", tool);
        }
    }
}
