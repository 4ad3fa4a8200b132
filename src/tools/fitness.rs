//! Fitness tools
//!
//! Exercise search and summaries, workout plans and the fitness profile.

use rand::Rng;
use serde::Serialize;

use crate::catalog::ExerciseCatalog;
use crate::fitness::{
    self, CategoryCount, ExerciseQuery, FitnessProfile, MuscleGroupCount, ProfileRequest,
    SearchCriteria, WorkoutRequest,
};
use crate::models::{ExerciseItem, WorkoutPlan};

use super::envelope::ToolResponse;

pub const SEARCH_FAILURE: &str = "Search failed";
pub const WORKOUT_PLAN_FAILURE: &str = "Workout plan creation failed";
pub const PROFILE_FAILURE: &str = "Profile creation failed";

/// Response for search_exercises
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchExercisesResponse {
    pub exercises: Vec<ExerciseItem>,
    pub total_found: usize,
    pub search_criteria: SearchCriteria,
}

/// Response for get_exercise_categories
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<CategoryCount>,
    pub total_categories: usize,
}

/// Response for get_muscle_groups
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MuscleGroupsResponse {
    pub muscle_groups: Vec<MuscleGroupCount>,
    pub total_muscle_groups: usize,
}

/// Response for create_workout_plan
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkoutPlanResponse {
    pub workout_plan: WorkoutPlan,
}

/// Response for get_exercise_by_name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExerciseResponse {
    pub exercise: ExerciseItem,
}

pub fn search_exercises(catalog: &ExerciseCatalog, query: &ExerciseQuery) -> ToolResponse<SearchExercisesResponse> {
    let result = fitness::search_exercises(catalog, query).map(|found| SearchExercisesResponse {
        total_found: found.len(),
        exercises: found.into_iter().cloned().collect(),
        search_criteria: query.criteria(),
    });
    ToolResponse::from_result(result, SEARCH_FAILURE)
}

pub fn get_exercise_categories(catalog: &ExerciseCatalog) -> ToolResponse<CategoriesResponse> {
    let result = fitness::exercise_categories(catalog).map(|categories| CategoriesResponse {
        total_categories: categories.len(),
        categories,
    });
    ToolResponse::from_result(result, "Failed to get categories")
}

pub fn get_muscle_groups(catalog: &ExerciseCatalog) -> ToolResponse<MuscleGroupsResponse> {
    let result = fitness::muscle_groups(catalog).map(|muscle_groups| MuscleGroupsResponse {
        total_muscle_groups: muscle_groups.len(),
        muscle_groups,
    });
    ToolResponse::from_result(result, "Failed to get muscle groups")
}

pub fn create_workout_plan<R: Rng + ?Sized>(
    rng: &mut R,
    catalog: &ExerciseCatalog,
    request: &WorkoutRequest,
) -> ToolResponse<WorkoutPlanResponse> {
    let result = fitness::compose_workout_plan(rng, catalog, request)
        .map(|workout_plan| WorkoutPlanResponse { workout_plan });
    ToolResponse::from_result(result, WORKOUT_PLAN_FAILURE)
}

pub fn get_exercise_by_name(catalog: &ExerciseCatalog, name: &str) -> ToolResponse<ExerciseResponse> {
    let result = fitness::exercise_by_name(catalog, name).map(|e| ExerciseResponse { exercise: e.clone() });
    ToolResponse::from_result(result, SEARCH_FAILURE)
}

pub fn get_user_fitness_profile(request: ProfileRequest) -> ToolResponse<FitnessProfile> {
    ToolResponse::from_result(fitness::assess_fitness_profile(request), PROFILE_FAILURE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::exercises::fixtures::sample_catalog;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    #[test]
    fn test_search_response_echoes_criteria() {
        let catalog = sample_catalog();
        let query = ExerciseQuery {
            category: Some("stretching".into()),
            limit: 10,
            ..Default::default()
        };
        let value = serde_json::to_value(search_exercises(&catalog, &query)).unwrap();
        assert_eq!(value["data"]["total_found"], 1);
        assert_eq!(value["data"]["exercises"][0]["primaryMuscles"], json!(["hamstrings"]));
        assert_eq!(
            value["data"]["search_criteria"],
            json!({"category": "stretching", "level": null, "equipment": null, "muscle_groups": null})
        );
    }

    #[test]
    fn test_empty_catalog_errors() {
        let empty = ExerciseCatalog::default();
        let query = ExerciseQuery { limit: 10, ..Default::default() };
        for message in [
            search_exercises(&empty, &query).error_message().map(str::to_string),
            get_exercise_categories(&empty).error_message().map(str::to_string),
            get_muscle_groups(&empty).error_message().map(str::to_string),
            get_exercise_by_name(&empty, "Push-Up").error_message().map(str::to_string),
        ] {
            assert_eq!(message.as_deref(), Some("Could not load exercises data"));
        }
    }

    #[test]
    fn test_summaries_report_totals() {
        let catalog = sample_catalog();
        let categories = get_exercise_categories(&catalog);
        assert_eq!(categories.data().unwrap().total_categories, 5);
        let muscles = get_muscle_groups(&catalog);
        let data = muscles.data().unwrap();
        assert_eq!(data.total_muscle_groups, data.muscle_groups.len());
    }

    #[test]
    fn test_workout_plan_shape() {
        let catalog = sample_catalog();
        let mut rng = StdRng::seed_from_u64(8);
        let value = serde_json::to_value(create_workout_plan(&mut rng, &catalog, &WorkoutRequest::default())).unwrap();
        let plan = &value["data"]["workout_plan"];
        assert_eq!(plan["title"], "Beginner Strength Workout");
        assert_eq!(plan["target_muscles"], "Full body");
        assert_eq!(plan["equipment_needed"], "Various");
        assert_eq!(plan["exercises"][0]["rest_seconds"], 60);
        assert_eq!(plan["total_exercises"], plan["exercises"].as_array().unwrap().len());
    }

    #[test]
    fn test_exercise_lookup() {
        let catalog = sample_catalog();
        let r = get_exercise_by_name(&catalog, "deadlift");
        assert_eq!(r.data().unwrap().exercise.name, "Deadlift");
        let r = get_exercise_by_name(&catalog, "Clean and Jerk");
        assert_eq!(r.error_message(), Some("Exercise 'Clean and Jerk' not found"));
    }
}
