//! Fitplan MCP Server Implementation
//!
//! Exposes the planning tools over MCP.

use std::path::PathBuf;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::catalog::ExerciseCatalog;
use crate::error::PlanResult;
use crate::fitness::{ExerciseQuery, ProfileRequest, WorkoutRequest, DEFAULT_SEARCH_LIMIT};
use crate::nutrition::DEFAULT_PORTION_GRAMS;
use crate::tools::args;
use crate::tools::fitness;
use crate::tools::nutrition;
use crate::tools::status::StatusTracker;
use crate::tools::ToolResponse;

/// Fitplan MCP Service
#[derive(Clone)]
pub struct FitplanService {
    status_tracker: Arc<StatusTracker>,
    catalog: Arc<ExerciseCatalog>,
    tool_router: ToolRouter<FitplanService>,
}

impl FitplanService {
    pub fn new(exercises_path: PathBuf, catalog: ExerciseCatalog) -> Self {
        Self {
            status_tracker: Arc::new(StatusTracker::new(exercises_path, catalog.len())),
            catalog: Arc::new(catalog),
            tool_router: Self::tool_router(),
        }
    }
}

/// Seeded generator when a seed is given, otherwise one seeded from the OS
fn plan_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Serialize an envelope; error envelopes are flagged as tool errors
fn respond<T: Serialize>(response: ToolResponse<T>) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(&response)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    if let Some(kind) = response.error_kind() {
        debug!(?kind, "Tool returned an error envelope");
        Ok(CallToolResult::error(vec![Content::text(json)]))
    } else {
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }
}

/// Run a tool once its numeric arguments convert; a conversion failure is
/// reported as that tool's error envelope
fn respond_with<A, T, F>(converted: PlanResult<A>, failure: &str, call: F) -> Result<CallToolResult, McpError>
where
    T: Serialize,
    F: FnOnce(A) -> ToolResponse<T>,
{
    match converted {
        Ok(arguments) => respond(call(arguments)),
        Err(err) => respond(ToolResponse::<T>::from_result(Err(err), failure)),
    }
}

// ============================================================================
// Nutrition Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CalculateDailyCaloriesParams {
    #[schemars(with = "f64")]
    pub weight_kg: Value,
    #[schemars(with = "f64")]
    pub height_cm: Value,
    #[schemars(with = "u32")]
    pub age: Value,
    /// "male" or "female"; anything else is treated as female
    pub gender: String,
    /// sedentary, light, moderate, active or very_active
    #[serde(default = "default_activity_level")]
    pub activity_level: String,
    /// weight_loss, muscle_gain or maintenance
    #[serde(default = "default_goal")]
    pub goal: String,
}

fn default_activity_level() -> String { "moderate".to_string() }
fn default_goal() -> String { "maintenance".to_string() }

impl CalculateDailyCaloriesParams {
    fn measurements(&self) -> PlanResult<(f64, f64, u32)> {
        Ok((
            args::number("weight_kg", &self.weight_kg)?,
            args::number("height_cm", &self.height_cm)?,
            args::count("age", &self.age)?,
        ))
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CreateMealPlanParams {
    #[schemars(with = "i64")]
    pub target_calories: Value,
    #[serde(default = "default_goal")]
    pub goal: String,
    /// Any of vegan, vegetarian, gluten_free
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    /// 3 to 6; other values produce 6 meals
    #[serde(default = "default_meals_per_day")]
    #[schemars(with = "u32")]
    pub meals_per_day: Value,
    /// 1 to 366
    #[serde(default = "default_days")]
    #[schemars(with = "u32")]
    pub days: Value,
    /// Fixes the food choices so the same plan can be produced again
    pub seed: Option<u64>,
}

fn default_meals_per_day() -> Value { Value::from(3) }
fn default_days() -> Value { Value::from(1) }

impl CreateMealPlanParams {
    /// Target calories, meals per day and days
    fn sizes(&self) -> PlanResult<(i64, u32, u32)> {
        let target_calories = args::integer("target_calories", &self.target_calories)?;
        // Unusable meal counts get six meals, like out-of-range ones
        let meals_per_day = args::count("meals_per_day", &self.meals_per_day).unwrap_or(0);
        let days = args::count("days", &self.days)?;
        Ok((target_calories, meals_per_day, days))
    }
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct NutritionRecommendationsParams {
    #[serde(default = "default_goal")]
    pub goal: String,
    #[serde(default = "default_activity_level")]
    pub activity_level: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AnalyzeFoodItemParams {
    pub food_name: String,
    /// Grams
    #[serde(default = "default_portion_size")]
    #[schemars(with = "f64")]
    pub portion_size: Value,
}

fn default_portion_size() -> Value { Value::from(DEFAULT_PORTION_GRAMS) }

// ============================================================================
// Fitness Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchExercisesParams {
    /// strength, cardio, stretching, plyometrics, powerlifting, olympic weightlifting, strongman
    pub category: Option<String>,
    /// beginner, intermediate or expert
    pub level: Option<String>,
    /// Substring of the equipment name, e.g. "dumbbell" or "body only"
    pub equipment: Option<String>,
    pub muscle_groups: Option<Vec<String>>,
    #[serde(default = "default_search_limit")]
    #[schemars(with = "u32")]
    pub limit: Value,
}

fn default_search_limit() -> Value { Value::from(DEFAULT_SEARCH_LIMIT) }

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct CreateWorkoutPlanParams {
    #[serde(default = "default_fitness_level")]
    pub fitness_level: String,
    pub target_muscles: Option<Vec<String>>,
    /// An exercise category, or "mixed" for any category
    #[serde(default = "default_workout_type")]
    pub workout_type: String,
    #[serde(default = "default_duration")]
    #[schemars(with = "u32")]
    pub duration_minutes: Value,
    pub equipment: Option<String>,
    /// Fixes the exercise choices so the same plan can be produced again
    pub seed: Option<u64>,
}

fn default_fitness_level() -> String { "beginner".to_string() }
fn default_workout_type() -> String { "strength".to_string() }
fn default_duration() -> Value { Value::from(45) }

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetExerciseByNameParams {
    pub exercise_name: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct FitnessProfileParams {
    #[schemars(with = "f64")]
    pub current_weight_kg: Value,
    #[schemars(with = "f64")]
    pub height_cm: Value,
    #[schemars(with = "u32")]
    pub age: Value,
    pub gender: String,
    /// beginner, intermediate or expert
    pub fitness_level: String,
    /// weight_loss, muscle_gain, strength, endurance or general_fitness
    pub primary_goal: String,
    #[serde(default = "default_duration")]
    #[schemars(with = "u32")]
    pub available_time_per_workout: Value,
    #[serde(default = "default_workout_frequency")]
    #[schemars(with = "u32")]
    pub workout_frequency_per_week: Value,
    #[serde(default = "default_equipment")]
    pub available_equipment: String,
    #[serde(default = "default_none")]
    pub dietary_restrictions: String,
    #[serde(default = "default_none")]
    pub previous_injuries: String,
}

fn default_workout_frequency() -> Value { Value::from(3) }
fn default_equipment() -> String { "gym access".to_string() }
fn default_none() -> String { "none".to_string() }

impl FitnessProfileParams {
    fn into_request(self) -> PlanResult<ProfileRequest> {
        Ok(ProfileRequest {
            weight_kg: args::number("current_weight_kg", &self.current_weight_kg)?,
            height_cm: args::number("height_cm", &self.height_cm)?,
            age: args::count("age", &self.age)?,
            minutes_per_workout: args::count("available_time_per_workout", &self.available_time_per_workout)?,
            workouts_per_week: args::count("workout_frequency_per_week", &self.workout_frequency_per_week)?,
            gender: self.gender,
            fitness_level: self.fitness_level,
            primary_goal: self.primary_goal,
            equipment: self.available_equipment,
            dietary_restrictions: self.dietary_restrictions,
            previous_injuries: self.previous_injuries,
        })
    }
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl FitplanService {
    // --- Status ---

    #[tool(description = "Get the current status of the Fitplan service including build info, exercise catalog status, and process information")]
    fn fitplan_status(&self) -> Result<CallToolResult, McpError> {
        let status = self.status_tracker.get_status();
        let json = serde_json::to_string_pretty(&status)
            .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
        Ok(CallToolResult::success(vec![Content::text(json)]))
    }

    #[tool(description = "Get step-by-step instructions for building meal and workout plans. Call this when starting a planning session or when unsure which tool to use.")]
    fn planning_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::PLANNING_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(PLANNING_INSTRUCTIONS)]))
    }

    // --- Nutrition ---

    #[tool(description = "Calculate BMR (Mifflin-St Jeor), TDEE, goal-adjusted target calories and a macronutrient split")]
    fn calculate_daily_calories(&self, Parameters(p): Parameters<CalculateDailyCaloriesParams>) -> Result<CallToolResult, McpError> {
        respond_with(p.measurements(), nutrition::CALORIE_FAILURE, |(weight_kg, height_cm, age)| {
            nutrition::calculate_daily_calories(weight_kg, height_cm, age, &p.gender, &p.activity_level, &p.goal)
        })
    }

    #[tool(description = "Create a meal plan for a daily calorie target, goal and dietary restrictions. Pass a seed for a reproducible plan.")]
    fn create_meal_plan(&self, Parameters(p): Parameters<CreateMealPlanParams>) -> Result<CallToolResult, McpError> {
        debug!(target_calories = %p.target_calories, goal = %p.goal, seed = ?p.seed, "create_meal_plan");
        respond_with(p.sizes(), nutrition::MEAL_PLAN_FAILURE, |(target_calories, meals_per_day, days)| {
            let mut rng = plan_rng(p.seed);
            nutrition::create_meal_plan(&mut rng, target_calories, &p.goal, &p.dietary_restrictions, meals_per_day, days)
        })
    }

    #[tool(description = "Get nutrition principles, meal timing, supplements and foods to avoid for a goal and activity level")]
    fn get_nutrition_recommendations(&self, Parameters(p): Parameters<NutritionRecommendationsParams>) -> Result<CallToolResult, McpError> {
        respond(nutrition::get_nutrition_recommendations(&p.goal, &p.activity_level))
    }

    #[tool(description = "Get calories, protein, carbohydrates and fat for a portion (grams) of a food from the nutrition database")]
    fn analyze_food_item(&self, Parameters(p): Parameters<AnalyzeFoodItemParams>) -> Result<CallToolResult, McpError> {
        respond_with(args::number("portion_size", &p.portion_size), nutrition::FOOD_ANALYSIS_FAILURE, |grams| {
            nutrition::analyze_food_item(&p.food_name, grams)
        })
    }

    // --- Exercises ---

    #[tool(description = "Search exercises by category, level, equipment and muscle groups. Results are in catalog order.")]
    fn search_exercises(&self, Parameters(p): Parameters<SearchExercisesParams>) -> Result<CallToolResult, McpError> {
        respond_with(args::count("limit", &p.limit), fitness::SEARCH_FAILURE, |limit| {
            let query = ExerciseQuery {
                category: p.category,
                level: p.level,
                equipment: p.equipment,
                muscle_groups: p.muscle_groups,
                limit: limit as usize,
            };
            fitness::search_exercises(&self.catalog, &query)
        })
    }

    #[tool(description = "List exercise categories with exercise counts")]
    fn get_exercise_categories(&self) -> Result<CallToolResult, McpError> {
        respond(fitness::get_exercise_categories(&self.catalog))
    }

    #[tool(description = "List muscle groups with exercise counts, most common first")]
    fn get_muscle_groups(&self) -> Result<CallToolResult, McpError> {
        respond(fitness::get_muscle_groups(&self.catalog))
    }

    #[tool(description = "Get full details and instructions for an exercise by name (exact match first, then partial)")]
    fn get_exercise_by_name(&self, Parameters(p): Parameters<GetExerciseByNameParams>) -> Result<CallToolResult, McpError> {
        respond(fitness::get_exercise_by_name(&self.catalog, &p.exercise_name))
    }

    // --- Workouts ---

    #[tool(description = "Create a workout plan with sets, reps and rest for a fitness level, workout type and duration. Pass a seed for a reproducible plan.")]
    fn create_workout_plan(&self, Parameters(p): Parameters<CreateWorkoutPlanParams>) -> Result<CallToolResult, McpError> {
        debug!(level = %p.fitness_level, workout_type = %p.workout_type, seed = ?p.seed, "create_workout_plan");
        respond_with(args::count("duration_minutes", &p.duration_minutes), fitness::WORKOUT_PLAN_FAILURE, |duration_minutes| {
            let request = WorkoutRequest {
                fitness_level: p.fitness_level,
                target_muscles: p.target_muscles,
                workout_type: p.workout_type,
                duration_minutes,
                equipment: p.equipment,
            };
            let mut rng = plan_rng(p.seed);
            fitness::create_workout_plan(&mut rng, &self.catalog, &request)
        })
    }

    // --- Profile ---

    #[tool(description = "Create a fitness profile: BMI and category, weekly training volume, activity level and priority focus")]
    fn get_user_fitness_profile(&self, Parameters(p): Parameters<FitnessProfileParams>) -> Result<CallToolResult, McpError> {
        respond_with(p.into_request(), fitness::PROFILE_FAILURE, fitness::get_user_fitness_profile)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for FitplanService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "fitplan".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Fitplan".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Fitplan - nutrition and workout planning. \
                 IMPORTANT: Call planning_instructions first. \
                 Profile: get_user_fitness_profile. \
                 Nutrition: calculate_daily_calories, create_meal_plan, get_nutrition_recommendations, analyze_food_item. \
                 Exercises: search_exercises, get_exercise_categories, get_muscle_groups, get_exercise_by_name. \
                 Workouts: create_workout_plan. \
                 Plans are random unless a seed is passed. \
                 Every tool returns {status, data} or {status, error_message}."
                    .into(),
            ),
        }
    }
}
