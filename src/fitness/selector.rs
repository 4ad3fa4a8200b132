//! Exercise selector
//!
//! Filtering and summaries over the loaded exercise catalog. Results keep
//! catalog order.

use serde::Serialize;

use crate::catalog::ExerciseCatalog;
use crate::error::{PlanError, PlanResult};
use crate::models::ExerciseItem;

pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// Search filters; `None` or empty values match everything
#[derive(Debug, Clone, Default)]
pub struct ExerciseQuery {
    pub category: Option<String>,
    pub level: Option<String>,
    pub equipment: Option<String>,
    pub muscle_groups: Option<Vec<String>>,
    pub limit: usize,
}

/// Filters echoed back with search results
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchCriteria {
    pub category: Option<String>,
    pub level: Option<String>,
    pub equipment: Option<String>,
    pub muscle_groups: Option<Vec<String>>,
}

impl ExerciseQuery {
    pub fn criteria(&self) -> SearchCriteria {
        SearchCriteria {
            category: self.category.clone(),
            level: self.level.clone(),
            equipment: self.equipment.clone(),
            muscle_groups: self.muscle_groups.clone(),
        }
    }

    /// Lowercased muscle filter, or `None` when no muscles were given
    fn muscle_filter(&self) -> Option<Vec<String>> {
        self.muscle_groups
            .as_ref()
            .filter(|m| !m.is_empty())
            .map(|m| m.iter().map(|s| s.to_lowercase()).collect())
    }

    pub fn matches(&self, exercise: &ExerciseItem) -> bool {
        self.matches_with(exercise, self.muscle_filter().as_deref())
    }

    fn matches_with(&self, exercise: &ExerciseItem, muscles: Option<&[String]>) -> bool {
        if let Some(category) = non_empty(&self.category) {
            if !exercise.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }
        if let Some(level) = non_empty(&self.level) {
            if !exercise.level.eq_ignore_ascii_case(level) {
                return false;
            }
        }
        if let Some(equipment) = non_empty(&self.equipment) {
            if !contains_ignore_case(&exercise.equipment, equipment) {
                return false;
            }
        }
        match muscles {
            Some(m) => exercise.hits_any(m),
            None => true,
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

pub(crate) fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

fn require_catalog(catalog: &ExerciseCatalog) -> PlanResult<&[ExerciseItem]> {
    if catalog.is_empty() {
        Err(PlanError::catalog_unavailable())
    } else {
        Ok(catalog.exercises())
    }
}

/// Exercises matching `query`, truncated to `query.limit`
pub fn search_exercises<'a>(
    catalog: &'a ExerciseCatalog,
    query: &ExerciseQuery,
) -> PlanResult<Vec<&'a ExerciseItem>> {
    let exercises = require_catalog(catalog)?;
    let muscles = query.muscle_filter();

    Ok(exercises
        .iter()
        .filter(|e| query.matches_with(e, muscles.as_deref()))
        .take(query.limit)
        .collect())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MuscleGroupCount {
    pub name: String,
    pub exercise_count: usize,
}

/// Count `names` keeping first-seen order
fn tally<'a, I: Iterator<Item = &'a str>>(names: I) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for name in names {
        match counts.iter_mut().find(|(n, _)| n == name) {
            Some((_, c)) => *c += 1,
            None => counts.push((name.to_string(), 1)),
        }
    }
    counts
}

/// Categories with exercise counts, in first-seen catalog order
pub fn exercise_categories(catalog: &ExerciseCatalog) -> PlanResult<Vec<CategoryCount>> {
    let exercises = require_catalog(catalog)?;
    Ok(tally(exercises.iter().map(|e| e.category.as_str()))
        .into_iter()
        .map(|(name, count)| CategoryCount { name, count })
        .collect())
}

/// Muscles with the number of exercises listing them as primary or
/// secondary, most common first
pub fn muscle_groups(catalog: &ExerciseCatalog) -> PlanResult<Vec<MuscleGroupCount>> {
    let exercises = require_catalog(catalog)?;
    let mut counts = tally(exercises.iter().flat_map(|e| e.all_muscles().map(String::as_str)));
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    Ok(counts
        .into_iter()
        .map(|(name, exercise_count)| MuscleGroupCount { name, exercise_count })
        .collect())
}

/// Exact case-insensitive name match, else the first name containing `name`
pub fn exercise_by_name<'a>(catalog: &'a ExerciseCatalog, name: &str) -> PlanResult<&'a ExerciseItem> {
    let exercises = require_catalog(catalog)?;
    exercises
        .iter()
        .find(|e| e.name.eq_ignore_ascii_case(name))
        .or_else(|| exercises.iter().find(|e| contains_ignore_case(&e.name, name)))
        .ok_or_else(|| PlanError::DataUnavailable(format!("Exercise '{}' not found", name)))
}
