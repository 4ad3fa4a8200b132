//! Meal templates
//!
//! Per-goal component lists for each meal slot, and the allocation rule
//! attached to every component tag.

use crate::models::{Goal, MealType};

/// Which food pool a component draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FoodPool {
    /// Lean meats, plus dairy or plant proteins depending on restrictions
    Proteins,
    /// Complex carbohydrates and fruits
    Carbohydrates,
    /// Healthy fats
    Fats,
    Vegetables,
    Fruits,
    /// Healthy fats whose name mentions nuts
    Nuts,
}

/// A template label mapped to an allocation rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComponentTag {
    Protein,
    LeanProtein,
    BalancedProtein,
    ComplexCarbs,
    Carbs,
    ModerateCarbs,
    MinimalCarbs,
    HealthyFats,
    Fats,
    Vegetables,
    Fruits,
    Nuts,
}

impl ComponentTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentTag::Protein => "protein",
            ComponentTag::LeanProtein => "lean_protein",
            ComponentTag::BalancedProtein => "balanced_protein",
            ComponentTag::ComplexCarbs => "complex_carbs",
            ComponentTag::Carbs => "carbs",
            ComponentTag::ModerateCarbs => "moderate_carbs",
            ComponentTag::MinimalCarbs => "minimal_carbs",
            ComponentTag::HealthyFats => "healthy_fats",
            ComponentTag::Fats => "fats",
            ComponentTag::Vegetables => "vegetables",
            ComponentTag::Fruits => "fruits",
            ComponentTag::Nuts => "nuts",
        }
    }

    /// Fraction of the meal's *remaining* calories this component takes
    pub fn remaining_fraction(&self) -> f64 {
        match self {
            ComponentTag::Protein | ComponentTag::LeanProtein | ComponentTag::BalancedProtein => 0.30,
            ComponentTag::MinimalCarbs => 0.15,
            ComponentTag::ModerateCarbs => 0.25,
            ComponentTag::ComplexCarbs | ComponentTag::Carbs => 0.40,
            ComponentTag::HealthyFats | ComponentTag::Fats => 0.25,
            ComponentTag::Vegetables => 0.20,
            ComponentTag::Fruits | ComponentTag::Nuts => 0.15,
        }
    }

    pub fn pool(&self) -> FoodPool {
        match self {
            ComponentTag::Protein | ComponentTag::LeanProtein | ComponentTag::BalancedProtein => {
                FoodPool::Proteins
            }
            ComponentTag::ComplexCarbs
            | ComponentTag::Carbs
            | ComponentTag::ModerateCarbs
            | ComponentTag::MinimalCarbs => FoodPool::Carbohydrates,
            ComponentTag::HealthyFats | ComponentTag::Fats => FoodPool::Fats,
            ComponentTag::Vegetables => FoodPool::Vegetables,
            ComponentTag::Fruits => FoodPool::Fruits,
            ComponentTag::Nuts => FoodPool::Nuts,
        }
    }
}

/// Component lists for each meal slot of one goal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MealTemplate {
    pub breakfast: &'static [ComponentTag],
    pub lunch: &'static [ComponentTag],
    pub dinner: &'static [ComponentTag],
    pub snack: &'static [ComponentTag],
}

impl MealTemplate {
    pub fn components(&self, meal_type: MealType) -> &'static [ComponentTag] {
        match meal_type {
            MealType::Breakfast => self.breakfast,
            MealType::Lunch => self.lunch,
            MealType::Dinner => self.dinner,
            MealType::Snack => self.snack,
        }
    }
}

use ComponentTag::*;

// Snack slots draw on each goal's own `snack` list, not a shared
// protein/carbs/vegetables fallback.

static WEIGHT_LOSS: MealTemplate = MealTemplate {
    breakfast: &[Protein, ComplexCarbs, HealthyFats],
    lunch: &[LeanProtein, Vegetables, ComplexCarbs],
    dinner: &[LeanProtein, Vegetables, MinimalCarbs],
    snack: &[Protein, Fruits],
};

static MUSCLE_GAIN: MealTemplate = MealTemplate {
    breakfast: &[Protein, ComplexCarbs, HealthyFats],
    lunch: &[Protein, ComplexCarbs, Vegetables],
    dinner: &[Protein, ComplexCarbs, Vegetables],
    snack: &[Protein, Nuts, Fruits],
};

static MAINTENANCE: MealTemplate = MealTemplate {
    breakfast: &[Protein, ComplexCarbs],
    lunch: &[BalancedProtein, Vegetables, ComplexCarbs],
    dinner: &[Protein, Vegetables, ModerateCarbs],
    snack: &[Fruits, Nuts],
};

pub fn template_for(goal: Goal) -> &'static MealTemplate {
    match goal {
        Goal::WeightLoss => &WEIGHT_LOSS,
        Goal::MuscleGain => &MUSCLE_GAIN,
        Goal::Maintenance => &MAINTENANCE,
    }
}

/// Daily calorie share per meal slot, keyed by meals per day.
/// Counts outside 3..=5 use the six-meal row.
pub fn meal_distribution(meals_per_day: u32) -> &'static [f64] {
    match meals_per_day {
        3 => &[0.25, 0.45, 0.30],
        4 => &[0.25, 0.35, 0.25, 0.15],
        5 => &[0.20, 0.10, 0.35, 0.10, 0.25],
        _ => &[0.20, 0.10, 0.30, 0.10, 0.20, 0.10],
    }
}
