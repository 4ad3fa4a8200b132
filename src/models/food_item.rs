//! Food Item model
//!
//! Reference foods with nutrition stored per 100 grams.

use serde::{Deserialize, Serialize};

use super::Nutrition;

/// Where a food comes from, used by dietary restriction filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodSource {
    Meat,
    Fish,
    Dairy,
    Plant,
}

impl FoodSource {
    pub fn is_animal(&self) -> bool {
        !matches!(self, FoodSource::Plant)
    }
}

/// A reference food
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FoodItem {
    pub name: &'static str,
    pub calories_per_100g: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
    pub prep_time_minutes: u32,
    pub source: FoodSource,
}

impl FoodItem {
    /// Nutrition of a 100 g portion
    pub fn per_100g(&self) -> Nutrition {
        Nutrition::new(self.calories_per_100g, self.protein_g, self.carbs_g, self.fat_g)
    }

    /// Nutrition of a portion of the given weight
    pub fn portion(&self, grams: f64) -> Nutrition {
        self.per_100g().scale(grams / 100.0)
    }

    /// Grams needed to supply the given calories
    pub fn grams_for_calories(&self, calories: f64) -> f64 {
        calories / self.calories_per_100g * 100.0
    }
}

/// A dietary restriction applied to candidate food pools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DietaryRestriction {
    /// No animal products at all
    Vegan,
    /// No meat or fish; dairy allowed
    Vegetarian,
    /// No wheat-based foods
    GlutenFree,
}

impl DietaryRestriction {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "vegan" => Some(DietaryRestriction::Vegan),
            "vegetarian" => Some(DietaryRestriction::Vegetarian),
            "gluten_free" | "gluten-free" => Some(DietaryRestriction::GlutenFree),
            _ => None,
        }
    }
}

/// The set of restrictions active for one request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Restrictions {
    pub vegan: bool,
    pub vegetarian: bool,
    pub gluten_free: bool,
}

impl Restrictions {
    /// Parse free-form restriction labels; unrecognized labels carry no filter
    pub fn parse<S: AsRef<str>>(labels: &[S]) -> Self {
        let mut restrictions = Self::default();
        for label in labels {
            match DietaryRestriction::from_str(label.as_ref()) {
                Some(DietaryRestriction::Vegan) => restrictions.vegan = true,
                Some(DietaryRestriction::Vegetarian) => restrictions.vegetarian = true,
                Some(DietaryRestriction::GlutenFree) => restrictions.gluten_free = true,
                None => {}
            }
        }
        restrictions
    }

    /// Whether either plant-forward restriction is active
    pub fn plant_forward(&self) -> bool {
        self.vegan || self.vegetarian
    }

    pub fn allows(&self, food: &FoodItem) -> bool {
        if self.vegan && food.source.is_animal() {
            return false;
        }
        if !self.vegan
            && self.vegetarian
            && matches!(food.source, FoodSource::Meat | FoodSource::Fish)
        {
            return false;
        }
        if self.gluten_free && food.name.contains("Wheat") {
            return false;
        }
        true
    }
}
