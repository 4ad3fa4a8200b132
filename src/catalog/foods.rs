//! Nutrition database
//!
//! Static reference foods grouped by macro category and sub-category.
//! Values are per 100 g.

use serde::Serialize;

use crate::models::{FoodItem, FoodSource};

/// Top-level macro category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodCategory {
    Proteins,
    Carbohydrates,
    Fats,
    Vegetables,
}

impl FoodCategory {
    pub const ALL: &'static [FoodCategory] = &[
        FoodCategory::Proteins,
        FoodCategory::Carbohydrates,
        FoodCategory::Fats,
        FoodCategory::Vegetables,
    ];

    pub fn subcategories(&self) -> &'static [FoodSubcategory] {
        match self {
            FoodCategory::Proteins => &[
                FoodSubcategory::LeanMeats,
                FoodSubcategory::Dairy,
                FoodSubcategory::PlantBased,
            ],
            FoodCategory::Carbohydrates => &[FoodSubcategory::Complex, FoodSubcategory::Fruits],
            FoodCategory::Fats => &[FoodSubcategory::HealthyFats],
            FoodCategory::Vegetables => &[FoodSubcategory::Vegetables],
        }
    }
}

/// Second-level grouping within a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FoodSubcategory {
    LeanMeats,
    Dairy,
    PlantBased,
    Complex,
    Fruits,
    HealthyFats,
    Vegetables,
}

impl FoodSubcategory {
    pub fn foods(&self) -> &'static [FoodItem] {
        match self {
            FoodSubcategory::LeanMeats => LEAN_MEATS,
            FoodSubcategory::Dairy => DAIRY,
            FoodSubcategory::PlantBased => PLANT_PROTEINS,
            FoodSubcategory::Complex => COMPLEX_CARBS,
            FoodSubcategory::Fruits => FRUITS,
            FoodSubcategory::HealthyFats => HEALTHY_FATS,
            FoodSubcategory::Vegetables => VEGETABLES,
        }
    }
}

const fn food(
    name: &'static str,
    calories_per_100g: f64,
    protein_g: f64,
    carbs_g: f64,
    fat_g: f64,
    prep_time_minutes: u32,
    source: FoodSource,
) -> FoodItem {
    FoodItem {
        name,
        calories_per_100g,
        protein_g,
        carbs_g,
        fat_g,
        prep_time_minutes,
        source,
    }
}

pub static LEAN_MEATS: &[FoodItem] = &[
    food("Chicken Breast", 165.0, 31.0, 0.0, 3.6, 15, FoodSource::Meat),
    food("Turkey Breast", 135.0, 30.0, 0.0, 1.0, 15, FoodSource::Meat),
    food("Lean Beef", 250.0, 26.0, 0.0, 15.0, 20, FoodSource::Meat),
    food("Salmon", 208.0, 25.0, 0.0, 12.0, 12, FoodSource::Fish),
    food("Tuna", 132.0, 28.0, 0.0, 1.0, 5, FoodSource::Fish),
];

pub static DAIRY: &[FoodItem] = &[
    food("Greek Yogurt", 97.0, 10.0, 4.0, 5.0, 0, FoodSource::Dairy),
    food("Cottage Cheese", 98.0, 11.0, 3.4, 4.3, 0, FoodSource::Dairy),
    food("Milk (2%)", 50.0, 3.4, 5.0, 2.0, 0, FoodSource::Dairy),
];

pub static PLANT_PROTEINS: &[FoodItem] = &[
    food("Tofu", 76.0, 8.0, 1.9, 4.8, 10, FoodSource::Plant),
    food("Lentils", 116.0, 9.0, 20.0, 0.4, 25, FoodSource::Plant),
    food("Chickpeas", 164.0, 8.9, 27.0, 2.6, 20, FoodSource::Plant),
    food("Quinoa", 120.0, 4.4, 22.0, 1.9, 15, FoodSource::Plant),
];

pub static COMPLEX_CARBS: &[FoodItem] = &[
    food("Brown Rice", 123.0, 2.6, 25.0, 0.9, 25, FoodSource::Plant),
    food("Sweet Potato", 86.0, 1.6, 20.0, 0.1, 25, FoodSource::Plant),
    food("Oats", 68.0, 2.4, 12.0, 1.4, 5, FoodSource::Plant),
    food("Whole Wheat Bread", 247.0, 13.0, 41.0, 4.2, 0, FoodSource::Plant),
];

pub static FRUITS: &[FoodItem] = &[
    food("Banana", 89.0, 1.1, 23.0, 0.3, 0, FoodSource::Plant),
    food("Apple", 52.0, 0.3, 14.0, 0.2, 0, FoodSource::Plant),
    food("Berries (mixed)", 57.0, 0.7, 14.0, 0.3, 0, FoodSource::Plant),
];

pub static HEALTHY_FATS: &[FoodItem] = &[
    food("Avocado", 160.0, 2.0, 9.0, 15.0, 2, FoodSource::Plant),
    food("Nuts (mixed)", 607.0, 20.0, 22.0, 54.0, 0, FoodSource::Plant),
    food("Olive Oil", 884.0, 0.0, 0.0, 100.0, 0, FoodSource::Plant),
    food("Seeds (chia/flax)", 486.0, 17.0, 42.0, 31.0, 0, FoodSource::Plant),
];

pub static VEGETABLES: &[FoodItem] = &[
    food("Broccoli", 34.0, 2.8, 7.0, 0.4, 8, FoodSource::Plant),
    food("Spinach", 23.0, 2.9, 3.6, 0.4, 3, FoodSource::Plant),
    food("Bell Peppers", 31.0, 1.0, 7.0, 0.3, 5, FoodSource::Plant),
    food("Carrots", 41.0, 0.9, 10.0, 0.2, 5, FoodSource::Plant),
    food("Cucumber", 16.0, 0.7, 4.0, 0.1, 2, FoodSource::Plant),
];

/// Every food in database order (category, then sub-category, then list order)
pub fn all_foods() -> impl Iterator<Item = &'static FoodItem> {
    FoodCategory::ALL
        .iter()
        .flat_map(|c| c.subcategories().iter())
        .flat_map(|s| s.foods().iter())
}

/// First food whose name contains `query`, case-insensitively
pub fn find_food(query: &str) -> Option<&'static FoodItem> {
    let needle = query.to_lowercase();
    all_foods().find(|f| f.name.to_lowercase().contains(&needle))
}
