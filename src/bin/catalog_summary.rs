//! Utility to summarize an exercise catalog file
//!
//! Usage: catalog_summary [path]
//! Without a path, `FITPLAN_EXERCISES_PATH` or `<project root>/data/exercises.json` is used.

use std::path::PathBuf;

use fitplan::catalog::ExerciseCatalog;
use fitplan::config;
use fitplan::fitness::{exercise_categories, muscle_groups};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(config::exercises_path);

    println!("Catalog: {}", path.display());
    let catalog = ExerciseCatalog::load(&path)?;
    println!("Exercises: {}", catalog.len());

    if catalog.is_empty() {
        return Ok(());
    }

    let categories = exercise_categories(&catalog)?;
    println!("\nCategories ({}):", categories.len());
    for c in &categories {
        println!("  {:<24} {:>5}", c.name, c.count);
    }

    let muscles = muscle_groups(&catalog)?;
    println!("\nMuscle groups ({}):", muscles.len());
    for m in &muscles {
        println!("  {:<24} {:>5}", m.name, m.exercise_count);
    }

    Ok(())
}
