//! Meal composer
//!
//! Splits a daily calorie target across meal slots, then fills each meal
//! component by component from the goal's template. Every component takes
//! a fixed fraction of the calories still unallocated in its meal and is
//! sized from one randomly chosen food.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::catalog::foods::{
    COMPLEX_CARBS, DAIRY, FRUITS, HEALTHY_FATS, LEAN_MEATS, PLANT_PROTEINS, VEGETABLES,
};
use crate::catalog::{meal_distribution, template_for, ComponentTag, FoodPool, MealTemplate};
use crate::error::{PlanError, PlanResult};
use crate::models::{
    DailyTotals, DayPlan, FoodItem, Goal, Meal, MealPlan, MealType, Nutrition, PlannedFood,
    Restrictions,
};

/// Candidate foods for a pool after dietary filtering
pub fn candidate_pool(pool: FoodPool, restrictions: &Restrictions) -> Vec<&'static FoodItem> {
    let base: Vec<&'static FoodItem> = match pool {
        FoodPool::Proteins => {
            let mut foods: Vec<&'static FoodItem> = LEAN_MEATS.iter().collect();
            if restrictions.plant_forward() {
                foods.extend(PLANT_PROTEINS.iter());
            } else {
                foods.extend(DAIRY.iter());
            }
            foods
        }
        FoodPool::Carbohydrates => COMPLEX_CARBS.iter().chain(FRUITS.iter()).collect(),
        FoodPool::Fats => HEALTHY_FATS.iter().collect(),
        FoodPool::Vegetables => VEGETABLES.iter().collect(),
        FoodPool::Fruits => FRUITS.iter().collect(),
        FoodPool::Nuts => HEALTHY_FATS
            .iter()
            .filter(|f| f.name.to_lowercase().contains("nuts"))
            .collect(),
    };

    base.into_iter().filter(|f| restrictions.allows(f)).collect()
}

/// Allocate `target_calories` across `components`.
///
/// Each component's allocation is subtracted from the remaining budget
/// even when its pool is empty, so a missing food still spends its share.
fn fill_meal<R, F>(
    rng: &mut R,
    components: &[ComponentTag],
    target_calories: i64,
    mut pool_for: F,
) -> (Vec<PlannedFood>, Nutrition)
where
    R: Rng + ?Sized,
    F: FnMut(FoodPool) -> Vec<&'static FoodItem>,
{
    let mut foods = Vec::with_capacity(components.len());
    let mut totals = Nutrition::zero();
    let mut remaining = target_calories as f64;

    for component in components {
        if remaining <= 0.0 {
            break;
        }

        let allocated = remaining * component.remaining_fraction();
        let pool = pool_for(component.pool());

        match pool.choose(rng) {
            Some(food) => {
                let grams = food.grams_for_calories(allocated);
                let mut portion = food.portion(grams);
                portion.calories = allocated;
                foods.push(PlannedFood::new(food.name, grams, &portion, food.prep_time_minutes));
                totals = totals + portion;
            }
            None => {
                debug!(component = component.as_str(), "No candidate foods; allocation left unfilled");
            }
        }

        remaining -= allocated;
    }

    (foods, totals)
}

fn compose_meal<R: Rng + ?Sized>(
    rng: &mut R,
    meal_type: MealType,
    target_calories: i64,
    template: &MealTemplate,
    restrictions: &Restrictions,
) -> Meal {
    let (foods, totals) = fill_meal(
        rng,
        template.components(meal_type),
        target_calories,
        |pool| candidate_pool(pool, restrictions),
    );
    Meal::new(meal_type, target_calories, foods, &totals)
}

/// Longest plan `compose_meal_plan` will build
pub const MAX_PLAN_DAYS: u32 = 366;

/// Build a meal plan of `days` days with `meals_per_day` meals each.
///
/// Unknown goals use the maintenance template but never label a slot as
/// lunch. Meal counts outside 3..=6 get six meals. More than
/// `MAX_PLAN_DAYS` days is rejected.
pub fn compose_meal_plan<R: Rng + ?Sized>(
    rng: &mut R,
    target_calories: i64,
    goal: &str,
    restrictions: &[String],
    meals_per_day: u32,
    days: u32,
) -> PlanResult<MealPlan> {
    if days > MAX_PLAN_DAYS {
        return Err(PlanError::InvalidInput(format!(
            "days must be at most {}, got {}",
            MAX_PLAN_DAYS, days
        )));
    }

    let known_goal = Goal::from_str(goal);
    let template = template_for(known_goal.unwrap_or(Goal::Maintenance));
    let has_lunch = known_goal.is_some();
    let filters = Restrictions::parse(restrictions);
    let distribution = meal_distribution(meals_per_day);

    let mut plan_days = Vec::new();
    for day in 1..=days {
        let meals: Vec<Meal> = distribution
            .iter()
            .enumerate()
            .map(|(slot, share)| {
                let meal_type = MealType::for_slot(slot, distribution.len(), has_lunch);
                let meal_calories = (target_calories as f64 * share) as i64;
                compose_meal(rng, meal_type, meal_calories, template, &filters)
            })
            .collect();

        let daily_totals = DailyTotals::from_meals(&meals);
        plan_days.push(DayPlan { day, meals, daily_totals });
    }

    debug!(days, meals_per_day = distribution.len(), goal, "Composed meal plan");

    Ok(MealPlan {
        meal_plan: plan_days,
        target_calories,
        goal: goal.to_string(),
        dietary_restrictions: restrictions.to_vec(),
        days,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const ANIMAL_PRODUCTS: [&str; 8] = [
        "Chicken Breast",
        "Turkey Breast",
        "Lean Beef",
        "Salmon",
        "Tuna",
        "Greek Yogurt",
        "Cottage Cheese",
        "Milk (2%)",
    ];

    fn names(pool: &[&FoodItem]) -> Vec<&'static str> {
        pool.iter().map(|f| f.name).collect()
    }

    #[test]
    fn test_meal_counts_follow_meals_per_day() {
        let mut rng = StdRng::seed_from_u64(7);
        for goal in ["weight_loss", "muscle_gain", "maintenance"] {
            for meals in 3..=6 {
                let plan = compose_meal_plan(&mut rng, 2200, goal, &[], meals, 2).unwrap();
                assert_eq!(plan.meal_plan.len(), 2);
                for day in &plan.meal_plan {
                    assert_eq!(day.meals.len(), meals as usize);
                    let share: i64 = day.meals.iter().map(|m| m.target_calories).sum();
                    // Truncating each slot loses at most one calorie per slot
                    assert!(share <= 2200 && share > 2200 - meals as i64);
                }
            }
        }
    }

    #[test]
    fn test_meal_calories_never_exceed_target() {
        let mut rng = StdRng::seed_from_u64(11);
        let plan = compose_meal_plan(&mut rng, 2500, "muscle_gain", &[], 5, 3).unwrap();
        for day in &plan.meal_plan {
            for meal in &day.meals {
                let sum: i64 = meal.foods.iter().map(|f| f.calories).sum();
                assert!(sum <= meal.target_calories, "{:?}", meal);
                assert!(meal.total_calories <= meal.target_calories);
            }
        }
    }

    #[test]
    fn test_slot_labels_for_known_and_unknown_goals() {
        let mut rng = StdRng::seed_from_u64(1);
        let plan = compose_meal_plan(&mut rng, 2000, "weight_loss", &[], 4, 1).unwrap();
        let labels: Vec<MealType> = plan.meal_plan[0].meals.iter().map(|m| m.meal_type).collect();
        assert_eq!(labels, vec![MealType::Breakfast, MealType::Lunch, MealType::Snack, MealType::Dinner]);

        let plan = compose_meal_plan(&mut rng, 2000, "shred", &[], 4, 1).unwrap();
        let labels: Vec<MealType> = plan.meal_plan[0].meals.iter().map(|m| m.meal_type).collect();
        assert_eq!(labels, vec![MealType::Breakfast, MealType::Snack, MealType::Snack, MealType::Dinner]);
        assert_eq!(plan.goal, "shred");
    }

    #[test]
    fn test_allocations_take_share_of_remaining() {
        let mut rng = StdRng::seed_from_u64(3);
        // Maintenance lunch: balanced_protein 30%, vegetables 20%, complex_carbs 40%
        let meal = compose_meal(
            &mut rng,
            MealType::Lunch,
            1000,
            template_for(Goal::Maintenance),
            &Restrictions::default(),
        );
        let calories: Vec<i64> = meal.foods.iter().map(|f| f.calories).collect();
        assert_eq!(calories, vec![300, 140, 224]);
        assert_eq!(meal.total_calories, 664);
    }

    #[test]
    fn test_empty_pool_still_spends_its_allocation() {
        let mut rng = StdRng::seed_from_u64(5);
        let components = [ComponentTag::Protein, ComponentTag::ComplexCarbs];
        let (foods, totals) = fill_meal(&mut rng, &components, 1000, |pool| match pool {
            FoodPool::Proteins => Vec::new(),
            other => candidate_pool(other, &Restrictions::default()),
        });
        // Protein found nothing but its 300 kcal are still removed from the budget
        assert_eq!(foods.len(), 1);
        assert_eq!(foods[0].calories, 280);
        assert!((totals.calories - 280.0).abs() < 1e-9);
    }

    #[test]
    fn test_vegan_plans_contain_no_animal_products() {
        let restrictions = vec!["vegan".to_string()];
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let plan = compose_meal_plan(&mut rng, 2000, "muscle_gain", &restrictions, 6, 1).unwrap();
            for meal in &plan.meal_plan[0].meals {
                for food in &meal.foods {
                    assert!(!ANIMAL_PRODUCTS.contains(&food.name), "seed {}: {}", seed, food.name);
                }
            }
        }
    }

    #[test]
    fn test_protein_pool_by_restriction() {
        let none = candidate_pool(FoodPool::Proteins, &Restrictions::default());
        assert!(names(&none).contains(&"Greek Yogurt"));
        assert!(!names(&none).contains(&"Tofu"));

        let vegetarian = candidate_pool(FoodPool::Proteins, &Restrictions::parse(&["vegetarian"]));
        assert_eq!(names(&vegetarian), vec!["Tofu", "Lentils", "Chickpeas", "Quinoa"]);

        let vegan = candidate_pool(FoodPool::Proteins, &Restrictions::parse(&["vegan"]));
        assert_eq!(names(&vegan), vec!["Tofu", "Lentils", "Chickpeas", "Quinoa"]);
    }

    #[test]
    fn test_gluten_free_removes_wheat() {
        let pool = candidate_pool(FoodPool::Carbohydrates, &Restrictions::parse(&["gluten_free"]));
        assert!(!names(&pool).contains(&"Whole Wheat Bread"));
        assert_eq!(pool.len(), 6);
    }

    #[test]
    fn test_nut_pool() {
        let pool = candidate_pool(FoodPool::Nuts, &Restrictions::default());
        assert_eq!(names(&pool), vec!["Nuts (mixed)"]);
    }

    #[test]
    fn test_portion_matches_allocation() {
        let mut rng = StdRng::seed_from_u64(9);
        let plan = compose_meal_plan(&mut rng, 1800, "weight_loss", &[], 3, 1).unwrap();
        for meal in &plan.meal_plan[0].meals {
            for food in &meal.foods {
                let item = crate::catalog::find_food(food.name).unwrap();
                let supplied = food.portion_grams * item.calories_per_100g / 100.0;
                assert!((supplied - food.calories as f64).abs() < 1.0, "{:?}", food);
            }
        }
    }

    #[test]
    fn test_same_seed_same_plan() {
        let a = compose_meal_plan(&mut StdRng::seed_from_u64(42), 2000, "maintenance", &[], 4, 2).unwrap();
        let b = compose_meal_plan(&mut StdRng::seed_from_u64(42), 2000, "maintenance", &[], 4, 2).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_day_count_is_bounded() {
        let mut rng = StdRng::seed_from_u64(17);
        let err = compose_meal_plan(&mut rng, 2000, "maintenance", &[], 3, u32::MAX).unwrap_err();
        assert_eq!(err, PlanError::InvalidInput(format!("days must be at most 366, got {}", u32::MAX)));
        assert!(compose_meal_plan(&mut rng, 2000, "maintenance", &[], 3, MAX_PLAN_DAYS + 1).is_err());

        let plan = compose_meal_plan(&mut rng, 2000, "maintenance", &[], 3, MAX_PLAN_DAYS).unwrap();
        assert_eq!(plan.meal_plan.len(), 366);
    }

    #[test]
    fn test_daily_totals_sum_meal_totals() {
        let mut rng = StdRng::seed_from_u64(13);
        let plan = compose_meal_plan(&mut rng, 2400, "muscle_gain", &[], 6, 1).unwrap();
        let day = &plan.meal_plan[0];
        let calories: i64 = day.meals.iter().map(|m| m.total_calories).sum();
        assert_eq!(day.daily_totals.calories, calories);
    }
}
