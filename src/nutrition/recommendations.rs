//! Goal-keyed nutrition guidance

use serde::Serialize;

use crate::models::{ActivityLevel, Goal};

/// Static guidance for one goal
struct Guidance {
    key_principles: &'static [&'static str],
    meal_timing: &'static str,
    supplements: &'static [&'static str],
    avoid: &'static [&'static str],
}

static WEIGHT_LOSS: Guidance = Guidance {
    key_principles: &[
        "Create a moderate caloric deficit (300-500 calories below maintenance)",
        "Prioritize protein to preserve muscle mass during weight loss",
        "Include plenty of fiber-rich vegetables to feel full",
        "Stay hydrated - drink water before meals",
        "Practice portion control and mindful eating",
    ],
    meal_timing: "Eat 3-4 meals per day with focus on protein at each meal",
    supplements: &["Multivitamin", "Protein powder if needed", "Omega-3"],
    avoid: &["Highly processed foods", "Sugary drinks", "Large portions"],
};

static MUSCLE_GAIN: Guidance = Guidance {
    key_principles: &[
        "Maintain a moderate caloric surplus (200-400 calories above maintenance)",
        "Consume 1.6-2.2g protein per kg body weight",
        "Include complex carbohydrates around workouts",
        "Don't neglect healthy fats for hormone production",
        "Eat frequently throughout the day",
    ],
    meal_timing: "5-6 meals per day, protein every 3-4 hours",
    supplements: &["Whey protein", "Creatine", "Multivitamin"],
    avoid: &["Skipping meals", "Too much cardio", "Dirty bulking"],
};

static MAINTENANCE: Guidance = Guidance {
    key_principles: &[
        "Balance caloric intake with expenditure",
        "Focus on nutrient-dense whole foods",
        "Include variety in your diet",
        "Practice the 80/20 rule - healthy 80% of the time",
        "Listen to your body's hunger and fullness cues",
    ],
    meal_timing: "3-4 balanced meals per day",
    supplements: &["Multivitamin", "Vitamin D", "Omega-3"],
    avoid: &["Extreme restrictions", "All-or-nothing mentality"],
};

/// Extra principles for people training hard
const HIGH_ACTIVITY_PRINCIPLES: [&str; 2] = [
    "Increase carbohydrate intake to fuel workouts",
    "Focus on post-workout recovery nutrition",
];

fn guidance_for(goal: Goal) -> &'static Guidance {
    match goal {
        Goal::WeightLoss => &WEIGHT_LOSS,
        Goal::MuscleGain => &MUSCLE_GAIN,
        Goal::Maintenance => &MAINTENANCE,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendations {
    pub key_principles: Vec<String>,
    pub meal_timing: String,
    pub supplements: Vec<String>,
    pub avoid: Vec<String>,
}

/// Guidance for a goal, with training-focused additions for active and
/// very active people. Unknown goals get maintenance guidance.
pub fn nutrition_recommendations(goal: &str, activity_level: &str) -> Recommendations {
    let guidance = guidance_for(Goal::resolve(goal));
    let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

    let mut key_principles = owned(guidance.key_principles);
    if matches!(
        ActivityLevel::from_str(activity_level),
        Some(ActivityLevel::Active | ActivityLevel::VeryActive)
    ) {
        key_principles.extend(owned(&HIGH_ACTIVITY_PRINCIPLES));
    }

    Recommendations {
        key_principles,
        meal_timing: guidance.meal_timing.to_string(),
        supplements: owned(guidance.supplements),
        avoid: owned(guidance.avoid),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_tables() {
        let r = nutrition_recommendations("muscle_gain", "moderate");
        assert_eq!(r.key_principles.len(), 5);
        assert_eq!(r.meal_timing, "5-6 meals per day, protein every 3-4 hours");
        assert_eq!(r.supplements, vec!["Whey protein", "Creatine", "Multivitamin"]);

        let r = nutrition_recommendations("weight_loss", "light");
        assert_eq!(r.avoid, vec!["Highly processed foods", "Sugary drinks", "Large portions"]);
    }

    #[test]
    fn test_unknown_goal_uses_maintenance() {
        let r = nutrition_recommendations("bulk", "sedentary");
        assert_eq!(r.meal_timing, "3-4 balanced meals per day");
        assert_eq!(r.avoid.len(), 2);
    }

    #[test]
    fn test_active_people_get_extra_principles() {
        for level in ["active", "very_active"] {
            let r = nutrition_recommendations("maintenance", level);
            assert_eq!(r.key_principles.len(), 7);
            assert_eq!(r.key_principles[6], "Focus on post-workout recovery nutrition");
        }
        // Repeated calls must not accumulate principles
        assert_eq!(nutrition_recommendations("maintenance", "active").key_principles.len(), 7);
        assert_eq!(nutrition_recommendations("maintenance", "moderate").key_principles.len(), 5);
    }
}
