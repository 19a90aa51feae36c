use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NutritionMeal {
    pub meal: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NutritionPlan {
    pub goal: String,
    pub meals: Vec<NutritionMeal>,
}

/// A fitness program the user can opt into.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FitnessPlan {
    pub id: u32,
    pub title: String,
    pub image: String,
    pub duration: String,
    pub frequency: String,
    pub overview: String,
    pub steps: Vec<String>,
    pub nutrition_plan: NutritionPlan,
    #[serde(rename = "optIn")]
    pub opt_in: bool,
}

impl FitnessPlan {
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            image: String::new(),
            duration: String::new(),
            frequency: String::new(),
            overview: String::new(),
            steps: Vec::new(),
            nutrition_plan: NutritionPlan::default(),
            opt_in: false,
        }
    }

    pub fn with_schedule(mut self, duration: impl Into<String>, frequency: impl Into<String>) -> Self {
        self.duration = duration.into();
        self.frequency = frequency.into();
        self
    }

    pub fn with_overview(mut self, overview: impl Into<String>) -> Self {
        self.overview = overview.into();
        self
    }

    pub fn with_steps(mut self, steps: Vec<String>) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_nutrition_plan(mut self, nutrition_plan: NutritionPlan) -> Self {
        self.nutrition_plan = nutrition_plan;
        self
    }
}

impl fmt::Display for FitnessPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.chars().count()))?;
        writeln!(f, "Duration: {}", self.duration)?;
        writeln!(f, "Frequency: {}", self.frequency)?;
        writeln!(f, "Opted in: {}", if self.opt_in { "yes" } else { "no" })?;

        if !self.overview.is_empty() {
            writeln!(f, "\n{}", self.overview)?;
        }

        if !self.steps.is_empty() {
            writeln!(f, "\nSteps:")?;
            for (i, step) in self.steps.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, step)?;
            }
        }

        if !self.nutrition_plan.meals.is_empty() {
            writeln!(f, "\nNutrition ({}):", self.nutrition_plan.goal)?;
            for meal in &self.nutrition_plan.meals {
                writeln!(f, "  {}:", meal.meal)?;
                for item in &meal.items {
                    writeln!(f, "    - {}", item)?;
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_new() {
        let plan = FitnessPlan::new(42, "Morning Mobility");
        assert_eq!(plan.id, 42);
        assert_eq!(plan.title, "Morning Mobility");
        assert!(plan.steps.is_empty());
        assert!(!plan.opt_in);
    }

    #[test]
    fn test_plan_json_field_names() {
        let plan = FitnessPlan::new(1, "Test").with_nutrition_plan(NutritionPlan {
            goal: "Fat Loss".to_string(),
            meals: vec![],
        });
        let value = serde_json::to_value(&plan).unwrap();
        assert_eq!(value["optIn"], false);
        assert_eq!(value["nutrition_plan"]["goal"], "Fat Loss");
    }

    #[test]
    fn test_plan_display() {
        let plan = FitnessPlan::new(3, "Yoga Basics")
            .with_schedule("4 weeks", "3 times per week")
            .with_overview("Gentle flows for beginners.")
            .with_steps(vec!["Breathe".to_string(), "Stretch".to_string()]);

        let output = format!("{}", plan);
        assert!(output.contains("Yoga Basics"));
        assert!(output.contains("4 weeks"));
        assert!(output.contains("\nGentle flows for beginners.\n"));
        assert!(output.contains("2. Stretch"));
    }
}
