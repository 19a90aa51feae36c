mod diary_entry;
mod fitness_plan;
mod habit;
mod meal_slot;

pub use diary_entry::{DiaryEntry, DiaryTarget, Food, TargetParseError};
pub use fitness_plan::{FitnessPlan, NutritionMeal, NutritionPlan};
pub use habit::{HabitContent, HabitData};
pub use meal_slot::MealSlot;
