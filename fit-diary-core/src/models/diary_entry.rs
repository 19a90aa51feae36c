use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::meal_slot::MealSlot;

/// Per-slot food accumulators for one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Food {
    pub breakfast: f64,
    pub lunch: f64,
    pub dinner: f64,
    pub snacks: f64,
    pub water: f64,
}

impl Food {
    pub fn get(&self, slot: MealSlot) -> f64 {
        match slot {
            MealSlot::Breakfast => self.breakfast,
            MealSlot::Lunch => self.lunch,
            MealSlot::Dinner => self.dinner,
            MealSlot::Snacks => self.snacks,
            MealSlot::Water => self.water,
        }
    }

    fn slot_mut(&mut self, slot: MealSlot) -> &mut f64 {
        match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Dinner => &mut self.dinner,
            MealSlot::Snacks => &mut self.snacks,
            MealSlot::Water => &mut self.water,
        }
    }

    /// Sum of every slot, water included.
    pub fn total(&self) -> f64 {
        MealSlot::ALL.iter().map(|slot| self.get(*slot)).sum()
    }
}

/// One calendar day of the diary.
///
/// The JSON shape matches the persisted `diary_<date>` snapshot:
/// `{"food": {...}, "Exercise": n, "goal": n, "isReadOnly": bool}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiaryEntry {
    pub food: Food,
    #[serde(rename = "Exercise")]
    pub exercise: f64,
    pub goal: f64,
    #[serde(rename = "isReadOnly")]
    pub is_read_only: bool,
}

impl DiaryEntry {
    /// A zeroed, editable entry carrying the given goal.
    pub fn new(goal: f64) -> Self {
        Self {
            food: Food::default(),
            exercise: 0.0,
            goal,
            is_read_only: false,
        }
    }

    pub fn get(&self, target: DiaryTarget) -> f64 {
        match target {
            DiaryTarget::Food(slot) => self.food.get(slot),
            DiaryTarget::Exercise => self.exercise,
        }
    }

    pub(crate) fn accumulator_mut(&mut self, target: DiaryTarget) -> &mut f64 {
        match target {
            DiaryTarget::Food(slot) => self.food.slot_mut(slot),
            DiaryTarget::Exercise => &mut self.exercise,
        }
    }

    pub fn food_total(&self) -> f64 {
        self.food.total()
    }

    /// `goal - (food + exercise)`
    pub fn remaining(&self) -> f64 {
        self.goal - (self.food_total() + self.exercise)
    }
}

impl fmt::Display for DiaryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for slot in MealSlot::ALL {
            writeln!(f, "  {:10} {:>8} {}", slot, self.food.get(slot), slot.unit())?;
        }
        writeln!(f, "  {:10} {:>8} kcal", "Exercise", self.exercise)?;
        writeln!(f, "{}", "-".repeat(30))?;
        writeln!(f, "  {:10} {:>8}", "Goal", self.goal)?;
        writeln!(f, "  {:10} {:>8}", "Food", self.food_total())?;
        writeln!(f, "  {:10} {:>8}", "Remaining", self.remaining())?;
        if self.is_read_only {
            writeln!(f, "\n(saved, read-only)")?;
        }
        Ok(())
    }
}

/// The accumulator an update is aimed at.
///
/// A meal slot is present exactly when the category is food.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiaryTarget {
    Food(MealSlot),
    Exercise,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TargetParseError {
    #[error("Unknown category '{0}'. Valid options: food, exercise")]
    UnknownCategory(String),
    #[error("Food entries need a meal slot (breakfast, lunch, dinner, snacks, water)")]
    MissingSlot,
    #[error("Exercise entries take no meal slot, got '{0}'")]
    UnexpectedSlot(String),
    #[error("{0}")]
    UnknownSlot(String),
}

impl DiaryTarget {
    /// Builds a target from a category and optional subcategory.
    pub fn parse(category: &str, subcategory: Option<&str>) -> Result<Self, TargetParseError> {
        match (category.to_lowercase().as_str(), subcategory) {
            ("food", Some(slot)) => slot
                .parse::<MealSlot>()
                .map(DiaryTarget::Food)
                .map_err(TargetParseError::UnknownSlot),
            ("food", None) => Err(TargetParseError::MissingSlot),
            ("exercise", None) => Ok(DiaryTarget::Exercise),
            ("exercise", Some(slot)) => Err(TargetParseError::UnexpectedSlot(slot.to_string())),
            _ => Err(TargetParseError::UnknownCategory(category.to_string())),
        }
    }
}

/// Accepts either `exercise` or a meal slot name.
impl FromStr for DiaryTarget {
    type Err = TargetParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("exercise") {
            Ok(DiaryTarget::Exercise)
        } else {
            DiaryTarget::parse("food", Some(s))
        }
    }
}

impl fmt::Display for DiaryTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiaryTarget::Food(slot) => fmt::Display::fmt(slot, f),
            DiaryTarget::Exercise => f.pad("Exercise"),
        }
    }
}
