//! Built-in plan and habit catalogs shipped with the library.

use serde::de::DeserializeOwned;

use crate::models::{FitnessPlan, HabitData};

const PLANS_JSON: &str = include_str!("../../data/plans.json");
const HABITS_JSON: &str = include_str!("../../data/habits.json");

fn parse_bundled<T: DeserializeOwned>(name: &str, json: &str) -> Vec<T> {
    serde_json::from_str(json).unwrap_or_else(|e| {
        tracing::error!("Bundled {} catalog is invalid: {}", name, e);
        Vec::new()
    })
}

/// The fitness plans offered to every user, none opted in.
pub fn default_plans() -> Vec<FitnessPlan> {
    parse_bundled("plan", PLANS_JSON)
}

/// The habits a user can pick from.
pub fn preplanned_habits() -> Vec<HabitData> {
    parse_bundled("habit", HABITS_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_plans_parse() {
        let plans = default_plans();
        assert_eq!(plans.len(), 10);
        assert!(plans.iter().all(|p| !p.opt_in));
        assert!(plans.iter().all(|p| !p.steps.is_empty()));

        let ids: HashSet<u32> = plans.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), plans.len());
        assert_eq!(plans[0].title, "Full Body Strength Training");
    }

    #[test]
    fn test_preplanned_habits_parse() {
        let habits = preplanned_habits();
        assert_eq!(habits.len(), 6);

        let ids: Vec<&str> = habits.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6"]);
        assert_eq!(habits[1].title, "Drink more water");
    }
}
