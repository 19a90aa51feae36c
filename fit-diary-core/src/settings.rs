//! Typed access to the scalar settings keys.

use serde::Serialize;

use crate::store::{PersistentStore, StoreError};

pub const GOAL_KEY: &str = "goal";
pub const ONBOARDING_COMPLETE_KEY: &str = "onboardingComplete";
pub const LOGGED_IN_KEY: &str = "loggedIn";
pub const NAME_KEY: &str = "name";
pub const EMAIL_KEY: &str = "email";

/// Point-in-time view of every setting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Profile {
    pub name: Option<String>,
    pub email: Option<String>,
    pub goal: Option<f64>,
    pub onboarding_complete: bool,
    pub logged_in: bool,
}

/// Reads and writes user settings stored as plain strings.
///
/// Unreadable or malformed values read as absent.
pub struct UserSettings<'a, S: PersistentStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: PersistentStore + ?Sized> UserSettings<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get_string(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Failed to read setting {}: {}", key, e);
                None
            }
        }
    }

    fn flag(&self, key: &str) -> bool {
        self.read(key).as_deref() == Some("true")
    }

    /// The user's daily calorie goal, truncated to a whole number.
    pub fn goal(&self) -> Option<f64> {
        let raw = self.read(GOAL_KEY)?;
        match raw.trim().parse::<f64>() {
            Ok(goal) if goal.is_finite() => Some(goal.trunc()),
            _ => {
                tracing::warn!("Ignoring malformed goal value '{}'", raw);
                None
            }
        }
    }

    pub fn set_goal(&self, goal: f64) -> Result<(), StoreError> {
        if !goal.is_finite() || goal <= 0.0 {
            return Err(StoreError::InvalidValue {
                key: GOAL_KEY.to_string(),
                reason: format!("expected a positive number, got {}", goal),
            });
        }
        self.store.set_string(GOAL_KEY, &goal.to_string())
    }

    pub fn onboarding_complete(&self) -> bool {
        self.flag(ONBOARDING_COMPLETE_KEY)
    }

    /// Stores the calorie goal chosen during onboarding and marks it finished.
    pub fn complete_onboarding(&self, goal: f64) -> Result<(), StoreError> {
        self.set_goal(goal)?;
        self.store.set_string(ONBOARDING_COMPLETE_KEY, "true")
    }

    pub fn logged_in(&self) -> bool {
        self.flag(LOGGED_IN_KEY)
    }

    pub fn set_logged_in(&self, logged_in: bool) -> Result<(), StoreError> {
        if logged_in {
            self.store.set_string(LOGGED_IN_KEY, "true")
        } else {
            self.store.remove_key(LOGGED_IN_KEY)
        }
    }

    pub fn name(&self) -> Option<String> {
        self.read(NAME_KEY)
    }

    /// Returns `false` without writing when `name` is empty.
    pub fn set_name(&self, name: &str) -> Result<bool, StoreError> {
        self.set_non_empty(NAME_KEY, name)
    }

    pub fn email(&self) -> Option<String> {
        self.read(EMAIL_KEY)
    }

    /// Returns `false` without writing when `email` is empty.
    pub fn set_email(&self, email: &str) -> Result<bool, StoreError> {
        self.set_non_empty(EMAIL_KEY, email)
    }

    fn set_non_empty(&self, key: &str, value: &str) -> Result<bool, StoreError> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(false);
        }
        self.store.set_string(key, value)?;
        Ok(true)
    }

    pub fn profile(&self) -> Profile {
        Profile {
            name: self.name(),
            email: self.email(),
            goal: self.goal(),
            onboarding_complete: self.onboarding_complete(),
            logged_in: self.logged_in(),
        }
    }
}
