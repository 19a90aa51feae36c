//! Date-keyed diary ledger.
//!
//! Entries live in memory and are created on the first accepted update for a
//! date. Saving a date freezes its entry and writes a JSON snapshot under
//! `diary_<YYYY-MM-DD>`. Remaining calories are always derived from the
//! entry, never stored.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::models::{DiaryEntry, DiaryTarget};
use crate::notify::{LogNotifier, Notice, Notifier};
use crate::settings::UserSettings;
use crate::store::{PersistentStore, StoreError};

/// Calorie goal used when the user has not stored one.
pub const DEFAULT_GOAL: f64 = 2830.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LedgerConfig {
    pub default_goal: f64,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            default_goal: DEFAULT_GOAL,
        }
    }
}

/// Store key of the saved snapshot for `date`.
pub fn snapshot_key(date: NaiveDate) -> String {
    format!("diary_{}", date.format("%Y-%m-%d"))
}

/// Reads the saved snapshot for `date`. Missing or malformed blobs are `None`.
///
/// A snapshot only exists for a saved day, so the returned entry is always
/// read-only whatever its stored `isReadOnly` says.
pub fn load_snapshot<S: PersistentStore + ?Sized>(store: &S, date: NaiveDate) -> Option<DiaryEntry> {
    let key = snapshot_key(date);
    let raw = match store.get_string(&key) {
        Ok(raw) => raw?,
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", key, e);
            return None;
        }
    };

    match serde_json::from_str::<DiaryEntry>(&raw) {
        Ok(mut entry) => {
            if !entry.is_read_only {
                tracing::warn!("Snapshot {} is not marked read-only; freezing it", key);
                entry.is_read_only = true;
            }
            Some(entry)
        }
        Err(e) => {
            tracing::warn!("Ignoring corrupted snapshot {}: {}", key, e);
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UpdateOutcome {
    /// The accumulator now holds `value`.
    Applied { value: f64 },
    /// The entry was already saved; nothing changed.
    RejectedReadOnly,
    /// The amount was not finite or would make the accumulator negative.
    RejectedInvalidAmount,
}

impl UpdateOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, UpdateOutcome::Applied { .. })
    }
}

#[derive(Debug)]
pub enum SaveOutcome {
    Saved,
    NothingToSave,
    /// The entry is read-only in memory but its snapshot was not written.
    Failed(StoreError),
}

impl SaveOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveOutcome::Saved)
    }
}

/// Derived totals for one day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub goal: f64,
    pub food: f64,
    pub exercise: f64,
    pub remaining: f64,
    pub is_read_only: bool,
}

pub struct DiaryLedger<S: PersistentStore> {
    entries: HashMap<NaiveDate, DiaryEntry>,
    store: S,
    config: LedgerConfig,
    notifier: Box<dyn Notifier>,
}

fn resolve_goal<S: PersistentStore + ?Sized>(store: &S, config: &LedgerConfig) -> f64 {
    UserSettings::new(store)
        .goal()
        .unwrap_or(config.default_goal)
}

impl<S: PersistentStore> DiaryLedger<S> {
    /// Creates an empty ledger. Notices go to the log until a notifier is set.
    pub fn new(store: S, config: LedgerConfig) -> Self {
        Self {
            entries: HashMap::new(),
            store,
            config,
            notifier: Box::new(LogNotifier),
        }
    }

    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> LedgerConfig {
        self.config
    }

    /// Goal a new entry would be created with right now: the stored user
    /// goal, else the configured default.
    pub fn current_goal(&self) -> f64 {
        resolve_goal(&self.store, &self.config)
    }

    /// Adds `delta` to one accumulator of `date`, creating the entry if needed.
    pub fn update_diary(&mut self, date: NaiveDate, target: DiaryTarget, delta: f64) -> UpdateOutcome {
        let current = self.entries.get(&date);

        if current.is_some_and(|entry| entry.is_read_only) {
            tracing::warn!("Rejected update to {} for {}: entry is saved", target, date);
            return UpdateOutcome::RejectedReadOnly;
        }

        let value = current.map(|entry| entry.get(target)).unwrap_or(0.0) + delta;
        if !delta.is_finite() || !value.is_finite() || value < 0.0 {
            tracing::debug!("Rejected amount {} for {} on {}", delta, target, date);
            return UpdateOutcome::RejectedInvalidAmount;
        }

        let entry = match self.entries.entry(date) {
            Entry::Occupied(occupied) => occupied.into_mut(),
            Entry::Vacant(vacant) => {
                let goal = resolve_goal(&self.store, &self.config);
                tracing::debug!("Created diary entry for {} with goal {}", date, goal);
                vacant.insert(DiaryEntry::new(goal))
            }
        };
        *entry.accumulator_mut(target) = value;

        tracing::debug!("{} on {} is now {}", target, date, value);
        UpdateOutcome::Applied { value }
    }

    /// The entry for `date`, or a zeroed editable one carrying the current goal.
    pub fn read_entry(&self, date: NaiveDate) -> DiaryEntry {
        self.entries
            .get(&date)
            .cloned()
            .unwrap_or_else(|| DiaryEntry::new(self.current_goal()))
    }

    /// `goal - (food + exercise)` for `date`.
    pub fn compute_remaining(&self, date: NaiveDate) -> f64 {
        self.read_entry(date).remaining()
    }

    pub fn summary(&self, date: NaiveDate) -> DaySummary {
        let entry = self.read_entry(date);
        DaySummary {
            date,
            goal: entry.goal,
            food: entry.food_total(),
            exercise: entry.exercise,
            remaining: entry.remaining(),
            is_read_only: entry.is_read_only,
        }
    }

    /// Freezes the entry for `date` and writes its snapshot.
    ///
    /// The freeze is not undone when the write fails.
    pub fn save_diary_entry(&mut self, date: NaiveDate) -> SaveOutcome {
        let Some(entry) = self.entries.get_mut(&date) else {
            self.notifier.notify(Notice::info("No diary entry to save"));
            return SaveOutcome::NothingToSave;
        };

        entry.is_read_only = true;
        let snapshot = entry.clone();

        match self.persist(date, &snapshot) {
            Ok(()) => {
                tracing::info!("Saved diary entry for {}", date);
                self.notifier
                    .notify(Notice::success("Diary entry saved successfully"));
                SaveOutcome::Saved
            }
            Err(e) => {
                tracing::error!("Error saving diary entry for {}: {}", date, e);
                self.notifier
                    .notify(Notice::failure(format!("Could not save diary entry: {}", e)));
                SaveOutcome::Failed(e)
            }
        }
    }

    fn persist(&self, date: NaiveDate, entry: &DiaryEntry) -> Result<(), StoreError> {
        let json = serde_json::to_string(entry)?;
        self.store.set_string(&snapshot_key(date), &json)
    }

    /// Loads the saved snapshot for `date` if the ledger holds nothing for it.
    ///
    /// Returns whether an entry was loaded.
    pub fn load_saved(&mut self, date: NaiveDate) -> bool {
        if self.entries.contains_key(&date) {
            return false;
        }

        match load_snapshot(&self.store, date) {
            Some(entry) => {
                self.entries.insert(date, entry);
                true
            }
            None => false,
        }
    }

    /// Installs an entry kept elsewhere, goal included.
    pub fn restore(&mut self, date: NaiveDate, entry: DiaryEntry) {
        self.entries.insert(date, entry);
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.entries.contains_key(&date)
    }

    /// Dates held by the ledger, oldest first.
    pub fn dates(&self) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = self.entries.keys().copied().collect();
        dates.sort();
        dates
    }
}
