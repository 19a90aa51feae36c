//! Fit Diary Core Library
//!
//! Diary ledger, JSON blob store and catalogs shared by Fit Diary front ends.

pub mod catalog;
pub mod ledger;
pub mod models;
pub mod notify;
pub mod settings;
pub mod store;

pub use catalog::{default_plans, preplanned_habits, HabitCatalog, PlanCatalog};
pub use ledger::{
    load_snapshot, snapshot_key, DaySummary, DiaryLedger, LedgerConfig, SaveOutcome,
    UpdateOutcome, DEFAULT_GOAL,
};
pub use models::{
    DiaryEntry, DiaryTarget, FitnessPlan, Food, HabitContent, HabitData, MealSlot, NutritionMeal,
    NutritionPlan, TargetParseError,
};
pub use notify::{LogNotifier, Notice, NoticeLevel, Notifier, RecordingNotifier};
pub use settings::{Profile, UserSettings};
pub use store::{
    load_collection, overwrite_collection, CollectionKind, CollectionSnapshot, JsonFileStore,
    MemoryStore, PersistentStore, StoreError,
};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
