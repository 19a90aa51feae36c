//! Unsaved diary days carried between invocations.
//!
//! A draft is the in-progress entry for a day that has not been saved yet.
//! It lives next to the saved snapshots under its own key so a saved day is
//! never confused with an editable one.

use chrono::NaiveDate;
use fit_diary_core::{DiaryEntry, DiaryLedger, PersistentStore, StoreError};

pub fn draft_key(date: NaiveDate) -> String {
    format!("draft_{}", date.format("%Y-%m-%d"))
}

/// Missing or unreadable drafts read as `None`.
pub fn load_draft<S: PersistentStore + ?Sized>(store: &S, date: NaiveDate) -> Option<DiaryEntry> {
    let key = draft_key(date);
    let raw = match store.get_string(&key) {
        Ok(raw) => raw?,
        Err(e) => {
            tracing::warn!("Could not read draft {}: {}", key, e);
            return None;
        }
    };

    match serde_json::from_str::<DiaryEntry>(&raw) {
        Ok(entry) => Some(entry),
        Err(e) => {
            tracing::warn!("Ignoring unreadable draft {}: {}", key, e);
            None
        }
    }
}

pub fn store_draft<S: PersistentStore + ?Sized>(
    store: &S,
    date: NaiveDate,
    entry: &DiaryEntry,
) -> Result<(), StoreError> {
    let json = serde_json::to_string(entry)?;
    store.set_string(&draft_key(date), &json)
}

pub fn clear_draft<S: PersistentStore + ?Sized>(store: &S, date: NaiveDate) -> Result<(), StoreError> {
    store.remove_key(&draft_key(date))
}

/// Brings `date` into the ledger: the saved snapshot wins over a draft.
///
/// Returns `true` when either was found.
pub fn load_day<S: PersistentStore>(ledger: &mut DiaryLedger<S>, date: NaiveDate) -> bool {
    if ledger.load_saved(date) {
        return true;
    }

    match load_draft(ledger.store(), date) {
        Some(mut draft) => {
            draft.is_read_only = false;
            ledger.restore(date, draft);
            true
        }
        None => false,
    }
}
