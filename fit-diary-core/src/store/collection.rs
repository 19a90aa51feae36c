//! Bulk collections persisted and replaced as a whole.

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{PersistentStore, StoreError};

/// Array-valued resources kept in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionKind {
    Plans,
    Habits,
}

impl CollectionKind {
    /// Returns the store key for this collection.
    pub fn key(&self) -> &'static str {
        match self {
            CollectionKind::Plans => "userPlans",
            CollectionKind::Habits => "userHabits",
        }
    }
}

/// Loads every item of a collection.
///
/// Never fails: a missing, unreadable or unparsable resource is an empty list.
pub fn load_collection<T, S>(store: &S, kind: CollectionKind) -> Vec<T>
where
    T: DeserializeOwned,
    S: PersistentStore + ?Sized,
{
    let raw = read_raw(store, kind);
    parse_items(raw.as_deref(), kind)
}

/// Replaces the whole collection with `items`.
pub fn overwrite_collection<T, S>(
    store: &S,
    kind: CollectionKind,
    items: &[T],
) -> Result<(), StoreError>
where
    T: Serialize,
    S: PersistentStore + ?Sized,
{
    let json = serde_json::to_string(items)?;
    store.set_string(kind.key(), &json)
}

fn read_raw<S: PersistentStore + ?Sized>(store: &S, kind: CollectionKind) -> Option<String> {
    match store.get_string(kind.key()) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", kind.key(), e);
            None
        }
    }
}

fn parse_items<T: DeserializeOwned>(raw: Option<&str>, kind: CollectionKind) -> Vec<T> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    // `null` is treated like a missing collection.
    match serde_json::from_str::<Option<Vec<T>>>(raw) {
        Ok(items) => items.unwrap_or_default(),
        Err(e) => {
            tracing::warn!("Ignoring unparsable {}: {}", kind.key(), e);
            Vec::new()
        }
    }
}

/// A loaded copy of a collection that is edited in memory and written back
/// as one unit.
///
/// The snapshot keeps the raw text it was loaded from. Two snapshots of the
/// same collection committed one after the other lose the first writer's
/// changes; `is_stale` reports that situation before it happens.
#[derive(Debug, Clone)]
pub struct CollectionSnapshot<T> {
    kind: CollectionKind,
    base: Option<String>,
    items: Vec<T>,
}

impl<T> CollectionSnapshot<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn load<S: PersistentStore + ?Sized>(store: &S, kind: CollectionKind) -> Self {
        let base = read_raw(store, kind);
        let items = parse_items(base.as_deref(), kind);
        Self { kind, base, items }
    }

    pub fn kind(&self) -> CollectionKind {
        self.kind
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Applies an in-memory edit. Nothing is written until `commit`.
    pub fn transform<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Vec<T>),
    {
        f(&mut self.items);
    }

    /// True when the stored collection no longer matches what this snapshot
    /// was loaded from (or cannot be read to check).
    pub fn is_stale<S: PersistentStore + ?Sized>(&self, store: &S) -> bool {
        match store.get_string(self.kind.key()) {
            Ok(current) => current != self.base,
            Err(_) => true,
        }
    }

    /// Replaces the stored collection with this snapshot's items.
    ///
    /// Last writer wins: a stale base is overwritten after logging a warning.
    pub fn commit<S: PersistentStore + ?Sized>(&mut self, store: &S) -> Result<(), StoreError> {
        if self.is_stale(store) {
            tracing::warn!(
                "{} changed since it was loaded; overwriting with {} item(s)",
                self.kind.key(),
                self.items.len()
            );
        }

        let json = serde_json::to_string(&self.items)?;
        store.set_string(self.kind.key(), &json)?;
        self.base = Some(json);
        Ok(())
    }
}
