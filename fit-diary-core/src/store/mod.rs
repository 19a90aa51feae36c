//! Key-based JSON blob storage.
//!
//! Every value is a string stored under a string key. Scalar settings are
//! stored as plain strings, diary snapshots and collections as JSON text.

mod collection;
mod error;
mod file_store;
mod memory;

pub use collection::{load_collection, overwrite_collection, CollectionKind, CollectionSnapshot};
pub use error::StoreError;
pub use file_store::JsonFileStore;
pub use memory::MemoryStore;

/// A key/value blob store.
///
/// A missing key is a normal `Ok(None)`, not an error. A successful
/// `set_string` is visible to every later `get_string`.
pub trait PersistentStore {
    fn get_string(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn set_string(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Removing a key that does not exist succeeds.
    fn remove_key(&self, key: &str) -> Result<(), StoreError>;
}

impl<S: PersistentStore + ?Sized> PersistentStore for &S {
    fn get_string(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get_string(key)
    }

    fn set_string(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set_string(key, value)
    }

    fn remove_key(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove_key(key)
    }
}

impl<S: PersistentStore + ?Sized> PersistentStore for Box<S> {
    fn get_string(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get_string(key)
    }

    fn set_string(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set_string(key, value)
    }

    fn remove_key(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove_key(key)
    }
}

/// Keys double as file names, so they are limited to `[A-Za-z0-9_.-]`
/// and may not start with a dot.
pub(crate) fn validate_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));

    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_key_accepts_known_keys() {
        for key in [
            "goal",
            "onboardingComplete",
            "diary_2024-05-01",
            "userPlans",
            "v1.backup",
        ] {
            assert!(validate_key(key).is_ok(), "{} should be valid", key);
        }
    }

    #[test]
    fn test_validate_key_rejects_paths() {
        for key in ["", "../goal", "a/b", ".hidden", "with space", "c:\\x"] {
            assert!(
                matches!(validate_key(key), Err(StoreError::InvalidKey(_))),
                "{:?} should be rejected",
                key
            );
        }
    }

    #[test]
    fn test_reference_delegates() {
        let store = MemoryStore::new();
        let by_ref: &dyn PersistentStore = &store;
        by_ref.set_string("name", "Sam").unwrap();
        assert_eq!(store.get_string("name").unwrap().as_deref(), Some("Sam"));
    }
}
