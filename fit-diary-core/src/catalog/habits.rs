use crate::models::HabitData;
use crate::store::{load_collection, CollectionKind, CollectionSnapshot, PersistentStore, StoreError};

use super::presets::preplanned_habits;

/// Habits the user has picked.
pub struct HabitCatalog<'a, S: PersistentStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: PersistentStore + ?Sized> HabitCatalog<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Habits available to pick from.
    pub fn presets(&self) -> Vec<HabitData> {
        preplanned_habits()
    }

    pub fn preset(&self, id: &str) -> Option<HabitData> {
        self.presets().into_iter().find(|h| h.id == id)
    }

    pub fn list(&self) -> Vec<HabitData> {
        load_collection(self.store, CollectionKind::Habits)
    }

    /// Appends `habit`. Returns `false` without writing if its id is already selected.
    pub fn add(&self, habit: HabitData) -> Result<bool, StoreError> {
        let mut snapshot = CollectionSnapshot::<HabitData>::load(self.store, CollectionKind::Habits);
        if snapshot.items().iter().any(|h| h.id == habit.id) {
            return Ok(false);
        }

        snapshot.transform(|habits| habits.push(habit));
        snapshot.commit(self.store)?;
        Ok(true)
    }

    /// Returns `false` without writing when no selected habit has `id`.
    pub fn remove(&self, id: &str) -> Result<bool, StoreError> {
        let mut snapshot = CollectionSnapshot::<HabitData>::load(self.store, CollectionKind::Habits);
        if !snapshot.items().iter().any(|h| h.id == id) {
            return Ok(false);
        }

        snapshot.transform(|habits| habits.retain(|h| h.id != id));
        snapshot.commit(self.store)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_preset_lookup() {
        let store = MemoryStore::new();
        let catalog = HabitCatalog::new(&store);
        assert_eq!(catalog.preset("3").unwrap().title, "Eat more fruit");
        assert!(catalog.preset("42").is_none());
    }

    #[test]
    fn test_add_and_list() {
        let store = MemoryStore::new();
        let catalog = HabitCatalog::new(&store);

        let water = catalog.preset("2").unwrap();
        assert!(catalog.add(water.clone()).unwrap());
        assert_eq!(catalog.list(), vec![water]);
    }

    #[test]
    fn test_add_duplicate_is_skipped() {
        let store = MemoryStore::new();
        let catalog = HabitCatalog::new(&store);

        let fruit = catalog.preset("3").unwrap();
        assert!(catalog.add(fruit.clone()).unwrap());
        assert!(!catalog.add(fruit).unwrap());
        assert_eq!(catalog.list().len(), 1);
    }

    #[test]
    fn test_remove_habit() {
        let store = MemoryStore::new();
        let catalog = HabitCatalog::new(&store);
        catalog.add(catalog.preset("1").unwrap()).unwrap();
        catalog.add(catalog.preset("5").unwrap()).unwrap();

        assert!(catalog.remove("1").unwrap());
        assert!(!catalog.remove("1").unwrap());

        let ids: Vec<String> = catalog.list().into_iter().map(|h| h.id).collect();
        assert_eq!(ids, vec!["5"]);
    }

    #[test]
    fn test_corrupted_habits_read_as_empty() {
        let store = MemoryStore::new();
        store.set_string("userHabits", "[{\"id\": 1").unwrap();
        let catalog = HabitCatalog::new(&store);

        assert!(catalog.list().is_empty());
        assert!(catalog.add(catalog.preset("4").unwrap()).unwrap());
        assert_eq!(catalog.list().len(), 1);
    }
}
