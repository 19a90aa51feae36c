use crate::models::FitnessPlan;
use crate::store::{
    load_collection, overwrite_collection, CollectionKind, CollectionSnapshot, PersistentStore,
    StoreError,
};

use super::presets::default_plans;

/// The user's copy of the fitness plan catalog.
pub struct PlanCatalog<'a, S: PersistentStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: PersistentStore + ?Sized> PlanCatalog<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Writes the built-in plans when the user has none yet.
    ///
    /// Returns whether anything was written. Existing opt-ins are kept.
    pub fn seed_defaults(&self) -> Result<bool, StoreError> {
        if !self.list().is_empty() {
            return Ok(false);
        }

        let plans = default_plans();
        self.save_all(&plans)?;
        tracing::info!("Seeded {} plan(s)", plans.len());
        Ok(true)
    }

    pub fn list(&self) -> Vec<FitnessPlan> {
        load_collection(self.store, CollectionKind::Plans)
    }

    pub fn get(&self, id: u32) -> Option<FitnessPlan> {
        self.list().into_iter().find(|p| p.id == id)
    }

    pub fn opted_in(&self) -> Vec<FitnessPlan> {
        self.list().into_iter().filter(|p| p.opt_in).collect()
    }

    /// Replaces every stored plan.
    pub fn save_all(&self, plans: &[FitnessPlan]) -> Result<(), StoreError> {
        overwrite_collection(self.store, CollectionKind::Plans, plans)
    }

    /// Returns `false` without writing when no plan has `id`.
    pub fn set_opt_in(&self, id: u32, opt_in: bool) -> Result<bool, StoreError> {
        let mut snapshot = CollectionSnapshot::<FitnessPlan>::load(self.store, CollectionKind::Plans);
        if !snapshot.items().iter().any(|p| p.id == id) {
            return Ok(false);
        }

        snapshot.transform(|plans| {
            for plan in plans.iter_mut().filter(|p| p.id == id) {
                plan.opt_in = opt_in;
            }
        });
        snapshot.commit(self.store)?;
        Ok(true)
    }

    /// Returns `false` without writing when no plan has `id`.
    pub fn delete(&self, id: u32) -> Result<bool, StoreError> {
        let mut snapshot = CollectionSnapshot::<FitnessPlan>::load(self.store, CollectionKind::Plans);
        if !snapshot.items().iter().any(|p| p.id == id) {
            return Ok(false);
        }

        snapshot.transform(|plans| plans.retain(|p| p.id != id));
        snapshot.commit(self.store)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_empty_catalog() {
        let store = MemoryStore::new();
        let catalog = PlanCatalog::new(&store);
        assert!(catalog.list().is_empty());
        assert!(catalog.get(1).is_none());
    }

    #[test]
    fn test_seed_defaults_once() {
        let store = MemoryStore::new();
        let catalog = PlanCatalog::new(&store);

        assert!(catalog.seed_defaults().unwrap());
        assert_eq!(catalog.list().len(), 10);

        catalog.set_opt_in(2, true).unwrap();
        assert!(!catalog.seed_defaults().unwrap());
        assert!(catalog.get(2).unwrap().opt_in);
    }

    #[test]
    fn test_set_opt_in() {
        let store = MemoryStore::new();
        let catalog = PlanCatalog::new(&store);
        catalog
            .save_all(&[
                FitnessPlan::new(1, "Strength"),
                FitnessPlan::new(2, "Cardio"),
            ])
            .unwrap();

        assert!(catalog.set_opt_in(2, true).unwrap());
        let opted: Vec<u32> = catalog.opted_in().iter().map(|p| p.id).collect();
        assert_eq!(opted, vec![2]);

        assert!(catalog.set_opt_in(2, false).unwrap());
        assert!(catalog.opted_in().is_empty());
    }

    #[test]
    fn test_set_opt_in_unknown_plan() {
        let store = MemoryStore::new();
        let catalog = PlanCatalog::new(&store);
        catalog.save_all(&[FitnessPlan::new(1, "Strength")]).unwrap();

        store.fail_writes(true);
        // No write is attempted, so the failing store is not hit.
        assert!(!catalog.set_opt_in(99, true).unwrap());
    }

    #[test]
    fn test_delete_plan() {
        let store = MemoryStore::new();
        let catalog = PlanCatalog::new(&store);
        catalog
            .save_all(&[
                FitnessPlan::new(1, "Strength"),
                FitnessPlan::new(2, "Cardio"),
            ])
            .unwrap();

        assert!(catalog.delete(1).unwrap());
        assert!(!catalog.delete(1).unwrap());

        let remaining: Vec<String> = catalog.list().into_iter().map(|p| p.title).collect();
        assert_eq!(remaining, vec!["Cardio"]);
    }

    #[test]
    fn test_write_failure_propagates() {
        let store = MemoryStore::new();
        let catalog = PlanCatalog::new(&store);
        catalog.save_all(&[FitnessPlan::new(1, "Strength")]).unwrap();

        store.fail_writes(true);
        assert!(catalog.set_opt_in(1, true).is_err());
        assert!(!catalog.get(1).unwrap().opt_in);
    }
}
