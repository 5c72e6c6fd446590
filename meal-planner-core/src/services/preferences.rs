use std::sync::Arc;

use crate::error::PlannerResult;
use crate::models::Preferences;
use crate::storage::{KeyValueStore, StorageKey};

use super::{load_or_default, save};

#[derive(Clone)]
pub struct PreferencesStore {
    store: Arc<dyn KeyValueStore>,
}

impl PreferencesStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn get(&self) -> Preferences {
        load_or_default(self.store.as_ref(), StorageKey::Preferences)
    }

    pub fn set(&self, preferences: &Preferences) -> PlannerResult<()> {
        save(self.store.as_ref(), StorageKey::Preferences, preferences)
    }

    /// Forget saved preferences; [`get`](Self::get) returns defaults again.
    pub fn reset(&self) -> PlannerResult<()> {
        self.store
            .remove(StorageKey::Preferences.as_str())
            .map_err(Into::into)
    }
}
