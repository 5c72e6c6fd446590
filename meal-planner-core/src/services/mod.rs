//! Stateful services over the persisted records.
//!
//! Every service loads its record on each call and writes it back whole
//! after a mutation. A record that cannot be read is logged and treated
//! as empty; a record that cannot be written is logged and reported as
//! [`PlannerError::Storage`].

mod favorites;
mod meal_plan;
mod preferences;
mod recent_searches;
mod shopping_list;

pub use favorites::FavoritesStore;
pub use meal_plan::MealPlanModel;
pub use preferences::PreferencesStore;
pub use recent_searches::{RecentSearches, MAX_RECENT_SEARCHES};
pub use shopping_list::{CommitSummary, ShoppingListStore};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::PlannerError;
use crate::storage::{read_record, write_record, KeyValueStore, StorageKey};

/// Read a record, falling back to its default when absent or unreadable.
fn load_or_default<T>(store: &dyn KeyValueStore, key: StorageKey) -> T
where
    T: DeserializeOwned + Default,
{
    match read_record(store, key) {
        Ok(Some(record)) => record,
        Ok(None) => T::default(),
        Err(e) => {
            tracing::warn!("Failed to read {}: {}", key.as_str(), e);
            T::default()
        }
    }
}

fn save<T>(store: &dyn KeyValueStore, key: StorageKey, record: &T) -> Result<(), PlannerError>
where
    T: Serialize + ?Sized,
{
    write_record(store, key, record).map_err(|e| {
        tracing::warn!("Failed to write {}: {}", key.as_str(), e);
        PlannerError::Storage(e)
    })?;
    tracing::debug!("Saved {}", key.as_str());
    Ok(())
}
