//! Key-value persistence for the planner's records.
//!
//! Each namespace ([`StorageKey`]) holds one JSON record that is read and
//! written whole. Services receive the backend as an
//! `Arc<dyn KeyValueStore>`, so tests inject a [`MemoryStore`] and the CLI
//! a [`FileStore`].

mod error;
mod file;
mod memory;

pub use error::StorageError;
pub use file::FileStore;
pub use memory::MemoryStore;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Namespaces the planner persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageKey {
    Favorites,
    MealPlan,
    ShoppingList,
    Preferences,
    RecentSearches,
}

impl StorageKey {
    /// Returns the key the record is stored under.
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKey::Favorites => "favorites",
            StorageKey::MealPlan => "mealPlan",
            StorageKey::ShoppingList => "shoppingList",
            StorageKey::Preferences => "preferences",
            StorageKey::RecentSearches => "recentSearches",
        }
    }
}

/// Durable key-value storage holding JSON values.
pub trait KeyValueStore: Send + Sync {
    /// Returns `Ok(None)` when nothing is stored under `key`.
    fn get(&self, key: &str) -> Result<Option<Value>, StorageError>;

    fn set(&self, key: &str, value: &Value) -> Result<(), StorageError>;

    /// Removing a missing key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Load and decode the record stored under `key`.
pub fn read_record<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: StorageKey,
) -> Result<Option<T>, StorageError> {
    match store.get(key.as_str())? {
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|e| StorageError::Json(key.as_str().to_string(), e)),
        None => Ok(None),
    }
}

/// Encode and store `record` under `key`, replacing the previous record.
pub fn write_record<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: StorageKey,
    record: &T,
) -> Result<(), StorageError> {
    let value = serde_json::to_value(record)
        .map_err(|e| StorageError::Json(key.as_str().to_string(), e))?;
    store.set(key.as_str(), &value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_key_names() {
        assert_eq!(StorageKey::Favorites.as_str(), "favorites");
        assert_eq!(StorageKey::MealPlan.as_str(), "mealPlan");
        assert_eq!(StorageKey::ShoppingList.as_str(), "shoppingList");
        assert_eq!(StorageKey::Preferences.as_str(), "preferences");
        assert_eq!(StorageKey::RecentSearches.as_str(), "recentSearches");
    }

    #[test]
    fn test_read_missing_record() {
        let store = MemoryStore::new();
        let record: Option<Vec<String>> = read_record(&store, StorageKey::RecentSearches).unwrap();
        assert!(record.is_none());
    }

    #[test]
    fn test_write_then_read_record() {
        let store = MemoryStore::new();
        let searches = vec!["pasta".to_string(), "soup".to_string()];
        write_record(&store, StorageKey::RecentSearches, &searches).unwrap();

        let record: Option<Vec<String>> = read_record(&store, StorageKey::RecentSearches).unwrap();
        assert_eq!(record, Some(searches));
    }

    #[test]
    fn test_read_record_wrong_shape() {
        let store = MemoryStore::new();
        store
            .set("recentSearches", &serde_json::json!({"not": "a list"}))
            .unwrap();

        let result: Result<Option<Vec<String>>, _> =
            read_record(&store, StorageKey::RecentSearches);
        let err = result.unwrap_err();
        assert!(err.to_string().contains("recentSearches"));
    }
}
