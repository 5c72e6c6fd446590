use std::sync::Arc;

use crate::error::PlannerResult;
use crate::storage::{KeyValueStore, StorageKey};

use super::{load_or_default, save};

/// Number of searches remembered.
pub const MAX_RECENT_SEARCHES: usize = 10;

/// Most-recent-first log of recipe search queries.
#[derive(Clone)]
pub struct RecentSearches {
    store: Arc<dyn KeyValueStore>,
}

impl RecentSearches {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn list(&self) -> Vec<String> {
        load_or_default(self.store.as_ref(), StorageKey::RecentSearches)
    }

    /// Put `query` at the front of the log, exactly as given.
    ///
    /// An identical earlier entry is moved rather than repeated. Blank
    /// queries are ignored.
    pub fn record(&self, query: &str) -> PlannerResult<()> {
        if query.trim().is_empty() {
            return Ok(());
        }

        let mut searches = self.list();
        searches.retain(|s| s != query);
        searches.insert(0, query.to_string());
        searches.truncate(MAX_RECENT_SEARCHES);

        save(self.store.as_ref(), StorageKey::RecentSearches, &searches)
    }

    pub fn clear(&self) -> PlannerResult<()> {
        self.store
            .remove(StorageKey::RecentSearches.as_str())
            .map_err(Into::into)
    }
}
