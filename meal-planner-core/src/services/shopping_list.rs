//! The user's editable shopping list.

use std::sync::Arc;

use uuid::Uuid;

use crate::error::{PlannerError, PlannerResult};
use crate::models::{AggregatedIngredient, Category, ShoppingItem};
use crate::storage::{KeyValueStore, StorageKey};

use super::{load_or_default, save};

/// Outcome of committing a generated list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommitSummary {
    pub added: usize,
    /// Names already on the list
    pub skipped: usize,
}

/// Service that owns the persisted shopping list.
///
/// Item names are unique ignoring case.
#[derive(Clone)]
pub struct ShoppingListStore {
    store: Arc<dyn KeyValueStore>,
}

impl ShoppingListStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Items, oldest first.
    pub fn list(&self) -> Vec<ShoppingItem> {
        load_or_default(self.store.as_ref(), StorageKey::ShoppingList)
    }

    /// Add an item by hand.
    ///
    /// Fails with [`PlannerError::DuplicateItem`] if an item with the same
    /// name (ignoring case) is already listed.
    pub fn add(&self, name: &str, category: Category) -> PlannerResult<ShoppingItem> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PlannerError::EmptyName);
        }

        let mut items = self.list();
        let item = ShoppingItem::new(name, category);
        if !insert_unique(&mut items, item.clone()) {
            return Err(PlannerError::DuplicateItem(name.to_string()));
        }
        self.save(&items)?;

        tracing::debug!("Added '{}' to shopping list", name);
        Ok(item)
    }

    /// Flip the checked flag of an item.
    ///
    /// Returns the new flag, or `None` if no item has that id.
    pub fn toggle(&self, id: Uuid) -> PlannerResult<Option<bool>> {
        let mut items = self.list();
        let Some(item) = items.iter_mut().find(|i| i.id == id) else {
            return Ok(None);
        };
        item.checked = !item.checked;
        let checked = item.checked;

        self.save(&items)?;
        Ok(Some(checked))
    }

    /// Delete an item. Returns false if no item has that id.
    pub fn remove(&self, id: Uuid) -> PlannerResult<bool> {
        let mut items = self.list();
        let len_before = items.len();
        items.retain(|i| i.id != id);
        if items.len() == len_before {
            return Ok(false);
        }
        self.save(&items)?;
        Ok(true)
    }

    pub fn clear(&self) -> PlannerResult<()> {
        self.save(&[])
    }

    /// Drop every checked item. Returns how many were removed.
    pub fn clear_checked(&self) -> PlannerResult<usize> {
        let mut items = self.list();
        let len_before = items.len();
        items.retain(|i| !i.checked);

        let removed = len_before - items.len();
        if removed > 0 {
            self.save(&items)?;
        }
        Ok(removed)
    }

    /// Append a generated list, one item per ingredient.
    ///
    /// Ingredients whose name is already listed (ignoring case) are
    /// skipped, the same as a manual [`add`](Self::add). Existing items are
    /// kept; callers that want a fresh list call [`clear`](Self::clear)
    /// first.
    pub fn commit_generated(
        &self,
        ingredients: &[AggregatedIngredient],
    ) -> PlannerResult<CommitSummary> {
        let mut items = self.list();
        let mut summary = CommitSummary::default();

        for ingredient in ingredients {
            if ingredient.name.trim().is_empty() {
                summary.skipped += 1;
                continue;
            }
            if insert_unique(&mut items, ShoppingItem::from_aggregated(ingredient)) {
                summary.added += 1;
            } else {
                summary.skipped += 1;
            }
        }

        if summary.added > 0 {
            self.save(&items)?;
        }

        tracing::debug!(
            "Committed generated list: {} added, {} skipped",
            summary.added,
            summary.skipped
        );
        Ok(summary)
    }

    fn save(&self, items: &[ShoppingItem]) -> PlannerResult<()> {
        save(self.store.as_ref(), StorageKey::ShoppingList, items)
    }
}

/// Push `item` unless an item with the same name is present.
fn insert_unique(items: &mut Vec<ShoppingItem>, item: ShoppingItem) -> bool {
    if items.iter().any(|i| i.has_name(&item.name)) {
        return false;
    }
    items.push(item);
    true
}
