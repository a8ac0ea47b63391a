//! Item Store State
//!
//! Plain snapshot of everything the store exposes. Listeners receive a
//! clone after every change.

use serde::{Deserialize, Serialize};

use crate::domain::{find_index, Item, ItemPatch, SEED_NEXT_ID};

/// Which side is authoritative for the item list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StoreMode {
    /// The remote service; the local list is a cache
    #[default]
    Remote,
    /// The in-memory list; mutations skip the remote
    LocalFallback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemStoreState {
    pub items: Vec<Item>,
    /// True while an operation is in progress
    pub loading: bool,
    /// Message left by the last operation that fell back
    pub error: Option<String>,
    pub mode: StoreMode,
    /// Always greater than every ID in `items`
    pub next_id: u32,
}

impl Default for ItemStoreState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            error: None,
            mode: StoreMode::default(),
            next_id: SEED_NEXT_ID,
        }
    }
}

impl ItemStoreState {
    pub fn is_using_fallback(&self) -> bool {
        self.mode == StoreMode::LocalFallback
    }

    pub fn get(&self, id: u32) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn by_category(&self, category: &str) -> Vec<Item> {
        self.items
            .iter()
            .filter(|item| item.category == category)
            .cloned()
            .collect()
    }

    /// Distinct categories, first seen first
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for item in &self.items {
            if !categories.contains(&item.category) {
                categories.push(item.category.clone());
            }
        }
        categories
    }

    /// Hand out the next local ID
    ///
    /// The counter saturates at `u32::MAX`. Remote items with that ID are
    /// refused, so only one local item can ever receive it.
    pub(crate) fn take_next_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = id.saturating_add(1);
        if self.next_id == id {
            log::warn!("item id counter exhausted at {}", id);
        }
        id
    }

    /// Keep the counter ahead of an ID issued elsewhere
    pub(crate) fn observe_id(&mut self, id: u32) {
        if id >= self.next_id {
            self.next_id = id.saturating_add(1);
        }
    }

    pub(crate) fn merge(&mut self, id: u32, patch: &ItemPatch) -> Option<Item> {
        let index = find_index(self.items.as_slice(), &id)?;
        let item = &mut self.items[index];
        item.apply(patch);
        Some(item.clone())
    }

    pub(crate) fn replace(&mut self, id: u32, item: Item) -> bool {
        match find_index(self.items.as_slice(), &id) {
            Some(index) => {
                self.items[index] = item;
                true
            }
            None => false,
        }
    }

    pub(crate) fn remove(&mut self, id: u32) -> Option<Item> {
        find_index(self.items.as_slice(), &id).map(|index| self.items.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_saturates_instead_of_wrapping() {
        let mut state = ItemStoreState::default();
        state.observe_id(u32::MAX - 1);
        assert_eq!(state.next_id, u32::MAX);

        assert_eq!(state.take_next_id(), u32::MAX);
        assert_eq!(state.next_id, u32::MAX);

        state.observe_id(u32::MAX);
        assert_eq!(state.next_id, u32::MAX);
    }

    #[test]
    fn test_observe_lower_id_keeps_counter() {
        let mut state = ItemStoreState::default();
        state.next_id = 12;
        state.observe_id(1);
        assert_eq!(state.next_id, 12);
    }
}
