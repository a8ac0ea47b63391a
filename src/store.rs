//! UI State Store
//!
//! Leptos reactive_stores mirror of the toast list and item store state.
//! Filled by subscriptions to the core handles, read by components.

use leptos::prelude::*;
use reactive_stores::Store;
use storefront_core::{Item, ItemStore, ItemStoreState, StoreMode, SubscriptionId, Toast, ToastManager};

/// Mirrored state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Active toasts, oldest first
    pub toasts: Vec<Toast>,
    /// Local item list
    pub items: Vec<Item>,
    pub loading: bool,
    /// Last fallback message from the item store
    pub error: Option<String>,
    pub mode: StoreMode,
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

/// Get the UI store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

// ========================
// Bindings
// ========================

/// Keep `toasts` in step with the toast manager
pub fn bind_toasts(manager: &ToastManager, store: UiStore) -> SubscriptionId {
    manager.subscribe(move |toasts| {
        *store.toasts().write() = toasts.clone();
    })
}

/// Keep items, loading, error and mode in step with the item store
pub fn bind_items(item_store: &ItemStore, store: UiStore) -> SubscriptionId {
    let sync = move |state: &ItemStoreState| {
        if *store.items().read_untracked() != state.items {
            *store.items().write() = state.items.clone();
        }
        if store.loading().get_untracked() != state.loading {
            *store.loading().write() = state.loading;
        }
        if *store.error().read_untracked() != state.error {
            *store.error().write() = state.error.clone();
        }
        if store.mode().get_untracked() != state.mode {
            *store.mode().write() = state.mode;
        }
    };
    sync(&item_store.snapshot());
    item_store.subscribe(sync)
}
