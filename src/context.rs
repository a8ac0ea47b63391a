//! Application Context
//!
//! The toast manager and item store are built once in `App` and handed to
//! components through the Leptos Context API. Both are single-threaded
//! handles, so they live in local stored values.

use leptos::prelude::*;
use storefront_core::{ItemStore, ToastManager};

/// Core handles provided via context
#[derive(Clone, Copy)]
pub struct AppServices {
    toasts: StoredValue<ToastManager, LocalStorage>,
    items: StoredValue<ItemStore, LocalStorage>,
}

impl AppServices {
    pub fn new(toasts: ToastManager, items: ItemStore) -> Self {
        Self {
            toasts: StoredValue::new_local(toasts),
            items: StoredValue::new_local(items),
        }
    }

    pub fn toasts(&self) -> ToastManager {
        self.toasts.get_value()
    }

    pub fn items(&self) -> ItemStore {
        self.items.get_value()
    }

    /// Toast the outcome of the item operation that just finished
    ///
    /// A fallback leaves its message in the store error.
    pub fn report(&self, success: &str) {
        match self.items().error() {
            Some(message) => self.toasts().error("Saved locally", Some(message)),
            None => self.toasts().success(success, None),
        };
    }
}

pub fn use_services() -> AppServices {
    use_context::<AppServices>().expect("AppServices should be provided")
}
