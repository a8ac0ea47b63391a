//! Storefront Frontend App
//!
//! Builds the toast manager and item store, mirrors them into the UI store
//! and lays out the page.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;
use storefront_core::{HttpItemRemote, ItemStore, Scheduler, StorefrontConfig, ToastManager};

use crate::components::{CategoryFilter, ItemList, NewItemForm, StatusBar, Toaster};
use crate::context::AppServices;
use crate::scheduler::TimeoutScheduler;
use crate::store::{bind_items, bind_toasts, UiState, UiStateStoreFields};

/// Configuration baked in at build time via `STOREFRONT_CONFIG` (JSON)
fn load_config() -> StorefrontConfig {
    match option_env!("STOREFRONT_CONFIG") {
        Some(json) => StorefrontConfig::from_json(json).unwrap_or_else(|e| {
            log::error!("{}; using defaults", e);
            StorefrontConfig::default()
        }),
        None => StorefrontConfig::default(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    log::info!("item service at {}", config.api_url);

    let scheduler: Rc<dyn Scheduler> = Rc::new(TimeoutScheduler::new());
    let toasts = ToastManager::with_default_duration(scheduler, config.toast_duration_ms);
    let remote = Rc::new(HttpItemRemote::new(config.api_url.clone()));
    let items = ItemStore::with_fallback_lookup(remote, config.fallback_lookup);

    let ui = Store::new(UiState::default());
    bind_toasts(&toasts, ui);
    bind_items(&items, ui);

    provide_context(ui);
    provide_context(AppServices::new(toasts, items.clone()));

    let (selected_category, set_selected_category) = signal::<Option<String>>(None);

    // First load
    spawn_local(async move {
        items.initialize().await;
    });

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"Storefront"</h1>

                <StatusBar />

                <NewItemForm />

                <CategoryFilter
                    selected=selected_category
                    set_selected=set_selected_category
                />

                <ItemList selected_category=selected_category />

                <p class="item-count">{move || format!("{} items", ui.items().read().len())}</p>
            </main>

            <Toaster />
        </div>
    }
}
