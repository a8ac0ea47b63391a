//! Status Bar Component
//!
//! Loading indicator and the local-fallback banner with a retry button.

use leptos::prelude::*;
use leptos::task::spawn_local;
use storefront_core::StoreMode;

use crate::context::use_services;
use crate::store::{use_ui_store, UiStateStoreFields};

#[component]
pub fn StatusBar() -> impl IntoView {
    let ui = use_ui_store();
    let services = use_services();

    let retry = move |_| {
        let items = services.items();
        spawn_local(async move {
            items.fetch_all().await;
            if !items.is_using_fallback() {
                services.toasts().success("Connected", Some("Showing live data".to_string()));
            }
        });
    };

    view! {
        <div class="status-bar">
            <Show when=move || ui.loading().get()>
                <span class="loading-indicator">"Loading..."</span>
            </Show>
            <Show when=move || ui.mode().get() == StoreMode::LocalFallback>
                <div class="fallback-banner">
                    <span class="fallback-title">"Working offline: changes stay in this session"</span>
                    {move || ui.error().get().map(|message| view! {
                        <span class="fallback-error">{message}</span>
                    })}
                    <button
                        class="retry-btn"
                        disabled=move || ui.loading().get()
                        on:click=retry
                    >
                        "Retry"
                    </button>
                </div>
            </Show>
        </div>
    }
}
