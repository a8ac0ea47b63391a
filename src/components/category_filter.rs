//! Category Filter Component
//!
//! Row of buttons narrowing the item list to one category.

use leptos::prelude::*;

use crate::context::use_services;
use crate::store::{use_ui_store, UiStateStoreFields};

#[component]
pub fn CategoryFilter(
    selected: ReadSignal<Option<String>>,
    set_selected: WriteSignal<Option<String>>,
) -> impl IntoView {
    let ui = use_ui_store();
    let services = use_services();

    let categories = move || {
        ui.items().track();
        services.items().categories()
    };

    view! {
        <div class="category-filter">
            <button
                class=move || if selected.get().is_none() { "category-btn active" } else { "category-btn" }
                on:click=move |_| set_selected.set(None)
            >
                "All"
            </button>
            <For
                each=categories
                key=|category| category.clone()
                children=move |category| {
                    let label = category.clone();
                    let for_class = category.clone();
                    let is_selected = move || selected.get().as_deref() == Some(for_class.as_str());
                    view! {
                        <button
                            class=move || if is_selected() { "category-btn active" } else { "category-btn" }
                            on:click=move |_| set_selected.set(Some(category.clone()))
                        >
                            {label}
                        </button>
                    }
                }
            />
        </div>
    }
}
