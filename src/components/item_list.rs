//! Item List Component
//!
//! Items of the selected category (or all of them).

use leptos::prelude::*;

use super::ItemRow;
use crate::context::use_services;
use crate::store::{use_ui_store, UiStateStoreFields};

#[component]
pub fn ItemList(selected_category: ReadSignal<Option<String>>) -> impl IntoView {
    let ui = use_ui_store();
    let services = use_services();

    let visible_items = move || match selected_category.get() {
        Some(category) => {
            ui.items().track();
            services.items().items_by_category(&category)
        }
        None => ui.items().get(),
    };

    view! {
        <ul class="item-list">
            <For
                each=visible_items
                key=|item| (item.id, item.name.clone(), item.description.clone(), item.category.clone(), item.price.to_bits())
                children=move |item| view! { <ItemRow item=item /> }
            />
        </ul>
        <Show when=move || !ui.loading().get() && ui.items().read().is_empty()>
            <p class="empty-list">"No items yet"</p>
        </Show>
    }
}
