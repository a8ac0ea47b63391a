//! Delete Item Button Component
//!
//! Two-step delete for an item row: the first click asks for confirmation
//! naming the item, the second removes it from the store.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_services;

#[component]
pub fn DeleteItemButton(item_id: u32, item_name: String) -> impl IntoView {
    let services = use_services();
    let (confirming, set_confirming) = signal(false);
    let (deleting, set_deleting) = signal(false);
    let prompt = format!("Delete \"{}\"?", item_name);

    let delete = move |_| {
        set_deleting.set(true);
        spawn_local(async move {
            match services.items().delete_item(item_id).await {
                Some(removed) => services.report(&format!("Deleted \"{}\"", removed.name)),
                None => {
                    services.toasts().error("Item not found", Some(format!("No item with id {}", item_id)));
                    set_deleting.set(false);
                    set_confirming.set(false);
                }
            }
        });
    };

    move || if confirming.get() {
        view! {
            <span class="delete-confirm">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button class="confirm-btn" disabled=move || deleting.get() on:click=delete>
                    "Delete"
                </button>
                <button class="cancel-btn" on:click=move |_| set_confirming.set(false)>
                    "Keep"
                </button>
            </span>
        }.into_any()
    } else {
        view! {
            <button
                class="delete-btn"
                title="Delete item"
                on:click=move |_| set_confirming.set(true)
            >
                "×"
            </button>
        }.into_any()
    }
}
