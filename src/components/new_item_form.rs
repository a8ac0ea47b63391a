//! New Item Form Component
//!
//! Form for adding an item to the store.

use leptos::prelude::*;
use leptos::task::spawn_local;
use storefront_core::NewItem;

use crate::context::use_services;

/// Form for creating new items
#[component]
pub fn NewItemForm() -> impl IntoView {
    let services = use_services();

    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (category, set_category) = signal(String::new());
    let (price, set_price) = signal(String::new());

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let item_name = name.get().trim().to_string();
        if item_name.is_empty() {
            return;
        }
        let item_price = match price.get().trim().parse::<f64>() {
            Ok(value) if value >= 0.0 => value,
            _ => {
                services.toasts().error("Invalid price", Some("Enter a number of at least 0".to_string()));
                return;
            }
        };
        let fields = NewItem::new(item_name, description.get(), category.get().trim(), item_price);

        spawn_local(async move {
            let added = services.items().add_item(fields).await;
            log::info!("added item {}", added.id);
            services.report(&format!("Added \"{}\"", added.name));
            set_name.set(String::new());
            set_description.set(String::new());
            set_price.set(String::new());
        });
    };

    view! {
        <form class="new-item-form" on:submit=create_item>
            <div class="new-item-row">
                <input
                    type="text"
                    placeholder="Name"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Category"
                    prop:value=move || category.get()
                    on:input=move |ev| set_category.set(event_target_value(&ev))
                />
                <input
                    type="number"
                    placeholder="Price"
                    min="0"
                    step="0.01"
                    prop:value=move || price.get()
                    on:input=move |ev| set_price.set(event_target_value(&ev))
                />
            </div>
            <div class="new-item-row">
                <input
                    type="text"
                    class="description-input"
                    placeholder="Description"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                />
                <button type="submit">"Add"</button>
            </div>
        </form>
    }
}
