//! Item Row Component
//!
//! One item with inline price editing and a delete button.

use leptos::prelude::*;
use leptos::task::spawn_local;
use storefront_core::{Item, ItemPatch};

use super::DeleteItemButton;
use crate::context::use_services;

#[component]
pub fn ItemRow(item: Item) -> impl IntoView {
    let services = use_services();
    let id = item.id;
    let current_price = item.price;
    let (editing, set_editing) = signal(false);
    let (price_text, set_price_text) = signal(format!("{:.2}", item.price));

    let save_price = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let price = match price_text.get().trim().parse::<f64>() {
            Ok(price) if price >= 0.0 => price,
            _ => {
                services.toasts().error("Invalid price", Some("Enter a number of at least 0".to_string()));
                return;
            }
        };
        spawn_local(async move {
            let updated = services.items().update_item(id, ItemPatch::default().price(price)).await;
            match updated {
                Some(_) => services.report("Price updated"),
                None => {
                    services.toasts().error("Item not found", None);
                }
            }
            set_editing.set(false);
        });
    };

    view! {
        <li class="item-row">
            <div class="item-main">
                <span class="item-name">{item.name.clone()}</span>
                <span class="item-category">{item.category.clone()}</span>
                <p class="item-description">{item.description.clone()}</p>
                <span class="item-created">{item.created_at.format("%Y-%m-%d").to_string()}</span>
            </div>

            {move || if editing.get() {
                view! {
                    <form class="price-form" on:submit=save_price>
                        <input
                            type="number"
                            min="0"
                            step="0.01"
                            prop:value=move || price_text.get()
                            on:input=move |ev| set_price_text.set(event_target_value(&ev))
                        />
                        <button type="submit">"Save"</button>
                        <button type="button" on:click=move |_| set_editing.set(false)>"Cancel"</button>
                    </form>
                }.into_any()
            } else {
                view! {
                    <button class="item-price" on:click=move |_| set_editing.set(true)>
                        {format!("${:.2}", current_price)}
                    </button>
                }.into_any()
            }}

            <DeleteItemButton item_id=id item_name=item.name.clone() />
        </li>
    }
}
