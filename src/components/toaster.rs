//! Toaster Component
//!
//! Stack of active toasts in the corner of the page.

use leptos::prelude::*;

use crate::context::use_services;
use crate::store::{use_ui_store, UiStateStoreFields};

#[component]
pub fn Toaster() -> impl IntoView {
    let ui = use_ui_store();
    let services = use_services();

    view! {
        <div class="toaster">
            <For
                each=move || ui.toasts().get()
                key=|toast| toast.id.clone()
                children=move |toast| {
                    let id = toast.id.clone();
                    let toast_class = format!("toast toast-{}", toast.variant.as_str());

                    view! {
                        <div class=toast_class role="status">
                            <div class="toast-body">
                                <p class="toast-title">{toast.title.clone()}</p>
                                {toast.description.clone().map(|text| view! {
                                    <p class="toast-description">{text}</p>
                                })}
                            </div>
                            <button
                                class="toast-close"
                                on:click=move |_| services.toasts().dismiss(&id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
