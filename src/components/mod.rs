//! UI Components
//!
//! Reusable Leptos components.

mod category_filter;
mod delete_item_button;
mod item_list;
mod item_row;
mod new_item_form;
mod status_bar;
mod toaster;

pub use category_filter::CategoryFilter;
pub use delete_item_button::DeleteItemButton;
pub use item_list::ItemList;
pub use item_row::ItemRow;
pub use new_item_form::NewItemForm;
pub use status_bar::StatusBar;
pub use toaster::Toaster;
