//! Domain Layer
//!
//! Plain data shared by the toast manager and the item store.
//! Nothing in here talks to the network or to timers.

mod entity;
mod item;
mod seed;
mod toast;

pub use entity::{find_index, Entity};
pub use item::{Item, ItemPatch, NewItem};
pub use seed::{seed_items, SEED_NEXT_ID};
pub use toast::{Toast, ToastRequest, ToastVariant, DEFAULT_TOAST_DURATION_MS};
