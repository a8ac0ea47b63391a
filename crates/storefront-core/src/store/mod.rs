//! Item Store
//!
//! Local mirror of the remote item collection. Falls back to the seed
//! items when the remote cannot be reached.

mod item_store;
mod state;


pub use item_store::ItemStore;
pub use state::{ItemStoreState, StoreMode};
