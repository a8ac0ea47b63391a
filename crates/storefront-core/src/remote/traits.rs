//! Remote Layer - Core Trait
//!
//! CRUD contract of the remote item collection, keyed by integer ID.

use async_trait::async_trait;

use super::error::RemoteResult;
use crate::domain::{Item, ItemPatch, NewItem};

/// Remote item collection
///
/// Futures are not `Send`: the store runs on a single thread (the browser
/// event loop, or a current-thread runtime in tests).
#[async_trait(?Send)]
pub trait ItemRemote {
    /// Fetch the whole collection
    async fn list(&self) -> RemoteResult<Vec<Item>>;

    /// Fetch a single item
    async fn get(&self, id: u32) -> RemoteResult<Item>;

    /// Create an item; the server assigns the ID and timestamp
    async fn create(&self, item: &NewItem) -> RemoteResult<Item>;

    /// Apply a partial update, returning the server's copy
    async fn update(&self, id: u32, patch: &ItemPatch) -> RemoteResult<Item>;

    /// Delete an item
    async fn delete(&self, id: u32) -> RemoteResult<()>;
}
