//! Item Store
//!
//! Every operation tries the remote first (unless the store is already in
//! local fallback) and applies the same change to the local list when the
//! remote fails. Failures never reach the caller: they are logged, recorded
//! in `error`, and the store switches to `StoreMode::LocalFallback`.
//!
//! Operations on one store run one at a time, in the order they were
//! called.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::Utc;
use tokio::sync::{Mutex, MutexGuard};

use super::state::{ItemStoreState, StoreMode};
use crate::config::FallbackLookup;
use crate::domain::{seed_items, Item, ItemPatch, NewItem, SEED_NEXT_ID};
use crate::observe::{SubscriptionId, Subscribers};
use crate::remote::{ItemRemote, RemoteError, RemoteResult};

const FETCH_ALL_FAILED: &str = "Failed to fetch items from API, using local data instead";
const FETCH_ONE_FAILED: &str = "Failed to fetch item";
const ADD_FAILED: &str = "Failed to add item to API, added locally instead";
const UPDATE_FAILED: &str = "Failed to update item on API, updated locally instead";
const DELETE_FAILED: &str = "Failed to delete item from API, deleted locally instead";

/// Largest ID the store can mirror; the counter must stay above every ID
const MAX_ITEM_ID: u32 = u32::MAX - 1;

/// Reject a remote item whose ID leaves no room for the counter
fn check_item(item: Item) -> RemoteResult<Item> {
    if item.id > MAX_ITEM_ID {
        return Err(RemoteError::new(format!("item id {} out of range", item.id)));
    }
    Ok(item)
}

fn check_items(items: Vec<Item>) -> RemoteResult<Vec<Item>> {
    match items.iter().find(|item| item.id > MAX_ITEM_ID) {
        Some(item) => Err(RemoteError::new(format!("item id {} out of range", item.id))),
        None => Ok(items),
    }
}

struct Inner {
    state: RefCell<ItemStoreState>,
    remote: Rc<dyn ItemRemote>,
    queue: Mutex<()>,
    subscribers: Subscribers<ItemStoreState>,
    fallback_lookup: FallbackLookup,
}

/// Shared handle to the item store; clones see the same state
#[derive(Clone)]
pub struct ItemStore {
    inner: Rc<Inner>,
}

/// An operation's turn in the queue
///
/// Clears `loading` on every exit path before the next operation starts.
struct Operation<'a> {
    store: &'a ItemStore,
    _turn: MutexGuard<'a, ()>,
}

impl Drop for Operation<'_> {
    fn drop(&mut self) {
        self.store.update(|state| state.loading = false);
    }
}

impl ItemStore {
    pub fn new(remote: Rc<dyn ItemRemote>) -> Self {
        Self::with_fallback_lookup(remote, FallbackLookup::default())
    }

    pub fn with_fallback_lookup(remote: Rc<dyn ItemRemote>, fallback_lookup: FallbackLookup) -> Self {
        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(ItemStoreState::default()),
                remote,
                queue: Mutex::new(()),
                subscribers: Subscribers::new(),
                fallback_lookup,
            }),
        }
    }

    /// First load; call once after construction
    pub async fn initialize(&self) {
        log::info!("initializing item store");
        self.fetch_all().await;
    }

    // ========================
    // Operations
    // ========================

    /// Replace the local list with the remote collection, or with the seed
    /// items if the remote fails
    pub async fn fetch_all(&self) {
        let _op = self.begin().await;

        match self.inner.remote.list().await.and_then(check_items) {
            Ok(items) => {
                log::info!("fetched {} items from remote", items.len());
                self.update(|state| {
                    if let Some(next) = items
                        .iter()
                        .map(|item| item.id)
                        .max()
                        .and_then(|max| max.checked_add(1))
                    {
                        state.next_id = next;
                    }
                    state.items = items;
                    state.mode = StoreMode::Remote;
                });
            }
            Err(err) => {
                log::error!("fetch items failed: {}", err);
                log::warn!("using local seed items");
                self.update(|state| {
                    state.items = seed_items();
                    state.next_id = state.next_id.max(SEED_NEXT_ID);
                    state.mode = StoreMode::LocalFallback;
                    state.error = Some(FETCH_ALL_FAILED.to_string());
                });
            }
        }
    }

    /// Look up a single item; never touches the local list or mode
    pub async fn fetch_by_id(&self, id: u32) -> Option<Item> {
        let _op = self.begin().await;

        if self.is_using_fallback() {
            return self.fallback_lookup(id);
        }

        match self.inner.remote.get(id).await {
            Ok(item) => Some(item),
            Err(err) => {
                log::error!("fetch item {} failed: {}", id, err);
                self.update(|state| state.error = Some(FETCH_ONE_FAILED.to_string()));
                self.fallback_lookup(id)
            }
        }
    }

    /// Create an item, locally if the remote is unavailable
    pub async fn add_item(&self, fields: NewItem) -> Item {
        let _op = self.begin().await;

        let candidate = self.update(|state| {
            let id = state.take_next_id();
            Item::from_new(id, fields.clone(), Utc::now())
        });

        if self.is_using_fallback() {
            self.update(|state| state.items.push(candidate.clone()));
            return candidate;
        }

        match self.inner.remote.create(&fields).await.and_then(check_item) {
            Ok(created) => {
                self.update(|state| {
                    state.observe_id(created.id);
                    state.items.push(created.clone());
                });
                created
            }
            Err(err) => {
                log::error!("add item failed: {}", err);
                log::warn!("item {} added locally", candidate.id);
                self.update(|state| {
                    state.items.push(candidate.clone());
                    state.mode = StoreMode::LocalFallback;
                    state.error = Some(ADD_FAILED.to_string());
                });
                candidate
            }
        }
    }

    /// Apply a partial update; `None` if the item is unknown
    pub async fn update_item(&self, id: u32, patch: ItemPatch) -> Option<Item> {
        let _op = self.begin().await;

        if self.is_using_fallback() {
            return self.update(|state| state.merge(id, &patch));
        }

        match self.inner.remote.update(id, &patch).await.and_then(check_item) {
            Ok(updated) => {
                self.update(|state| {
                    state.observe_id(updated.id);
                    state.replace(id, updated.clone());
                });
                Some(updated)
            }
            Err(err) => {
                log::error!("update item {} failed: {}", id, err);
                self.update(|state| {
                    state.error = Some(UPDATE_FAILED.to_string());
                    let merged = state.merge(id, &patch);
                    if merged.is_some() {
                        state.mode = StoreMode::LocalFallback;
                    }
                    merged
                })
            }
        }
    }

    /// Remove an item, returning it; `None` if it was not in the local list
    pub async fn delete_item(&self, id: u32) -> Option<Item> {
        let _op = self.begin().await;

        if self.is_using_fallback() {
            return self.update(|state| state.remove(id));
        }

        match self.inner.remote.delete(id).await {
            Ok(()) => self.update(|state| state.remove(id)),
            Err(err) => {
                log::error!("delete item {} failed: {}", id, err);
                self.update(|state| {
                    state.error = Some(DELETE_FAILED.to_string());
                    let removed = state.remove(id);
                    if removed.is_some() {
                        state.mode = StoreMode::LocalFallback;
                    }
                    removed
                })
            }
        }
    }

    // ========================
    // Read Accessors
    // ========================

    pub fn get_item_by_id(&self, id: u32) -> Option<Item> {
        self.inner.state.borrow().get(id).cloned()
    }

    pub fn items_by_category(&self, category: &str) -> Vec<Item> {
        self.inner.state.borrow().by_category(category)
    }

    pub fn categories(&self) -> Vec<String> {
        self.inner.state.borrow().categories()
    }

    pub fn items(&self) -> Vec<Item> {
        self.inner.state.borrow().items.clone()
    }

    pub fn loading(&self) -> bool {
        self.inner.state.borrow().loading
    }

    pub fn error(&self) -> Option<String> {
        self.inner.state.borrow().error.clone()
    }

    pub fn mode(&self) -> StoreMode {
        self.inner.state.borrow().mode
    }

    pub fn is_using_fallback(&self) -> bool {
        self.inner.state.borrow().is_using_fallback()
    }

    pub fn next_id(&self) -> u32 {
        self.inner.state.borrow().next_id
    }

    pub fn snapshot(&self) -> ItemStoreState {
        self.inner.state.borrow().clone()
    }

    pub fn subscribe(&self, listener: impl Fn(&ItemStoreState) + 'static) -> SubscriptionId {
        self.inner.subscribers.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.subscribers.unsubscribe(id)
    }

    // ========================
    // Internals
    // ========================

    /// Wait for this operation's turn, then mark the store busy
    async fn begin(&self) -> Operation<'_> {
        let turn = self.inner.queue.lock().await;
        self.update(|state| {
            state.loading = true;
            state.error = None;
        });
        Operation { store: self, _turn: turn }
    }

    /// Mutate the state, then notify listeners
    fn update<R>(&self, f: impl FnOnce(&mut ItemStoreState) -> R) -> R {
        let result = f(&mut self.inner.state.borrow_mut());
        let snapshot = self.snapshot();
        self.inner.subscribers.publish(&snapshot);
        result
    }

    fn fallback_lookup(&self, id: u32) -> Option<Item> {
        match self.inner.fallback_lookup {
            FallbackLookup::Seed => seed_items().into_iter().find(|item| item.id == id),
            FallbackLookup::LocalList => self.get_item_by_id(id),
        }
    }
}
