//! Storefront Core
//!
//! Client-side state for the storefront UI:
//! - domain: items, toasts and the seed catalogue
//! - remote: the remote item service and its HTTP implementation
//! - toast: transient notifications with timed dismissal
//! - store: item list mirrored from the remote, with local fallback
//!
//! Everything here is single-threaded (`Rc`, `RefCell`); handles are meant
//! to be built once at startup and handed to consumers.

pub mod config;
pub mod domain;
pub mod observe;
pub mod remote;
pub mod scheduler;
pub mod store;
pub mod toast;

pub use config::{ConfigError, FallbackLookup, StorefrontConfig};
pub use domain::{Item, ItemPatch, NewItem, Toast, ToastRequest, ToastVariant};
pub use observe::SubscriptionId;
pub use remote::{HttpItemRemote, ItemRemote, RemoteError, RemoteResult};
pub use scheduler::{Scheduler, TaskId, VirtualScheduler};
pub use store::{ItemStore, ItemStoreState, StoreMode};
pub use toast::ToastManager;
