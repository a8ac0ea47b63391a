//! Toast Manager
//!
//! Keeps active toasts oldest first. Every toast gets an auto-dismiss task
//! on the injected scheduler; dismissing by hand cancels that task.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::domain::{find_index, Toast, ToastRequest, ToastVariant, DEFAULT_TOAST_DURATION_MS};
use crate::observe::{SubscriptionId, Subscribers};
use crate::scheduler::{Scheduler, TaskId};

const ID_LEN: usize = 7;
const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

struct Inner {
    toasts: RefCell<Vec<Toast>>,
    timers: RefCell<HashMap<String, TaskId>>,
    scheduler: Rc<dyn Scheduler>,
    subscribers: Subscribers<Vec<Toast>>,
    default_duration_ms: u32,
}

/// Shared handle to the toast list; clones see the same state
#[derive(Clone)]
pub struct ToastManager {
    inner: Rc<Inner>,
}

impl ToastManager {
    pub fn new(scheduler: Rc<dyn Scheduler>) -> Self {
        Self::with_default_duration(scheduler, DEFAULT_TOAST_DURATION_MS)
    }

    /// Use `default_duration_ms` for toasts that don't set their own
    pub fn with_default_duration(scheduler: Rc<dyn Scheduler>, default_duration_ms: u32) -> Self {
        let default_duration_ms = if default_duration_ms == 0 {
            DEFAULT_TOAST_DURATION_MS
        } else {
            default_duration_ms
        };
        Self {
            inner: Rc::new(Inner {
                toasts: RefCell::new(Vec::new()),
                timers: RefCell::new(HashMap::new()),
                scheduler,
                subscribers: Subscribers::new(),
                default_duration_ms,
            }),
        }
    }

    /// Show a toast and schedule its dismissal; returns its ID
    pub fn notify(&self, request: ToastRequest) -> String {
        let id = self.fresh_id();
        let toast = request.into_toast(id.clone(), self.inner.default_duration_ms);
        let delay = Duration::from_millis(u64::from(toast.duration_ms));
        log::debug!("toast {} '{}' for {}ms", id, toast.title, toast.duration_ms);

        self.inner.toasts.borrow_mut().push(toast);

        let weak: Weak<Inner> = Rc::downgrade(&self.inner);
        let expired = id.clone();
        let task = self.inner.scheduler.schedule(
            delay,
            Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner.timers.borrow_mut().remove(&expired);
                    ToastManager { inner }.remove(&expired);
                }
            }),
        );
        self.inner.timers.borrow_mut().insert(id.clone(), task);

        self.publish();
        id
    }

    pub fn success(&self, title: impl Into<String>, description: Option<String>) -> String {
        let mut request = ToastRequest::new(title);
        request.description = description;
        self.notify(request)
    }

    pub fn error(&self, title: impl Into<String>, description: Option<String>) -> String {
        let mut request = ToastRequest::new(title).variant(ToastVariant::Destructive);
        request.description = description;
        self.notify(request)
    }

    /// Remove a toast; unknown or already dismissed IDs are ignored
    pub fn dismiss(&self, id: &str) {
        let pending = self.inner.timers.borrow_mut().remove(id);
        if let Some(task) = pending {
            self.inner.scheduler.cancel(task);
        }
        self.remove(id);
    }

    /// Snapshot of active toasts, oldest first
    pub fn toasts(&self) -> Vec<Toast> {
        self.inner.toasts.borrow().clone()
    }

    pub fn subscribe(&self, listener: impl Fn(&Vec<Toast>) + 'static) -> SubscriptionId {
        self.inner.subscribers.subscribe(listener)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.subscribers.unsubscribe(id)
    }

    fn remove(&self, id: &str) {
        let removed = {
            let mut toasts = self.inner.toasts.borrow_mut();
            find_index(toasts.as_slice(), &id.to_string()).map(|index| toasts.remove(index))
        };
        if removed.is_some() {
            log::debug!("toast {} dismissed", id);
            self.publish();
        }
    }

    fn publish(&self) {
        let snapshot = self.toasts();
        self.inner.subscribers.publish(&snapshot);
    }

    fn fresh_id(&self) -> String {
        loop {
            let id: String = (0..ID_LEN)
                .map(|_| char::from(ID_ALPHABET[fastrand::usize(..ID_ALPHABET.len())]))
                .collect();
            if !self.inner.timers.borrow().contains_key(&id) {
                return id;
            }
        }
    }
}
