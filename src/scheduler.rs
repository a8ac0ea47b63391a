//! Browser Scheduler
//!
//! `Scheduler` backed by `setTimeout` through gloo-timers. Cancelled tasks
//! still wake up but do nothing.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use storefront_core::{Scheduler, TaskId};
use wasm_bindgen_futures::spawn_local;

#[derive(Default)]
pub struct TimeoutScheduler {
    next_id: Cell<u64>,
    /// Cancellation flags of tasks that have not fired yet
    pending: Rc<RefCell<HashMap<TaskId, Rc<Cell<bool>>>>>,
}

impl TimeoutScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for TimeoutScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TaskId {
        let id = TaskId(self.next_id.get());
        self.next_id.set(id.0 + 1);

        let cancelled = Rc::new(Cell::new(false));
        self.pending.borrow_mut().insert(id, Rc::clone(&cancelled));

        let pending = Rc::downgrade(&self.pending);
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        spawn_local(async move {
            TimeoutFuture::new(millis).await;
            if let Some(pending) = pending.upgrade() {
                pending.borrow_mut().remove(&id);
            }
            if !cancelled.get() {
                task();
            }
        });
        id
    }

    fn cancel(&self, id: TaskId) {
        if let Some(cancelled) = self.pending.borrow_mut().remove(&id) {
            cancelled.set(true);
        }
    }
}
