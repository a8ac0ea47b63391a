//! Deferred Tasks
//!
//! The toast manager schedules auto-dismissal through this seam. The browser
//! build backs it with `setTimeout`; headless code and tests use the
//! virtual clock below.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::time::Duration;

/// Identifies a scheduled task so it can be cancelled
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(pub u64);

/// One-shot deferred callbacks on the current thread
pub trait Scheduler {
    /// Run `task` once after `delay`
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TaskId;

    /// Drop a task that has not run yet; unknown IDs are ignored
    fn cancel(&self, id: TaskId);
}

/// Manually advanced clock
///
/// Tasks run only inside `advance`, in due-time order (ties in scheduling
/// order).
#[derive(Default)]
pub struct VirtualScheduler {
    now: Cell<Duration>,
    next_id: Cell<u64>,
    queue: RefCell<BTreeMap<(Duration, TaskId), Box<dyn FnOnce()>>>,
}

impl VirtualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the virtual clock
    pub fn now(&self) -> Duration {
        self.now.get()
    }

    /// Number of tasks still waiting
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Move the clock forward, running every task that falls due
    ///
    /// Tasks scheduled by a running task are honoured if they fall due
    /// within the same window.
    pub fn advance(&self, by: Duration) {
        let target = self.now.get() + by;
        loop {
            let due = {
                let mut queue = self.queue.borrow_mut();
                match queue.keys().next().copied() {
                    Some(key) if key.0 <= target => queue.remove(&key).map(|task| (key.0, task)),
                    _ => None,
                }
            };
            match due {
                Some((at, task)) => {
                    self.now.set(at);
                    task();
                }
                None => break,
            }
        }
        self.now.set(target);
    }
}

impl Scheduler for VirtualScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> TaskId {
        let id = TaskId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.queue.borrow_mut().insert((self.now.get() + delay, id), task);
        id
    }

    fn cancel(&self, id: TaskId) {
        self.queue.borrow_mut().retain(|(_, task_id), _| *task_id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_task_runs_when_due() {
        let scheduler = VirtualScheduler::new();
        let fired = Rc::new(Cell::new(false));
        let f = Rc::clone(&fired);
        scheduler.schedule(Duration::from_millis(100), Box::new(move || f.set(true)));

        scheduler.advance(Duration::from_millis(99));
        assert!(!fired.get());
        scheduler.advance(Duration::from_millis(1));
        assert!(fired.get());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn test_cancelled_task_never_runs() {
        let scheduler = VirtualScheduler::new();
        let fired = Rc::new(Cell::new(false));
        let f = Rc::clone(&fired);
        let id = scheduler.schedule(Duration::from_millis(10), Box::new(move || f.set(true)));

        scheduler.cancel(id);
        scheduler.advance(Duration::from_secs(1));
        assert!(!fired.get());
    }

    #[test]
    fn test_tasks_run_in_due_order() {
        let scheduler = VirtualScheduler::new();
        let order = Rc::new(RefCell::new(Vec::new()));
        for (label, ms) in [("late", 30), ("early", 10), ("middle", 20)] {
            let o = Rc::clone(&order);
            scheduler.schedule(Duration::from_millis(ms), Box::new(move || o.borrow_mut().push(label)));
        }

        scheduler.advance(Duration::from_millis(30));
        assert_eq!(*order.borrow(), vec!["early", "middle", "late"]);
        assert_eq!(scheduler.now(), Duration::from_millis(30));
    }
}
