//! Toast Notifications
//!
//! Ordered list of active toasts with timed auto-dismissal.

mod manager;

pub use manager::ToastManager;
