//! Toast Entity
//!
//! A transient notification shown to the user for a limited time.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Lifetime of a toast when the caller gives none
pub const DEFAULT_TOAST_DURATION_MS: u32 = 5000;

/// Visual severity of a toast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

impl ToastVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastVariant::Default => "default",
            ToastVariant::Destructive => "destructive",
        }
    }
}

/// An active notification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Toast {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub variant: ToastVariant,
    /// Milliseconds until automatic dismissal
    pub duration_ms: u32,
}

impl Entity for Toast {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Everything a caller may specify when raising a toast
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastRequest {
    pub title: String,
    pub description: Option<String>,
    pub variant: Option<ToastVariant>,
    pub duration_ms: Option<u32>,
}

impl ToastRequest {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn variant(mut self, variant: ToastVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn duration_ms(mut self, duration_ms: u32) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    /// Turn the request into a toast, filling in defaults
    ///
    /// A zero duration counts as "not given".
    pub fn into_toast(self, id: String, default_duration_ms: u32) -> Toast {
        Toast {
            id,
            title: self.title,
            description: self.description,
            variant: self.variant.unwrap_or_default(),
            duration_ms: self
                .duration_ms
                .filter(|&ms| ms > 0)
                .unwrap_or(default_duration_ms),
        }
    }
}
