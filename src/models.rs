//! Frontend Models
//!
//! Registry types re-exported for components, plus UI-only state.

pub use wedding_registry::{events::EventCard, Guest, ItemStatus, RegistrySnapshot, SiteConfig};
pub use wedding_registry::sync::{GiftGroup, GiftView};

/// Toast severity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast-success",
            ToastKind::Error => "toast toast-error",
            ToastKind::Info => "toast toast-info",
        }
    }
}

/// Transient notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub title: String,
    pub description: Option<String>,
}

/// Section anchor in the icon navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavTarget {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}
