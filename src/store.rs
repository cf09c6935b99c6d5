//! Global Site State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{RegistrySnapshot, Toast, ToastKind};

/// Global site state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct SiteState {
    /// Latest gift registry snapshot (pushed by the registry observer)
    pub registry: RegistrySnapshot,
    /// Visible toasts, oldest first
    pub toasts: Vec<Toast>,
    /// Last toast id handed out
    pub last_toast_id: u32,
}

/// Type alias for the store
pub type SiteStore = Store<SiteState>;

/// Get the site store from context
pub fn use_site_store() -> SiteStore {
    expect_context::<SiteStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the registry snapshot
pub fn store_set_registry(store: &SiteStore, snapshot: RegistrySnapshot) {
    *store.registry().write() = snapshot;
}

/// Append a toast, returning its id
pub fn store_push_toast(
    store: &SiteStore,
    kind: ToastKind,
    title: String,
    description: Option<String>,
) -> u32 {
    let id = {
        let last_toast_id = store.last_toast_id();
        let mut last = last_toast_id.write();
        *last += 1;
        *last
    };
    store.toasts().write().push(Toast { id, kind, title, description });
    id
}

/// Remove a toast by id
pub fn store_dismiss_toast(store: &SiteStore, id: u32) {
    store.toasts().write().retain(|toast| toast.id != id);
}
