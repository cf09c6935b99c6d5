//! Toast Commands

use std::time::Duration;

use leptos::task::spawn_local;

use crate::models::ToastKind;
use crate::store::{store_dismiss_toast, store_push_toast, SiteStore};

const TOAST_DURATION: Duration = Duration::from_secs(4);

/// Show a toast that dismisses itself
pub fn show_toast(store: SiteStore, kind: ToastKind, title: impl Into<String>, description: Option<String>) {
    let id = store_push_toast(&store, kind, title.into(), description);
    spawn_local(async move {
        gloo_timers::future::sleep(TOAST_DURATION).await;
        store_dismiss_toast(&store, id);
    });
}
