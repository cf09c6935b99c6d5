//! Registry Commands
//!
//! Wires the gift registry to the browser: `localStorage` identity, the
//! shared endpoint, and an observer that feeds the site store.

use std::rc::Rc;

use leptos::prelude::GetValue;
use log::debug;
use wedding_registry::{GiftRegistry, HttpEndpoint, Notice, RegistryObserver, RegistrySnapshot};

use super::storage::LocalStorageIdentity;
use super::toast::show_toast;
use crate::context::SiteContext;
use crate::store::{store_set_registry, SiteStore};
use crate::texts;

/// Registry as used by the site
pub type SiteRegistry = GiftRegistry<HttpEndpoint, LocalStorageIdentity>;

/// Pushes snapshots into the store and notices into toasts
struct StoreObserver {
    store: SiteStore,
}

impl RegistryObserver for StoreObserver {
    fn on_change(&self, snapshot: &RegistrySnapshot) {
        store_set_registry(&self.store, snapshot.clone());
    }

    fn on_notice(&self, notice: &Notice) {
        debug!("[REGISTRY] notice: {:?}", notice);
        let (kind, title, description) = texts::notice_toast(notice);
        show_toast(self.store, kind, title, description);
    }
}

pub fn create_registry(ctx: &SiteContext, store: SiteStore) -> SiteRegistry {
    let config = ctx.config.get_value();
    let observer: Rc<dyn RegistryObserver> = Rc::new(StoreObserver { store });
    GiftRegistry::from_config(
        ctx.endpoint(),
        LocalStorageIdentity::new(config.identity_key.clone()),
        observer,
        &config,
    )
}
