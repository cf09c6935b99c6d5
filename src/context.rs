//! Site Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use wedding_registry::HttpEndpoint;

use crate::models::{Guest, SiteConfig};

/// Where the guest lookup stands
#[derive(Debug, Clone, PartialEq)]
pub enum GuestStatus {
    Loading,
    /// Visit without a token
    Anonymous,
    Found(Guest),
    /// Token given but the lookup failed
    Invalid(String),
}

impl GuestStatus {
    pub fn guest(&self) -> Option<&Guest> {
        match self {
            GuestStatus::Found(guest) => Some(guest),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, GuestStatus::Loading)
    }
}

/// Site-wide values and signals provided via context
#[derive(Clone, Copy)]
pub struct SiteContext {
    pub config: StoredValue<SiteConfig>,
    /// Shared endpoint client (not `Send` on wasm, so stored locally)
    pub endpoint: StoredValue<HttpEndpoint, LocalStorage>,
    /// Guest lookup - read
    pub guest_status: ReadSignal<GuestStatus>,
    /// Guest lookup - write
    set_guest_status: WriteSignal<GuestStatus>,
}

impl SiteContext {
    pub fn new(config: SiteConfig, guest_status: (ReadSignal<GuestStatus>, WriteSignal<GuestStatus>)) -> Self {
        let endpoint = HttpEndpoint::from_config(&config);
        Self {
            config: StoredValue::new(config),
            endpoint: StoredValue::new_local(endpoint),
            guest_status: guest_status.0,
            set_guest_status: guest_status.1,
        }
    }

    /// Current guest, if the lookup found one (tracked)
    pub fn guest(&self) -> Option<Guest> {
        self.guest_status.with(|status| status.guest().cloned())
    }

    pub fn set_guest_status(&self, status: GuestStatus) {
        self.set_guest_status.set(status);
    }

    pub fn endpoint(&self) -> HttpEndpoint {
        self.endpoint.get_value()
    }
}

/// Get the site context
pub fn use_site_context() -> SiteContext {
    use_context::<SiteContext>().expect("SiteContext should be provided")
}
