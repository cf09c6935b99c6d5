//! Gift Registry Synchronizer
//!
//! Holds the shared wishlist as this device last saw it and runs the
//! claim/release protocol against the remote script:
//!
//! 1. reject locally if the item looks held by someone else or is in flight
//! 2. apply the change optimistically and mark the item pending
//! 3. send the toggle
//! 4. on settle, refetch the whole list (rollback is just resynchronization)
//!
//! The script decides who wins a race; whatever the refetch returns is truth.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use log::{debug, info, warn};

use crate::config::SiteConfig;
use crate::domain::{ClaimState, GiftItem, ItemStatus, LocalIdentity, RegistryError, RegistryResult};
use crate::identity::{IdentityService, IdentityStore};
use crate::remote::{RegistryEndpoint, ToggleRequest};
use super::grouping::group_by_category;
use super::notice::{Notice, RegistryObserver};
use super::poll::{Disposer, Sleeper};

/// An item together with its status for this device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GiftView {
    pub item: GiftItem,
    pub status: ItemStatus,
}

/// One category worth of items, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GiftGroup {
    pub category: String,
    pub gifts: Vec<GiftView>,
}

/// Point-in-time copy of the registry state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrySnapshot {
    pub items: Vec<GiftItem>,
    /// Item id -> requested `taken` value of the toggle in flight
    pub pending: HashMap<String, bool>,
    pub identity: Option<LocalIdentity>,
    /// A non-silent load is running
    pub loading: bool,
    /// At least one load has succeeded
    pub loaded: bool,
}

impl RegistrySnapshot {
    pub fn item(&self, id: &str) -> Option<&GiftItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn claim_state(&self, id: &str) -> Option<ClaimState> {
        self.item(id).map(|i| i.claim_state(self.identity.as_ref()))
    }

    /// Claim state, overridden by the pending direction while a toggle is in flight
    pub fn status(&self, id: &str) -> Option<ItemStatus> {
        let item = self.item(id)?;
        Some(match self.pending.get(id) {
            Some(true) => ItemStatus::PendingClaim,
            Some(false) => ItemStatus::PendingRelease,
            None => item.claim_state(self.identity.as_ref()).into(),
        })
    }

    pub fn groups(&self) -> Vec<GiftGroup> {
        group_by_category(&self.items)
            .into_iter()
            .map(|group| GiftGroup {
                category: group.category.to_string(),
                gifts: group
                    .items
                    .into_iter()
                    .map(|item| GiftView {
                        status: self.status(&item.id).unwrap_or(ItemStatus::Unclaimed),
                        item: item.clone(),
                    })
                    .collect(),
            })
            .collect()
    }
}

#[derive(Default)]
struct RegistryState {
    items: Vec<GiftItem>,
    pending: HashMap<String, bool>,
    /// Non-silent loads still waiting on the server
    loads_in_flight: usize,
    loaded: bool,
    /// Sequence number handed to the latest load request
    issued_loads: u64,
    /// Sequence number of the load whose result is shown
    applied_load: u64,
}

struct Inner<E, S: IdentityStore> {
    endpoint: E,
    identity: IdentityService<S>,
    observer: Rc<dyn RegistryObserver>,
    state: RefCell<RegistryState>,
    poll_interval: Duration,
    disposer: Disposer,
}

/// Client-side view of the shared wishlist; clones share state
pub struct GiftRegistry<E, S: IdentityStore> {
    inner: Rc<Inner<E, S>>,
}

impl<E, S: IdentityStore> Clone for GiftRegistry<E, S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<E: RegistryEndpoint, S: IdentityStore> GiftRegistry<E, S> {
    pub fn new(
        endpoint: E,
        store: S,
        observer: Rc<dyn RegistryObserver>,
        poll_interval: Duration,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                endpoint,
                identity: IdentityService::new(store),
                observer,
                state: RefCell::new(RegistryState::default()),
                poll_interval,
                disposer: Disposer::default(),
            }),
        }
    }

    pub fn from_config(endpoint: E, store: S, observer: Rc<dyn RegistryObserver>, config: &SiteConfig) -> Self {
        Self::new(endpoint, store, observer, config.poll_interval())
    }

    /// This device's identity, created and persisted on first use
    pub fn identity(&self) -> LocalIdentity {
        self.inner.identity.get_or_create()
    }

    pub fn snapshot(&self) -> RegistrySnapshot {
        let state = self.inner.state.borrow();
        RegistrySnapshot {
            items: state.items.clone(),
            pending: state.pending.clone(),
            identity: self.inner.identity.current(),
            loading: state.loads_in_flight > 0,
            loaded: state.loaded,
        }
    }

    pub fn status(&self, id: &str) -> Option<ItemStatus> {
        self.snapshot().status(id)
    }

    pub fn groups(&self) -> Vec<GiftGroup> {
        self.snapshot().groups()
    }

    /// Pick up an existing identity and do the first (visible) load
    pub async fn init(&self) -> RegistryResult<()> {
        match self.inner.identity.current() {
            Some(id) => debug!("gift registry starting as {}", id),
            None => debug!("gift registry starting without identity"),
        }
        self.load_list(false).await
    }

    /// Replace the local list with the server's
    ///
    /// On failure the previous list stays exactly as it was.
    pub async fn load_list(&self, silent: bool) -> RegistryResult<()> {
        let seq = {
            let mut state = self.inner.state.borrow_mut();
            state.issued_loads += 1;
            if !silent {
                state.loads_in_flight += 1;
            }
            state.issued_loads
        };
        if !silent {
            self.emit_change();
        }

        let result = self.inner.endpoint.fetch_wishlist().await;

        let outcome = {
            let mut state = self.inner.state.borrow_mut();
            if !silent {
                state.loads_in_flight = state.loads_in_flight.saturating_sub(1);
            }
            match result {
                Ok(items) if seq > state.applied_load => {
                    debug!("load #{}: {} items", seq, items.len());
                    state.items = items;
                    state.applied_load = seq;
                    state.loaded = true;
                    Ok(true)
                }
                Ok(_) => {
                    debug!("load #{} superseded by #{}, dropped", seq, state.applied_load);
                    Ok(false)
                }
                Err(e) => Err(e),
            }
        };

        match outcome {
            Ok(changed) => {
                if changed || !silent {
                    self.emit_change();
                }
                Ok(())
            }
            Err(e) => {
                warn!("wishlist load failed: {}", e);
                if !silent {
                    self.emit_change();
                }
                self.notify(Notice::LoadFailed(e.clone()));
                Err(e)
            }
        }
    }

    /// Claim (`want_taken`) or release an item for this device
    pub async fn set_claim(&self, id: &str, want_taken: bool) -> RegistryResult<()> {
        let identity = self.identity();

        let (name, before) = {
            let mut state = self.inner.state.borrow_mut();
            let Some(index) = state.items.iter().position(|i| i.id == id) else {
                drop(state);
                self.notify(Notice::UnknownItem { id: id.to_string() });
                return Err(RegistryError::UnknownItem(id.to_string()));
            };
            let name = state.items[index].name.clone();

            if state.pending.contains_key(id) {
                drop(state);
                debug!("toggle for {} ignored, request in flight", id);
                self.notify(Notice::Busy { name });
                return Err(RegistryError::Pending(id.to_string()));
            }

            match (state.items[index].claim_state(Some(&identity)), want_taken) {
                (ClaimState::ClaimedByOther, _) => {
                    drop(state);
                    info!("claim on {} refused locally, held by another device", id);
                    self.notify(Notice::ClaimRejected { name });
                    return Err(RegistryError::ClaimedByOther(id.to_string()));
                }
                (ClaimState::ClaimedByMe, true) | (ClaimState::Unclaimed, false) => {
                    return Ok(());
                }
                _ => {}
            }

            let before = state.items[index].clone();
            state.items[index].apply_optimistic(want_taken, &identity);
            state.pending.insert(id.to_string(), want_taken);
            (name, before)
        };
        self.emit_change();

        let request = ToggleRequest {
            id: id.to_string(),
            taken: want_taken,
            taken_by: if want_taken {
                identity.as_str().to_string()
            } else {
                String::new()
            },
        };
        let result = self.inner.endpoint.toggle(&request).await;

        self.inner.state.borrow_mut().pending.remove(id);

        match result {
            Ok(()) => {
                info!("{} {}", if want_taken { "claimed" } else { "released" }, id);
                self.notify(if want_taken {
                    Notice::Claimed { name }
                } else {
                    Notice::Released { name }
                });
                if self.load_list(true).await.is_err() {
                    // Optimistic state matches what the server accepted; keep it
                    self.emit_change();
                }
                Ok(())
            }
            Err(e) => {
                warn!("toggle {} -> {} failed: {}", id, want_taken, e);
                self.notify(Notice::ToggleFailed {
                    name,
                    error: e.clone(),
                });
                if self.load_list(true).await.is_err() {
                    self.restore(before, want_taken, &identity);
                }
                Err(e)
            }
        }
    }

    /// Undo an optimistic change when resynchronization is not possible either
    fn restore(&self, before: GiftItem, want_taken: bool, identity: &LocalIdentity) {
        {
            let mut state = self.inner.state.borrow_mut();
            let Some(item) = state.items.iter_mut().find(|i| i.id == before.id) else {
                return;
            };
            let mut optimistic = before.clone();
            optimistic.apply_optimistic(want_taken, identity);
            // Only if nothing newer has replaced it meanwhile
            if *item != optimistic {
                return;
            }
            *item = before;
        }
        self.emit_change();
    }

    /// Handle that stops `run_polling`
    pub fn disposer(&self) -> Disposer {
        self.inner.disposer.clone()
    }

    pub fn dispose(&self) {
        debug!("gift registry disposed");
        self.inner.disposer.dispose();
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.disposer.is_disposed()
    }

    /// Silent reload every poll interval until disposed
    pub async fn run_polling<T: Sleeper>(&self, sleeper: T) {
        debug!("polling wishlist every {:?}", self.inner.poll_interval);
        while !self.is_disposed() {
            sleeper.sleep(self.inner.poll_interval).await;
            if self.is_disposed() {
                break;
            }
            let _ = self.load_list(true).await;
        }
        debug!("wishlist polling stopped");
    }

    fn emit_change(&self) {
        let snapshot = self.snapshot();
        self.inner.observer.on_change(&snapshot);
    }

    fn notify(&self, notice: Notice) {
        self.inner.observer.on_notice(&notice);
    }
}
