//! Local Identity
//!
//! Per-device identity used to attribute gift claims. The backing store is
//! injected (browser `localStorage` in the site, memory in tests).

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};

use crate::domain::LocalIdentity;

/// Key/value persistence for a single identity string
pub trait IdentityStore {
    /// Stored value, if any
    fn load(&self) -> Option<String>;

    /// Persist a value; failures are reported but not fatal
    fn save(&self, value: &str) -> Result<(), String>;
}

/// In-memory store, shared between clones
#[derive(Debug, Clone, Default)]
pub struct MemoryIdentityStore {
    value: Rc<RefCell<Option<String>>>,
}

impl MemoryIdentityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with an existing identity
    pub fn with_value(value: &str) -> Self {
        Self {
            value: Rc::new(RefCell::new(Some(value.to_string()))),
        }
    }
}

impl IdentityStore for MemoryIdentityStore {
    fn load(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn save(&self, value: &str) -> Result<(), String> {
        *self.value.borrow_mut() = Some(value.to_string());
        Ok(())
    }
}

/// Lazily created, cached identity over an `IdentityStore`
pub struct IdentityService<S: IdentityStore> {
    store: S,
    cached: RefCell<Option<LocalIdentity>>,
}

impl<S: IdentityStore> IdentityService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            cached: RefCell::new(None),
        }
    }

    /// Existing identity without creating one
    pub fn current(&self) -> Option<LocalIdentity> {
        if let Some(id) = self.cached.borrow().as_ref() {
            return Some(id.clone());
        }
        let loaded = self.store.load().as_deref().and_then(LocalIdentity::parse);
        if let Some(id) = &loaded {
            *self.cached.borrow_mut() = Some(id.clone());
        }
        loaded
    }

    /// Existing identity, or a freshly generated and persisted one
    pub fn get_or_create(&self) -> LocalIdentity {
        if let Some(id) = self.current() {
            return id;
        }
        let id = LocalIdentity::generate();
        debug!("generated local identity {}", id);
        if let Err(e) = self.store.save(id.as_str()) {
            // Still usable for this session, claims just won't be recognised after reload
            warn!("could not persist local identity: {}", e);
        }
        *self.cached.borrow_mut() = Some(id.clone());
        id
    }
}
