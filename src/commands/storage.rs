//! Storage Commands
//!
//! Device identity persisted in `localStorage`.

use log::warn;
use wedding_registry::IdentityStore;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// `IdentityStore` backed by one `localStorage` key
#[derive(Debug, Clone)]
pub struct LocalStorageIdentity {
    key: String,
}

impl LocalStorageIdentity {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl IdentityStore for LocalStorageIdentity {
    fn load(&self) -> Option<String> {
        match local_storage()?.get_item(&self.key) {
            Ok(value) => value,
            Err(e) => {
                // private mode / blocked storage
                warn!("[STORAGE] read {} failed: {:?}", self.key, e);
                None
            }
        }
    }

    fn save(&self, value: &str) -> Result<(), String> {
        let storage = local_storage().ok_or("localStorage unavailable")?;
        storage
            .set_item(&self.key, value)
            .map_err(|e| format!("{:?}", e))
    }
}
