//! Notices and Observers
//!
//! The registry reports outcomes as structured notices; the site turns them
//! into toasts in its own language.

use crate::domain::RegistryError;
use super::registry::RegistrySnapshot;

/// Outcome worth telling the guest about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Claim confirmed by the server
    Claimed { name: String },
    /// Release confirmed by the server
    Released { name: String },
    /// Local view says someone else holds the item; nothing was sent
    ClaimRejected { name: String },
    /// A toggle for the item is still in flight; nothing was sent
    Busy { name: String },
    UnknownItem { id: String },
    LoadFailed(RegistryError),
    ToggleFailed { name: String, error: RegistryError },
}

impl Notice {
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            Notice::LoadFailed(_) | Notice::ToggleFailed { .. } | Notice::UnknownItem { .. }
        )
    }
}

/// Receives state changes and notices from a `GiftRegistry`
///
/// Called synchronously; implementations may read the registry again but
/// must not start new operations from inside the callback.
pub trait RegistryObserver {
    fn on_change(&self, snapshot: &RegistrySnapshot);
    fn on_notice(&self, notice: &Notice);
}
