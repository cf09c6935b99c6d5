//! Domain Layer
//!
//! Entities shared by every view of the site and the errors around them.
//! No I/O lives here.

mod error;
mod gift;
mod guest;
pub(crate) mod lenient;

pub use error::{RegistryError, RegistryResult};
pub use gift::{ClaimState, GiftItem, ItemStatus, LocalIdentity, FALLBACK_CATEGORY};
pub use guest::{Guest, Invites, RawGuest, GENERAL_INVITE_NAME};
