//! Wedding Registry
//!
//! Everything behind the invitation site that is not rendering:
//! - domain: gifts, guests, identity, errors
//! - remote: the guest/wishlist script (HTTP and in-memory)
//! - sync: the gift claim synchronizer
//! - guest-facing helpers: token, rsvp, invitation, countdown, events
//!
//! Platform independent; the site supplies storage, timers and rendering.

pub mod config;
pub mod countdown;
pub mod domain;
pub mod events;
pub mod identity;
pub mod invitation;
pub mod remote;
pub mod rsvp;
pub mod sync;
pub mod token;

use log::{debug, info};

pub use config::SiteConfig;
pub use domain::{
    ClaimState, GiftItem, Guest, Invites, ItemStatus, LocalIdentity, RegistryError, RegistryResult,
};
pub use identity::{IdentityStore, MemoryIdentityStore};
pub use remote::{HttpEndpoint, RegistryEndpoint};
pub use sync::{GiftRegistry, Notice, RegistryObserver, RegistrySnapshot};

/// Resolve the guest behind a link token
///
/// No token means an anonymous visit and no request is made.
pub async fn lookup_guest<E: RegistryEndpoint + ?Sized>(
    endpoint: &E,
    token: Option<&str>,
) -> RegistryResult<Guest> {
    let token = token.map(str::trim).filter(|t| !t.is_empty()).ok_or(RegistryError::MissingToken)?;
    let raw = endpoint.lookup_guest(token).await?;
    let guest = raw.normalize(token)?;
    info!("guest link resolved for {}", guest.display_name);
    debug!("guest invites: {:?}", guest.invites);
    Ok(guest)
}
