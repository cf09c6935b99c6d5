//! Remote Layer - Core Trait
//!
//! The guest/wishlist script is an opaque collaborator; this is the whole of
//! what the site needs from it. Implementations: HTTP (`reqwest`) and
//! in-memory.

use async_trait::async_trait;

use crate::domain::{GiftItem, RawGuest, RegistryResult};
use crate::rsvp::RsvpSubmission;
use super::wire::ToggleRequest;

/// Operations offered by the remote endpoint
///
/// Futures are `?Send`: the site runs on the browser's single-threaded loop.
#[async_trait(?Send)]
pub trait RegistryEndpoint {
    /// Full wishlist snapshot, in server order
    async fn fetch_wishlist(&self) -> RegistryResult<Vec<GiftItem>>;

    /// Claim or release one item
    async fn toggle(&self, request: &ToggleRequest) -> RegistryResult<()>;

    /// Guest record behind a link token
    async fn lookup_guest(&self, token: &str) -> RegistryResult<RawGuest>;

    /// Store an RSVP answer
    async fn submit_rsvp(&self, submission: &RsvpSubmission) -> RegistryResult<()>;
}

#[async_trait(?Send)]
impl<T: RegistryEndpoint + ?Sized> RegistryEndpoint for std::rc::Rc<T> {
    async fn fetch_wishlist(&self) -> RegistryResult<Vec<GiftItem>> {
        (**self).fetch_wishlist().await
    }

    async fn toggle(&self, request: &ToggleRequest) -> RegistryResult<()> {
        (**self).toggle(request).await
    }

    async fn lookup_guest(&self, token: &str) -> RegistryResult<RawGuest> {
        (**self).lookup_guest(token).await
    }

    async fn submit_rsvp(&self, submission: &RsvpSubmission) -> RegistryResult<()> {
        (**self).submit_rsvp(submission).await
    }
}
