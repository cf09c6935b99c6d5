//! Guest Commands

use log::warn;
use wedding_registry::{HttpEndpoint, RegistryError};

use crate::context::GuestStatus;
use crate::texts;

/// Resolve the link token into the guest status shown by the page
pub async fn load_guest(endpoint: &HttpEndpoint, token: Option<String>) -> GuestStatus {
    match wedding_registry::lookup_guest(endpoint, token.as_deref()).await {
        Ok(guest) => GuestStatus::Found(guest),
        Err(RegistryError::MissingToken) => GuestStatus::Anonymous,
        Err(e) => {
            warn!("[GUEST] lookup failed: {}", e);
            GuestStatus::Invalid(texts::error_text(&e))
        }
    }
}
