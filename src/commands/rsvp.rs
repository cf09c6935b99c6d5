//! RSVP Commands

use wedding_registry::rsvp::{self, RsvpForm};
use wedding_registry::HttpEndpoint;

use crate::models::Guest;
use crate::texts;

pub async fn submit_rsvp(
    endpoint: &HttpEndpoint,
    guest: &Guest,
    form: &RsvpForm,
    source: &str,
) -> Result<(), String> {
    rsvp::submit_rsvp(endpoint, guest, form, source)
        .await
        .map_err(|e| texts::error_text(&e))
}
