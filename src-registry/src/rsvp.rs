//! RSVP
//!
//! Form state and the row written to the RSVP sheet. Column names are the
//! sheet's (Slovenian) headers.

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::domain::{Guest, RegistryResult};
use crate::remote::RegistryEndpoint;

/// Form as the guest fills it in; numeric fields stay text until submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsvpForm {
    pub attending: bool,
    pub party_size: String,
    /// Guess of the church ceremony length, in minutes
    pub ceremony_guess: String,
    pub notes: String,
}

impl RsvpForm {
    /// Initial form for a guest: attending, expected party size prefilled
    pub fn for_guest(guest: &Guest) -> Self {
        Self {
            attending: true,
            party_size: guest.likely_guests.to_string(),
            ceremony_guess: "60".to_string(),
            notes: String::new(),
        }
    }
}

impl Default for RsvpForm {
    fn default() -> Self {
        Self {
            attending: true,
            party_size: "1".to_string(),
            ceremony_guess: "60".to_string(),
            notes: String::new(),
        }
    }
}

/// Row sent with `op: "rsvp"`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RsvpSubmission {
    pub token: String,
    pub ime: String,
    pub udelezba: &'static str,
    #[serde(rename = "stOseb")]
    pub st_oseb: u32,
    pub cerkvena: &'static str,
    pub civilna: &'static str,
    pub ohcet: &'static str,
    pub igra: String,
    pub opombe: String,
    pub source: String,
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "da"
    } else {
        "ne"
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

impl RsvpSubmission {
    /// Normalize a filled-in form for `guest`
    pub fn from_form(guest: &Guest, form: &RsvpForm, source: &str) -> Self {
        let coming = form.attending;

        let st_oseb = if coming {
            let requested = parse_number(&form.party_size).unwrap_or(0.0).trunc();
            requested.clamp(1.0, guest.max_guests as f64) as u32
        } else {
            0
        };

        // Only asked of guests invited to the church ceremony
        let igra = if coming && guest.invites.cerkvena {
            match parse_number(&form.ceremony_guess) {
                Some(n) if n != 0.0 => format_minutes(n),
                _ => String::new(),
            }
        } else {
            String::new()
        };

        Self {
            token: guest.token.clone(),
            ime: guest.display_name.clone(),
            udelezba: yes_no(coming),
            st_oseb,
            cerkvena: yes_no(coming && guest.invites.cerkvena),
            civilna: yes_no(coming && guest.invites.civilna),
            ohcet: yes_no(coming && guest.invites.ohcet),
            igra,
            opombe: form.notes.clone(),
            source: source.to_string(),
        }
    }
}

fn format_minutes(n: f64) -> String {
    if n.fract() == 0.0 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// Submit an answer; one request, no retry
pub async fn submit_rsvp<E: RegistryEndpoint + ?Sized>(
    endpoint: &E,
    guest: &Guest,
    form: &RsvpForm,
    source: &str,
) -> RegistryResult<()> {
    let submission = RsvpSubmission::from_form(guest, form, source);
    match endpoint.submit_rsvp(&submission).await {
        Ok(()) => {
            info!("rsvp stored for {} ({})", guest.display_name, submission.udelezba);
            Ok(())
        }
        Err(e) => {
            warn!("rsvp for {} failed: {}", guest.display_name, e);
            Err(e)
        }
    }
}
