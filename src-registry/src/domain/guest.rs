//! Guest Entity
//!
//! The invitee behind a personal link. The sheet has carried a few shapes over
//! time (single `name`/`ime`, `groupName` + `displayName`); all of them are
//! folded into one `Guest` here so the views never branch on them.

use serde::{Deserialize, Serialize};

use super::error::{RegistryError, RegistryResult};
use super::lenient::{lenient_bool, lenient_i64, string_or_empty};

/// Display name used for the general church-only invitation
pub const GENERAL_INVITE_NAME: &str = "SPLOSNO_CERKVENA";

/// Which parts of the day an invitation covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Invites {
    pub cerkvena: bool,
    pub civilna: bool,
    pub ohcet: bool,
}

impl Invites {
    pub fn any(&self) -> bool {
        self.cerkvena || self.civilna || self.ohcet
    }
}

/// Normalized invitee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guest {
    pub token: String,
    pub display_name: String,
    /// Upper bound for the RSVP party size, at least 1
    pub max_guests: u32,
    /// Expected party size, within `1..=max_guests`
    pub likely_guests: u32,
    pub invites: Invites,
    pub invited_label: Option<String>,
}

impl Guest {
    /// General invitation without a personal greeting
    pub fn is_general(&self) -> bool {
        self.display_name == GENERAL_INVITE_NAME
    }
}

/// Guest record as the script returns it
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawGuest {
    #[serde(default, deserialize_with = "string_or_empty")]
    pub token: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub display_name: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub group_name: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub ime: String,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub max_guests: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub likely_guests: Option<i64>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub cerkvena_invited: bool,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub civilna_invited: bool,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub ohcet_invited: bool,
    #[serde(default, deserialize_with = "string_or_empty")]
    pub invited_label: String,
}

impl RawGuest {
    /// Fold the record into a `Guest`; `token` fills in when the record omits it
    pub fn normalize(self, token: &str) -> RegistryResult<Guest> {
        let display_name = [&self.display_name, &self.group_name, &self.name, &self.ime]
            .into_iter()
            .map(|s| s.split_whitespace().collect::<Vec<_>>().join(" "))
            .find(|s| !s.is_empty())
            .ok_or_else(|| RegistryError::Malformed("guest record has no name".to_string()))?;

        let max_guests = match self.max_guests {
            Some(n) if n >= 1 => n.min(u32::MAX as i64) as u32,
            _ => 1,
        };
        let likely_guests = self
            .likely_guests
            .filter(|n| *n >= 1)
            .map(|n| n.min(max_guests as i64) as u32)
            .unwrap_or(max_guests);

        let token = if self.token.trim().is_empty() {
            token.trim().to_string()
        } else {
            self.token.trim().to_string()
        };

        let invited_label = Some(self.invited_label.trim().to_string()).filter(|l| !l.is_empty());

        Ok(Guest {
            token,
            display_name,
            max_guests,
            likely_guests,
            invites: Invites {
                cerkvena: self.cerkvena_invited,
                civilna: self.civilna_invited,
                ohcet: self.ohcet_invited,
            },
            invited_label,
        })
    }
}
