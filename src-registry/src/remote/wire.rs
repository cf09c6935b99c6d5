//! Wire Contract
//!
//! Request bodies and response envelopes of the guest/wishlist script.
//! Every response is `{ ok: bool, error?: string, ... }`.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::domain::lenient::{lenient_bool, lenient_i64, string_or_empty, string_or_number};
use crate::domain::{GiftItem, RawGuest, RegistryError, RegistryResult};
use crate::rsvp::RsvpSubmission;

/// Body of a claim/release request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToggleRequest {
    pub id: String,
    pub taken: bool,
    #[serde(rename = "takenBy")]
    pub taken_by: String,
}

/// Everything that goes out as a POST, tagged with `op`
#[derive(Debug, Serialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub(crate) enum PostBody<'a> {
    Toggle(&'a ToggleRequest),
    Rsvp(&'a RsvpSubmission),
}

/// Common part of every response
pub(crate) trait Envelope {
    fn ok(&self) -> bool;
    fn error(&mut self) -> Option<String>;
}

#[derive(Debug, Deserialize)]
pub(crate) struct Ack {
    #[serde(default)]
    ok: bool,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct WishlistResponse {
    #[serde(default)]
    ok: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default, rename = "wishlistOrdered")]
    wishlist_ordered: Option<Vec<RawGiftItem>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GuestResponse {
    #[serde(default)]
    ok: bool,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    guest: Option<RawGuest>,
}

macro_rules! envelope {
    ($($ty:ty),*) => {
        $(impl Envelope for $ty {
            fn ok(&self) -> bool {
                self.ok
            }

            fn error(&mut self) -> Option<String> {
                self.error.take().map(|e| e.trim().to_string()).filter(|e| !e.is_empty())
            }
        })*
    };
}

envelope!(Ack, WishlistResponse, GuestResponse);

/// Gift row as the script returns it
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawGiftItem {
    #[serde(default, deserialize_with = "string_or_number")]
    id: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    name: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    url: String,
    #[serde(default, deserialize_with = "string_or_empty")]
    category: String,
    #[serde(default, deserialize_with = "lenient_bool")]
    taken: bool,
    #[serde(default, deserialize_with = "string_or_empty")]
    taken_by: String,
    #[serde(default, deserialize_with = "lenient_i64")]
    order: Option<i64>,
}

impl From<RawGiftItem> for GiftItem {
    fn from(raw: RawGiftItem) -> Self {
        GiftItem {
            id: raw.id.trim().to_string(),
            name: raw.name.trim().to_string(),
            url: Some(raw.url),
            category: raw.category,
            taken: raw.taken,
            taken_by: raw.taken_by,
            order: raw.order,
        }
        .normalized()
    }
}

/// Check status and envelope, yielding the decoded body on success
pub(crate) fn decode<T>(status: u16, body: &str) -> RegistryResult<T>
where
    T: Envelope + for<'de> Deserialize<'de>,
{
    let success = (200..300).contains(&status);
    let mut parsed: T = match serde_json::from_str(body) {
        Ok(parsed) => parsed,
        Err(_) if !success => return Err(RegistryError::Status(status)),
        Err(e) => return Err(e.into()),
    };
    if success && parsed.ok() {
        return Ok(parsed);
    }
    match parsed.error() {
        Some(msg) => Err(RegistryError::Server(Some(msg))),
        None if !success => Err(RegistryError::Status(status)),
        None => Err(RegistryError::Server(None)),
    }
}

pub(crate) fn decode_ack(status: u16, body: &str) -> RegistryResult<()> {
    decode::<Ack>(status, body).map(|_| ())
}

pub(crate) fn decode_wishlist(status: u16, body: &str) -> RegistryResult<Vec<GiftItem>> {
    let response: WishlistResponse = decode(status, body)?;
    let rows = response
        .wishlist_ordered
        .ok_or_else(|| RegistryError::Malformed("missing wishlistOrdered".to_string()))?;

    let mut items = Vec::with_capacity(rows.len());
    for raw in rows {
        let item = GiftItem::from(raw);
        if item.id.is_empty() {
            warn!("dropping wishlist row without id: {:?}", item.name);
            continue;
        }
        items.push(item);
    }
    Ok(items)
}

pub(crate) fn decode_guest(status: u16, body: &str) -> RegistryResult<RawGuest> {
    let response: GuestResponse = decode(status, body)?;
    response
        .guest
        .ok_or_else(|| RegistryError::Malformed("missing guest".to_string()))
}
