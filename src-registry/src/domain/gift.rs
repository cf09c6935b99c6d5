//! Gift Entity
//!
//! A wishlist entry shared by every guest, and the per-device view of who
//! holds it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category used when the sheet leaves the column blank
pub const FALLBACK_CATEGORY: &str = "Other";

/// A gift on the shared wishlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GiftItem {
    /// Stable identifier, unique within the list
    pub id: String,
    pub name: String,
    /// Shop link, if any
    pub url: Option<String>,
    /// Grouping label, never blank
    pub category: String,
    pub taken: bool,
    /// Identity of the claiming device; empty when not taken
    pub taken_by: String,
    /// Explicit ordering from the sheet, when it has one
    pub order: Option<i64>,
}

impl GiftItem {
    /// Create an unclaimed item in the fallback category
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            url: None,
            category: FALLBACK_CATEGORY.to_string(),
            taken: false,
            taken_by: String::new(),
            order: None,
        }
    }

    pub fn with_category(mut self, category: Option<&str>) -> Self {
        self.category = normalize_category(category);
        self
    }

    /// Restore `taken == false => taken_by == ""` and the category fallback
    pub fn normalized(mut self) -> Self {
        if !self.taken {
            self.taken_by.clear();
        }
        self.taken_by = self.taken_by.trim().to_string();
        self.category = normalize_category(Some(&self.category));
        self.url = self.url.take().map(|u| u.trim().to_string()).filter(|u| !u.is_empty());
        self
    }

    /// Derive the claim state as seen by `identity`
    ///
    /// A taken item with no owner is locked for everyone.
    pub fn claim_state(&self, identity: Option<&LocalIdentity>) -> ClaimState {
        if !self.taken {
            return ClaimState::Unclaimed;
        }
        match identity {
            Some(me) if !self.taken_by.is_empty() && self.taken_by == me.as_str() => {
                ClaimState::ClaimedByMe
            }
            _ => ClaimState::ClaimedByOther,
        }
    }

    /// Apply a local claim/release before the server has confirmed it
    pub fn apply_optimistic(&mut self, want_taken: bool, identity: &LocalIdentity) {
        self.taken = want_taken;
        if want_taken {
            self.taken_by = identity.as_str().to_string();
        } else {
            self.taken_by.clear();
        }
    }
}

fn normalize_category(category: Option<&str>) -> String {
    match category.map(str::trim) {
        Some(c) if !c.is_empty() => c.to_string(),
        _ => FALLBACK_CATEGORY.to_string(),
    }
}

/// Claim state of an item relative to this device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimState {
    Unclaimed,
    ClaimedByMe,
    ClaimedByOther,
}

/// Claim state plus the transient states while a toggle is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ItemStatus {
    Unclaimed,
    ClaimedByMe,
    ClaimedByOther,
    PendingClaim,
    PendingRelease,
}

impl ItemStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, ItemStatus::PendingClaim | ItemStatus::PendingRelease)
    }

    /// Whether this device may toggle the item right now
    pub fn is_actionable(&self) -> bool {
        matches!(self, ItemStatus::Unclaimed | ItemStatus::ClaimedByMe)
    }
}

impl From<ClaimState> for ItemStatus {
    fn from(state: ClaimState) -> Self {
        match state {
            ClaimState::Unclaimed => ItemStatus::Unclaimed,
            ClaimState::ClaimedByMe => ItemStatus::ClaimedByMe,
            ClaimState::ClaimedByOther => ItemStatus::ClaimedByOther,
        }
    }
}

/// Per-device identity used to attribute claims without a login
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocalIdentity(String);

impl LocalIdentity {
    /// Fresh random identity (UUID v4, hyphenless)
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    /// Wrap a stored value; blank values are rejected
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            None
        } else {
            Some(Self(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LocalIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
