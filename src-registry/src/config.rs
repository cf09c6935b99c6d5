//! Site Configuration
//!
//! A static site has no runtime environment, so overrides come from the build
//! (`WEDDING_ENDPOINT`, `WEDDING_RSVP_SOURCE`) or from a JSON document.

use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::domain::RegistryResult;

/// Script URL used when the build does not provide one
pub const DEFAULT_ENDPOINT: &str = "https://script.google.com/macros/s/wedding-registry/exec";

/// localStorage key holding the device identity
pub const DEFAULT_IDENTITY_KEY: &str = "wedding.gift-registry.identity";

const DEFAULT_POLL_INTERVAL_MS: u64 = 20_000;
/// Shorter intervals fall back to the default
const MIN_POLL_INTERVAL_MS: u64 = 1_000;
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 12_000;
const REQUEST_TIMEOUT_RANGE_MS: (u64, u64) = (1_000, 30_000);

fn poll_interval_ms(value: u64) -> u64 {
    if value < MIN_POLL_INTERVAL_MS {
        DEFAULT_POLL_INTERVAL_MS
    } else {
        value
    }
}

fn request_timeout_ms(value: u64) -> u64 {
    value.clamp(REQUEST_TIMEOUT_RANGE_MS.0, REQUEST_TIMEOUT_RANGE_MS.1)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Guest/wishlist script URL
    pub endpoint: String,
    /// Background wishlist refresh
    pub poll_interval_ms: u64,
    /// Upper bound for any single request
    pub request_timeout_ms: u64,
    pub identity_key: String,
    /// Written to the `source` column of every RSVP row
    pub rsvp_source: String,
    /// Countdown target
    pub wedding_at: DateTime<Utc>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            identity_key: DEFAULT_IDENTITY_KEY.to_string(),
            rsvp_source: "web".to_string(),
            wedding_at: Utc.with_ymd_and_hms(2026, 7, 11, 10, 0, 0).single().unwrap_or_default(),
        }
    }
}

impl SiteConfig {
    /// Defaults with build-time overrides applied
    pub fn from_build_env() -> Self {
        let mut config = Self::default();
        if let Some(endpoint) = option_env!("WEDDING_ENDPOINT").filter(|s| !s.trim().is_empty()) {
            config.endpoint = endpoint.trim().to_string();
        }
        if let Some(source) = option_env!("WEDDING_RSVP_SOURCE").filter(|s| !s.trim().is_empty()) {
            config.rsvp_source = source.trim().to_string();
        }
        config
    }

    /// Parse a (possibly partial) JSON config; missing fields keep defaults
    ///
    /// Out-of-range intervals are replaced: a poll interval under one second
    /// becomes the default, the request timeout is clamped to 1..=30 s.
    pub fn from_json(json: &str) -> RegistryResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    fn sanitized(mut self) -> Self {
        let poll = poll_interval_ms(self.poll_interval_ms);
        let timeout = request_timeout_ms(self.request_timeout_ms);
        if poll != self.poll_interval_ms || timeout != self.request_timeout_ms {
            warn!(
                "config intervals adjusted: poll {} -> {} ms, timeout {} -> {} ms",
                self.poll_interval_ms, poll, self.request_timeout_ms, timeout
            );
        }
        self.poll_interval_ms = poll;
        self.request_timeout_ms = timeout;
        self
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(poll_interval_ms(self.poll_interval_ms))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(request_timeout_ms(self.request_timeout_ms))
    }
}
