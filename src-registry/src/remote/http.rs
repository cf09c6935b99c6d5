//! HTTP Endpoint
//!
//! `reqwest`-backed implementation of `RegistryEndpoint` against the
//! spreadsheet script. Works natively and on wasm32 (fetch).

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::header::CONTENT_TYPE;

use crate::config::SiteConfig;
use crate::domain::{GiftItem, RawGuest, RegistryError, RegistryResult};
use crate::rsvp::RsvpSubmission;
use super::traits::RegistryEndpoint;
use super::wire::{self, PostBody, ToggleRequest};

/// Plain-text content type keeps the POST a "simple" request for the script host
const POST_CONTENT_TYPE: &str = "text/plain;charset=utf-8";

/// Script endpoint reached over HTTP
#[derive(Clone)]
pub struct HttpEndpoint {
    client: reqwest::Client,
    url: String,
    timeout: Duration,
}

impl HttpEndpoint {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            timeout,
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.endpoint.clone(), config.request_timeout())
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn get(&self, query: &[(&str, &str)]) -> RegistryResult<(u16, String)> {
        let response = self
            .client
            .get(&self.url)
            .query(query)
            .timeout(self.timeout)
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!("GET op={:?} -> {}", query.first().map(|(_, v)| *v), status);
        Ok((status, body))
    }

    async fn post(&self, body: &PostBody<'_>) -> RegistryResult<(u16, String)> {
        let payload = serde_json::to_string(body)?;
        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, POST_CONTENT_TYPE)
            .body(payload)
            .timeout(self.timeout)
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!("POST -> {}", status);
        Ok((status, body))
    }
}

#[async_trait(?Send)]
impl RegistryEndpoint for HttpEndpoint {
    async fn fetch_wishlist(&self) -> RegistryResult<Vec<GiftItem>> {
        let (status, body) = self.get(&[("op", "wishlist")]).await?;
        wire::decode_wishlist(status, &body)
    }

    async fn toggle(&self, request: &ToggleRequest) -> RegistryResult<()> {
        let (status, body) = self.post(&PostBody::Toggle(request)).await?;
        wire::decode_ack(status, &body).map_err(|e| {
            warn!("toggle {} rejected: {}", request.id, e);
            e
        })
    }

    async fn lookup_guest(&self, token: &str) -> RegistryResult<RawGuest> {
        if token.trim().is_empty() {
            return Err(RegistryError::MissingToken);
        }
        let (status, body) = self.get(&[("op", "guest"), ("t", token)]).await?;
        wire::decode_guest(status, &body)
    }

    async fn submit_rsvp(&self, submission: &RsvpSubmission) -> RegistryResult<()> {
        let (status, body) = self.post(&PostBody::Rsvp(submission)).await?;
        wire::decode_ack(status, &body)
    }
}
