//! HTTP clients for the duty-pharmacy widget endpoint.
//!
//! [`PharmacyClient`] awaits the request on the caller's runtime;
//! [`blocking::BlockingPharmacyClient`] issues it on the calling thread for
//! thread-pool offload. Both share URL building, status handling, body
//! decoding and extraction.

pub mod blocking;
mod url;

use std::time::Duration;

use reqwest::{Client, StatusCode};

use crate::error::ScraperError;
use crate::extract::extract_pharmacies;
use crate::types::{FetchRequest, PharmacyRecord};

pub(crate) use url::widget_url;

/// Hard upper bound for one widget request.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Async client for the widget endpoint.
pub struct PharmacyClient {
    client: Client,
    base_url: String,
}

impl PharmacyClient {
    /// Creates a client with the given total timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::InvalidBaseUrl`] if `base_url` cannot be used.
    /// - [`ScraperError::Http`] if the underlying `reqwest::Client` cannot be
    ///   constructed (e.g., invalid TLS config).
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        // Validate once up front so every poll does not fail the same way.
        widget_url(base_url, "", "")?;
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS.min(timeout_secs)))
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.to_owned(),
        })
    }

    /// Fetches the raw widget HTML for `request`.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::UnexpectedStatus`] for any non-2xx status.
    /// - [`ScraperError::Http`] on network failure or timeout.
    pub async fn fetch_html(&self, request: &FetchRequest) -> Result<String, ScraperError> {
        let url = widget_url(&self.base_url, request.city(), request.locality())?;
        tracing::debug!(url = %url, "requesting duty pharmacy widget");

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "text/html,application/xhtml+xml")
            .send()
            .await?;
        check_status(response.status(), &url)?;

        let bytes = response.bytes().await?;
        Ok(decode_body(&bytes))
    }

    /// Fetches and extracts up to `request.limit()` pharmacies.
    ///
    /// An empty vector means the source was reached but listed nothing.
    ///
    /// # Errors
    ///
    /// Same as [`PharmacyClient::fetch_html`]; extraction itself never fails.
    pub async fn fetch_pharmacies(
        &self,
        request: &FetchRequest,
    ) -> Result<Vec<PharmacyRecord>, ScraperError> {
        let html = self.fetch_html(request).await?;
        Ok(records_from_body(&html, request))
    }
}

pub(crate) fn check_status(status: StatusCode, url: &str) -> Result<(), ScraperError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(ScraperError::UnexpectedStatus {
            status: status.as_u16(),
            url: url.to_owned(),
        })
    }
}

/// UTF-8 decode with replacement of invalid sequences.
pub(crate) fn decode_body(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

pub(crate) fn records_from_body(body: &str, request: &FetchRequest) -> Vec<PharmacyRecord> {
    let district = if request.district().is_empty() {
        "-"
    } else {
        request.district()
    };

    if body.trim().is_empty() {
        tracing::warn!(city = request.city(), district, "widget returned an empty body");
        return vec![];
    }

    let pharmacies = extract_pharmacies(body, request.limit(), request.city(), request.locality());
    if pharmacies.is_empty() {
        tracing::warn!(
            city = request.city(),
            district,
            "no duty pharmacies found in widget markup"
        );
    } else {
        tracing::info!(
            count = pharmacies.len(),
            city = request.city(),
            district,
            "fetched duty pharmacies"
        );
    }
    pharmacies
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
