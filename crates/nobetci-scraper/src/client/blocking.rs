//! Blocking transport over the same request and extraction logic.

use std::time::Duration;

use reqwest::blocking::Client;

use super::{check_status, decode_body, records_from_body, widget_url, CONNECT_TIMEOUT_SECS};
use crate::error::ScraperError;
use crate::types::{FetchRequest, PharmacyRecord};

/// Blocking client for the widget endpoint.
///
/// Must not be called from inside an async runtime thread; offload it with
/// `spawn_blocking` or a plain worker thread.
pub struct BlockingPharmacyClient {
    client: Client,
    base_url: String,
}

impl BlockingPharmacyClient {
    /// # Errors
    ///
    /// - [`ScraperError::InvalidBaseUrl`] if `base_url` cannot be used.
    /// - [`ScraperError::Http`] if the client cannot be constructed.
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
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

    /// # Errors
    ///
    /// - [`ScraperError::UnexpectedStatus`] for any non-2xx status.
    /// - [`ScraperError::Http`] on network failure or timeout.
    pub fn fetch_html(&self, request: &FetchRequest) -> Result<String, ScraperError> {
        let url = widget_url(&self.base_url, request.city(), request.locality())?;
        tracing::debug!(url = %url, "requesting duty pharmacy widget (blocking)");

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "text/html,application/xhtml+xml")
            .send()?;
        check_status(response.status(), &url)?;

        let bytes = response.bytes()?;
        Ok(decode_body(&bytes))
    }

    /// # Errors
    ///
    /// Same as [`BlockingPharmacyClient::fetch_html`].
    pub fn fetch_pharmacies(
        &self,
        request: &FetchRequest,
    ) -> Result<Vec<PharmacyRecord>, ScraperError> {
        let html = self.fetch_html(request)?;
        Ok(records_from_body(&html, request))
    }
}
