//! One-shot fetch for the configured locality.

use nobetci_core::AppConfig;
use nobetci_scraper::{FetchRequest, PharmacyClient};

use crate::output::print_slots;

/// Fetch once and print every configured slot.
///
/// # Errors
///
/// Returns an error if the client cannot be built or the source cannot be
/// reached. An empty listing is printed, not treated as an error.
pub(crate) async fn run_fetch(config: &AppConfig, json: bool) -> anyhow::Result<()> {
    let client = PharmacyClient::new(
        &config.source.source_base_url,
        config.source.request_timeout_secs,
        &config.source.user_agent,
    )
    .map_err(|e| anyhow::anyhow!("failed to build pharmacy client: {e}"))?;

    let request = FetchRequest::from_settings(&config.settings);
    let records = client
        .fetch_pharmacies(&request)
        .await
        .map_err(|e| anyhow::anyhow!("cannot reach duty pharmacy source: {e}"))?;

    print_slots(&records, usize::from(config.settings.sensor_count), json)
}
