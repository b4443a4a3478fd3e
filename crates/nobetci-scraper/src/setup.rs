//! First-run validation: check the settings and that the widget answers.

use nobetci_core::{ConfigError, PharmacySettings, UpdateInterval};
use thiserror::Error;

use crate::client::blocking::BlockingPharmacyClient;
use crate::error::ScraperError;
use crate::types::FetchRequest;

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("invalid settings: {0}")]
    InvalidSettings(#[from] ConfigError),

    /// The widget could not be reached. An empty listing is not this error.
    #[error("cannot connect to the duty pharmacy source: {0}")]
    CannotConnect(#[source] ScraperError),
}

/// Settings accepted by [`validate_setup`].
#[derive(Debug, Clone)]
pub struct ValidatedSetup {
    pub title: String,
    pub settings: PharmacySettings,
    /// Pharmacies found during validation; zero is accepted.
    pub pharmacies_found: usize,
}

/// Validates user-supplied settings with one blocking fetch.
///
/// # Errors
///
/// - [`SetupError::InvalidSettings`] for a blank city or a sensor count outside
///   1..=20; no request is made.
/// - [`SetupError::CannotConnect`] when the fetch fails.
pub fn validate_setup(
    client: &BlockingPharmacyClient,
    city: &str,
    district: &str,
    sensor_count: i64,
    update_interval: UpdateInterval,
) -> Result<ValidatedSetup, SetupError> {
    let settings = PharmacySettings::new(city, district, sensor_count, update_interval)?;
    let request = FetchRequest::from_settings(&settings);

    let pharmacies = client
        .fetch_pharmacies(&request)
        .map_err(SetupError::CannotConnect)?;

    if pharmacies.is_empty() {
        tracing::info!(
            city = %settings.city,
            district = %settings.district,
            "no duty pharmacies listed during setup; accepting settings"
        );
    } else {
        tracing::info!(count = pharmacies.len(), "setup validation reached the source");
    }

    Ok(ValidatedSetup {
        title: settings.title(),
        pharmacies_found: pharmacies.len(),
        settings,
    })
}
