//! First-run validation command.

use nobetci_core::{SourceConfig, UpdateInterval};
use nobetci_scraper::{validate_setup, BlockingPharmacyClient, SetupError};

/// Validate user-supplied settings with one blocking fetch on a worker thread.
///
/// "Cannot connect" is reported separately from invalid settings; an empty
/// listing is accepted.
///
/// # Errors
///
/// Returns an error for invalid settings or an unreachable source.
pub(crate) async fn run_validate(
    source: SourceConfig,
    city: String,
    district: String,
    sensor_count: i64,
    update_interval_secs: u64,
) -> anyhow::Result<()> {
    let update_interval = UpdateInterval::from_secs(update_interval_secs)?;

    let outcome = tokio::task::spawn_blocking(move || {
        let client = BlockingPharmacyClient::new(
            &source.source_base_url,
            source.request_timeout_secs,
            &source.user_agent,
        )?;
        Ok::<_, anyhow::Error>(validate_setup(
            &client,
            &city,
            &district,
            sensor_count,
            update_interval,
        ))
    })
    .await??;

    match outcome {
        Ok(setup) => {
            println!(
                "ok: {} ({}, {} slots, {} update) - {} pharmacies listed now",
                setup.title,
                setup.settings.locality(),
                setup.settings.sensor_count,
                setup.settings.update_interval,
                setup.pharmacies_found
            );
            Ok(())
        }
        Err(SetupError::CannotConnect(e)) => {
            tracing::error!(error = %e, "setup validation could not reach the source");
            anyhow::bail!("cannot connect: {e}")
        }
        Err(e @ SetupError::InvalidSettings(_)) => Err(e.into()),
    }
}
