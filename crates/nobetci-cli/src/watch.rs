//! Periodic polling with manual refresh.
//!
//! A repeating scheduler job refreshes the snapshot on the configured
//! interval; each line on stdin triggers an immediate refresh. A failed poll
//! keeps the previous snapshot on screen.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use nobetci_core::AppConfig;
use nobetci_scraper::{FetchRequest, PharmacyClient, PollOutcome, SnapshotStore};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::Mutex;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::output::print_slots;

struct Poller {
    client: PharmacyClient,
    request: FetchRequest,
    store: Mutex<SnapshotStore>,
    sensor_count: usize,
    json: bool,
}

impl Poller {
    async fn refresh(&self, trigger: &'static str) {
        tracing::info!(trigger, city = self.request.city(), "refreshing duty pharmacies");
        let result = self.client.fetch_pharmacies(&self.request).await;

        let mut store = self.store.lock().await;
        match store.apply(result, Utc::now()) {
            PollOutcome::Updated { count } => {
                tracing::info!(trigger, count, "snapshot updated");
            }
            PollOutcome::Empty => tracing::info!(trigger, "no duty pharmacies listed"),
            PollOutcome::Failed => {
                if store.latest().is_none() {
                    tracing::warn!(trigger, "no data yet; all slots unavailable");
                }
            }
        }

        if let Err(e) = print_slots(store.records(), self.sensor_count, self.json) {
            tracing::error!(error = %e, "failed to print slots");
        }
    }
}

/// Poll until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the client or the scheduler cannot be set up.
pub(crate) async fn run_watch(config: AppConfig, json: bool) -> anyhow::Result<()> {
    let client = PharmacyClient::new(
        &config.source.source_base_url,
        config.source.request_timeout_secs,
        &config.source.user_agent,
    )
    .map_err(|e| anyhow::anyhow!("failed to build pharmacy client: {e}"))?;

    let poller = Arc::new(Poller {
        client,
        request: FetchRequest::from_settings(&config.settings),
        store: Mutex::new(SnapshotStore::new()),
        sensor_count: usize::from(config.settings.sensor_count),
        json,
    });

    poller.refresh("startup").await;

    let mut scheduler = JobScheduler::new().await?;
    let interval = Duration::from_secs(config.settings.update_interval.as_secs());
    let job_poller = Arc::clone(&poller);
    let job = Job::new_repeated_async(interval, move |_uuid, _lock| {
        let poller = Arc::clone(&job_poller);
        Box::pin(async move {
            poller.refresh("scheduled").await;
        })
    })?;
    scheduler.add(job).await?;
    scheduler.start().await?;
    tracing::info!(
        interval = %config.settings.update_interval,
        title = %config.settings.title(),
        "watching; press Enter to refresh now"
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;
    loop {
        tokio::select! {
            line = lines.next_line(), if stdin_open => match line {
                Ok(Some(_)) => poller.refresh("manual").await,
                Ok(None) => stdin_open = false,
                Err(e) => {
                    tracing::warn!(error = %e, "stdin unreadable; manual refresh disabled");
                    stdin_open = false;
                }
            },
            result = tokio::signal::ctrl_c() => {
                if let Err(e) = result {
                    tracing::error!(error = %e, "failed to listen for ctrl-c");
                }
                break;
            }
        }
    }

    scheduler.shutdown().await?;
    Ok(())
}
