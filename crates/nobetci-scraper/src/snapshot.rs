//! Latest known-good poll result.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::ScraperError;
use crate::types::PharmacyRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub records: Vec<PharmacyRecord>,
    pub fetched_at: DateTime<Utc>,
}

/// What a poll did to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    Updated { count: usize },
    /// Source reachable, nothing listed. Replaces the previous snapshot.
    Empty,
    /// Source unreachable. Previous snapshot kept.
    Failed,
}

/// Holds the last successful poll result.
///
/// A failed poll never clears what is already displayed.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    latest: Option<Snapshot>,
    consecutive_failures: u32,
}

impl SnapshotStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(
        &mut self,
        result: Result<Vec<PharmacyRecord>, ScraperError>,
        now: DateTime<Utc>,
    ) -> PollOutcome {
        match result {
            Ok(records) => {
                self.consecutive_failures = 0;
                let outcome = if records.is_empty() {
                    PollOutcome::Empty
                } else {
                    PollOutcome::Updated {
                        count: records.len(),
                    }
                };
                self.latest = Some(Snapshot {
                    records,
                    fetched_at: now,
                });
                outcome
            }
            Err(e) => {
                self.consecutive_failures = self.consecutive_failures.saturating_add(1);
                tracing::error!(
                    error = %e,
                    consecutive_failures = self.consecutive_failures,
                    "duty pharmacy poll failed; keeping previous data"
                );
                PollOutcome::Failed
            }
        }
    }

    #[must_use]
    pub fn latest(&self) -> Option<&Snapshot> {
        self.latest.as_ref()
    }

    /// Records of the latest snapshot, empty before the first success.
    #[must_use]
    pub fn records(&self) -> &[PharmacyRecord] {
        self.latest
            .as_ref()
            .map(|s| s.records.as_slice())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }
}
