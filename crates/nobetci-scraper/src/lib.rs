pub mod client;
pub mod error;
pub mod extract;
pub mod phone;
pub mod setup;
pub mod slots;
pub mod snapshot;
pub mod types;

pub use client::blocking::BlockingPharmacyClient;
pub use client::{PharmacyClient, DEFAULT_TIMEOUT_SECS};
pub use error::ScraperError;
pub use extract::extract_pharmacies;
pub use phone::{format_phone_for_display, normalize_phone};
pub use setup::{validate_setup, SetupError, ValidatedSetup};
pub use slots::{slot, slot_label, slots, PharmacySlot};
pub use snapshot::{PollOutcome, Snapshot, SnapshotStore};
pub use types::{FetchRequest, PharmacyRecord};
