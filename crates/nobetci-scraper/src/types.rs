//! Request and record types for the duty-pharmacy pipeline.

use nobetci_core::{clamp_limit, PharmacySettings};
use serde::{Deserialize, Serialize};

use crate::error::ScraperError;

/// One on-duty pharmacy entry extracted from the widget markup.
///
/// `name` is never empty; the extractor drops blocks it cannot name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PharmacyRecord {
    pub name: String,
    pub address: String,
    /// Digits only, domestic form (`0XXXXXXXXXX`) when recognisable.
    pub phone: String,
    pub map_link: String,
    /// `"{city} / {district_or_city}"`.
    pub region_label: String,
}

/// Parameters for a single poll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    city: String,
    district: String,
    limit: usize,
}

impl FetchRequest {
    /// Trims `city`/`district` and clamps `limit` into 1..=20.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::EmptyCity`] when `city` is blank after trimming.
    pub fn new(city: &str, district: &str, limit: i64) -> Result<Self, ScraperError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(ScraperError::EmptyCity);
        }
        Ok(Self {
            city: city.to_owned(),
            district: district.trim().to_owned(),
            limit: clamp_limit(limit),
        })
    }

    /// Builds the request for one poll cycle from stored settings.
    #[must_use]
    pub fn from_settings(settings: &PharmacySettings) -> Self {
        Self {
            city: settings.city.clone(),
            district: settings.district.clone(),
            limit: clamp_limit(i64::from(settings.sensor_count)),
        }
    }

    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    #[must_use]
    pub fn district(&self) -> &str {
        &self.district
    }

    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// District when set, otherwise the city.
    #[must_use]
    pub fn locality(&self) -> &str {
        if self.district.is_empty() {
            &self.city
        } else {
            &self.district
        }
    }
}
