//! Per-installation pharmacy settings: which locality to query and how many
//! slots to expose.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

pub const MIN_SENSOR_COUNT: u8 = 1;
pub const MAX_SENSOR_COUNT: u8 = 20;
pub const DEFAULT_SENSOR_COUNT: u8 = 5;

/// Clamps a requested record limit into `MIN_SENSOR_COUNT..=MAX_SENSOR_COUNT`.
#[must_use]
pub fn clamp_limit(requested: i64) -> usize {
    let clamped = requested.clamp(i64::from(MIN_SENSOR_COUNT), i64::from(MAX_SENSOR_COUNT));
    // Bounded to 1..=20 above, so the conversion cannot fail.
    usize::try_from(clamped).unwrap_or(usize::from(DEFAULT_SENSOR_COUNT))
}

/// How often the poller refreshes the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpdateInterval {
    #[default]
    Hourly,
    Daily,
}

impl UpdateInterval {
    #[must_use]
    pub fn as_secs(self) -> u64 {
        match self {
            UpdateInterval::Hourly => 3_600,
            UpdateInterval::Daily => 86_400,
        }
    }

    /// Maps a seconds value onto one of the supported intervals.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUpdateInterval`] for anything other than
    /// 3600 or 86400.
    pub fn from_secs(secs: u64) -> Result<Self, ConfigError> {
        match secs {
            3_600 => Ok(UpdateInterval::Hourly),
            86_400 => Ok(UpdateInterval::Daily),
            other => Err(ConfigError::InvalidUpdateInterval(other)),
        }
    }
}

impl std::fmt::Display for UpdateInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpdateInterval::Hourly => write!(f, "hourly"),
            UpdateInterval::Daily => write!(f, "daily"),
        }
    }
}

/// Validated locality and slot settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PharmacySettings {
    pub city: String,
    pub district: String,
    pub sensor_count: u8,
    pub update_interval: UpdateInterval,
}

impl PharmacySettings {
    /// Trims `city`/`district` and checks the sensor count bounds.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::EmptyCity`] if `city` is blank after trimming.
    /// - [`ConfigError::SensorCountOutOfRange`] if `sensor_count` is outside 1..=20.
    pub fn new(
        city: &str,
        district: &str,
        sensor_count: i64,
        update_interval: UpdateInterval,
    ) -> Result<Self, ConfigError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(ConfigError::EmptyCity);
        }
        let sensor_count = u8::try_from(sensor_count)
            .ok()
            .filter(|n| (MIN_SENSOR_COUNT..=MAX_SENSOR_COUNT).contains(n))
            .ok_or(ConfigError::SensorCountOutOfRange(sensor_count))?;

        Ok(Self {
            city: city.to_owned(),
            district: district.trim().to_owned(),
            sensor_count,
            update_interval,
        })
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

    /// Display title for this installation.
    #[must_use]
    pub fn title(&self) -> String {
        format!("Nöbetçi Eczane - {}", self.city)
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
