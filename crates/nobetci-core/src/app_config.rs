use crate::settings::PharmacySettings;

/// Default upstream host for the duty-pharmacy widget.
pub const DEFAULT_SOURCE_BASE_URL: &str = "https://eczaneleri.net";

/// Identifying `User-Agent` sent with every widget request. Upstream serves
/// the widget to browser-like clients.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Where and how to reach the widget, plus logging. Needs no locality, so
/// setup validation can load it before settings exist.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub log_level: String,
    pub source_base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub settings: PharmacySettings,
    pub source: SourceConfig,
}
