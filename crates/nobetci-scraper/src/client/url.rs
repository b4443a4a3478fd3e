//! Widget endpoint URL construction.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::ScraperError;

/// Everything except ASCII alphanumerics and `-._~` is escaped.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Theme colours requested from the widget. They do not affect the markup
/// structure but are part of the endpoint's expected query.
const THEME_PRIMARY: &str = "00d2d3";
const THEME_SECONDARY: &str = "17a2b8";

/// Builds the `new-iframe` URL for a city and locality.
///
/// # Errors
///
/// Returns [`ScraperError::InvalidBaseUrl`] if `base_url` is not an absolute
/// http(s) URL.
pub(crate) fn widget_url(base_url: &str, city: &str, locality: &str) -> Result<String, ScraperError> {
    let parsed = reqwest::Url::parse(base_url).map_err(|e| ScraperError::InvalidBaseUrl {
        base_url: base_url.to_owned(),
        reason: e.to_string(),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(ScraperError::InvalidBaseUrl {
            base_url: base_url.to_owned(),
            reason: format!("unsupported scheme \"{}\"", parsed.scheme()),
        });
    }

    let base = base_url.trim_end_matches('/');
    let city = utf8_percent_encode(city, QUERY_VALUE);
    let county = utf8_percent_encode(locality, QUERY_VALUE);
    Ok(format!(
        "{base}/api/new-iframe?type=default-iframe&city={city}&county={county}&color1={THEME_PRIMARY}&color2={THEME_SECONDARY}"
    ))
}
