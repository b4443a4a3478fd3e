//! Content predicates for list items.
//!
//! Items are classified by what they contain, never by position, so a new
//! upstream markup variant means adding a predicate here.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Selector};

use crate::phone::normalize_phone;

/// Host of the widget provider; links to it carry the pharmacy name.
pub(super) const SOURCE_DOMAIN: &str = "eczaneleri.net";

/// City name that upstream prints in headings and breadcrumbs.
const FILLER_TOKEN: &str = "Tekirdağ";

const ADDRESS_MIN_CHARS: usize = 20;
const ADDRESS_PREFIX_CHARS: usize = 30;
const SITE_NAME_MIN_CHARS: usize = 2;

static LINK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a[href]").expect("valid selector"));
static MAPS_HREF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)google\.com/maps|maps\.google|maps\?q=").expect("valid regex")
});
static DIALLIKE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d\s+\-]+$").expect("valid regex"));

/// Visible text with whitespace runs collapsed and ends trimmed.
pub(super) fn visible_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

pub(super) fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn char_prefix(s: &str, n: usize) -> &str {
    s.char_indices().nth(n).map_or(s, |(i, _)| &s[..i])
}

pub(super) fn is_tel_href(href: &str) -> bool {
    href.get(..4)
        .is_some_and(|scheme| scheme.eq_ignore_ascii_case("tel:"))
}

pub(super) fn is_maps_href(href: &str) -> bool {
    MAPS_HREF_RE.is_match(href)
}

pub(super) fn is_site_href(href: &str) -> bool {
    let lower = href.to_lowercase();
    lower.contains(SOURCE_DOMAIN) && !lower.contains("iframe")
}

/// Long free text that is not a link, a heading or a "City - District" line.
pub(super) fn is_address_text(text: &str) -> bool {
    let prefix = char_prefix(text, ADDRESS_PREFIX_CHARS);
    char_len(text) > ADDRESS_MIN_CHARS
        && !text.starts_with("http")
        && !prefix.contains(FILLER_TOKEN)
        && !prefix.contains(" - ")
}

/// Short text that could plausibly be a pharmacy name.
pub(super) fn is_name_like(text: &str) -> bool {
    (3..=80).contains(&char_len(text))
        && !text.starts_with('0')
        && !text.contains("Yol Tarifi")
        && text != "Ara"
        && !DIALLIKE_RE.is_match(text)
        && !text.contains("http")
}

/// Everything one list item tells us about the pharmacy card.
#[derive(Debug, Default)]
pub(super) struct ItemEvidence {
    pub text: String,
    /// Normalised phone from a `tel:` link.
    pub phone: Option<String>,
    pub map_link: Option<String>,
    /// Link text of a source-site detail link.
    pub site_name: Option<String>,
}

impl ItemEvidence {
    pub(super) fn inspect(item: ElementRef<'_>) -> Self {
        let mut evidence = ItemEvidence {
            text: visible_text(item),
            ..ItemEvidence::default()
        };

        for link in item.select(&LINK_SELECTOR) {
            let Some(href) = link.value().attr("href") else {
                continue;
            };

            if evidence.phone.is_none() && is_tel_href(href) {
                let label = visible_text(link);
                // Call buttons often read "Ara"; fall back to the href digits.
                let source = if label.chars().any(|c| c.is_ascii_digit()) {
                    label.as_str()
                } else {
                    &href[4..]
                };
                evidence.phone = Some(normalize_phone(source.trim()));
            }

            if evidence.map_link.is_none() && is_maps_href(href) {
                evidence.map_link = Some(href.trim().to_owned());
            }

            if evidence.site_name.is_none() && is_site_href(href) {
                let label = visible_text(link);
                if char_len(&label) > SITE_NAME_MIN_CHARS {
                    evidence.site_name = Some(label);
                }
            }
        }

        evidence
    }

    /// The item's text when it qualifies as an address.
    pub(super) fn address_candidate(&self) -> Option<&str> {
        if self.phone.is_some() || self.map_link.is_some() {
            return None;
        }
        is_address_text(&self.text).then_some(self.text.as_str())
    }
}

#[cfg(test)]
#[path = "evidence_test.rs"]
mod tests;
