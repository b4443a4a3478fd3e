//! Pharmacy card extraction from the widget HTML.
//!
//! Upstream markup has no schema and has shipped at least two list layouts,
//! so containers are located with a two-tier class match and every list item
//! is classified by its content (see [`evidence`]).

mod evidence;

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::types::PharmacyRecord;
use evidence::{is_name_like, ItemEvidence};

/// Blocks with fewer items are navigation or headers, not pharmacy cards.
const MIN_ITEMS_PER_BLOCK: usize = 2;

static LIST_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("ul, ol").expect("valid selector"));

/// Extracts up to `limit` pharmacy records from the widget HTML, in document
/// order.
///
/// `city` and `locality` only feed the `region_label` of each record.
/// Markup that yields no usable blocks produces an empty vector.
#[must_use]
pub fn extract_pharmacies(
    html: &str,
    limit: usize,
    city: &str,
    locality: &str,
) -> Vec<PharmacyRecord> {
    let document = Html::parse_document(html);
    let region_label = format!("{city} / {locality}");

    let mut pharmacies = Vec::new();
    for container in list_containers(&document) {
        if pharmacies.len() >= limit {
            break;
        }

        let items: Vec<ElementRef<'_>> = container
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|child| child.value().name() == "li")
            .collect();
        if items.len() < MIN_ITEMS_PER_BLOCK {
            continue;
        }

        if let Some(record) = record_from_items(&items, &region_label) {
            pharmacies.push(record);
        }
    }

    tracing::debug!(
        count = pharmacies.len(),
        limit,
        "extracted pharmacy records"
    );
    pharmacies
}

/// `list-group` lists first; any list with "list" in its class otherwise.
fn list_containers(document: &Html) -> Vec<ElementRef<'_>> {
    let list_group: Vec<_> = document
        .select(&LIST_SELECTOR)
        .filter(|el| el.value().classes().any(|class| class == "list-group"))
        .collect();
    if !list_group.is_empty() {
        return list_group;
    }

    document
        .select(&LIST_SELECTOR)
        .filter(|el| {
            el.value()
                .attr("class")
                .is_some_and(|class| class.to_lowercase().contains("list"))
        })
        .collect()
}

fn record_from_items(items: &[ElementRef<'_>], region_label: &str) -> Option<PharmacyRecord> {
    let evidence: Vec<ItemEvidence> = items.iter().copied().map(ItemEvidence::inspect).collect();

    let mut record = PharmacyRecord {
        name: String::new(),
        address: String::new(),
        phone: String::new(),
        map_link: String::new(),
        region_label: region_label.to_owned(),
    };

    // Later items win for link-derived fields; the longest address wins.
    for item in &evidence {
        if let Some(phone) = &item.phone {
            record.phone.clone_from(phone);
        }
        if let Some(map_link) = &item.map_link {
            record.map_link.clone_from(map_link);
        }
        if let Some(name) = &item.site_name {
            record.name.clone_from(name);
        }
        if let Some(address) = item.address_candidate() {
            if address.chars().count() > record.address.chars().count() {
                record.address = address.to_owned();
            }
        }
    }

    if record.name.is_empty() {
        record.name = fallback_name(&evidence);
    }

    (!record.name.is_empty()).then_some(record)
}

fn fallback_name(evidence: &[ItemEvidence]) -> String {
    if let Some(item) = evidence.iter().find(|item| is_name_like(&item.text)) {
        return item.text.clone();
    }
    let last = evidence.last().map_or("", |item| item.text.as_str());
    if last.is_empty() {
        evidence
            .first()
            .map(|item| item.text.clone())
            .unwrap_or_default()
    } else {
        last.to_owned()
    }
}

#[cfg(test)]
#[path = "../extract_test.rs"]
mod tests;
