//! 1-based slot view over the latest record list.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::phone::format_phone_for_display;
use crate::types::PharmacyRecord;

/// Label of slot `index` (1-based).
#[must_use]
pub fn slot_label(index: usize) -> String {
    format!("Nöbetçi Eczane {index}")
}

/// One populated slot. Attributes only carry non-empty fields; the phone is
/// display-formatted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PharmacySlot {
    pub index: usize,
    pub label: String,
    pub name: String,
    pub region_label: String,
    pub attributes: BTreeMap<&'static str, String>,
}

/// The slot at 1-based `index`, or `None` when the list is shorter (slot
/// unavailable) or `index` is 0.
#[must_use]
pub fn slot(records: &[PharmacyRecord], index: usize) -> Option<PharmacySlot> {
    let record = records.get(index.checked_sub(1)?)?;
    if record.name.is_empty() {
        return None;
    }

    let mut attributes = BTreeMap::new();
    if !record.phone.is_empty() {
        attributes.insert("phone", format_phone_for_display(&record.phone));
    }
    if !record.address.is_empty() {
        attributes.insert("address", record.address.clone());
    }
    if !record.map_link.is_empty() {
        attributes.insert("map_link", record.map_link.clone());
    }

    Some(PharmacySlot {
        index,
        label: slot_label(index),
        name: record.name.clone(),
        region_label: record.region_label.clone(),
        attributes,
    })
}

/// Slots `1..=count`, `None` for each unavailable position.
#[must_use]
pub fn slots(records: &[PharmacyRecord], count: usize) -> Vec<Option<PharmacySlot>> {
    (1..=count).map(|index| slot(records, index)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, phone: &str, address: &str, map_link: &str) -> PharmacyRecord {
        PharmacyRecord {
            name: name.to_owned(),
            address: address.to_owned(),
            phone: phone.to_owned(),
            map_link: map_link.to_owned(),
            region_label: "Tekirdağ / Çorlu".to_owned(),
        }
    }

    #[test]
    fn slot_formats_phone_and_keeps_fields() {
        let records = vec![record(
            "Çınar Eczanesi",
            "02826510000",
            "OMURTAK CAD. NO:45",
            "https://maps.google.com/?q=1,2",
        )];
        let slot = slot(&records, 1).expect("slot 1 populated");

        assert_eq!(slot.label, "Nöbetçi Eczane 1");
        assert_eq!(slot.name, "Çınar Eczanesi");
        assert_eq!(slot.attributes["phone"], "0282 651 0000");
        assert_eq!(slot.attributes["address"], "OMURTAK CAD. NO:45");
        assert_eq!(slot.attributes["map_link"], "https://maps.google.com/?q=1,2");
    }

    #[test]
    fn empty_fields_are_omitted() {
        let records = vec![record("Deniz Eczanesi", "", "", "")];
        let slot = slot(&records, 1).unwrap();
        assert!(slot.attributes.is_empty());
    }

    #[test]
    fn slots_beyond_records_are_unavailable() {
        let records = vec![record("A Eczanesi", "", "", ""), record("B Eczanesi", "", "", "")];
        let view = slots(&records, 5);

        assert_eq!(view.len(), 5);
        assert_eq!(view[1].as_ref().map(|s| s.name.as_str()), Some("B Eczanesi"));
        assert!(view[2..].iter().all(Option::is_none));
    }

    #[test]
    fn slot_zero_is_unavailable() {
        let records = vec![record("A Eczanesi", "", "", "")];
        assert!(slot(&records, 0).is_none());
    }

    #[test]
    fn empty_list_has_no_slots() {
        assert!(slots(&[], 3).iter().all(Option::is_none));
    }
}
