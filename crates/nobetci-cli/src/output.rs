//! Slot table rendering for stdout.

use std::fmt::Write as _;

use nobetci_scraper::{slot_label, slots, PharmacyRecord};

/// Text table: one line per slot, attributes indented beneath it.
pub(crate) fn render_slots(records: &[PharmacyRecord], count: usize) -> String {
    let mut out = String::new();
    for (position, slot) in slots(records, count).into_iter().enumerate() {
        match slot {
            Some(slot) => {
                let _ = writeln!(out, "{}: {}", slot.label, slot.name);
                for (key, value) in &slot.attributes {
                    let _ = writeln!(out, "    {key}: {value}");
                }
            }
            None => {
                let _ = writeln!(out, "{}: unavailable", slot_label(position + 1));
            }
        }
    }
    out
}

pub(crate) fn print_slots(records: &[PharmacyRecord], count: usize, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&slots(records, count))?);
    } else {
        print!("{}", render_slots(records, count));
    }
    Ok(())
}
