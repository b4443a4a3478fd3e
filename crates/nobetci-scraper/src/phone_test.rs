use super::*;

#[test]
fn normalize_rewrites_international_prefix() {
    assert_eq!(normalize_phone("+905551234567"), "05551234567");
}

#[test]
fn normalize_strips_formatting() {
    assert_eq!(normalize_phone("(0282) 261-00-00"), "02822610000");
    assert_eq!(normalize_phone("tel:+90 282 261 00 00"), "02822610000");
}

#[test]
fn normalize_is_idempotent() {
    let once = normalize_phone("+90 555 123 45 67");
    assert_eq!(normalize_phone(&once), once);
    assert_eq!(normalize_phone("05551234567"), "05551234567");
}

#[test]
fn normalize_keeps_text_without_digits() {
    assert_eq!(normalize_phone("Ara"), "Ara");
    assert_eq!(normalize_phone(""), "");
}

#[test]
fn normalize_leaves_other_lengths_as_digits() {
    assert_eq!(normalize_phone("444 1 234"), "4441234");
    // 12 digits without the country prefix are not rewritten.
    assert_eq!(normalize_phone("125551234567"), "125551234567");
}

#[test]
fn display_groups_domestic_number() {
    assert_eq!(format_phone_for_display("05551234567"), "0555 123 4567");
}

#[test]
fn display_converts_international_number() {
    assert_eq!(format_phone_for_display("+90 555 123 45 67"), "0555 123 4567");
    assert_eq!(format_phone_for_display("905551234567"), "0555 123 4567");
}

#[test]
fn display_returns_original_for_unrecognised_shapes() {
    assert_eq!(format_phone_for_display("444 1 234"), "444 1 234");
    assert_eq!(format_phone_for_display("15551234567"), "15551234567");
    assert_eq!(format_phone_for_display(""), "");
    assert_eq!(format_phone_for_display("yok"), "yok");
}
