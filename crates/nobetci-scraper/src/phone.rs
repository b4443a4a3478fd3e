//! Turkish phone number normalisation and display formatting.

/// Country code prefix as it appears once non-digits are stripped.
const COUNTRY_PREFIX: &str = "90";

fn digits_of(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).collect()
}

/// Rewrites `90XXXXXXXXXX` to the domestic `0XXXXXXXXXX` form; other digit
/// strings pass through.
fn to_domestic(digits: String) -> String {
    if digits.len() == 12 && digits.starts_with(COUNTRY_PREFIX) {
        format!("0{}", &digits[COUNTRY_PREFIX.len()..])
    } else {
        digits
    }
}

/// Storage form of a phone number: digits only, international prefix
/// rewritten to the domestic form.
///
/// Input with no digits at all is returned unchanged.
///
/// ```
/// use nobetci_scraper::normalize_phone;
///
/// assert_eq!(normalize_phone("+90 (555) 123 45 67"), "05551234567");
/// assert_eq!(normalize_phone("0282 261 00 00"), "02822610000");
/// ```
#[must_use]
pub fn normalize_phone(raw: &str) -> String {
    let digits = digits_of(raw);
    if digits.is_empty() {
        return raw.to_owned();
    }
    to_domestic(digits)
}

/// Display form of a phone number: 11-digit domestic numbers are grouped
/// `dddd ddd dddd`; anything else is returned as given.
#[must_use]
pub fn format_phone_for_display(raw: &str) -> String {
    let digits = digits_of(raw);
    if digits.is_empty() {
        return raw.to_owned();
    }
    let digits = to_domestic(digits);
    if digits.len() == 11 && digits.starts_with('0') {
        return format!("{} {} {}", &digits[..4], &digits[4..7], &digits[7..]);
    }
    raw.to_owned()
}

#[cfg(test)]
#[path = "phone_test.rs"]
mod tests;
