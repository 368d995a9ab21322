//! Inbound/outbound text normalization helpers.
//!
//! Reporters type numbers with Arabic-Indic glyphs and phone numbers in
//! local formats; everything downstream works on the canonical forms
//! produced here. All helpers are pure and total.

/// Offset of the Arabic-Indic digit block (U+0660..U+0669).
const ARABIC_INDIC_ZERO: u32 = 0x0660;

/// Replace the ten Arabic-Indic digit glyphs with their ASCII equivalents,
/// then trim surrounding whitespace. Idempotent.
pub fn normalize(raw: &str) -> String {
    let converted: String = raw
        .chars()
        .map(|c| {
            let code = c as u32;
            if (ARABIC_INDIC_ZERO..=ARABIC_INDIC_ZERO + 9).contains(&code) {
                (b'0' + (code - ARABIC_INDIC_ZERO) as u8) as char
            } else {
                c
            }
        })
        .collect();
    converted.trim().to_string()
}

/// Canonical form used for command matching: trimmed and lower-cased.
pub fn command_token(message: &str) -> String {
    message.trim().to_lowercase()
}

/// Parse a reporter-typed count: a run of leading ASCII digits, with any
/// trailing text ignored ("3 أشخاص" parses as 3). Signed, digitless, and
/// overflowing inputs are rejected.
pub fn parse_count(message: &str) -> Option<u32> {
    let digits: String = message
        .trim()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();

    if digits.is_empty() {
        return None;
    }

    digits.parse().ok()
}

/// Canonical outbound phone number: digits only, one leading zero dropped,
/// prefixed with the country code when absent.
pub fn canonical_phone(raw: &str, country_code: &str) -> String {
    let mut digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    if let Some(rest) = digits.strip_prefix('0') {
        digits = rest.to_string();
    }

    if digits.starts_with(country_code) {
        digits
    } else {
        format!("{country_code}{digits}")
    }
}
