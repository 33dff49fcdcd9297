//! Common regex patterns for order text extraction.
//!
//! Carrier prefixes and quantity units come from the keyword tables, so
//! extending those tables extends the patterns.

use lazy_static::lazy_static;
use regex::Regex;

use super::keywords::{CARRIER_PREFIXES, QUANTITY_UNITS};

/// Escaped alternation of `words`, longest first so longer units win.
fn alternation(words: &[&str]) -> String {
    let mut words: Vec<&str> = words.iter().copied().filter(|w| !w.is_empty()).collect();
    words.sort_by(|a, b| b.len().cmp(&a.len()));
    words
        .into_iter()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|")
}

lazy_static! {
    // Korean mobile numbers: 010-1234-5678, 011-123-4567, 01012345678
    pub static ref MOBILE_PHONE: Regex = Regex::new(&format!(
        r"(?:{})-?[0-9]{{3,4}}-?[0-9]{{4}}",
        alternation(CARRIER_PREFIXES)
    )).unwrap();

    // Postal codes: 5-digit (current) or NNN-NNN (legacy)
    pub static ref POSTAL_CODE: Regex = Regex::new(
        r"[0-9]{3}-[0-9]{3}|[0-9]{5}"
    ).unwrap();

    // "<product><qty><unit>", e.g. "종균제 5통", "PAC17% 3can".
    // A token ending in a digit only counts when a space separates it from
    // the quantity ("010-1234-5678 5통"), never when glued ("종균제15통").
    pub static ref PRODUCT_QUANTITY: Regex = Regex::new(&format!(
        r"(?:(?P<token>\S*[^\s0-9])\s?|(?P<spaced>\S+)\s)(?P<qty>[0-9]+)\s?(?P<unit>{})",
        alternation(QUANTITY_UNITS)
    )).unwrap();
}
