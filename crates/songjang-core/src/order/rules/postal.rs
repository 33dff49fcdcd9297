//! Postal code extraction from the recovered address.

use super::patterns::POSTAL_CODE;
use super::{is_digit_isolated, ExtractionMatch, FieldExtractor};

/// Postal code extractor (`NNNNN` or legacy `NNN-NNN`).
pub struct PostalCodeExtractor;

impl PostalCodeExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PostalCodeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for PostalCodeExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        POSTAL_CODE
            .find_iter(text)
            .filter(|m| is_digit_isolated(text, m.start(), m.end()))
            .map(|m| ExtractionMatch::new(m.as_str().to_string(), m.start(), m.end(), m.as_str()))
            .collect()
    }
}

/// Extract the first postal code from an address.
pub fn extract_postal_code(address: &str) -> Option<String> {
    PostalCodeExtractor::new().extract(address).map(|m| m.value)
}
