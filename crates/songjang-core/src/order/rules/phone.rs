//! Korean mobile phone number extraction.

use super::patterns::MOBILE_PHONE;
use super::{is_digit_isolated, ExtractionMatch, FieldExtractor};

/// Mobile phone number extractor.
pub struct PhoneExtractor;

impl PhoneExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PhoneExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for PhoneExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        MOBILE_PHONE
            .find_iter(text)
            // Skip runs that are only part of a longer number (account numbers, order ids)
            .filter(|m| is_digit_isolated(text, m.start(), m.end()))
            .map(|m| ExtractionMatch::new(m.as_str().to_string(), m.start(), m.end(), m.as_str()))
            .collect()
    }
}

/// Extract all phone numbers from text, in order of appearance.
pub fn extract_phones(text: &str) -> Vec<String> {
    PhoneExtractor::new()
        .extract_all(text)
        .into_iter()
        .map(|m| m.value)
        .collect()
}

/// Digits of a phone number, used to compare differently formatted numbers.
pub fn phone_digits(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}
