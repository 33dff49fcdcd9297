//! Prepaid / collect-on-delivery classification.

use crate::models::order::{ShippingTerm, COLLECT_DELIVERY_NOTE};

use super::keywords::COLLECT_KEYWORDS;

/// Shipping term and the note that goes with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShippingClassification {
    pub term: ShippingTerm,
    pub delivery_note: Option<String>,
}

/// Classify the shipping term by keyword presence (case-sensitive).
pub fn classify_shipping(text: &str) -> ShippingClassification {
    if COLLECT_KEYWORDS.iter().any(|k| text.contains(k)) {
        ShippingClassification {
            term: ShippingTerm::Collect,
            delivery_note: Some(COLLECT_DELIVERY_NOTE.to_string()),
        }
    } else {
        ShippingClassification::default()
    }
}
