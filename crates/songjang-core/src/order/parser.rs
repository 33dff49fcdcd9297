//! Heuristic order parser assembling a record from the rule extractors.

use serde::Serialize;
use tracing::{debug, info};

use crate::models::config::ExtractionConfig;
use crate::models::order::OrderRecord;

use super::rules::{
    classify_name_address, classify_shipping, extract_postal_code, split_at, FieldExtractor,
    NormalizedText, PhoneExtractor, ProductExtractor, RecipientRules,
};
use super::OrderTextParser;

/// Result of parsing one order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    /// Extracted order record.
    pub record: OrderRecord,
    /// Raw input text.
    pub raw_text: String,
    /// Non-blank input lines, trimmed.
    pub lines: Vec<String>,
    /// Extraction warnings for the reviewer.
    pub warnings: Vec<String>,
}

/// Rule-based parser for free-form order text.
#[derive(Debug, Clone)]
pub struct OrderParser {
    recipient_rules: RecipientRules,
    products: ProductExtractor,
}

impl OrderParser {
    /// Create a parser with the built-in keyword lists.
    pub fn new() -> Self {
        Self {
            recipient_rules: RecipientRules::new(),
            products: ProductExtractor::new(),
        }
    }

    /// Create a parser from extraction settings.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new()
            .with_address_keywords(config.extra_address_keywords.iter().cloned())
            .with_product_denylist(config.extra_product_denylist.iter().cloned())
            .with_recipient_length(config.min_recipient_chars, config.max_recipient_chars)
    }

    /// Add address keywords that disqualify a recipient candidate.
    pub fn with_address_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.recipient_rules = self.recipient_rules.with_extra_keywords(keywords);
        self
    }

    /// Add tokens that are never accepted as a product name.
    pub fn with_product_denylist<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.products = self.products.with_extra_denylist(tokens);
        self
    }

    /// Set the accepted recipient name length in characters.
    pub fn with_recipient_length(mut self, min_chars: usize, max_chars: usize) -> Self {
        self.recipient_rules = self.recipient_rules.with_length(min_chars, max_chars);
        self
    }
}

impl Default for OrderParser {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderTextParser for OrderParser {
    fn parse(&self, text: &str) -> ExtractionResult {
        info!("Parsing order from {} characters of text", text.len());

        let normalized = NormalizedText::new(text);
        let mut record = OrderRecord::new();
        let mut warnings = Vec::new();

        let shipping = classify_shipping(&normalized.flat);
        record.shipping_term = shipping.term;
        record.delivery_note = shipping.delivery_note;

        let phones = PhoneExtractor::new().extract_all(&normalized.flat);
        debug!(
            "Found {} phone numbers in {} lines",
            phones.len(),
            normalized.lines.len()
        );

        match phones.first() {
            None => {
                if normalized.is_empty() {
                    warnings.push("Input is empty".to_string());
                } else {
                    warnings.push(
                        "No phone number found; the whole text was kept as the address".to_string(),
                    );
                }
                record.address = normalized.flat.clone();
            }
            Some(primary) => {
                record.phone_primary = primary.value.clone();
                record.phone_secondary = phones.get(1).map(|m| m.value.clone());
                if phones.len() > 2 {
                    warnings.push(format!(
                        "Found {} phone numbers; only the first two were kept",
                        phones.len()
                    ));
                }

                let segments = split_at(&normalized.flat, primary);
                let name_address = classify_name_address(segments.before, &self.recipient_rules);
                record.address = name_address.address;
                record.recipient = name_address.recipient;
                if record.recipient.is_none() {
                    warnings.push("Could not extract recipient name".to_string());
                }

                let product = self.products.detect(&normalized.flat);
                record.quantity = product.quantity;
                record.product_name = product.product_name;
                if let Some(denied) = product.denied {
                    warnings.push(format!(
                        "Ignored '{}' as a product name; quantity {} kept",
                        denied, record.quantity
                    ));
                } else if record.product_name.is_none() {
                    warnings.push("Could not extract product name; quantity defaults to 1".to_string());
                }
                if let Some(rejected) = product.rejected_quantity {
                    warnings.push(format!("Ignored quantity '{}'; defaulting to 1", rejected));
                }

                record.postal_code = extract_postal_code(&record.address);
                if record.postal_code.is_none() {
                    warnings.push("Could not extract postal code".to_string());
                }
            }
        }

        debug!(
            "Extracted order for {:?} ({} x {:?}, {})",
            record.recipient, record.quantity, record.product_name, record.shipping_term
        );

        ExtractionResult {
            record,
            raw_text: text.to_string(),
            lines: normalized.lines,
            warnings,
        }
    }
}
