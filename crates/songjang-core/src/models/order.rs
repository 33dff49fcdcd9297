//! Shipment record produced by one parse call.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Marker stored in `delivery_note` for collect-on-delivery orders.
pub const COLLECT_DELIVERY_NOTE: &str = "collect-delivery";

/// Who pays the courier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShippingTerm {
    /// Sender pays (선불).
    #[default]
    Prepaid,
    /// Recipient pays on delivery (착불).
    Collect,
}

impl ShippingTerm {
    /// Column value used in tabular exports.
    pub fn as_str(&self) -> &'static str {
        match self {
            ShippingTerm::Prepaid => "PREPAID",
            ShippingTerm::Collect => "COLLECT",
        }
    }

    /// Korean label used on dispatch notes.
    pub fn label(&self) -> &'static str {
        match self {
            ShippingTerm::Prepaid => "선불",
            ShippingTerm::Collect => "착불",
        }
    }
}

impl fmt::Display for ShippingTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single shipment order extracted from free text.
///
/// Field order matches the column order of [`OrderRecord::COLUMNS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Postal code (`NNNNN` or `NNN-NNN`), also left inside `address`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,

    /// Free-text address.
    pub address: String,

    /// Recipient name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,

    /// First phone number found, empty when none was recognized.
    pub phone_primary: String,

    /// Second phone number found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_secondary: Option<String>,

    /// Ordered quantity, always at least 1.
    pub quantity: u32,

    /// Shipping payment term.
    pub shipping_term: ShippingTerm,

    /// Product name as written in the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,

    /// Delivery flag such as `collect-delivery`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_note: Option<String>,
}

impl OrderRecord {
    /// Column names in export order.
    pub const COLUMNS: [&'static str; 9] = [
        "postal_code",
        "address",
        "recipient",
        "phone_primary",
        "phone_secondary",
        "quantity",
        "shipping_term",
        "product_name",
        "delivery_note",
    ];

    /// Create an empty record with every field at its default.
    pub fn new() -> Self {
        Self {
            postal_code: None,
            address: String::new(),
            recipient: None,
            phone_primary: String::new(),
            phone_secondary: None,
            quantity: 1,
            shipping_term: ShippingTerm::Prepaid,
            product_name: None,
            delivery_note: None,
        }
    }

    /// The record as one table row, absent values rendered as empty cells.
    pub fn to_row(&self) -> [String; 9] {
        [
            self.postal_code.clone().unwrap_or_default(),
            self.address.clone(),
            self.recipient.clone().unwrap_or_default(),
            self.phone_primary.clone(),
            self.phone_secondary.clone().unwrap_or_default(),
            self.quantity.to_string(),
            self.shipping_term.as_str().to_string(),
            self.product_name.clone().unwrap_or_default(),
            self.delivery_note.clone().unwrap_or_default(),
        ]
    }

    /// Fields a reviewer should fill in by hand.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();

        if self.postal_code.is_none() {
            missing.push("postal_code");
        }
        if self.recipient.is_none() {
            missing.push("recipient");
        }
        if self.phone_primary.is_empty() {
            missing.push("phone_primary");
        }
        if self.product_name.is_none() {
            missing.push("product_name");
        }

        missing
    }

    /// Check if every heuristic field was recovered.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

impl Default for OrderRecord {
    fn default() -> Self {
        Self::new()
    }
}
