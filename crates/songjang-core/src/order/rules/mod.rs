//! Rule-based field extractors for pasted order text.

pub mod keywords;
pub mod normalize;
pub mod patterns;
pub mod phone;
pub mod postal;
pub mod product;
pub mod recipient;
pub mod segment;
pub mod shipping;

pub use normalize::NormalizedText;
pub use phone::{extract_phones, PhoneExtractor};
pub use postal::{extract_postal_code, PostalCodeExtractor};
pub use product::{detect_product, ProductDetection, ProductExtractor, ProductQuantity};
pub use recipient::{classify_name_address, NameAddress, RecipientRules};
pub use segment::{split_at, Segments};
pub use shipping::{classify_shipping, ShippingClassification};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the first occurrence of the field.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field, left to right.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A matched value together with where it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Byte offset of the match start in the searched text.
    pub start: usize,
    /// Byte offset one past the match end.
    pub end: usize,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, start: usize, end: usize, source: impl Into<String>) -> Self {
        Self {
            value,
            start,
            end,
            source: source.into(),
        }
    }
}

/// Check that a match is not glued to further ASCII digits on either side.
pub(crate) fn is_digit_isolated(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(|c| c.is_ascii_digit()) && !after.is_some_and(|c| c.is_ascii_digit())
}
