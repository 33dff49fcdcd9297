//! Product name and quantity detection.

use tracing::debug;

use super::keywords::PRODUCT_DENYLIST;
use super::patterns::PRODUCT_QUANTITY;
use super::{ExtractionMatch, FieldExtractor};

/// Raw `<token><quantity><unit>` match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductQuantity {
    /// Token right before the number.
    pub token: String,
    /// Quantity digits as written.
    pub quantity: String,
    /// Unit after the number.
    pub unit: String,
}

/// Outcome of product detection on a whole order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetection {
    /// Accepted product name.
    pub product_name: Option<String>,
    /// Quantity, 1 when none was found.
    pub quantity: u32,
    /// Unit that followed the quantity.
    pub unit: Option<String>,
    /// Candidate that was dropped: denylisted, or without any letter.
    pub denied: Option<String>,
    /// Quantity text that could not be used (zero or overflowing).
    pub rejected_quantity: Option<String>,
}

impl Default for ProductDetection {
    fn default() -> Self {
        Self {
            product_name: None,
            quantity: 1,
            unit: None,
            denied: None,
            rejected_quantity: None,
        }
    }
}

/// Product/quantity extractor with a denylist of non-product phrases.
#[derive(Debug, Clone)]
pub struct ProductExtractor {
    denylist: Vec<String>,
}

impl ProductExtractor {
    /// Create an extractor using the built-in denylist.
    pub fn new() -> Self {
        Self {
            denylist: PRODUCT_DENYLIST.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Add tokens on top of the built-in denylist.
    pub fn with_extra_denylist<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for token in tokens {
            let token = token.into();
            if !token.is_empty() && !self.denylist.contains(&token) {
                self.denylist.push(token);
            }
        }
        self
    }

    /// Check if a token is excluded from being a product name.
    ///
    /// Surrounding punctuation is ignored, so "(착불)" counts as "착불".
    pub fn is_denied(&self, token: &str) -> bool {
        let core = token.trim_matches(|c: char| !c.is_alphanumeric());
        self.denylist.iter().any(|d| d == token || d == core)
    }

    /// Detect product and quantity from the first `<token><qty><unit>` match.
    pub fn detect(&self, text: &str) -> ProductDetection {
        let Some(found) = self.extract(text) else {
            return ProductDetection::default();
        };
        let ProductQuantity {
            token,
            quantity,
            unit,
        } = found.value;

        let mut detection = ProductDetection {
            unit: Some(unit),
            ..ProductDetection::default()
        };

        match quantity.parse::<u32>() {
            Ok(n) if n >= 1 => detection.quantity = n,
            _ => {
                debug!("Ignoring unusable quantity {:?}", quantity);
                detection.rejected_quantity = Some(quantity);
            }
        }

        if self.is_denied(&token) {
            debug!("Product candidate {:?} is denylisted", token);
            detection.denied = Some(token);
        } else if !token.chars().any(char::is_alphabetic) {
            // e.g. a phone number right before a bare quantity
            debug!("Product candidate {:?} has no letters", token);
            detection.denied = Some(token);
        } else {
            detection.product_name = Some(token);
        }

        detection
    }
}

impl Default for ProductExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for ProductExtractor {
    type Output = ExtractionMatch<ProductQuantity>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        PRODUCT_QUANTITY
            .captures_iter(text)
            .filter_map(|caps| {
                let full_match = caps.get(0)?;
                let token = caps.name("token").or_else(|| caps.name("spaced"))?;
                let value = ProductQuantity {
                    token: token.as_str().to_string(),
                    quantity: caps.name("qty")?.as_str().to_string(),
                    unit: caps.name("unit")?.as_str().to_string(),
                };
                Some(ExtractionMatch::new(
                    value,
                    full_match.start(),
                    full_match.end(),
                    full_match.as_str(),
                ))
            })
            .collect()
    }
}

/// Detect product and quantity with the built-in denylist.
pub fn detect_product(text: &str) -> ProductDetection {
    ProductExtractor::new().detect(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_detect_product() {
        let detection = detect_product("최용남 010-4752-1001 종균제 5통");
        assert_eq!(detection.product_name.as_deref(), Some("종균제"));
        assert_eq!(detection.quantity, 5);
        assert_eq!(detection.unit.as_deref(), Some("통"));
    }

    #[test]
    fn test_denylisted_keeps_quantity() {
        let detection = detect_product("박민수 010-1234-5678 택배선불 10통");
        assert_eq!(detection.product_name, None);
        assert_eq!(detection.quantity, 10);
        assert_eq!(detection.denied.as_deref(), Some("택배선불"));
    }

    #[test]
    fn test_no_match_defaults() {
        assert_eq!(detect_product("서울 박민수 010-1234-5678"), ProductDetection::default());
    }

    #[test]
    fn test_first_match_wins() {
        let detection = detect_product("구연산 2통 PAC 3CAN");
        assert_eq!(detection.product_name.as_deref(), Some("구연산"));
        assert_eq!(detection.quantity, 2);
        let all = ProductExtractor::new().extract_all("구연산 2통 PAC 3CAN");
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].value.unit, "CAN");
    }

    #[test]
    fn test_zero_quantity_keeps_default() {
        let detection = detect_product("종균제 0통");
        assert_eq!(detection.quantity, 1);
        assert_eq!(detection.rejected_quantity.as_deref(), Some("0"));
        assert_eq!(detection.product_name.as_deref(), Some("종균제"));
    }

    #[test]
    fn test_bracketed_denylist_token() {
        let detection = detect_product("박민수 010-1234-5678 (착불)2통");
        assert_eq!(detection.product_name, None);
        assert_eq!(detection.denied.as_deref(), Some("(착불)"));
        assert_eq!(detection.quantity, 2);
    }

    #[test]
    fn test_quantity_on_its_own_line() {
        let detection = detect_product("서울시 마포구 박민수 010-1234-5678 5통");
        assert_eq!(detection.quantity, 5);
        assert_eq!(detection.product_name, None);
        assert_eq!(detection.denied.as_deref(), Some("010-1234-5678"));
    }

    #[test]
    fn test_glued_digit_token_still_rejected() {
        let detection = detect_product("종균제15통");
        assert_eq!(detection.product_name.as_deref(), Some("종균제"));
        assert_eq!(detection.quantity, 15);
    }

    #[test]
    fn test_extra_denylist() {
        let extractor = ProductExtractor::new().with_extra_denylist(["사은품"]);
        let detection = extractor.detect("사은품 1개");
        assert_eq!(detection.product_name, None);
        assert_eq!(detection.quantity, 1);
    }
}
