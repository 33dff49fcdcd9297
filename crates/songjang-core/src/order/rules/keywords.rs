//! Keyword sets driving the classifiers.
//!
//! These lists are hand-tuned from real orders and are not exhaustive; extend
//! them through `ExtractionConfig` rather than editing extraction logic.

/// Mobile carrier prefixes accepted as the start of a phone number.
pub const CARRIER_PREFIXES: &[&str] = &["010", "011", "016", "017", "018", "019"];

/// Units accepted after an order quantity.
pub const QUANTITY_UNITS: &[&str] = &["통", "개", "박스", "can", "CAN"];

/// Substrings that mark a token as part of an address rather than a name.
pub const ADDRESS_KEYWORDS: &[&str] = &[
    "시", "도", "군", "구", "로", "길", "아파트", "빌라", "타워", "번지", "맨션", "오피스텔",
    "빌딩", "상가",
];

/// Payment and shipping phrases that often precede a number but are not products.
pub const PRODUCT_DENYLIST: &[&str] = &["택배선불", "배송비", "입금", "주문", "선불", "착불"];

/// Substrings that mark an order as collect-on-delivery.
pub const COLLECT_KEYWORDS: &[&str] = &["착불", crate::models::order::COLLECT_DELIVERY_NOTE];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::rules::patterns::{MOBILE_PHONE, PRODUCT_QUANTITY};

    #[test]
    fn test_patterns_cover_keyword_sets() {
        for prefix in CARRIER_PREFIXES {
            let phone = format!("{}-1234-5678", prefix);
            assert!(MOBILE_PHONE.is_match(&phone), "{}", phone);
        }
        for unit in QUANTITY_UNITS {
            let text = format!("종균제 2{}", unit);
            let caps = PRODUCT_QUANTITY.captures(&text).unwrap();
            assert_eq!(&caps["unit"], *unit);
        }
    }
}
