//! Splitting the order text around the primary phone number.

use super::ExtractionMatch;

/// Text on either side of the pivot phone number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segments<'a> {
    /// Everything before the phone, trimmed (address and recipient).
    pub before: &'a str,
    /// Everything after the phone, trimmed.
    pub after: &'a str,
}

/// Split `text` around a phone match found in that same text.
///
/// Only the given match is used as the pivot, so a number repeated later in
/// the text never moves the split point.
pub fn split_at<'a>(text: &'a str, pivot: &ExtractionMatch<String>) -> Segments<'a> {
    let start = if text.get(pivot.start..pivot.end) == Some(pivot.value.as_str()) {
        Some(pivot.start)
    } else {
        // Pivot was found in another text: fall back to its first occurrence here.
        text.find(pivot.value.as_str())
    };

    match start {
        Some(start) => Segments {
            before: text[..start].trim(),
            after: text[start + pivot.value.len()..].trim(),
        },
        None => Segments {
            before: text.trim(),
            after: "",
        },
    }
}
