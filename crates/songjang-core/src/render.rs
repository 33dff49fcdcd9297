//! Dispatch-note layouts for parsed orders.
//!
//! Two layouts are supported:
//! - the courier request block sent to the shipping partner,
//! - the five-row sheet block pasted into the shared order sheet.
//!
//! Neither layout stamps dates; callers pass any separator text themselves.

use crate::models::config::RenderConfig;
use crate::models::order::OrderRecord;
use crate::order::rules::phone::phone_digits;

const COURIER_RULE: &str = "--------------";

/// Phones for display, the secondary dropped when it is the same number.
fn distinct_phones(record: &OrderRecord) -> (&str, Option<&str>) {
    let primary = record.phone_primary.as_str();
    let secondary = record
        .phone_secondary
        .as_deref()
        .filter(|p| !p.is_empty() && phone_digits(p) != phone_digits(primary));
    (primary, secondary)
}

/// Render the courier request block for one order.
pub fn courier_block(record: &OrderRecord, config: &RenderConfig) -> String {
    let product = record
        .product_name
        .as_deref()
        .map(|p| config.canonical_product(p))
        .unwrap_or("");

    let pallet = if record.quantity >= config.pallet_threshold {
        config.pallet_suffix.as_str()
    } else {
        ""
    };

    let phone = match distinct_phones(record) {
        (primary, Some(secondary)) => format!("{} / {}", primary, secondary),
        (primary, None) => primary.to_string(),
    };

    let mut block = format!(
        "{} {}{}{} (송장번호필요)\n{}\n택배{}로 보내주세요^^\n{}\n{}\n{} {}",
        product,
        record.quantity,
        config.unit_label,
        pallet,
        COURIER_RULE,
        record.shipping_term.label(),
        record.postal_code.as_deref().unwrap_or(""),
        record.address,
        record.recipient.as_deref().unwrap_or(""),
        phone,
    );

    if let Some(note) = record.delivery_note.as_deref().filter(|n| !n.is_empty()) {
        block.push('\n');
        block.push_str(note);
    }

    block
}

/// Render the five-row sheet block for one order.
pub fn sheet_block(record: &OrderRecord) -> String {
    let phones = match distinct_phones(record) {
        (primary, Some(secondary)) => format!("{}\t{}", primary, secondary),
        (primary, None) => primary.to_string(),
    };

    let mut block = format!(
        "{}\n{}\n{}\t{}\n{}\t{}\t{}",
        record.postal_code.as_deref().unwrap_or(""),
        record.address,
        record.recipient.as_deref().unwrap_or(""),
        phones,
        record.quantity,
        record.shipping_term.label(),
        record.product_name.as_deref().unwrap_or(""),
    );

    if let Some(note) = record.delivery_note.as_deref().filter(|n| !n.is_empty()) {
        block.push('\n');
        block.push_str(note);
    }

    block
}

/// Join courier blocks with a blank line between orders.
pub fn join_courier_blocks<S: AsRef<str>>(blocks: &[S]) -> String {
    blocks
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Join sheet blocks, framing each with `separator`.
///
/// Blocks are separated by the separator line surrounded by blank lines, and
/// the separator also closes the last block. An empty slice renders nothing.
pub fn join_sheet_blocks<S: AsRef<str>>(blocks: &[S], separator: &str) -> String {
    if blocks.is_empty() {
        return String::new();
    }

    let glue = format!("\n\n{}\n\n", separator);
    let body = blocks
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(&glue);

    format!("{}\n\n{}", body, separator)
}
