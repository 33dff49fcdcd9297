//! Output formatting for parsed orders.

use songjang_core::render::{courier_block, join_courier_blocks, join_sheet_blocks, sheet_block};
use songjang_core::{OrderRecord, RenderConfig};

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV table with the fixed column order
    Csv,
    /// Plain text summary
    Text,
    /// Courier request blocks
    Courier,
    /// Five-row sheet blocks
    Sheet,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text | OutputFormat::Courier | OutputFormat::Sheet => "txt",
        }
    }
}

/// Options shared by the formatters.
pub struct FormatOptions<'a> {
    pub render: &'a RenderConfig,
    pub separator: &'a str,
}

/// Format a single record (JSON renders an object instead of an array).
pub fn format_record(
    record: &OrderRecord,
    format: OutputFormat,
    options: &FormatOptions<'_>,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        _ => format_records(std::slice::from_ref(record), format, options),
    }
}

/// Format a sequence of records.
pub fn format_records(
    records: &[OrderRecord],
    format: OutputFormat,
    options: &FormatOptions<'_>,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
        OutputFormat::Csv => format_csv(records),
        OutputFormat::Text => Ok(records
            .iter()
            .map(format_text)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Courier => {
            let blocks: Vec<String> = records
                .iter()
                .map(|r| courier_block(r, options.render))
                .collect();
            Ok(join_courier_blocks(&blocks))
        }
        OutputFormat::Sheet => {
            let blocks: Vec<String> = records.iter().map(sheet_block).collect();
            Ok(join_sheet_blocks(&blocks, options.separator))
        }
    }
}

/// Serialize records into a spreadsheet-compatible CSV table.
pub fn format_csv(records: &[OrderRecord]) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(OrderRecord::COLUMNS)?;
    for record in records {
        wtr.write_record(record.to_row())?;
    }

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(record: &OrderRecord) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Recipient: {}\n",
        record.recipient.as_deref().unwrap_or("-")
    ));
    output.push_str(&format!("Phone: {}\n", record.phone_primary));
    if let Some(secondary) = &record.phone_secondary {
        output.push_str(&format!("Phone 2: {}\n", secondary));
    }
    if let Some(postal) = &record.postal_code {
        output.push_str(&format!("Postal code: {}\n", postal));
    }
    output.push_str(&format!("Address: {}\n", record.address));
    output.push_str(&format!(
        "Product: {} x {}\n",
        record.product_name.as_deref().unwrap_or("-"),
        record.quantity
    ));
    output.push_str(&format!("Shipping: {}\n", record.shipping_term));
    if let Some(note) = &record.delivery_note {
        output.push_str(&format!("Note: {}\n", note));
    }

    let missing = record.missing_fields();
    if !missing.is_empty() {
        output.push_str(&format!("Needs review: {}\n", missing.join(", ")));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use songjang_core::{OrderParser, OrderTextParser};

    fn options(render: &RenderConfig) -> FormatOptions<'_> {
        FormatOptions {
            render,
            separator: "----",
        }
    }

    #[test]
    fn test_csv_header_and_row() {
        let record = OrderParser::new()
            .parse("12345 서울시 마포구 박민수 010-1234-5678 종균제 5통")
            .record;
        let csv = format_csv(&[record]).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("postal_code,address,recipient,phone_primary,phone_secondary,quantity,shipping_term,product_name,delivery_note")
        );
        assert_eq!(
            lines.next(),
            Some("12345,12345 서울시 마포구,박민수,010-1234-5678,,5,PREPAID,종균제,")
        );
    }

    #[test]
    fn test_single_record_json_is_object() {
        let render = RenderConfig::default();
        let json = format_record(&OrderRecord::new(), OutputFormat::Json, &options(&render)).unwrap();
        assert!(json.trim_start().starts_with('{'));
    }

    #[test]
    fn test_text_lists_missing_fields() {
        let render = RenderConfig::default();
        let text = format_records(&[OrderRecord::new()], OutputFormat::Text, &options(&render)).unwrap();
        assert!(text.contains("Needs review: postal_code, recipient, phone_primary, product_name"));
    }
}
