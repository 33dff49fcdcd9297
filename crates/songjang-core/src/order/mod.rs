//! Order text extraction module.

mod blocks;
mod parser;
pub mod rules;

pub use blocks::{split_blocks, BlockMode};
pub use parser::{ExtractionResult, OrderParser};

/// Trait for order text parsers.
///
/// Parsing is infallible: every input yields a best-effort result.
pub trait OrderTextParser {
    /// Parse one order from text.
    fn parse(&self, text: &str) -> ExtractionResult;

    /// Parse each block of a multi-order paste independently, in input order.
    fn parse_blocks(&self, text: &str, mode: BlockMode) -> Vec<ExtractionResult> {
        split_blocks(text, mode)
            .into_iter()
            .map(|block| self.parse(block))
            .collect()
    }
}
