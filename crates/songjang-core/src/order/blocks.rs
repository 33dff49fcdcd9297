//! Splitting a multi-order paste into single-order blocks.

use std::fmt;
use std::str::FromStr;

/// How a multi-order paste is divided into orders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BlockMode {
    /// Every non-blank line is one order (spreadsheet rows).
    #[default]
    Line,
    /// Orders are separated by one or more blank lines (chat messages).
    Paragraph,
}

impl FromStr for BlockMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "line" | "lines" => Ok(BlockMode::Line),
            "paragraph" | "paragraphs" | "para" => Ok(BlockMode::Paragraph),
            other => Err(format!("unknown block mode: {}", other)),
        }
    }
}

impl fmt::Display for BlockMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockMode::Line => f.write_str("line"),
            BlockMode::Paragraph => f.write_str("paragraph"),
        }
    }
}

/// Split text into order blocks, skipping blank ones.
pub fn split_blocks(text: &str, mode: BlockMode) -> Vec<&str> {
    match mode {
        BlockMode::Line => text
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect(),
        BlockMode::Paragraph => {
            let mut blocks = Vec::new();
            let mut start: Option<usize> = None;
            let mut end = 0;
            let mut offset = 0;

            for line in text.split_inclusive('\n') {
                if line.trim().is_empty() {
                    if let Some(s) = start.take() {
                        blocks.push(text[s..end].trim());
                    }
                } else {
                    start.get_or_insert(offset);
                    end = offset + line.len();
                }
                offset += line.len();
            }
            if let Some(s) = start {
                blocks.push(text[s..end].trim());
            }

            blocks
        }
    }
}
