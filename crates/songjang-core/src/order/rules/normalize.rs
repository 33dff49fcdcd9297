//! Input normalization.

/// Two views of the raw input used by the extractors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedText {
    /// Whole input on one line, whitespace runs collapsed to single spaces.
    pub flat: String,
    /// Original lines, trimmed, blank lines removed.
    pub lines: Vec<String>,
}

impl NormalizedText {
    pub fn new(raw: &str) -> Self {
        let flat = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        let lines = raw
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect();

        Self { flat, lines }
    }

    pub fn is_empty(&self) -> bool {
        self.flat.is_empty()
    }
}
