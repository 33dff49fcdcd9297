//! Configuration structures for the order-text parser.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SongjangError};

/// Main configuration for songjang.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SongjangConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Dispatch-note rendering configuration.
    pub render: RenderConfig,
}

/// Field extraction configuration.
///
/// The built-in keyword lists are always active; these lists only add to them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Extra substrings that mark a token as part of an address.
    pub extra_address_keywords: Vec<String>,

    /// Extra tokens that are never accepted as a product name.
    pub extra_product_denylist: Vec<String>,

    /// Shortest accepted recipient name, in characters.
    pub min_recipient_chars: usize,

    /// Longest accepted recipient name, in characters.
    pub max_recipient_chars: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            extra_address_keywords: Vec::new(),
            extra_product_denylist: Vec::new(),
            min_recipient_chars: 2,
            max_recipient_chars: 5,
        }
    }
}

/// Maps loosely written product names onto the name the courier expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductAlias {
    /// Any of these substrings selects the alias.
    pub contains: Vec<String>,

    /// Name written on the dispatch note.
    pub canonical: String,
}

impl ProductAlias {
    pub fn new(contains: &[&str], canonical: &str) -> Self {
        Self {
            contains: contains.iter().map(|s| s.to_string()).collect(),
            canonical: canonical.to_string(),
        }
    }

    /// Check if a raw product name selects this alias.
    pub fn matches(&self, product: &str) -> bool {
        self.contains
            .iter()
            .any(|needle| !needle.is_empty() && product.contains(needle.as_str()))
    }
}

/// Dispatch-note rendering configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Product aliases, first match wins.
    pub product_aliases: Vec<ProductAlias>,

    /// Quantity from which an order ships on a pallet.
    pub pallet_threshold: u32,

    /// Text appended after the quantity for pallet shipments.
    pub pallet_suffix: String,

    /// Unit written after the quantity.
    pub unit_label: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            product_aliases: vec![
                ProductAlias::new(&["차아염소산", "차염"], "차염산"),
                ProductAlias::new(&["구연산"], "구연산수50%(20kg)"),
                ProductAlias::new(&["PAC"], "PAC17%"),
                ProductAlias::new(&["가성소다"], "가성소다4.5%(20kg)"),
            ],
            pallet_threshold: 10,
            pallet_suffix: " - 파래트".to_string(),
            unit_label: "통".to_string(),
        }
    }
}

impl RenderConfig {
    /// Resolve the name to print for a raw product name.
    pub fn canonical_product<'a>(&'a self, product: &'a str) -> &'a str {
        self.product_aliases
            .iter()
            .find(|alias| alias.matches(product))
            .map(|alias| alias.canonical.as_str())
            .unwrap_or(product)
    }
}

impl SongjangConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject settings the parser cannot honor.
    pub fn validate(&self) -> Result<()> {
        let extraction = &self.extraction;
        if extraction.min_recipient_chars == 0 {
            return Err(SongjangError::Config(
                "extraction.min_recipient_chars must be at least 1".to_string(),
            ));
        }
        if extraction.min_recipient_chars > extraction.max_recipient_chars {
            return Err(SongjangError::Config(format!(
                "extraction.min_recipient_chars ({}) exceeds max_recipient_chars ({})",
                extraction.min_recipient_chars, extraction.max_recipient_chars
            )));
        }
        if self.render.pallet_threshold == 0 {
            return Err(SongjangError::Config(
                "render.pallet_threshold must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_canonical_product() {
        let render = RenderConfig::default();
        assert_eq!(render.canonical_product("차아염소산나트륨"), "차염산");
        assert_eq!(render.canonical_product("PAC 20kg"), "PAC17%");
        assert_eq!(render.canonical_product("종균제"), "종균제");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SongjangConfig =
            serde_json::from_str(r#"{"extraction": {"extra_product_denylist": ["사은품"]}}"#)
                .unwrap();
        assert_eq!(config.extraction.extra_product_denylist, vec!["사은품"]);
        assert_eq!(config.extraction.max_recipient_chars, 5);
        assert_eq!(config.render, RenderConfig::default());
    }

    #[test]
    fn test_validate_rejects_inverted_bounds() {
        let mut config = SongjangConfig::default();
        config.extraction.min_recipient_chars = 6;
        assert!(matches!(config.validate(), Err(SongjangError::Config(_))));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = SongjangConfig::default();
        config.extraction.extra_address_keywords.push("마을".to_string());
        config.save(&path).unwrap();

        let loaded = SongjangConfig::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }
}
