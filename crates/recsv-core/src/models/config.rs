//! Configuration for the extraction heuristics.
//!
//! The thresholds here are heuristic approximations of tabular receipt
//! layout rather than derived constants, so they are kept configurable
//! instead of hard-coded.

use serde::{Deserialize, Serialize};

use crate::error::{RecsvError, Result};

/// Main configuration for the recsv pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RecsvConfig {
    /// Merchant extraction configuration.
    pub merchant: MerchantConfig,

    /// Line-item extraction configuration.
    pub items: ItemsConfig,

    /// Keyword tables for the date and total scans.
    pub keywords: KeywordConfig,
}

/// Merchant heuristic thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MerchantConfig {
    /// Number of leading lines considered (the store name is assumed
    /// to appear near the top of the receipt).
    pub head_lines: usize,

    /// Minimum alphabetic characters for a candidate line.
    pub min_letters: usize,

    /// Minimum length for a word to count as an all-caps header word.
    pub caps_word_min_len: usize,

    /// Score bonus per all-caps word.
    pub caps_bonus: usize,
}

impl Default for MerchantConfig {
    fn default() -> Self {
        Self {
            head_lines: 8,
            min_letters: 5,
            caps_word_min_len: 3,
            caps_bonus: 2,
        }
    }
}

/// Line-item heuristic thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemsConfig {
    /// Maximum characters allowed after the trailing amount. Receipts
    /// print the price at the end of the line; amounts buried
    /// mid-sentence are not prices.
    pub max_trailing_chars: usize,

    /// Minimum alphabetic characters in an item description.
    pub min_item_letters: usize,
}

impl Default for ItemsConfig {
    fn default() -> Self {
        Self {
            max_trailing_chars: 6,
            min_item_letters: 3,
        }
    }
}

/// Keyword tables for the keyword-priority scans.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordConfig {
    /// Substrings that mark a line as date-bearing.
    pub date_hints: Vec<String>,

    /// Substrings that mark a line as total-bearing, in priority order.
    pub total_tokens: Vec<String>,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            date_hints: vec!["bill date".into(), "date".into(), "dt".into()],
            total_tokens: vec![
                "total amt".into(),
                "total amount".into(),
                "grand total".into(),
                "net amount".into(),
                "total".into(),
                "amount".into(),
                "amt".into(),
                "payable".into(),
                "balance".into(),
            ],
        }
    }
}

impl RecsvConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| RecsvError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| RecsvError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RecsvConfig::default();
        assert_eq!(config.merchant.head_lines, 8);
        assert_eq!(config.items.max_trailing_chars, 6);
        assert_eq!(config.keywords.total_tokens[0], "total amt");
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: RecsvConfig =
            serde_json::from_str(r#"{"items": {"max_trailing_chars": 10}}"#).unwrap();
        assert_eq!(config.items.max_trailing_chars, 10);
        assert_eq!(config.items.min_item_letters, 3);
        assert_eq!(config.merchant.head_lines, 8);
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recsv.json");

        let mut config = RecsvConfig::default();
        config.merchant.head_lines = 12;
        config.save(&path).unwrap();

        let reloaded = RecsvConfig::from_file(&path).unwrap();
        assert_eq!(reloaded.merchant.head_lines, 12);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = RecsvConfig::from_file(std::path::Path::new("no-such-config.json"))
            .unwrap_err();
        assert!(matches!(err, RecsvError::Io(_)));
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("recsv.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = RecsvConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, RecsvError::Config(_)));
    }
}
