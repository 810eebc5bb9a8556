//! Receipt parser: normalization, field extraction and assembly.

use std::time::Instant;

use tracing::{debug, info};

use crate::models::config::RecsvConfig;
use crate::models::receipt::{MetaRecord, ReceiptRecord};
use crate::ocr::TextFragment;

use super::rules::{
    DateExtractor, FieldExtractor, ItemsExtractor, MerchantExtractor, TotalExtractor, normalize,
};

/// Result of receipt extraction.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Assembled receipt record.
    pub record: ReceiptRecord,
    /// Normalized lines the extractors saw.
    pub lines: Vec<String>,
    /// Fields that could not be resolved.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Rule-based receipt parser.
///
/// Pure and stateless: the four field extractors scan the same
/// immutable line list independently, so a failed field never blocks
/// the others.
pub struct ReceiptParser {
    merchant: MerchantExtractor,
    date: DateExtractor,
    total: TotalExtractor,
    items: ItemsExtractor,
}

impl ReceiptParser {
    /// Create a parser with default thresholds.
    pub fn new() -> Self {
        Self::with_config(&RecsvConfig::default())
    }

    /// Create a parser from a configuration.
    pub fn with_config(config: &RecsvConfig) -> Self {
        Self {
            merchant: MerchantExtractor::new(config.merchant.clone()),
            date: DateExtractor::new(config.keywords.date_hints.clone()),
            total: TotalExtractor::new(config.keywords.total_tokens.clone()),
            items: ItemsExtractor::new(config.items.clone()),
        }
    }

    /// Parse OCR fragments in their detection order.
    ///
    /// Only the fragment text is read; empty and whitespace-only
    /// fragments are filtered out before normalization.
    pub fn parse_fragments(&self, fragments: &[TextFragment]) -> ParseResult {
        let texts: Vec<String> = fragments
            .iter()
            .filter(|f| !f.text.trim().is_empty())
            .map(|f| f.text.clone())
            .collect();

        self.parse_lines(&texts)
    }

    /// Parse pre-extracted raw text lines.
    pub fn parse_lines(&self, raw_lines: &[String]) -> ParseResult {
        let start = Instant::now();

        let lines: Vec<String> = raw_lines
            .iter()
            .filter(|l| !l.trim().is_empty())
            .map(|l| normalize(l))
            .collect();

        info!("parsing receipt from {} lines", lines.len());

        let merchant = self.merchant.extract(&lines);
        let date = self.date.extract(&lines);
        let (currency, total) = match self.total.extract(&lines) {
            Some((cur, amt)) => (cur, Some(amt)),
            None => (None, None),
        };
        let items = self.items.extract_all(&lines);

        let mut warnings = Vec::new();
        if merchant.is_none() {
            warnings.push("could not resolve merchant".to_string());
        }
        if date.is_none() {
            warnings.push("could not resolve date".to_string());
        }
        if total.is_none() {
            warnings.push("could not resolve total".to_string());
        }
        if items.is_empty() {
            warnings.push("no line items recognized".to_string());
        }

        let meta = MetaRecord {
            merchant,
            date,
            currency,
            total,
        };
        let record = ReceiptRecord::assemble(meta, items);

        debug!(
            "extracted {} line items, {} warnings",
            record.items.len(),
            warnings.len()
        );

        ParseResult {
            record,
            lines,
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

impl Default for ReceiptParser {
    fn default() -> Self {
        Self::new()
    }
}
