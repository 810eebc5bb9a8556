//! Line item extraction.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::amounts::find_amounts;
use super::patterns::QTY_TOKEN;
use crate::models::config::ItemsConfig;
use crate::models::receipt::LineItem;

/// Line-item extractor.
///
/// Each line is judged independently: it must carry an item-like
/// description and end with a money-like token. Lines that fail any
/// check are silently skipped, never surfaced as errors.
pub struct ItemsExtractor {
    config: ItemsConfig,
}

impl ItemsExtractor {
    pub fn new(config: ItemsConfig) -> Self {
        Self { config }
    }

    /// Extract every accepted line as a `LineItem`, in line order.
    pub fn extract_all(&self, lines: &[String]) -> Vec<LineItem> {
        lines.iter().filter_map(|l| self.parse_line(l)).collect()
    }

    fn parse_line(&self, line: &str) -> Option<LineItem> {
        // An item row needs a description.
        if !line.chars().any(|c| c.is_alphabetic()) {
            return None;
        }

        // Items list the price at the end of the line, so the last
        // amount is the price candidate.
        let matches = find_amounts(line);
        let last = matches.last()?;

        let trailing = line[last.end..].chars().count();
        if trailing > self.config.max_trailing_chars {
            return None;
        }

        let price = last.amount;

        let left = line[..last.start].trim_matches(|c| " .-xX".contains(c));
        let letters = left.chars().filter(|c| c.is_alphabetic()).count();
        if letters < self.config.min_item_letters {
            return None;
        }

        let (description, qty) = match QTY_TOKEN.captures(left) {
            Some(caps) => {
                let qty = Decimal::from_str(&caps[1]).unwrap_or(Decimal::ONE);
                let stripped = QTY_TOKEN.replace_all(left, "");
                (stripped.trim().to_string(), qty)
            }
            None => (left.to_string(), Decimal::ONE),
        };

        Some(LineItem::new(description, qty, price))
    }
}

impl Default for ItemsExtractor {
    fn default() -> Self {
        Self::new(ItemsConfig::default())
    }
}
