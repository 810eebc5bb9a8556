//! Receipt total extraction.

use rust_decimal::Decimal;

use super::FieldExtractor;
use super::amounts::{find_amounts, parse_first_amount};
use crate::models::receipt::Currency;

/// Total field extractor.
///
/// Phase 1 scans lines carrying a total-like keyword and keeps the
/// maximum first-amount seen; "total" tends to be printed several
/// times (subtotal, tax, grand total) and the largest of them is the
/// most likely true total. Phase 2 falls back to the global maximum
/// over every amount on every line.
pub struct TotalExtractor {
    tokens: Vec<String>,
}

impl TotalExtractor {
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens }
    }

    fn has_token(&self, line: &str) -> bool {
        let lower = line.to_lowercase();
        self.tokens.iter().any(|t| lower.contains(t.as_str()))
    }
}

impl Default for TotalExtractor {
    fn default() -> Self {
        Self::new(crate::models::config::KeywordConfig::default().total_tokens)
    }
}

impl FieldExtractor for TotalExtractor {
    type Output = (Option<Currency>, Decimal);

    fn extract(&self, lines: &[String]) -> Option<(Option<Currency>, Decimal)> {
        let mut best: Option<(Option<Currency>, Decimal)> = None;

        for line in lines.iter().filter(|l| self.has_token(l)) {
            if let Some(m) = parse_first_amount(line) {
                // Strictly greater: ties keep the first-seen currency.
                if best.is_none_or(|(_, amt)| m.amount > amt) {
                    best = Some((m.currency, m.amount));
                }
            }
        }

        if best.is_none() {
            for line in lines {
                for m in find_amounts(line) {
                    if best.is_none_or(|(_, amt)| m.amount > amt) {
                        best = Some((m.currency, m.amount));
                    }
                }
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn lines(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_picks_largest_keyword_amount() {
        let extractor = TotalExtractor::default();
        let input = lines(&["Subtotal 100.00", "Tax 18.00", "Grand Total 118.00"]);
        assert_eq!(extractor.extract(&input), Some((None, dec("118.00"))));
    }

    #[test]
    fn test_keyword_lines_beat_larger_unkeyed_amounts() {
        let extractor = TotalExtractor::default();
        // The phone-number-like amount on an unkeyed line is ignored
        // because phase 1 found a match.
        let input = lines(&["Call 9999999", "Total 118.00"]);
        assert_eq!(extractor.extract(&input), Some((None, dec("118.00"))));
    }

    #[test]
    fn test_currency_follows_winning_amount() {
        let extractor = TotalExtractor::default();
        let input = lines(&["Subtotal $100.00", "Grand Total $118.00"]);
        assert_eq!(
            extractor.extract(&input),
            Some((Some(Currency::Usd), dec("118.00")))
        );
    }

    #[test]
    fn test_tie_keeps_first_seen_currency() {
        let extractor = TotalExtractor::default();
        let input = lines(&["Total ₹118.00", "Amount $118.00"]);
        assert_eq!(
            extractor.extract(&input),
            Some((Some(Currency::Inr), dec("118.00")))
        );
    }

    #[test]
    fn test_global_max_fallback() {
        let extractor = TotalExtractor::default();
        let input = lines(&["Coffee 250.00", "Muffin 90.00"]);
        assert_eq!(extractor.extract(&input), Some((None, dec("250.00"))));
    }

    #[test]
    fn test_no_amounts_at_all() {
        let extractor = TotalExtractor::default();
        let input = lines(&["CAFE ARROW", "thank you"]);
        assert_eq!(extractor.extract(&input), None);
    }
}
