//! Money token scanning.

use rust_decimal::Decimal;
use std::str::FromStr;

use super::patterns::MONEY;
use crate::models::receipt::Currency;

/// A recognized currency+numeric token within a string.
#[derive(Debug, Clone, PartialEq)]
pub struct AmountMatch {
    /// Mapped currency, absent for unmarked or unmapped markers.
    pub currency: Option<Currency>,
    /// Parsed amount; non-negative with at most 2 fractional digits.
    pub amount: Decimal,
    /// Byte offset of the start of the full match (marker included).
    pub start: usize,
    /// Byte offset past the end of the full match.
    pub end: usize,
}

/// Scan a string left to right for money-like tokens.
///
/// Matches are non-overlapping and returned in order, duplicates
/// included. Literals that fail to parse (e.g. overflow) are dropped;
/// the scan itself never fails.
pub fn find_amounts(s: &str) -> Vec<AmountMatch> {
    let mut out = Vec::new();

    for caps in MONEY.captures_iter(s) {
        let currency = caps.get(1).and_then(|m| Currency::from_token(m.as_str()));
        let literal = caps[2].replace([',', ' '], "");

        if let Ok(amount) = Decimal::from_str(&literal) {
            let full = caps.get(0).unwrap();
            out.push(AmountMatch {
                currency,
                amount,
                start: full.start(),
                end: full.end(),
            });
        }
    }

    out
}

/// First parseable money token in a string, if any.
pub fn parse_first_amount(s: &str) -> Option<AmountMatch> {
    find_amounts(s).into_iter().next()
}
