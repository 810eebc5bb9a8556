//! Receipt data models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fixed column order of the assembled receipt table.
///
/// This is the external contract of the library: every tabular export
/// emits exactly these columns in exactly this order.
pub const COLUMNS: [&str; 7] = [
    "merchant",
    "date",
    "item",
    "qty",
    "unit_price",
    "line_total",
    "currency",
];

/// Recognized currency identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Indian rupee (₹, Rs).
    Inr,
    /// US dollar ($).
    Usd,
    /// Euro (€).
    Eur,
    /// British pound (£).
    Gbp,
}

impl Currency {
    /// Three-letter ISO code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Inr => "INR",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
        }
    }

    /// Map a currency marker (symbol or letter code) to a currency.
    ///
    /// Letter codes are matched case-insensitively; unmapped markers
    /// yield `None` rather than an error.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim() {
            "₹" => return Some(Currency::Inr),
            "$" => return Some(Currency::Usd),
            "€" => return Some(Currency::Eur),
            "£" => return Some(Currency::Gbp),
            _ => {}
        }

        match token.trim().to_ascii_uppercase().as_str() {
            "INR" | "RS" => Some(Currency::Inr),
            "USD" => Some(Currency::Usd),
            "EUR" => Some(Currency::Eur),
            "GBP" => Some(Currency::Gbp),
            _ => None,
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Receipt-level metadata.
///
/// Every field is independently optional: failure to resolve one never
/// blocks resolution of the others.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetaRecord {
    /// Merchant/store name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant: Option<String>,

    /// Transaction date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    /// Detected currency.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,

    /// Receipt total.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<Decimal>,
}

impl MetaRecord {
    /// True when no field was resolved.
    pub fn is_empty(&self) -> bool {
        self.merchant.is_none()
            && self.date.is_none()
            && self.currency.is_none()
            && self.total.is_none()
    }
}

/// One purchased item row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Item description.
    pub item: String,

    /// Quantity; defaults to 1 when no quantity token was recognized.
    pub qty: Decimal,

    /// Unit price, rounded to 2 decimal places.
    pub unit_price: Decimal,

    /// Line total, rounded to 2 decimal places.
    pub line_total: Decimal,
}

impl LineItem {
    /// Build a line item from a description, quantity and line total.
    ///
    /// The unit price is derived as `line_total / qty` rounded to two
    /// decimal places; a zero quantity or an overflowing division
    /// falls back to the line total.
    pub fn new(item: impl Into<String>, qty: Decimal, line_total: Decimal) -> Self {
        let unit_price = line_total
            .checked_div(qty)
            .map(|p| p.round_dp(2))
            .unwrap_or_else(|| line_total.round_dp(2));

        Self {
            item: item.into(),
            qty,
            unit_price,
            line_total: line_total.round_dp(2),
        }
    }
}

/// The assembled output record: receipt metadata joined onto the item
/// table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReceiptRecord {
    /// Receipt-level metadata.
    pub meta: MetaRecord,

    /// Extracted line items, in line order.
    pub items: Vec<LineItem>,
}

impl ReceiptRecord {
    /// Assemble a record from extractor outputs.
    pub fn assemble(meta: MetaRecord, items: Vec<LineItem>) -> Self {
        Self { meta, items }
    }

    /// Broadcast the metadata onto every item, yielding one flat row
    /// per line item in the fixed column order.
    ///
    /// An empty item table yields zero rows.
    pub fn rows(&self) -> Vec<ReceiptRow> {
        self.items
            .iter()
            .map(|item| ReceiptRow {
                merchant: self.meta.merchant.clone(),
                date: self.meta.date,
                item: item.item.clone(),
                qty: item.qty,
                unit_price: item.unit_price,
                line_total: item.line_total,
                currency: self.meta.currency,
            })
            .collect()
    }
}

/// One flat export row: a line item joined with the receipt metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptRow {
    /// Merchant name, absent when extraction failed.
    pub merchant: Option<String>,

    /// Transaction date, absent when extraction failed.
    pub date: Option<NaiveDate>,

    /// Item description.
    pub item: String,

    /// Quantity.
    pub qty: Decimal,

    /// Unit price.
    pub unit_price: Decimal,

    /// Line total.
    pub line_total: Decimal,

    /// Currency, absent when no marker was recognized.
    pub currency: Option<Currency>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_currency_from_token() {
        assert_eq!(Currency::from_token("₹"), Some(Currency::Inr));
        assert_eq!(Currency::from_token("Rs"), Some(Currency::Inr));
        assert_eq!(Currency::from_token("rs"), Some(Currency::Inr));
        assert_eq!(Currency::from_token("$"), Some(Currency::Usd));
        assert_eq!(Currency::from_token("usd"), Some(Currency::Usd));
        assert_eq!(Currency::from_token("€"), Some(Currency::Eur));
        assert_eq!(Currency::from_token("gbp"), Some(Currency::Gbp));
        assert_eq!(Currency::from_token("zł"), None);
    }

    #[test]
    fn test_unit_price_derivation() {
        let item = LineItem::new("Coffee", dec("2"), dec("250.00"));
        assert_eq!(item.unit_price, dec("125.00"));
        assert_eq!(item.line_total, dec("250.00"));

        // Zero quantity falls back to the line total.
        let item = LineItem::new("Coffee", Decimal::ZERO, dec("250.005"));
        assert_eq!(item.unit_price, dec("250.00"));
    }

    #[test]
    fn test_unit_price_overflow_falls_back_to_line_total() {
        // Dividing by a fractional quantity would overflow Decimal.
        let item = LineItem::new("Widget", dec("0.5"), Decimal::MAX);
        assert_eq!(item.unit_price, Decimal::MAX.round_dp(2));
        assert_eq!(item.line_total, Decimal::MAX.round_dp(2));
    }

    #[test]
    fn test_rows_broadcast_meta() {
        let meta = MetaRecord {
            merchant: Some("CAFE ARROW".to_string()),
            date: NaiveDate::from_ymd_opt(2023, 4, 3),
            currency: Some(Currency::Inr),
            total: Some(dec("250.00")),
        };
        let record = ReceiptRecord::assemble(
            meta,
            vec![
                LineItem::new("Coffee", dec("2"), dec("250.00")),
                LineItem::new("Muffin", dec("1"), dec("90.00")),
            ],
        );

        let rows = record.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].merchant.as_deref(), Some("CAFE ARROW"));
        assert_eq!(rows[1].merchant.as_deref(), Some("CAFE ARROW"));
        assert_eq!(rows[1].currency, Some(Currency::Inr));
    }

    #[test]
    fn test_empty_items_yield_no_rows() {
        let record = ReceiptRecord::default();
        assert!(record.rows().is_empty());
        assert!(record.meta.is_empty());
    }
}
