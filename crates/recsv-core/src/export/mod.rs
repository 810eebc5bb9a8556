//! Tabular export of assembled receipt records.

use std::io::Write;

use crate::error::ExportError;
use crate::models::receipt::{COLUMNS, ReceiptRecord};

/// Write a record as CSV: header row, one row per line item, fixed
/// column order, absent values as empty fields.
pub fn write_csv<W: Write>(record: &ReceiptRecord, writer: W) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(COLUMNS)?;

    for row in record.rows() {
        wtr.write_record([
            row.merchant.clone().unwrap_or_default(),
            row.date.map(|d| d.to_string()).unwrap_or_default(),
            row.item.clone(),
            row.qty.to_string(),
            row.unit_price.to_string(),
            row.line_total.to_string(),
            row.currency.map(|c| c.code().to_string()).unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Render a record to a UTF-8 CSV string.
pub fn to_csv_string(record: &ReceiptRecord) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    write_csv(record, &mut buf)?;
    Ok(String::from_utf8(buf)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::receipt::{Currency, LineItem, MetaRecord};
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_csv_layout() {
        let record = ReceiptRecord::assemble(
            MetaRecord {
                merchant: Some("CAFE ARROW".to_string()),
                date: NaiveDate::from_ymd_opt(2023, 4, 3),
                currency: Some(Currency::Inr),
                total: Some(dec("340.00")),
            },
            vec![
                LineItem::new("Coffee", dec("2"), dec("250.00")),
                LineItem::new("Muffin", dec("1"), dec("90.00")),
            ],
        );

        let csv = to_csv_string(&record).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(
            lines[0],
            "merchant,date,item,qty,unit_price,line_total,currency"
        );
        assert_eq!(lines[1], "CAFE ARROW,2023-04-03,Coffee,2,125.00,250.00,INR");
        assert_eq!(lines[2], "CAFE ARROW,2023-04-03,Muffin,1,90.00,90.00,INR");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_absent_meta_serializes_as_empty_fields() {
        let record = ReceiptRecord::assemble(
            MetaRecord::default(),
            vec![LineItem::new("Coffee", dec("1"), dec("250.00"))],
        );

        let csv = to_csv_string(&record).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[1], ",,Coffee,1,250.00,250.00,");
    }

    #[test]
    fn test_empty_record_is_header_only() {
        let csv = to_csv_string(&ReceiptRecord::default()).unwrap();
        assert_eq!(
            csv.trim_end(),
            "merchant,date,item,qty,unit_price,line_total,currency"
        );
    }
}
