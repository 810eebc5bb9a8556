//! Core library for receipt OCR extraction.
//!
//! This crate provides:
//! - OCR text normalization and money/date tokenization
//! - Heuristic field extraction (merchant, date, total, line items)
//! - Receipt record assembly with a fixed column contract
//! - CSV export

pub mod error;
pub mod export;
pub mod models;
pub mod ocr;
pub mod receipt;

pub use error::{ExportError, OcrError, RecsvError, Result};
pub use export::{to_csv_string, write_csv};
pub use models::config::RecsvConfig;
pub use models::receipt::{COLUMNS, Currency, LineItem, MetaRecord, ReceiptRecord, ReceiptRow};
pub use ocr::{MemoizedEngine, OcrEngine, TextFragment};
pub use receipt::{FieldExtractor, ParseResult, ReceiptParser};
