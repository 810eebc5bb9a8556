//! Data models: receipt records and pipeline configuration.

pub mod config;
pub mod receipt;

pub use config::{ItemsConfig, KeywordConfig, MerchantConfig, RecsvConfig};
pub use receipt::{COLUMNS, Currency, LineItem, MetaRecord, ReceiptRecord, ReceiptRow};
