//! Receipt field extraction module.

mod parser;
pub mod rules;

pub use parser::{ParseResult, ReceiptParser};
pub use rules::FieldExtractor;
