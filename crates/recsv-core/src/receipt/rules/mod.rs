//! Rule-based field extractors for receipt text.
//!
//! Every extractor consumes the full ordered list of normalized lines
//! and returns a best-effort result; absence is a valid, non-error
//! outcome for all of them.

pub mod amounts;
pub mod dates;
pub mod items;
pub mod merchant;
pub mod normalize;
pub mod patterns;
pub mod total;

pub use amounts::{AmountMatch, find_amounts, parse_first_amount};
pub use dates::{DateExtractor, recognize_date};
pub use items::ItemsExtractor;
pub use merchant::MerchantExtractor;
pub use normalize::normalize;
pub use total::TotalExtractor;

/// Trait for field extractors over the normalized line list.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field, or `None` when it cannot be resolved.
    fn extract(&self, lines: &[String]) -> Option<Self::Output>;
}
