//! Common regex patterns for receipt field extraction.
//!
//! All scanning goes through the regex crate, whose automaton-based
//! engine guarantees linear-time matching on adversarial OCR noise.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Money tokens: optional currency marker (symbol or 2-3 letter
    // code, letters case-insensitive), then either a grouped-thousands
    // literal (1-3 leading digits, groups of exactly 3 separated by
    // comma or space) or a plain decimal. Fractions limited to 2
    // digits. Examples: ₹199, 199.00, 1,299.50, $3.5
    pub static ref MONEY: Regex = Regex::new(
        r"(?:([₹$€£]|(?i:INR|Rs|USD|EUR|GBP))\s*)?(\d{1,3}(?:[,\s]\d{3})+(?:\.\d{1,2})?|\d+(?:\.\d{1,2})?)"
    ).unwrap();

    // Fast-reject probe for date-shaped substrings.
    pub static ref DATE_HINT: Regex = Regex::new(
        r"\d{1,2}[/\-.]\d{1,2}[/\-.]\d{2,4}|\d{4}[/\-.]\d{1,2}[/\-.]\d{1,2}"
    ).unwrap();

    // Numeric dates. Day-month-year is tried first; see dates.rs.
    pub static ref DATE_DMY: Regex = Regex::new(
        r"\b(\d{1,2})[./\-](\d{1,2})[./\-](\d{4}|\d{2})\b"
    ).unwrap();

    pub static ref DATE_YMD: Regex = Regex::new(
        r"\b(\d{4})[./\-](\d{1,2})[./\-](\d{1,2})\b"
    ).unwrap();

    // English month-name dates: "3 April 2023", "03 Apr 23".
    pub static ref DATE_DAY_MONTH_NAME: Regex = Regex::new(
        r"(?i)\b(\d{1,2})\s+(jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|jun(?:e)?|jul(?:y)?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\b\.?,?\s+(\d{4}|\d{2})\b"
    ).unwrap();

    // "April 3, 2023".
    pub static ref DATE_MONTH_NAME_DAY: Regex = Regex::new(
        r"(?i)\b(jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|jun(?:e)?|jul(?:y)?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\b\.?\s+(\d{1,2})\b,?\s+(\d{4})\b"
    ).unwrap();

    // Month-year only, e.g. "April 2023"; resolves to the 1st.
    pub static ref DATE_MONTH_YEAR: Regex = Regex::new(
        r"(?i)\b(jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|jun(?:e)?|jul(?:y)?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?)\b\.?,?\s+(\d{4})\b"
    ).unwrap();

    // Quantity tokens inside item descriptions: "x2", "qty 3", "x1.5".
    pub static ref QTY_TOKEN: Regex = Regex::new(
        r"(?i)(?:^|\s)(?:x|qty)\s*(\d+(?:\.\d+)?)\b"
    ).unwrap();

    // Normalizer: anything outside word characters, currency glyphs
    // and the allowed punctuation set becomes a space.
    pub static ref NOISE: Regex = Regex::new(
        r"[^\w₹$€£.,:/\-() xX]"
    ).unwrap();

    pub static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}
