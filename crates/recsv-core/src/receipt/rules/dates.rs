//! Date recognition for receipt lines.

use chrono::NaiveDate;
use std::collections::HashSet;

use super::FieldExtractor;
use super::patterns::{
    DATE_DAY_MONTH_NAME, DATE_DMY, DATE_HINT, DATE_MONTH_NAME_DAY, DATE_MONTH_YEAR, DATE_YMD,
};

/// Detect a date-like substring and resolve it to a calendar date.
///
/// Numeric dates are read day-month-year first, so `03/04/2023` is
/// 3 April and not 4 March; when the day-month reading is out of range
/// the components are retried swapped. Month-year only strings resolve
/// to the 1st of the month. Returns `None` on anything unparseable;
/// never panics.
pub fn recognize_date(s: &str) -> Option<NaiveDate> {
    // Fast-reject: no digit and no date-shaped substring means no
    // date, skip the pattern cascade entirely.
    if !s.chars().any(|c| c.is_ascii_digit()) && !DATE_HINT.is_match(s) {
        return None;
    }

    for caps in DATE_DMY.captures_iter(s) {
        let day: u32 = caps[1].parse().unwrap_or(0);
        let month: u32 = caps[2].parse().unwrap_or(0);
        let year = parse_year(&caps[3]);

        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            return Some(date);
        }
        // Month-day fallback for unambiguous cases like 04/25/2023.
        if let Some(date) = NaiveDate::from_ymd_opt(year, day, month) {
            return Some(date);
        }
    }

    for caps in DATE_YMD.captures_iter(s) {
        let year: i32 = caps[1].parse().unwrap_or(0);
        let month: u32 = caps[2].parse().unwrap_or(0);
        let day: u32 = caps[3].parse().unwrap_or(0);

        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            return Some(date);
        }
    }

    for caps in DATE_DAY_MONTH_NAME.captures_iter(s) {
        let day: u32 = caps[1].parse().unwrap_or(0);
        let month = month_to_number(&caps[2]);
        let year = parse_year(&caps[3]);

        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            return Some(date);
        }
    }

    for caps in DATE_MONTH_NAME_DAY.captures_iter(s) {
        let month = month_to_number(&caps[1]);
        let day: u32 = caps[2].parse().unwrap_or(0);
        let year: i32 = caps[3].parse().unwrap_or(0);

        if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
            return Some(date);
        }
    }

    // Day-of-month preference: an ambiguous month-year resolves to
    // the first of the month.
    for caps in DATE_MONTH_YEAR.captures_iter(s) {
        let month = month_to_number(&caps[1]);
        let year: i32 = caps[2].parse().unwrap_or(0);

        if let Some(date) = NaiveDate::from_ymd_opt(year, month, 1) {
            return Some(date);
        }
    }

    None
}

/// Date field extractor over the normalized line list.
///
/// Lines containing a date-hint keyword are visited first, in original
/// order, then all remaining lines; duplicates are visited once.
pub struct DateExtractor {
    hints: Vec<String>,
}

impl DateExtractor {
    pub fn new(hints: Vec<String>) -> Self {
        Self { hints }
    }

    fn has_hint(&self, line: &str) -> bool {
        let lower = line.to_lowercase();
        self.hints.iter().any(|h| lower.contains(h.as_str()))
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new(crate::models::config::KeywordConfig::default().date_hints)
    }
}

impl FieldExtractor for DateExtractor {
    type Output = NaiveDate;

    fn extract(&self, lines: &[String]) -> Option<NaiveDate> {
        let prioritized = lines
            .iter()
            .filter(|l| self.has_hint(l))
            .chain(lines.iter());

        let mut seen = HashSet::new();
        for line in prioritized {
            if !seen.insert(line.as_str()) {
                continue;
            }
            if let Some(date) = recognize_date(line) {
                return Some(date);
            }
        }
        None
    }
}

fn parse_year(s: &str) -> i32 {
    let year: i32 = s.parse().unwrap_or(0);
    if year < 100 {
        // Two-digit year: assume 2000s for 00-50, 1900s for 51-99
        if year <= 50 { 2000 + year } else { 1900 + year }
    } else {
        year
    }
}

fn month_to_number(s: &str) -> u32 {
    let lower = s.to_lowercase();
    match lower.get(..3).unwrap_or("") {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => 0,
    }
}
