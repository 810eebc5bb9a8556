//! Merchant name extraction.

use super::FieldExtractor;
use crate::models::config::MerchantConfig;

/// Merchant field extractor.
///
/// The store name is assumed to sit near the top of the receipt, often
/// as a long all-caps logo line, so candidates are scored by letter
/// count with a bonus for shouty words.
pub struct MerchantExtractor {
    config: MerchantConfig,
}

impl MerchantExtractor {
    pub fn new(config: MerchantConfig) -> Self {
        Self { config }
    }

    fn score(&self, line: &str) -> usize {
        let letters = line.chars().filter(|c| c.is_alphabetic()).count();
        let caps_words = line
            .split_whitespace()
            .filter(|w| {
                w.chars().count() >= self.config.caps_word_min_len
                    && w.chars().any(char::is_alphabetic)
                    && !w.chars().any(char::is_lowercase)
            })
            .count();

        letters + self.config.caps_bonus * caps_words
    }
}

impl Default for MerchantExtractor {
    fn default() -> Self {
        Self::new(MerchantConfig::default())
    }
}

impl FieldExtractor for MerchantExtractor {
    type Output = String;

    fn extract(&self, lines: &[String]) -> Option<String> {
        let mut best: Option<(&String, usize)> = None;

        for line in lines.iter().take(self.config.head_lines) {
            let letters = line.chars().filter(|c| c.is_alphabetic()).count();
            if letters < self.config.min_letters {
                continue;
            }

            let score = self.score(line);
            // Strict comparison: first-seen wins on exact ties.
            if best.is_none_or(|(_, s)| score > s) {
                best = Some((line, score));
            }
        }

        best.map(|(line, _)| line.clone())
    }
}
