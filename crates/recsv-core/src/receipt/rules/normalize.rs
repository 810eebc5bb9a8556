//! OCR text normalization.

use unicode_normalization::UnicodeNormalization;

use super::patterns::{NOISE, WHITESPACE};

/// Clean a raw OCR fragment into a canonical, analyzable string.
///
/// Applies NFKC compatibility normalization, replaces everything
/// outside printable ASCII (except the ₹ € £ currency glyphs) with a
/// space, collapses noise characters outside the allowed punctuation
/// set, and squeezes whitespace. Total and idempotent; may return an
/// empty string.
pub fn normalize(raw: &str) -> String {
    let folded: String = raw
        .nfkc()
        .map(|ch| {
            if ch == ' ' || ch.is_ascii_graphic() || matches!(ch, '₹' | '€' | '£') {
                ch
            } else {
                ' '
            }
        })
        .collect();

    let denoised = NOISE.replace_all(&folded, " ");
    let squeezed = WHITESPACE.replace_all(&denoised, " ");
    squeezed.trim().to_string()
}
