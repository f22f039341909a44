//! Label canonicalization for keyword matching

use unicode_normalization::UnicodeNormalization;

/// Accent-strip, trim and case-fold a label ("  Más de 120 DÍAS " → "mas de 120 dias")
pub fn normalize_text(value: &str) -> String {
    value
        .nfkd()
        .filter(|c| !unicode_normalization::char::is_combining_mark(*c))
        .collect::<String>()
        .trim()
        .to_lowercase()
}
