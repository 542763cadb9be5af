//! Lexicon-based sentiment scoring
//!
//! Word-count model from "Can Twitter Help Predict Firm-Level Earnings
//! and Stock Returns?" (Bartov, Faurel, Mohanram, 2015), scored against
//! the Loughran-McDonald financial word lists.

use super::lexicon::Lexicon;

/// Punctuation stripped before tokenization.
const PUNCTUATION: [char; 7] = ['.', ',', ':', '(', ')', '!', '?'];

/// Normalize raw tweet text for scoring: lowercase, ASCII only,
/// punctuation removed.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii() && !PUNCTUATION.contains(c))
        .collect::<String>()
        .to_lowercase()
}

/// Score normalized text against the positive and negative lexicons.
///
/// Counts tokens present in each set (a token present in both counts in
/// both) and maps the balance linearly onto [-1.0, 1.0]. Text with no
/// lexicon hits scores exactly 0.0.
pub fn score(normalized: &str, positive: &Lexicon, negative: &Lexicon) -> f64 {
    let mut pos_count: u32 = 0;
    let mut neg_count: u32 = 0;

    for word in normalized.split_whitespace() {
        if positive.contains(word) {
            pos_count += 1;
        }
        if negative.contains(word) {
            neg_count += 1;
        }
    }

    if pos_count + neg_count == 0 {
        return 0.0;
    }

    -1.0 + 2.0 * f64::from(pos_count) / f64::from(pos_count + neg_count)
}
