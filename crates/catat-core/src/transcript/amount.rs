//! Amount extraction for transcripts.
//!
//! Two independent strategies feed one precedence rule: the word-number scan
//! wins when it resolves a positive value, otherwise the largest digit match
//! is used, otherwise the amount is 0. The strategies are never summed.

use super::numbers::{scan_word_number, WordNumber};
use super::patterns::DIGIT_AMOUNT;

/// Evidence gathered while resolving an amount.
///
/// `digit_matches` holds every digit-pattern capture, not just the winning
/// one; totals printed in digits never belong in the item description, so
/// all of them are removed during synthesis.
#[derive(Debug, Default)]
pub struct AmountEvidence {
    /// Resolved amount in whole rupiah.
    pub value: u64,
    /// Digit substrings matched anywhere in the text.
    pub digit_matches: Vec<String>,
    /// Word-number spans consumed by the scan.
    pub word_spans: Vec<String>,
}

/// Resolve the best-effort amount for a transcript.
pub fn extract_amount(text: &str, tokens: &[String]) -> AmountEvidence {
    let mut digit_max: u64 = 0;
    let mut digit_matches = Vec::new();

    for caps in DIGIT_AMOUNT.captures_iter(text) {
        if let Some(m) = caps.get(1) {
            digit_matches.push(m.as_str().to_string());
            let cleaned: String = m
                .as_str()
                .chars()
                .filter(|c| c.is_ascii_digit())
                .collect();
            // Values past u64 are OCR-grade noise; skip the match.
            if let Ok(value) = cleaned.parse::<u64>() {
                digit_max = digit_max.max(value);
            }
        }
    }

    let WordNumber {
        value: word_value,
        spans: word_spans,
    } = scan_word_number(tokens);

    let value = if word_value > 0 { word_value } else { digit_max };

    AmountEvidence {
        value,
        digit_matches,
        word_spans,
    }
}
