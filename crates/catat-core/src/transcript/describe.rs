//! Description synthesis for transcripts.

use crate::models::draft::TransactionKind;
use crate::text;

use super::amount::AmountEvidence;
use super::patterns::{CURRENCY_MARKER, KIND_KEYWORD_STRIP};

/// Placeholder when nothing descriptive survives removal.
const VOICE_PLACEHOLDER: &str = "Transaksi Suara";

/// Build the item description: the original text minus everything already
/// captured elsewhere (amounts, currency markers, kind keywords), collapsed
/// and title-cased. Falls back to the category, then to a fixed placeholder.
pub fn synthesize(
    original: &str,
    evidence: &AmountEvidence,
    category: &str,
    kind: TransactionKind,
    max_len: usize,
) -> String {
    let mut remaining = original.to_string();

    for matched in &evidence.digit_matches {
        text::remove_first(&mut remaining, matched);
    }
    for span in &evidence.word_spans {
        text::remove_first_ignore_case(&mut remaining, span);
    }

    let remaining = CURRENCY_MARKER.replace_all(&remaining, "");
    let remaining = KIND_KEYWORD_STRIP.replace_all(&remaining, " ");

    let mut description = text::title_case(&remaining);
    if description.chars().count() > max_len {
        description = description
            .chars()
            .take(max_len)
            .collect::<String>()
            .trim_end()
            .to_string();
    }

    if description.is_empty() {
        if category != kind.label() {
            category.to_string()
        } else {
            VOICE_PLACEHOLDER.to_string()
        }
    } else {
        description
    }
}
