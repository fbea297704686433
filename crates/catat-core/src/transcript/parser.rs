//! Transcript extraction orchestrator.

use tracing::debug;

use crate::models::config::TranscriptConfig;
use crate::models::draft::TransactionDraft;
use crate::text;

use super::{amount, category, classify, describe};

/// Trait for transcript parsing.
pub trait TranscriptParser {
    /// Parse a transcript into a draft. Returns `None` only when the input
    /// is empty or whitespace, signaling "no extraction possible".
    fn parse(&self, text: &str) -> Option<TransactionDraft>;
}

/// Extractor for voice/text transcripts.
///
/// Pure and stateless: each call operates on its own input and the
/// process-wide constant tables, so one instance may be shared freely
/// across threads.
pub struct TranscriptExtractor {
    max_description_len: usize,
}

impl TranscriptExtractor {
    /// Create an extractor with default settings.
    pub fn new() -> Self {
        Self {
            max_description_len: 100,
        }
    }

    /// Create an extractor from configuration.
    pub fn from_config(config: &TranscriptConfig) -> Self {
        Self {
            max_description_len: config.max_description_len,
        }
    }

    /// Set the maximum description length in characters.
    pub fn with_max_description_len(mut self, len: usize) -> Self {
        self.max_description_len = len;
        self
    }
}

impl Default for TranscriptExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TranscriptParser for TranscriptExtractor {
    fn parse(&self, text: &str) -> Option<TransactionDraft> {
        if text.trim().is_empty() {
            return None;
        }

        let text_lower = text.to_lowercase();
        let tokens = text::tokenize(text);

        let kind = classify::classify(&tokens, &text_lower);
        let evidence = amount::extract_amount(text, &tokens);
        let category = category::infer(text, &text_lower, kind);
        let description = describe::synthesize(
            text,
            &evidence,
            &category,
            kind,
            self.max_description_len,
        );

        debug!(
            %kind,
            amount = evidence.value,
            %category,
            "extracted transcript draft"
        );

        Some(TransactionDraft {
            kind,
            amount: evidence.value,
            description,
            category,
            notes: text.trim().to_string(),
        })
    }
}

/// Extract a draft from a transcript with default settings.
pub fn extract_from_transcript(text: &str) -> Option<TransactionDraft> {
    TranscriptExtractor::new().parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::draft::TransactionKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_input_yields_none() {
        assert_eq!(extract_from_transcript(""), None);
        assert_eq!(extract_from_transcript("   \n\t"), None);
    }

    #[test]
    fn test_food_at_warung() {
        let draft = extract_from_transcript("makan di warung seratus ribu").unwrap();
        assert_eq!(draft.kind, TransactionKind::Expense);
        assert_eq!(draft.amount, 100_000);
        assert_eq!(draft.category, "Makanan");
        assert_eq!(draft.description, "Di Warung");
        assert_eq!(draft.notes, "makan di warung seratus ribu");
    }

    #[test]
    fn test_house_purchase() {
        let draft = extract_from_transcript("beli rumah satu miliar").unwrap();
        assert_eq!(draft.amount, 1_000_000_000);
        assert_eq!(draft.category, "Rumah Tangga");
    }

    #[test]
    fn test_leading_kind_keyword_beats_later_income_word() {
        let draft = extract_from_transcript("pengeluaran seribu untuk gaji").unwrap();
        assert_eq!(draft.kind, TransactionKind::Expense);
        assert_eq!(draft.amount, 1_000);
    }

    #[test]
    fn test_digit_amount_with_currency() {
        let draft =
            extract_from_transcript("Pengeluaran belanja Rp50.000 untuk makanan").unwrap();
        assert_eq!(draft.kind, TransactionKind::Expense);
        assert_eq!(draft.amount, 50_000);
        assert_eq!(draft.category, "Makanan");
        assert_eq!(draft.description, "Untuk Makanan");
    }

    #[test]
    fn test_salary_income() {
        let draft = extract_from_transcript("Pemasukan gaji Rp5.000.000 dari kantor").unwrap();
        assert_eq!(draft.kind, TransactionKind::Income);
        assert_eq!(draft.amount, 5_000_000);
    }

    #[test]
    fn test_savings_deposit() {
        let draft = extract_from_transcript("Tabungan simpan Rp2.500.000 di bank").unwrap();
        assert_eq!(draft.kind, TransactionKind::Savings);
        assert_eq!(draft.amount, 2_500_000);
    }

    #[test]
    fn test_stacked_magnitude_amount() {
        let draft =
            extract_from_transcript("bayar kontrakan satu juta dua ratus lima puluh ribu")
                .unwrap();
        assert_eq!(draft.amount, 1_250_000);
    }

    #[test]
    fn test_zero_amount_draft_is_still_produced() {
        let draft = extract_from_transcript("jalan jalan sore").unwrap();
        assert_eq!(draft.amount, 0);
        assert_eq!(draft.kind, TransactionKind::Income);
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let first = extract_from_transcript("pengeluaran makan bakso dua puluh lima ribu");
        let second = extract_from_transcript("pengeluaran makan bakso dua puluh lima ribu");
        assert_eq!(first, second);
    }
}
