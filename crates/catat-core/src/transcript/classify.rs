//! Transaction-kind classification for transcripts.

use crate::models::draft::TransactionKind;

use super::vocab;

/// Classify the transaction kind for a transcript.
///
/// A kind keyword as the very first token wins immediately, modeling how
/// users lead with the type ("pengeluaran ..., lima ribu"). Otherwise the
/// whole text is scanned one keyword set at a time, income first, and the
/// first set with any substring match wins. With no match anywhere the kind
/// defaults to Income.
///
/// The receipt pipeline defaults to Expense instead; the divergence between
/// the two defaults is deliberate and should not be unified silently.
pub fn classify(tokens: &[String], text_lower: &str) -> TransactionKind {
    if let Some(first) = tokens.first() {
        if let Some(kind) = vocab::kind_of_keyword(first) {
            return kind;
        }
    }

    for (kind, keywords) in vocab::KIND_KEYWORD_SETS {
        if keywords.iter().any(|keyword| text_lower.contains(keyword)) {
            return *kind;
        }
    }

    TransactionKind::Income
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::tokenize;

    fn classify_text(text: &str) -> TransactionKind {
        let lower = text.to_lowercase();
        classify(&tokenize(text), &lower)
    }

    #[test]
    fn test_leading_keyword_wins_over_later_matches() {
        // "gaji" is an income keyword, but the leading word decides
        assert_eq!(
            classify_text("pengeluaran seribu untuk gaji"),
            TransactionKind::Expense
        );
        assert_eq!(
            classify_text("tabungan dari gaji bulanan"),
            TransactionKind::Savings
        );
    }

    #[test]
    fn test_full_text_scan_in_priority_order() {
        assert_eq!(classify_text("terima gaji bulan ini"), TransactionKind::Income);
        // the savings keyword "menabung" appears earlier in the text, but
        // the expense set is scanned first
        assert_eq!(
            classify_text("rencana menabung sisa uang belanja"),
            TransactionKind::Expense
        );
        assert_eq!(classify_text("bayar cicilan motor"), TransactionKind::Debt);
    }

    #[test]
    fn test_substring_matching() {
        // "gajian" contains "gaji"
        assert_eq!(classify_text("sudah gajian hari ini"), TransactionKind::Income);
    }

    #[test]
    fn test_default_is_income() {
        assert_eq!(classify_text("sedekah di masjid"), TransactionKind::Income);
    }
}
