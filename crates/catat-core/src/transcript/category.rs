//! Category inference for transcripts.

use crate::models::draft::TransactionKind;
use crate::text;

use super::patterns::AMOUNT_DEBRIS;
use super::vocab;

/// Infer a category label; never empty.
///
/// The specific category table is scanned in definition order and the first
/// entry with any keyword present wins. Failing that, the 1–2 words after
/// the first kind keyword become a generic candidate. Failing that too, the
/// classified kind's label stands in.
pub fn infer(text: &str, text_lower: &str, kind: TransactionKind) -> String {
    for (label, keywords) in vocab::CATEGORY_TABLE {
        if keywords.iter().any(|keyword| text_lower.contains(keyword)) {
            return (*label).to_string();
        }
    }

    if let Some(candidate) = generic_candidate(text) {
        return candidate;
    }

    kind.label().to_string()
}

/// Take the 1–2 original-case words following the first kind keyword,
/// stripped of amount debris and title-cased. Candidates of a single
/// character or less are rejected.
fn generic_candidate(text: &str) -> Option<String> {
    let words: Vec<&str> = text.split_whitespace().collect();

    for (i, word) in words.iter().enumerate() {
        if !vocab::is_kind_keyword(&word.to_lowercase()) {
            continue;
        }
        if i + 1 >= words.len() {
            continue;
        }

        let end = (i + 3).min(words.len());
        let raw = words[i + 1..end].join(" ");
        let stripped = AMOUNT_DEBRIS.replace_all(&raw, "");
        let candidate = text::title_case(&stripped);

        if candidate.chars().count() > 1 {
            return Some(candidate);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn infer_text(text: &str, kind: TransactionKind) -> String {
        infer(text, &text.to_lowercase(), kind)
    }

    #[test]
    fn test_specific_category_from_table() {
        assert_eq!(
            infer_text("makan di warung", TransactionKind::Expense),
            "Makanan"
        );
        assert_eq!(
            infer_text("isi bensin motor", TransactionKind::Expense),
            "Transportasi"
        );
        assert_eq!(
            infer_text("beli rumah satu miliar", TransactionKind::Income),
            "Rumah Tangga"
        );
    }

    #[test]
    fn test_table_order_is_the_tie_break() {
        // both a food and an entertainment keyword are present; the table
        // lists Makanan first
        assert_eq!(
            infer_text("makan sebelum ke bioskop", TransactionKind::Expense),
            "Makanan"
        );
    }

    #[test]
    fn test_generic_candidate_after_kind_keyword() {
        assert_eq!(
            infer_text("pengeluaran sedekah masjid", TransactionKind::Expense),
            "Sedekah Masjid"
        );
    }

    #[test]
    fn test_generic_candidate_strips_amounts() {
        // the words after the keyword are all amount debris, so the kind
        // label stands in
        assert_eq!(
            infer_text("tabungan Rp 200.000", TransactionKind::Savings),
            "Tabungan"
        );
    }

    #[test]
    fn test_kind_label_fallback() {
        assert_eq!(
            infer_text("dapat hadiah undian", TransactionKind::Income),
            "Pemasukan"
        );
    }
}
