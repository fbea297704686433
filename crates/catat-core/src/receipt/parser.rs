//! Receipt extraction orchestrator.

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::models::config::ReceiptConfig;
use crate::models::draft::{ReceiptDraft, TransactionKind};

use super::patterns::{INCOME_INDICATORS, MERCHANT_KEYWORDS};
use super::{amount, date::DateExtractor, describe, FieldExtractor};

/// Category assigned to every receipt-based entry.
const RECEIPT_CATEGORY: &str = "Struk";

/// Trait for receipt parsing.
pub trait ReceiptParser {
    /// Parse OCR text into a draft. Returns `None` only when the input is
    /// empty or whitespace, the "no data extracted" surface for a failed
    /// OCR pass upstream.
    fn parse(&self, ocr_text: &str) -> Option<ReceiptDraft>;
}

/// Extractor for receipt OCR text.
pub struct ReceiptExtractor {
    today: NaiveDate,
    min_year: i32,
}

impl ReceiptExtractor {
    /// Create an extractor bounded by the current local date.
    pub fn new() -> Self {
        Self {
            today: Local::now().date_naive(),
            min_year: 2020,
        }
    }

    /// Create an extractor from configuration.
    pub fn from_config(config: &ReceiptConfig) -> Self {
        Self {
            today: Local::now().date_naive(),
            min_year: config.min_year,
        }
    }

    /// Override the upper date bound. Detected dates after `today` are
    /// rejected, and `today` is the fallback date.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Override the oldest acceptable receipt year.
    pub fn with_min_year(mut self, min_year: i32) -> Self {
        self.min_year = min_year;
        self
    }
}

impl Default for ReceiptExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ReceiptParser for ReceiptExtractor {
    fn parse(&self, ocr_text: &str) -> Option<ReceiptDraft> {
        if ocr_text.trim().is_empty() {
            return None;
        }

        let amount = amount::extract_amount(ocr_text);
        let description = describe::extract_description(ocr_text);
        let kind = classify_kind(ocr_text);
        let date = DateExtractor::new(self.today, self.min_year)
            .extract(ocr_text)
            .unwrap_or(self.today);

        debug!(%kind, amount, %date, "extracted receipt draft");

        Some(ReceiptDraft {
            kind,
            amount,
            description,
            category: RECEIPT_CATEGORY.to_string(),
            date,
        })
    }
}

/// Classify the receipt kind from its content.
///
/// Merchant indicators are checked before income indicators, and the
/// default is Expense since most receipts record purchases. The transcript
/// pipeline defaults to Income; the asymmetry is deliberate.
fn classify_kind(text: &str) -> TransactionKind {
    let text_lower = text.to_lowercase();

    if MERCHANT_KEYWORDS
        .iter()
        .any(|keyword| text_lower.contains(keyword))
    {
        return TransactionKind::Expense;
    }

    if INCOME_INDICATORS
        .iter()
        .any(|keyword| text_lower.contains(keyword))
    {
        return TransactionKind::Income;
    }

    TransactionKind::Expense
}

/// Extract a draft from receipt OCR text with default settings.
pub fn extract_from_receipt_text(ocr_text: &str) -> Option<ReceiptDraft> {
    ReceiptExtractor::new().parse(ocr_text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const RECEIPT: &str = "WARUNG MAKAN SEDERHANA\n\
                           Jl. Sudirman No. 12\n\
                           15/03/2024\n\
                           Nasi Goreng     15.000\n\
                           Es Teh           5.000\n\
                           Total:     Rp 20.000";

    fn extractor() -> ReceiptExtractor {
        ReceiptExtractor::new().with_today(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap())
    }

    #[test]
    fn test_empty_text_yields_none() {
        assert_eq!(extractor().parse(""), None);
        assert_eq!(extractor().parse("  \n "), None);
    }

    #[test]
    fn test_full_receipt() {
        let draft = extractor().parse(RECEIPT).unwrap();
        assert_eq!(draft.kind, TransactionKind::Expense);
        assert_eq!(draft.amount, 20_000);
        assert_eq!(draft.description, "Warung Makan Sederhana");
        assert_eq!(draft.category, "Struk");
        assert_eq!(draft.date, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
    }

    #[test]
    fn test_income_indicators_without_merchant_words() {
        let draft = extractor().parse("Slip Pembayaran\nGaji diterima 5.000.000").unwrap();
        assert_eq!(draft.kind, TransactionKind::Income);
    }

    #[test]
    fn test_default_kind_is_expense() {
        let draft = extractor().parse("Struk Parkir\n3.000").unwrap();
        assert_eq!(draft.kind, TransactionKind::Expense);
    }

    #[test]
    fn test_min_year_override() {
        let draft = extractor()
            .with_min_year(2024)
            .parse("Belanja Toko\n15/03/2023\n10.000")
            .unwrap();
        assert_eq!(draft.date, NaiveDate::from_ymd_opt(2026, 1, 1).unwrap());
    }

    #[test]
    fn test_unusable_date_falls_back_to_today() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        let future = extractor().parse("Belanja Toko\n15/03/2030\n10.000").unwrap();
        assert_eq!(future.date, today);

        let too_old = extractor().parse("Belanja Toko\n15/03/2019\n10.000").unwrap();
        assert_eq!(too_old.date, today);
    }
}
