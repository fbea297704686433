//! Description extraction for receipts.

use crate::text;

use super::patterns::{CURRENCY_MARK, NUMERIC_LINE, TOTAL_PREFIX};

/// Placeholder when no line qualifies.
const RECEIPT_PLACEHOLDER: &str = "Transaksi dari Struk";

/// Pick a description line from OCR text: the first line of reasonable
/// length that is not purely numeric, not a totals line, and carries no
/// currency marker. Usually the store name at the top of the receipt.
pub fn extract_description(text: &str) -> String {
    for line in text.lines() {
        let line = line.trim();
        let len = line.chars().count();

        if (3..50).contains(&len)
            && !NUMERIC_LINE.is_match(line)
            && !TOTAL_PREFIX.is_match(line)
            && !CURRENCY_MARK.is_match(line)
        {
            return text::title_case(line);
        }
    }

    // Nothing clean; settle for the first line of plausible length
    for line in text.lines() {
        let line = line.trim();
        let len = line.chars().count();
        if (6..100).contains(&len) {
            return text::title_case(line);
        }
    }

    RECEIPT_PLACEHOLDER.to_string()
}
