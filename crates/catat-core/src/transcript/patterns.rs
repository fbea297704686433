//! Regex tables for transcript extraction.

use lazy_static::lazy_static;
use regex::Regex;

use super::vocab;

lazy_static! {
    // Digit amounts: "Rp 100.000", "IDR 1.000.000", "5,000", "1000000".
    // The capture excludes the currency marker so removal leaves "Rp" behind
    // for CURRENCY_MARKER to clean up. Alternation is leftmost-first, so the
    // comma-grouped form must precede the dot-grouped form or "5,000,000"
    // would match as "5,00".
    pub static ref DIGIT_AMOUNT: Regex = Regex::new(
        r"(?:Rp|IDR)?\s*([0-9]{1,3}(?:[,][0-9]{3})+|[0-9]+(?:[.][0-9]{3})*(?:[,][0-9]{2})?|[0-9]+)"
    ).unwrap();

    // Currency indicators and the whitespace after them.
    pub static ref CURRENCY_MARKER: Regex = Regex::new(r"(?i)(?:Rp|IDR)\s*").unwrap();

    // Amount debris stripped from generic category candidates.
    pub static ref AMOUNT_DEBRIS: Regex = Regex::new(r"(?i)(?:Rp|IDR)?\s*[0-9.,]+").unwrap();

    // Whole-word removal of every transaction-kind keyword.
    pub static ref KIND_KEYWORD_STRIP: Regex = {
        let alternation = vocab::all_kind_keywords()
            .map(regex::escape)
            .collect::<Vec<_>>()
            .join("|");
        Regex::new(&format!(r"(?i)\b(?:{})\b\s*", alternation)).unwrap()
    };
}
