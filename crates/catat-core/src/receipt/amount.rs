//! Amount extraction for receipts.

use super::patterns::{AMOUNT_BARE, AMOUNT_LABELED_IDR, AMOUNT_LABELED_RP};
use super::FieldExtractor;

/// Amount field extractor.
pub struct AmountExtractor;

impl AmountExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AmountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AmountExtractor {
    type Output = u64;

    /// Largest value on the receipt; printed grand totals are usually the
    /// biggest number present.
    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().max()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        for pattern in [&*AMOUNT_BARE, &*AMOUNT_LABELED_RP, &*AMOUNT_LABELED_IDR] {
            for caps in pattern.captures_iter(text) {
                if let Some(m) = caps.get(1) {
                    let cleaned: String = m
                        .as_str()
                        .chars()
                        .filter(|c| c.is_ascii_digit())
                        .collect();
                    if let Ok(value) = cleaned.parse::<u64>() {
                        results.push(value);
                    }
                }
            }
        }

        results
    }
}

/// Extract the receipt amount, or 0 when nothing currency-shaped is found.
pub fn extract_amount(text: &str) -> u64 {
    AmountExtractor::new().extract(text).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_largest_amount_wins() {
        let text = "Nasi Goreng 15.000\nEs Teh 5.000\nTotal: Rp 20.000";
        assert_eq!(extract_amount(text), 20_000);
    }

    #[test]
    fn test_labeled_total_with_trailing_idr() {
        assert_eq!(extract_amount("Jumlah: 125.000 IDR"), 125_000);
    }

    #[test]
    fn test_separators_are_stripped() {
        assert_eq!(extract_amount("Rp 1.250.000"), 1_250_000);
    }

    #[test]
    fn test_no_amount_is_zero() {
        assert_eq!(extract_amount("terima kasih atas kunjungan anda"), 0);
    }
}
