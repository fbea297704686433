//! Transaction draft models produced by the extractors.
//!
//! A draft is an unpersisted record: the caller presents it for user
//! confirmation and edits before anything is stored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Kind of transaction.
///
/// `Other` exists for UI-level selection only; neither extraction pipeline
/// ever produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    /// Money coming in (pemasukan).
    Income,
    /// Money going out (pengeluaran).
    Expense,
    /// Money set aside (tabungan).
    Savings,
    /// Borrowed money or installments (hutang).
    Debt,
    /// Anything else, selectable in the UI.
    Other,
}

impl TransactionKind {
    /// Indonesian label as shown on the confirmation form.
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Income => "Pemasukan",
            TransactionKind::Expense => "Pengeluaran",
            TransactionKind::Savings => "Tabungan",
            TransactionKind::Debt => "Hutang",
            TransactionKind::Other => "Lainnya",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Draft extracted from a voice/text transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionDraft {
    /// Classified transaction kind.
    pub kind: TransactionKind,

    /// Amount in whole rupiah. 0 when no numeric evidence was found.
    pub amount: u64,

    /// Title-cased item description, never empty.
    pub description: String,

    /// Specific category, generic candidate, or the kind's label.
    pub category: String,

    /// Verbatim copy of the original transcript.
    pub notes: String,
}

/// Draft extracted from receipt OCR text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptDraft {
    /// Classified transaction kind.
    pub kind: TransactionKind,

    /// Amount in whole rupiah; the largest value printed on the receipt.
    pub amount: u64,

    /// Title-cased merchant or item line, never empty.
    pub description: String,

    /// Always "Struk" for receipt-based entries.
    pub category: String,

    /// Date printed on the receipt, or today when none is usable.
    pub date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels() {
        assert_eq!(TransactionKind::Income.label(), "Pemasukan");
        assert_eq!(TransactionKind::Expense.label(), "Pengeluaran");
        assert_eq!(TransactionKind::Savings.to_string(), "Tabungan");
        assert_eq!(TransactionKind::Debt.to_string(), "Hutang");
        assert_eq!(TransactionKind::Other.label(), "Lainnya");
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&TransactionKind::Expense).unwrap();
        assert_eq!(json, "\"expense\"");
    }
}
