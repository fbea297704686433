//! Keyword vocabularies for transcript classification.
//!
//! All tables are process-wide constants, constructed once and never mutated.
//! Multi-word entries ("uang masuk") match only through substring scans, not
//! token-equality checks.

use crate::models::draft::TransactionKind;

/// Income trigger words.
pub static INCOME_KEYWORDS: &[&str] = &[
    "pemasukan",
    "penghasilan",
    "gaji",
    "uang masuk",
    "pendapatan",
    "income",
    "revenue",
    "gajian",
];

/// Expense trigger words.
pub static EXPENSE_KEYWORDS: &[&str] = &[
    "pengeluaran",
    "uang keluar",
    "belanja",
    "biaya",
    "expense",
    "outgoing",
    "makan",
    "transport",
    "pulsa",
    "listrik",
    "air",
    "sewa",
    "tagihan",
];

/// Savings trigger words.
pub static SAVINGS_KEYWORDS: &[&str] = &[
    "tabungan",
    "simpan",
    "menabung",
    "saving",
    "savings",
    "deposito",
    "investasi",
];

/// Debt trigger words.
pub static DEBT_KEYWORDS: &[&str] = &[
    "hutang", "pinjaman", "debit", "loan", "cicilan", "kredit",
];

/// The four keyword sets in classification priority order.
pub static KIND_KEYWORD_SETS: &[(TransactionKind, &[&str])] = &[
    (TransactionKind::Income, INCOME_KEYWORDS),
    (TransactionKind::Expense, EXPENSE_KEYWORDS),
    (TransactionKind::Savings, SAVINGS_KEYWORDS),
    (TransactionKind::Debt, DEBT_KEYWORDS),
];

/// Specific category table. Iteration order is the tie-break: the first
/// entry with any keyword present wins, so two plausible categories in the
/// same text always resolve to the earlier entry.
pub static CATEGORY_TABLE: &[(&str, &[&str])] = &[
    (
        "Makanan",
        &[
            "makan", "minum", "snack", "kopi", "nasi", "mie", "bakso", "ayam", "sate", "soto",
            "gudeg", "rendang",
        ],
    ),
    (
        "Transportasi",
        &[
            "transport", "bensin", "angkot", "ojek", "grab", "gojek", "taxi", "bus", "kereta",
            "mobil", "parkir",
        ],
    ),
    (
        "Hiburan",
        &["hiburan", "bioskop", "game", "konser", "wisata", "rekreasi"],
    ),
    (
        "Kesehatan",
        &["kesehatan", "obat", "dokter", "rumah sakit", "apotek", "sakit"],
    ),
    (
        "Pendidikan",
        &["pendidikan", "sekolah", "kuliah", "buku", "les", "kursus", "spp"],
    ),
    (
        "Rumah Tangga",
        &[
            "rumah",
            "listrik",
            "air",
            "pulsa",
            "sabun",
            "deterjen",
            "rumah tangga",
            "kebutuhan",
        ],
    ),
    (
        "Belanja",
        &[
            "belanja",
            "shopping",
            "pakaian",
            "baju",
            "celana",
            "toped",
            "shopee",
            "marketplace",
        ],
    ),
];

/// Kind whose keyword set contains `token` exactly, if any.
pub fn kind_of_keyword(token: &str) -> Option<TransactionKind> {
    KIND_KEYWORD_SETS
        .iter()
        .find(|(_, set)| set.iter().any(|k| *k == token))
        .map(|(kind, _)| *kind)
}

/// Whether `token` is a transaction-kind keyword in any of the four sets.
pub fn is_kind_keyword(token: &str) -> bool {
    kind_of_keyword(token).is_some()
}

/// All kind keywords across the four sets, in set order.
pub fn all_kind_keywords() -> impl Iterator<Item = &'static str> {
    KIND_KEYWORD_SETS
        .iter()
        .flat_map(|(_, set)| set.iter().copied())
}
