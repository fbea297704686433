//! Regex tables and keyword lists for receipt extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Bare currency-shaped digits: "25.000", "Rp 1.250.000", "5,000.50"
    pub static ref AMOUNT_BARE: Regex = Regex::new(
        r"(?i)(?:Rp|IDR)?[\s.]*([0-9]{1,3}(?:[,.][0-9]{3})*(?:[,.][0-9]{2})?)"
    ).unwrap();

    // Labeled totals: "Total: Rp 25.000", "Jumlah: Rp25000"
    pub static ref AMOUNT_LABELED_RP: Regex = Regex::new(
        r"(?i)(?:total|jumlah|grand total|subtotal|amount)[\s:]*Rp\s*([0-9.,]+)"
    ).unwrap();

    // Labeled totals with a trailing currency code: "Total: 25.000 IDR"
    pub static ref AMOUNT_LABELED_IDR: Regex = Regex::new(
        r"(?i)(?:total|jumlah|grand total|subtotal|amount)[\s:]*([0-9.,]+)\s*IDR"
    ).unwrap();

    // Date forms, tried in order
    pub static ref DATE_DMY: Regex = Regex::new(
        r"\b(\d{2})[/-](\d{2})[/-](\d{4})\b"
    ).unwrap();

    pub static ref DATE_YMD: Regex = Regex::new(
        r"\b(\d{4})[/-](\d{2})[/-](\d{2})\b"
    ).unwrap();

    // "15 Mar 2024", "7 Agustus 2024" - Indonesian month abbreviations with
    // an optional spelled-out tail
    pub static ref DATE_LONG: Regex = Regex::new(
        r"(?i)\b(\d{1,2})\s+(Jan|Feb|Mar|Apr|Mei|Jun|Jul|Agu|Sep|Okt|Nov|Des)[a-z]*\s+(\d{4})\b"
    ).unwrap();

    // Lines that are only digits, phone-number punctuation, or whitespace
    pub static ref NUMERIC_LINE: Regex = Regex::new(
        r"^[\d\-\+\(\)\s]+$"
    ).unwrap();

    // Summary lines that never make a good description
    pub static ref TOTAL_PREFIX: Regex = Regex::new(
        r"(?i)^(?:total|jumlah|grand|subtotal|bayar)"
    ).unwrap();

    // Currency indicator anywhere in a line
    pub static ref CURRENCY_MARK: Regex = Regex::new(r"(?i)(?:Rp|IDR)").unwrap();
}

/// Merchant and purchase indicators; any match classifies the receipt as an
/// expense.
pub static MERCHANT_KEYWORDS: &[&str] = &[
    "warung",
    "toko",
    "minimarket",
    "supermarket",
    "mall",
    "shop",
    "store",
    "restaurant",
    "cafe",
    "kopi",
    "makan",
    "minum",
    "food",
    "meal",
    "bensin",
    "pertamina",
    "shell",
    "pengisian",
    "bahan bakar",
    "pulsa",
    "paket data",
    "telepon",
    "listrik",
    "air",
    "tagihan",
    "laundry",
    "service",
    "jasa",
    "transportasi",
    "ojek",
    "grab",
    "gojek",
];

/// Income indicators, checked only when no merchant keyword matches.
pub static INCOME_INDICATORS: &[&str] = &[
    "gaji",
    "salary",
    "income",
    "pendapatan",
    "bayaran",
    "uang",
    "transfer",
    "diterima",
    "received",
    "pembayaran",
    "payment",
];
