//! Core library for Indonesian transaction text extraction.
//!
//! This crate provides:
//! - Transcript extraction: kind, amount, description, category, and notes
//!   from free-form Indonesian text ("makan di warung seratus ribu")
//! - Spelled-out number parsing, including compound forms and stacked
//!   magnitudes ("satu juta dua ratus lima puluh ribu" = 1,250,000)
//! - Receipt OCR field extraction: amount, description, kind, and date
//! - Draft models ready for user confirmation before storage
//!
//! Both pipelines are pure functions over their input string: no I/O, no
//! shared mutable state, total over arbitrary input.

pub mod error;
pub mod models;
pub mod receipt;
pub mod text;
pub mod transcript;

pub use error::{CatatError, Result};
pub use models::config::CatatConfig;
pub use models::draft::{ReceiptDraft, TransactionDraft, TransactionKind};
pub use receipt::{extract_from_receipt_text, ReceiptExtractor, ReceiptParser};
pub use transcript::{extract_from_transcript, TranscriptExtractor, TranscriptParser};
