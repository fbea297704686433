//! Receipt OCR text extraction pipeline.
//!
//! OCR output is noisier than a transcript and has no reliable word order,
//! so every field comes from its own pattern-based rule instead of the
//! transcript pipeline's keyword-first walk.

mod parser;

pub mod amount;
pub mod date;
pub mod describe;
pub mod patterns;

pub use parser::{extract_from_receipt_text, ReceiptExtractor, ReceiptParser};

/// Trait for receipt field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the best value for the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all candidate values for the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}
