//! Indonesian spelled-out number parsing.
//!
//! Indonesian numerals compose additively by magnitude: ones (satu–sembilan),
//! teens ("X belas"), tens ("X puluh"), hundreds ("X ratus", with "seratus"
//! as a lexical form of 100), and magnitude words (ribu/juta/miliar/triliun)
//! that multiply a preceding scalar phrase. "satu juta dua ratus lima puluh
//! ribu" is 1,000,000 + 250 × 1,000.
//!
//! Resolution is an explicit index walk over the token array rather than a
//! recursive parse: magnitude words are located, processed right to left, and
//! each collects its scalar phrase by walking backward. This keeps a later,
//! lower-magnitude phrase from being swallowed by an earlier, higher one.

use super::vocab;

/// Ones words, 1–9.
const ONES: &[(&str, u64)] = &[
    ("satu", 1),
    ("dua", 2),
    ("tiga", 3),
    ("empat", 4),
    ("lima", 5),
    ("enam", 6),
    ("tujuh", 7),
    ("delapan", 8),
    ("sembilan", 9),
];

/// Single-token number words outside the ones range, including the lexical
/// forms a speech recognizer may emit as one word ("seratus") or split
/// ("se ratus").
const UNITS: &[(&str, u64)] = &[
    ("nol", 0),
    ("sepuluh", 10),
    ("sebelas", 11),
    ("puluh", 10),
    ("belas", 10),
    ("ratus", 100),
    ("seratus", 100),
    ("seribu", 1000),
];

/// Magnitude words and their multipliers.
const MAGNITUDES: &[(&str, u64)] = &[
    ("ribu", 1_000),
    ("juta", 1_000_000),
    ("miliar", 1_000_000_000),
    ("triliun", 1_000_000_000_000),
];

/// Multiplier for a magnitude word, if `word` is one.
pub fn magnitude(word: &str) -> Option<u64> {
    MAGNITUDES
        .iter()
        .find(|(name, _)| *name == word)
        .map(|(_, value)| *value)
}

fn ones(word: &str) -> Option<u64> {
    ONES.iter()
        .find(|(name, _)| *name == word)
        .map(|(_, value)| *value)
}

fn unit(word: &str) -> Option<u64> {
    UNITS
        .iter()
        .find(|(name, _)| *name == word)
        .map(|(_, value)| *value)
}

/// Whether `word` belongs to the number-word table (magnitude words excluded).
pub fn is_number_word(word: &str) -> bool {
    word == "se" || ones(word).is_some() || unit(word).is_some()
}

fn is_digit_token(word: &str) -> bool {
    !word.is_empty() && word.bytes().all(|b| b.is_ascii_digit())
}

/// Evaluate a run of number tokens compositionally, summing components left
/// to right: "dua ratus lima puluh" is 200 + 50. Unrecognized tokens are
/// skipped, never fatal.
pub fn evaluate_number_run(tokens: &[&str]) -> u64 {
    let mut total: u64 = 0;
    let mut i = 0;

    while i < tokens.len() {
        let token = tokens[i];
        let next = tokens.get(i + 1).copied();

        // Digit tokens act as scalars and compose with a following scale
        // word, so "2 ratus" reads as 200.
        let scalar = if is_digit_token(token) {
            token.parse::<u64>().ok()
        } else {
            ones(token)
        };

        if let Some(value) = scalar {
            match next {
                Some("puluh") => {
                    total = total.saturating_add(value.saturating_mul(10));
                    i += 2;
                }
                Some("belas") => {
                    total = total.saturating_add(value.saturating_add(10));
                    i += 2;
                }
                Some("ratus") => {
                    total = total.saturating_add(value.saturating_mul(100));
                    i += 2;
                }
                _ => {
                    total = total.saturating_add(value);
                    i += 1;
                }
            }
            continue;
        }

        if token == "se" {
            // "se belas" = 11, "se ratus" = 100; bare "se" counts as 1.
            match next {
                Some("belas") => {
                    total = total.saturating_add(11);
                    i += 2;
                }
                Some("ratus") => {
                    total = total.saturating_add(100);
                    i += 2;
                }
                _ => {
                    total = total.saturating_add(1);
                    i += 1;
                }
            }
            continue;
        }

        if let Some(value) = unit(token) {
            total = total.saturating_add(value);
        }
        i += 1;
    }

    total
}

/// Result of the word-number scan: the resolved value plus the source spans
/// consumed, so description synthesis can drop them.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct WordNumber {
    /// Resolved amount in whole currency units; 0 when no evidence.
    pub value: u64,
    /// Lowercased token spans used for the value, e.g. "seratus ribu".
    pub spans: Vec<String>,
}

/// Scan lowercase tokens for a spelled-out amount.
///
/// Magnitude words are processed from the highest token index down, each
/// collecting its scalar phrase backward; products accumulate into the
/// total. Without any magnitude word the whole text is evaluated as one
/// number phrase, which handles bare forms like "lima ratus".
pub fn scan_word_number(tokens: &[String]) -> WordNumber {
    let positions: Vec<usize> = tokens
        .iter()
        .enumerate()
        .filter(|(_, token)| magnitude(token).is_some())
        .map(|(i, _)| i)
        .collect();

    if positions.is_empty() {
        return evaluate_whole_span(tokens);
    }

    let mut result = WordNumber::default();

    for &pos in positions.iter().rev() {
        let Some(multiplier) = magnitude(&tokens[pos]) else {
            continue;
        };

        let run = collect_run(tokens, pos);
        if !run.is_empty() {
            let scalar = evaluate_number_run(&run);
            if scalar > 0 {
                result.value = result.value.saturating_add(scalar.saturating_mul(multiplier));
                result.spans.push(format!("{} {}", run.join(" "), tokens[pos]));
            }
        } else if pos > 0 && is_digit_token(&tokens[pos - 1]) {
            // No word run, but a bare digit directly before the magnitude:
            // "pengeluaran 1 juta".
            let digit: u64 = tokens[pos - 1].parse().unwrap_or(0);
            if digit > 0 {
                result.value = result.value.saturating_add(digit.saturating_mul(multiplier));
                result.spans.push(format!("{} {}", tokens[pos - 1], tokens[pos]));
            }
        }
    }

    result
}

/// Walk backward from the magnitude word at `pos`, collecting the contiguous
/// scalar phrase. Kind keywords are skipped; any other unrecognized token or
/// an earlier magnitude word ends the run.
fn collect_run(tokens: &[String], pos: usize) -> Vec<&str> {
    let mut run = Vec::new();

    for j in (0..pos).rev() {
        let token = tokens[j].as_str();
        if magnitude(token).is_some() {
            break;
        }
        if vocab::is_kind_keyword(token) {
            continue;
        }
        if is_digit_token(token) || is_number_word(token) {
            run.push(token);
        } else {
            break;
        }
    }

    run.reverse();
    run
}

/// Fallback when the text has no magnitude words: gather every number word
/// (kind keywords excluded) and evaluate the gathered span as one number.
fn evaluate_whole_span(tokens: &[String]) -> WordNumber {
    let run: Vec<&str> = tokens
        .iter()
        .map(String::as_str)
        .filter(|token| !vocab::is_kind_keyword(token))
        .filter(|token| is_number_word(token))
        .collect();

    if run.is_empty() {
        return WordNumber::default();
    }

    let value = evaluate_number_run(&run);
    if value == 0 {
        return WordNumber::default();
    }

    WordNumber {
        value,
        spans: vec![run.join(" ")],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::tokenize;
    use pretty_assertions::assert_eq;

    fn scan(text: &str) -> u64 {
        scan_word_number(&tokenize(text)).value
    }

    #[test]
    fn test_evaluate_compound_runs() {
        assert_eq!(evaluate_number_run(&["dua", "puluh", "lima"]), 25);
        assert_eq!(evaluate_number_run(&["tiga", "ratus", "lima", "puluh"]), 350);
        assert_eq!(evaluate_number_run(&["seratus"]), 100);
        assert_eq!(evaluate_number_run(&["se", "belas"]), 11);
        assert_eq!(evaluate_number_run(&["lima", "belas"]), 15);
        assert_eq!(evaluate_number_run(&["sembilan", "puluh", "sembilan"]), 99);
    }

    #[test]
    fn test_digit_tokens_compose_with_scale_words() {
        assert_eq!(evaluate_number_run(&["2", "ratus"]), 200);
        assert_eq!(evaluate_number_run(&["500"]), 500);
    }

    #[test]
    fn test_single_magnitude() {
        assert_eq!(scan("lima ribu"), 5_000);
        assert_eq!(scan("seratus ribu"), 100_000);
        assert_eq!(scan("sepuluh juta"), 10_000_000);
        assert_eq!(scan("satu miliar"), 1_000_000_000);
        assert_eq!(scan("dua triliun"), 2_000_000_000_000);
    }

    #[test]
    fn test_stacked_magnitudes_accumulate() {
        assert_eq!(scan("satu juta dua ratus ribu"), 1_200_000);
        assert_eq!(scan("satu juta dua ratus lima puluh ribu"), 1_250_000);
    }

    #[test]
    fn test_whole_span_without_magnitude() {
        assert_eq!(scan("dua puluh lima"), 25);
        assert_eq!(scan("tiga ratus lima puluh"), 350);
        // "seribu" is a lexical thousand, not a magnitude token
        assert_eq!(scan("pengeluaran seribu untuk gaji"), 1_000);
        assert_eq!(scan("tidak ada angka"), 0);
    }

    #[test]
    fn test_digit_before_magnitude() {
        assert_eq!(scan("pengeluaran 1 juta"), 1_000_000);
        assert_eq!(scan("500 ribu"), 500_000);
    }

    #[test]
    fn test_run_stops_at_unrecognized_token() {
        // "warung" ends the walk; only "seratus" feeds the magnitude
        assert_eq!(scan("makan di warung seratus ribu"), 100_000);
    }

    #[test]
    fn test_kind_keywords_are_skipped_in_runs() {
        assert_eq!(scan("lima pengeluaran ribu"), 5_000);
    }

    #[test]
    fn test_spans_record_consumed_text() {
        let result = scan_word_number(&tokenize("makan di warung seratus ribu"));
        assert_eq!(result.spans, vec!["seratus ribu".to_string()]);

        let stacked = scan_word_number(&tokenize("satu juta dua ratus ribu"));
        // Right-to-left processing records the low magnitude first
        assert_eq!(
            stacked.spans,
            vec!["dua ratus ribu".to_string(), "satu juta".to_string()]
        );
    }
}
