//! Text helpers shared by both extraction pipelines.

/// Split text into lowercase whitespace-separated tokens, preserving order.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Title-case a string: first letter of each whitespace-separated word
/// uppercased, the rest lowercased. Collapses runs of whitespace.
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Remove the first occurrence of `needle` from `haystack`, if any.
pub fn remove_first(haystack: &mut String, needle: &str) {
    if needle.is_empty() {
        return;
    }
    if let Some(pos) = haystack.find(needle) {
        haystack.replace_range(pos..pos + needle.len(), "");
    }
}

/// Remove the first occurrence of `needle` from `haystack`, ignoring ASCII
/// case. Transcripts are ASCII-lowercase in practice, but speech services
/// sometimes capitalize sentence starts.
pub fn remove_first_ignore_case(haystack: &mut String, needle: &str) {
    if needle.is_empty() {
        return;
    }
    let lower_haystack = haystack.to_ascii_lowercase();
    let lower_needle = needle.to_ascii_lowercase();
    if let Some(pos) = lower_haystack.find(&lower_needle) {
        haystack.replace_range(pos..pos + lower_needle.len(), "");
    }
}

/// Format an amount in Indonesian style with dot thousand separators
/// (Rp 1.250.000).
pub fn format_rupiah(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::new();

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    format!("Rp {}", grouped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_tokenize_lowercases_and_splits() {
        assert_eq!(
            tokenize("Pengeluaran  makan DI warung"),
            vec!["pengeluaran", "makan", "di", "warung"]
        );
        assert!(tokenize("   ").is_empty());
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("makan di warung"), "Makan Di Warung");
        assert_eq!(title_case("  SATE   AYAM "), "Sate Ayam");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_remove_first() {
        let mut s = "bayar 50.000 dan 50.000 lagi".to_string();
        remove_first(&mut s, "50.000");
        assert_eq!(s, "bayar  dan 50.000 lagi");
    }

    #[test]
    fn test_remove_first_ignore_case() {
        let mut s = "Seratus Ribu untuk makan".to_string();
        remove_first_ignore_case(&mut s, "seratus ribu");
        assert_eq!(s, " untuk makan");
    }

    #[test]
    fn test_format_rupiah() {
        assert_eq!(format_rupiah(0), "Rp 0");
        assert_eq!(format_rupiah(500), "Rp 500");
        assert_eq!(format_rupiah(50_000), "Rp 50.000");
        assert_eq!(format_rupiah(1_250_000), "Rp 1.250.000");
    }
}
