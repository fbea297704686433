//! Date extraction for receipts.

use chrono::{Datelike, NaiveDate};

use super::patterns::{DATE_DMY, DATE_LONG, DATE_YMD};
use super::FieldExtractor;

/// Date field extractor.
///
/// `today` is injected rather than read from the clock so callers and tests
/// get deterministic bounds checking: a detected date is accepted only when
/// it is not in the future and not before `min_year`.
pub struct DateExtractor {
    today: NaiveDate,
    min_year: i32,
}

impl DateExtractor {
    pub fn new(today: NaiveDate, min_year: i32) -> Self {
        Self { today, min_year }
    }

    fn accept(&self, date: NaiveDate) -> bool {
        date <= self.today && date.year() >= self.min_year
    }
}

impl FieldExtractor for DateExtractor {
    type Output = NaiveDate;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        // DD/MM/YYYY or DD-MM-YYYY
        for caps in DATE_DMY.captures_iter(text) {
            let day: u32 = caps[1].parse().unwrap_or(0);
            let month: u32 = caps[2].parse().unwrap_or(0);
            let year: i32 = caps[3].parse().unwrap_or(0);

            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                if self.accept(date) {
                    results.push(date);
                }
            }
        }

        // YYYY/MM/DD or YYYY-MM-DD
        for caps in DATE_YMD.captures_iter(text) {
            let year: i32 = caps[1].parse().unwrap_or(0);
            let month: u32 = caps[2].parse().unwrap_or(0);
            let day: u32 = caps[3].parse().unwrap_or(0);

            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                if self.accept(date) && !results.contains(&date) {
                    results.push(date);
                }
            }
        }

        // Indonesian long format: "15 Mar 2024", "7 Agustus 2024"
        for caps in DATE_LONG.captures_iter(text) {
            let day: u32 = caps[1].parse().unwrap_or(0);
            let month = month_from_abbrev(&caps[2]);
            let year: i32 = caps[3].parse().unwrap_or(0);

            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                if self.accept(date) && !results.contains(&date) {
                    results.push(date);
                }
            }
        }

        results
    }
}

fn month_from_abbrev(month: &str) -> u32 {
    match month.to_lowercase().as_str() {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "mei" => 5,
        "jun" => 6,
        "jul" => 7,
        "agu" => 8,
        "sep" => 9,
        "okt" => 10,
        "nov" => 11,
        "des" => 12,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn extractor() -> DateExtractor {
        DateExtractor::new(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(), 2020)
    }

    #[test]
    fn test_extract_date_dmy() {
        let result = extractor().extract("15/03/2024");
        assert_eq!(result, NaiveDate::from_ymd_opt(2024, 3, 15));
    }

    #[test]
    fn test_extract_date_ymd() {
        let result = extractor().extract("2024-03-15");
        assert_eq!(result, NaiveDate::from_ymd_opt(2024, 3, 15));
    }

    #[test]
    fn test_extract_long_format_with_spelled_out_month() {
        let result = extractor().extract("Tanggal: 7 Agustus 2024");
        assert_eq!(result, NaiveDate::from_ymd_opt(2024, 8, 7));
    }

    #[test]
    fn test_future_date_rejected() {
        assert_eq!(extractor().extract("15/03/2030"), None);
    }

    #[test]
    fn test_year_before_minimum_rejected() {
        assert_eq!(extractor().extract("15/03/2019"), None);
    }

    #[test]
    fn test_first_valid_date_wins() {
        let result = extractor().extract("cetak 15/03/2030 dibeli 10/02/2024");
        assert_eq!(result, NaiveDate::from_ymd_opt(2024, 2, 10));
    }
}
