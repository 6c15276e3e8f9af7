//! Validated report date ranges.

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

/// Date format used on the wire and by `<input type="date">`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Why a date range was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("Please select both a start and end date.")]
    Missing,
    #[error("Start date cannot be after end date.")]
    Inverted,
}

/// Inclusive date range with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::Inverted);
        }
        Ok(Self { start, end })
    }

    /// Build a range from optional form inputs.
    pub fn from_inputs(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Result<Self, RangeError> {
        match (start, end) {
            (Some(start), Some(end)) => Self::new(start, end),
            _ => Err(RangeError::Missing),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days covered, both ends included.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// `start_date` / `end_date` query pairs
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("start_date", format_date(self.start)),
            ("end_date", format_date(self.end)),
        ]
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` value; blank input yields `None`.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(input, DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_inverted_range_rejected() {
        let err = DateRange::new(date(2025, 5, 31), date(2025, 5, 1)).unwrap_err();
        assert_eq!(err, RangeError::Inverted);
        assert_eq!(err.to_string(), "Start date cannot be after end date.");
    }

    #[test]
    fn test_single_day_range() {
        let range = DateRange::new(date(2025, 5, 1), date(2025, 5, 1)).unwrap();
        assert_eq!(range.days(), 1);
    }

    #[test]
    fn test_missing_bound() {
        assert_eq!(
            DateRange::from_inputs(Some(date(2025, 5, 1)), None),
            Err(RangeError::Missing)
        );
        assert_eq!(DateRange::from_inputs(None, None), Err(RangeError::Missing));
    }

    #[test]
    fn test_query_pairs_use_iso_dates() {
        let range = DateRange::new(date(2025, 5, 1), date(2025, 5, 31)).unwrap();
        assert_eq!(
            range.query_pairs(),
            vec![
                ("start_date", "2025-05-01".to_string()),
                ("end_date", "2025-05-31".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_date_input() {
        assert_eq!(parse_date("2025-02-28"), Some(date(2025, 2, 28)));
        assert_eq!(parse_date(" "), None);
        assert_eq!(parse_date("2025-02-30"), None);
        assert_eq!(parse_date("28/02/2025"), None);
    }
}
