//! Date range presets for the report forms.

use chrono::{Datelike, Days, Local, NaiveDate};

/// Quick-pick ranges offered above each report grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangePreset {
    Last7Days,
    Last30Days,
    ThisMonth,
    LastMonth,
}

impl RangePreset {
    pub const ALL: [RangePreset; 4] = [
        RangePreset::Last7Days,
        RangePreset::Last30Days,
        RangePreset::ThisMonth,
        RangePreset::LastMonth,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RangePreset::Last7Days => "Last 7 Days",
            RangePreset::Last30Days => "Last 30 Days",
            RangePreset::ThisMonth => "This Month",
            RangePreset::LastMonth => "Last Month",
        }
    }

    /// Resolve the preset relative to `today`. Always yields `start <= end`.
    pub fn resolve(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        match self {
            RangePreset::Last7Days => (today - Days::new(7), today),
            RangePreset::Last30Days => (today - Days::new(30), today),
            RangePreset::ThisMonth => (first_of_month(today), today),
            RangePreset::LastMonth => {
                let end = first_of_month(today).pred_opt().unwrap_or(today);
                (first_of_month(end), end)
            }
        }
    }
}

/// Today in the browser's (or server's) local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Range the report forms open with
pub fn default_range(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    RangePreset::Last7Days.resolve(today)
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}
