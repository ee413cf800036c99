use chrono::{Datelike, Duration, NaiveDate};

/// The rolling lookback window and week label for one run.
#[derive(Debug, Clone, Copy)]
pub struct ReportWindow {
    pub today: NaiveDate,
    /// Oldest accepted event date, 14 days before today (inclusive).
    pub start: NaiveDate,
    /// Monday on or before today; the report's versioning key.
    pub week_start: NaiveDate,
    /// Year assumed when parsing year-less date strings.
    pub year: i32,
}

impl ReportWindow {
    pub fn compute(today: NaiveDate, year_override: Option<i32>) -> Self {
        let start = today - Duration::days(14);
        let week_start = today - Duration::days(today.weekday().num_days_from_monday() as i64);
        Self {
            today,
            start,
            week_start,
            year: year_override.unwrap_or_else(|| today.year()),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.today
    }

    /// Week start formatted for the report file name, e.g. "October 07, 2024".
    pub fn week_label(&self) -> String {
        self.week_start.format("%B %d, %Y").to_string()
    }
}
