//! Period formatting for quote months
use chrono::NaiveDate;
use contracts::domain::a025_aid_package::QuotePeriod;

/// Format a quote period as MM.YYYY
/// Example: 2025-03 -> "03.2025"
pub fn format_period(period: QuotePeriod) -> String {
    match NaiveDate::from_ymd_opt(period.year, period.month, 1) {
        Some(date) => date.format("%m.%Y").to_string(),
        None => format!("{:02}.{}", period.month, period.year),
    }
}

/// Same as [`format_period`], but a missing period shows the current month
pub fn format_period_or_current(period: Option<QuotePeriod>) -> String {
    format_period(period.unwrap_or_else(QuotePeriod::current))
}
