//! Trading-Day Calendar
//!
//! Picks the as-of date for quote requests. Weekends are skipped;
//! exchange holidays are not modeled, so a holiday date passes through
//! unchanged and the price source decides whether it has data for it.

use chrono::{Datelike, Duration, NaiveDate, Utc, Weekday};

/// Whether the market is open on `date` (weekday check only)
pub fn is_trading_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Walk backwards from `date` to the nearest trading day.
///
/// Returns `date` itself when it already is one.
pub fn most_recent_trading_day(date: NaiveDate) -> NaiveDate {
    let mut day = date;
    while !is_trading_day(day) {
        day -= Duration::days(1);
    }
    day
}

/// Most recent trading day as of now (UTC)
pub fn latest() -> NaiveDate {
    most_recent_trading_day(Utc::now().date_naive())
}
