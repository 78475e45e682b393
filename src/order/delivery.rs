//! Next delivery date.
//!
//! Orders need a day's notice. Before the cutoff hour the earliest slot is
//! tomorrow; at or after it, the day after tomorrow.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::Serialize;

/// Default daily cutoff, 6 PM local time.
pub const DEFAULT_CUTOFF_HOUR: u32 = 18;

/// The earliest delivery date for an order placed at `now` (local time).
pub fn next_delivery_date(now: NaiveDateTime, cutoff_hour: u32) -> NaiveDate {
    let days = if now.hour() >= cutoff_hour { 2 } else { 1 };
    now.date()
        .checked_add_days(Days::new(days))
        .unwrap_or(NaiveDate::MAX)
}

/// Long form used on the page, e.g. `Wednesday, 21 October`.
pub fn format_delivery_date(date: NaiveDate) -> String {
    date.format("%A, %-d %B").to_string()
}

/// `6 PM`, `12 PM`, `9 AM`.
pub fn format_hour(hour: u32) -> String {
    let suffix = if hour < 12 { "AM" } else { "PM" };
    let display = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{} {}", display, suffix)
}

/// The delivery estimate shown in the order section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeliveryEstimate {
    pub date: NaiveDate,
    pub cutoff_hour: u32,
}

impl DeliveryEstimate {
    pub fn at(now: NaiveDateTime, cutoff_hour: u32) -> Self {
        Self {
            date: next_delivery_date(now, cutoff_hour),
            cutoff_hour,
        }
    }

    /// `Next available delivery: Wednesday, 21 October after 6 PM`
    pub fn headline(&self) -> String {
        format!(
            "Next available delivery: {} after {}",
            format_delivery_date(self.date),
            format_hour(self.cutoff_hour)
        )
    }
}

/// A month grid (Monday first) with the delivery day bracketed.
///
/// ```text
/// October 2026
/// Mo Tu We Th Fr Sa Su
///           1  2  3  4
///  5  6  7  8  9 10 11
/// ...
/// 19 20 [21] 22 ...
/// ```
pub fn delivery_calendar(date: NaiveDate) -> String {
    let mut out = format!("{}\nMo Tu We Th Fr Sa Su\n", date.format("%B %Y"));
    let Some(first) = date.with_day(1) else {
        return out;
    };

    let mut cells: Vec<String> = (0..first.weekday().num_days_from_monday())
        .map(|_| "  ".to_string())
        .collect();
    let mut day = first;
    while day.month() == first.month() {
        if day == date {
            cells.push(format!("[{}]", day.day()));
        } else {
            cells.push(format!("{:>2}", day.day()));
        }
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }

    for week in cells.chunks(7) {
        out.push_str(week.join(" ").trim_end());
        out.push('\n');
    }
    out
}

/// Whether `date` falls on a weekend. Used to tag the calendar headline.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}
