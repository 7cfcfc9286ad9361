//! Human-readable screening dates.
//!
//! Dates are rendered as "Monday, May 2nd" from fixed lookup tables. Every
//! lookup falls back to a placeholder when the index is outside its table.

use chrono::{DateTime, Datelike, TimeZone};
use std::fmt;

const WEEKDAYS: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAY_FALLBACK: &str = "Today";
const MONTH_FALLBACK: &str = "the";
const SUFFIX_FALLBACK: &str = "th";

/// Broken-down date used in screening headlines.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenDate {
    pub weekday: &'static str,
    pub month: &'static str,
    pub day: u32,
    pub suffix: &'static str,
}

impl ScreenDate {
    /// Break the given timestamp down in its own time zone.
    ///
    pub fn from_timestamp<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> Self {
        let day = timestamp.day();
        ScreenDate {
            weekday: weekday_name(timestamp.weekday().number_from_sunday()),
            month: month_name(timestamp.month()),
            day,
            suffix: ordinal_suffix(day),
        }
    }
}

impl fmt::Display for ScreenDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {} {}{}",
            self.weekday, self.month, self.day, self.suffix
        )
    }
}

/// Weekday name for a 1-based index where 1 is Sunday.
///
pub fn weekday_name(number: u32) -> &'static str {
    lookup(&WEEKDAYS, number).unwrap_or(WEEKDAY_FALLBACK)
}

/// Month name for a 1-based month number.
///
pub fn month_name(number: u32) -> &'static str {
    lookup(&MONTHS, number).unwrap_or(MONTH_FALLBACK)
}

/// English ordinal suffix for a day of the month.
///
pub fn ordinal_suffix(day: u32) -> &'static str {
    match day {
        1 | 21 | 31 => "st",
        2 | 22 => "nd",
        3 | 23 => "rd",
        4..=20 | 24..=30 => "th",
        _ => SUFFIX_FALLBACK,
    }
}

fn lookup(table: &[&'static str], number: u32) -> Option<&'static str> {
    let index = usize::try_from(number).ok()?.checked_sub(1)?;
    table.get(index).copied()
}
