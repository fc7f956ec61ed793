//! Transaction dates.
//!
//! Dates are written as `dd Mon yyyy`. Rows that reach the ledger with a date
//! nobody can parse keep the raw text so they can still be shown and saved.

use std::{cmp::Ordering, fmt};

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

/// Storage and display format (`05 Mar 2026`).
pub const DATE_FORMAT: &str = "%d %b %Y";

const DATE_FORMATS: &[&str] = &[
    DATE_FORMAT,
    "%d %B %Y",
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%b %d, %Y",
    "%B %d, %Y",
    "%d-%b-%Y",
];

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum LedgerDate {
    Parsed(NaiveDate),
    Raw(String),
}

impl LedgerDate {
    /// Reads a date from the ledger file, keeping the text when it is not a
    /// recognizable date.
    pub fn parse_stored(raw: &str) -> Self {
        match parse_flexible(raw) {
            Some(date) => Self::Parsed(date),
            None => Self::Raw(raw.trim().to_string()),
        }
    }

    #[must_use]
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Parsed(date) => Some(*date),
            Self::Raw(_) => None,
        }
    }

    /// Month of year (1..=12); `None` for raw dates.
    #[must_use]
    pub fn month(&self) -> Option<u32> {
        self.as_date().map(|d| d.month())
    }

    /// Orders parsed dates chronologically and raw dates after all of them.
    #[must_use]
    pub fn chronological_cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Parsed(a), Self::Parsed(b)) => a.cmp(b),
            (Self::Parsed(_), Self::Raw(_)) => Ordering::Less,
            (Self::Raw(_), Self::Parsed(_)) => Ordering::Greater,
            (Self::Raw(_), Self::Raw(_)) => Ordering::Equal,
        }
    }
}

impl From<NaiveDate> for LedgerDate {
    fn from(value: NaiveDate) -> Self {
        Self::Parsed(value)
    }
}

impl fmt::Display for LedgerDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parsed(date) => write!(f, "{}", date.format(DATE_FORMAT)),
            Self::Raw(raw) => f.write_str(raw),
        }
    }
}

/// Parses the date formats commonly found in spreadsheets and exports.
///
/// Slashed dates are read month first. Date-times keep only the date.
pub fn parse_flexible(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
    {
        return Some(date);
    }

    if let Some(dt) = DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
    {
        return Some(dt.date());
    }

    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Full English month name for `1..=12`.
#[must_use]
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}
