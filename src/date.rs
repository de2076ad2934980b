use chrono::{Datelike, NaiveDate};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// a single calendar day in the local `DD-MM-YYYY` convention
///
/// ordering and equality are structural (year, month, day), there is no
/// time-of-day or timezone component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// create from components, `None` if the day does not exist
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(CalendarDate)
    }

    /// parse `DD-MM-YYYY` with zero-padded day and month and a 4-digit year
    ///
    /// rejects malformed structure, non-numeric parts, months outside 1-12
    /// and days that do not exist in the given month (31-04, 30-02, 29-02
    /// outside leap years).
    pub fn parse(text: &str) -> Option<Self> {
        let mut parts = text.split('-');
        let day = parts.next()?;
        let month = parts.next()?;
        let year = parts.next()?;
        if parts.next().is_some() {
            return None;
        }

        let day = parse_digits(day, 2)?;
        let month = parse_digits(month, 2)?;
        let year = parse_digits(year, 4)?;

        Self::from_ymd(year as i32, month, day)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// the following calendar day
    pub fn next_day(&self) -> Option<Self> {
        self.0.succ_opt().map(CalendarDate)
    }

    /// last day of the half-year containing this date (30-06 or 31-12)
    pub fn half_year_end(&self) -> Self {
        if self.month() <= 6 {
            CalendarDate(ymd(self.year(), 6, 30))
        } else {
            self.year_end()
        }
    }

    /// 31-12 of this date's year
    pub fn year_end(&self) -> Self {
        CalendarDate(ymd(self.year(), 12, 31))
    }

    /// render as `DD-MM-YYYY`
    pub fn format(&self) -> String {
        self.to_string()
    }
}

// components of a NaiveDate that already exists in the same year
fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MAX)
}

fn parse_digits(part: &str, width: usize) -> Option<u32> {
    if part.len() != width || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}-{:04}", self.day(), self.month(), self.year())
    }
}

impl FromStr for CalendarDate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CalendarDate::parse(s).ok_or_else(|| format!("invalid date '{}', expected DD-MM-YYYY", s))
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(d: NaiveDate) -> Self {
        CalendarDate(d)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.format())
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(de::Error::custom)
    }
}

/// gregorian leap year rule
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// number of days from `start` to `end` counting both endpoints
///
/// counted on the day-number epoch, so `days_between_inclusive(d, d) == 1`.
/// returns 0 when `start > end`.
pub fn days_between_inclusive(start: CalendarDate, end: CalendarDate) -> u32 {
    let span = end.0.num_days_from_ce() - start.0.num_days_from_ce();
    if span < 0 {
        0
    } else {
        span as u32 + 1
    }
}
