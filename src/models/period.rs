//! Summary periods
//!
//! Each period starts at a calendar boundary computed in the time zone of the
//! supplied `now`, so a caller passing `Local::now()` gets local-calendar
//! totals.

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Window over which transaction amounts are summed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryPeriod {
    Today,
    /// Since Monday 00:00 of the current ISO week
    ThisWeek,
    ThisMonth,
    ThisYear,
    AllTime,
}

impl SummaryPeriod {
    pub fn all() -> &'static [Self] {
        &[
            Self::Today,
            Self::ThisWeek,
            Self::ThisMonth,
            Self::ThisYear,
            Self::AllTime,
        ]
    }

    /// First date of the period containing `today`, or `None` for all-time
    pub fn start_date(&self, today: NaiveDate) -> Option<NaiveDate> {
        match self {
            Self::Today => Some(today),
            Self::ThisWeek => {
                Some(today - Duration::days(today.weekday().num_days_from_monday() as i64))
            }
            Self::ThisMonth => Some(today - Duration::days(today.day0() as i64)),
            Self::ThisYear => Some(today - Duration::days(today.ordinal0() as i64)),
            Self::AllTime => None,
        }
    }

    /// Instant at which the period containing `now` begins
    pub fn start<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Option<DateTime<Tz>> {
        let tz = now.timezone();
        self.start_date(now.date_naive())
            .map(|date| start_of_day(&tz, date))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::ThisWeek => "This week",
            Self::ThisMonth => "This month",
            Self::ThisYear => "This year",
            Self::AllTime => "All time",
        }
    }
}

/// Midnight of `date` in `tz`. When a DST jump skips midnight the wall-clock
/// time is read as UTC instead.
fn start_of_day<Tz: TimeZone>(tz: &Tz, date: NaiveDate) -> DateTime<Tz> {
    let midnight = date.and_time(NaiveTime::MIN);
    tz.from_local_datetime(&midnight)
        .earliest()
        .unwrap_or_else(|| tz.from_utc_datetime(&midnight))
}

impl fmt::Display for SummaryPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for SummaryPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "today" | "day" => Ok(Self::Today),
            "week" | "this_week" => Ok(Self::ThisWeek),
            "month" | "this_month" => Ok(Self::ThisMonth),
            "year" | "this_year" => Ok(Self::ThisYear),
            "all" | "all_time" => Ok(Self::AllTime),
            other => Err(format!("Unknown period: {}", other)),
        }
    }
}
