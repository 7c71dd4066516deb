//! Hour/minute value type shared by every formatting path.

use crate::error::TimeFormatError;
use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;

/// AM/PM marker of a 12-hour display string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Period {
    Am,
    Pm,
}

impl Period {
    /// Case-insensitive match on `am`/`pm`
    pub fn from_marker(marker: &str) -> Option<Self> {
        if marker.eq_ignore_ascii_case("am") {
            Some(Period::Am)
        } else if marker.eq_ignore_ascii_case("pm") {
            Some(Period::Pm)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Period::Am => "AM",
            Period::Pm => "PM",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A time of day with `hour` in `0..=23` and `minute` in `0..=59`.
///
/// Rendering through [`fmt::Display`] always yields the canonical display
/// form `H:MM AM|PM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ClockTime {
    hour: u32,
    minute: u32,
}

impl ClockTime {
    /// Build from a 24-hour hour and a minute.
    pub fn new(hour: u32, minute: u32) -> Result<Self, TimeFormatError> {
        if hour > 23 {
            return Err(TimeFormatError::HourOutOfRange(hour));
        }
        if minute > 59 {
            return Err(TimeFormatError::MinuteOutOfRange(minute));
        }
        Ok(Self { hour, minute })
    }

    /// Build from a 12-hour display hour and period.
    ///
    /// Hour `0` is read as `12`; bad upstream data sometimes carries it.
    pub fn from_12_hour(hour: u32, minute: u32, period: Period) -> Result<Self, TimeFormatError> {
        if hour > 12 {
            return Err(TimeFormatError::HourOutOfRange(hour));
        }
        let hour = if hour == 0 { 12 } else { hour };
        let hour_24 = match (period, hour) {
            (Period::Am, 12) => 0,
            (Period::Am, h) => h,
            (Period::Pm, 12) => 12,
            (Period::Pm, h) => h + 12,
        };
        Self::new(hour_24, minute)
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn period(&self) -> Period {
        if self.hour >= 12 { Period::Pm } else { Period::Am }
    }

    pub fn minutes_since_midnight(&self) -> u32 {
        self.hour * 60 + self.minute
    }

    /// `19:30` is `19.5`
    pub fn decimal_hours(&self) -> f64 {
        f64::from(self.hour) + f64::from(self.minute) / 60.0
    }

    /// Hour as shown on a 12-hour clock, always in `1..=12`
    pub fn display_hour(&self) -> u32 {
        match self.hour {
            0 => 12,
            h if h > 12 => h - 12,
            h => h,
        }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02} {}", self.display_hour(), self.minute, self.period())
    }
}

impl From<NaiveTime> for ClockTime {
    fn from(time: NaiveTime) -> Self {
        Self { hour: time.hour(), minute: time.minute() }
    }
}

impl From<ClockTime> for NaiveTime {
    fn from(time: ClockTime) -> Self {
        // Fields are range-checked at construction
        NaiveTime::from_hms_opt(time.hour, time.minute, 0).unwrap_or(NaiveTime::MIN)
    }
}
