//! Recognition of the two display-string shapes.
//!
//! Both public formatting operations go through [`parse`] (or the 12-hour
//! half of it) and then a single render step, so the patterns live here only.

use super::clock::{ClockTime, Period};
use crate::error::TimeFormatError;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Strict 24-hour form: the whole input is `H:MM` or `HH:MM`.
static TWENTY_FOUR_HOUR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2}):(\d{2})$").expect("valid 24-hour pattern"));

/// 12-hour form, searched anywhere in the input.
static TWELVE_HOUR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d{1,2}):(\d{2})\s*(AM|PM)").expect("valid 12-hour pattern"));

/// A 12-hour time as written: hour number, minute digits and marker.
///
/// No range check is applied; `13:30 pm` and `4:75 pm` are still cleaned up
/// to `13:30 PM` and `4:75 PM`. [`TwelveHourTime::clock_time`] is where the
/// range is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwelveHourTime<'a> {
    pub hour: u32,
    pub minutes: &'a str,
    pub period: Period,
}

impl TwelveHourTime<'_> {
    /// Hour as rendered: `0` becomes `12`, anything else is kept.
    pub fn display_hour(&self) -> u32 {
        if self.hour == 0 { 12 } else { self.hour }
    }

    pub fn to_clock_time(&self) -> Result<ClockTime, TimeFormatError> {
        let minute = self
            .minutes
            .parse::<u32>()
            .map_err(|_| TimeFormatError::InvalidNumber(self.minutes.to_string()))?;
        ClockTime::from_12_hour(self.hour, minute, self.period)
    }

    pub fn clock_time(&self) -> Option<ClockTime> {
        self.to_clock_time().ok()
    }
}

impl fmt::Display for TwelveHourTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} {}", self.display_hour(), self.minutes, self.period)
    }
}

/// Outcome of the parse step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedTime<'a> {
    /// The whole input was a strict 24-hour time.
    TwentyFourHour(ClockTime),
    /// A 12-hour time was found; the text around it is kept for re-rendering.
    TwelveHour { time: TwelveHourTime<'a>, prefix: &'a str, suffix: &'a str },
    /// Neither shape matched; carries the input as given.
    Unrecognized(&'a str),
}

impl<'a> ParsedTime<'a> {
    /// The time of day, when it is a real one.
    pub fn clock_time(&self) -> Option<ClockTime> {
        match self {
            ParsedTime::TwentyFourHour(time) => Some(*time),
            ParsedTime::TwelveHour { time, .. } => time.clock_time(),
            ParsedTime::Unrecognized(_) => None,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, ParsedTime::Unrecognized(_))
    }

    /// Render to the canonical display form, or hand back the original text.
    pub fn render(&self) -> String {
        match self {
            ParsedTime::TwentyFourHour(time) => time.to_string(),
            ParsedTime::TwelveHour { time, prefix, suffix } => {
                format!("{}{}{}", prefix, time, suffix)
            }
            ParsedTime::Unrecognized(original) => (*original).to_string(),
        }
    }
}

/// Try the strict 24-hour shape first, then look for a 12-hour time.
pub fn parse(input: &str) -> ParsedTime<'_> {
    if let Some(time) = parse_24_hour(input) {
        return ParsedTime::TwentyFourHour(time);
    }
    parse_12_hour(input)
}

/// Only the 12-hour shape; used by display normalization.
pub fn parse_12_hour(input: &str) -> ParsedTime<'_> {
    let Some(caps) = TWELVE_HOUR.captures(input) else {
        return ParsedTime::Unrecognized(input);
    };
    let (Some(whole), Some(hour), Some(minutes), Some(marker)) =
        (caps.get(0), caps.get(1), caps.get(2), caps.get(3))
    else {
        return ParsedTime::Unrecognized(input);
    };
    let (Ok(hour), Some(period)) =
        (hour.as_str().parse::<u32>(), Period::from_marker(marker.as_str()))
    else {
        return ParsedTime::Unrecognized(input);
    };

    ParsedTime::TwelveHour {
        time: TwelveHourTime { hour, minutes: minutes.as_str(), period },
        prefix: &input[..whole.start()],
        suffix: &input[whole.end()..],
    }
}

/// Strict `H:MM`/`HH:MM` with hour `0..=23` and minute `0..=59`.
pub fn parse_24_hour(input: &str) -> Option<ClockTime> {
    let caps = TWENTY_FOUR_HOUR.captures(input)?;
    let hour = caps.get(1)?.as_str().parse::<u32>().ok()?;
    let minute = caps.get(2)?.as_str().parse::<u32>().ok()?;
    match ClockTime::new(hour, minute) {
        Ok(time) => Some(time),
        Err(err) => {
            debug!("Not a 24-hour time ({}): {}", err, input);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_24_hour() {
        assert_eq!(parse_24_hour("16:30"), Some(ClockTime::new(16, 30).unwrap()));
        assert_eq!(parse_24_hour("9:05"), Some(ClockTime::new(9, 5).unwrap()));
        assert_eq!(parse_24_hour("24:00"), None);
        assert_eq!(parse_24_hour("12:60"), None);
        assert_eq!(parse_24_hour("9:5"), None);
        assert_eq!(parse_24_hour(" 9:05"), None);
        assert_eq!(parse_24_hour("9:05 PM"), None);
        assert_eq!(parse_24_hour("123:00"), None);
    }

    #[test]
    fn test_parse_prefers_24_hour() {
        let parsed = parse("12:00");
        assert_eq!(parsed, ParsedTime::TwentyFourHour(ClockTime::new(12, 0).unwrap()));
    }

    #[test]
    fn test_parse_12_hour_keeps_surrounding_text() {
        let parsed = parse("Doors 7:30pm sharp");
        match parsed {
            ParsedTime::TwelveHour { time, prefix, suffix } => {
                assert_eq!(time, TwelveHourTime { hour: 7, minutes: "30", period: Period::Pm });
                assert_eq!(time.clock_time(), Some(ClockTime::new(19, 30).unwrap()));
                assert_eq!(prefix, "Doors ");
                assert_eq!(suffix, " sharp");
            }
            other => panic!("expected a 12-hour match, got {:?}", other),
        }
        assert_eq!(parsed.render(), "Doors 7:30 PM sharp");
    }

    #[test]
    fn test_parse_12_hour_out_of_range_still_renders() {
        let parsed = parse("13:30 pm");
        assert!(parsed.is_recognized());
        assert_eq!(parsed.clock_time(), None);
        assert_eq!(parsed.render(), "13:30 PM");

        let parsed = parse("4:75 pm");
        assert_eq!(parsed.clock_time(), None);
        assert_eq!(parsed.render(), "4:75 PM");

        assert_eq!(parse("1:30:45 pm").render(), "1:30:45 PM");
    }

    #[test]
    fn test_twelve_hour_clock_time_range() {
        let time = TwelveHourTime { hour: 13, minutes: "30", period: Period::Pm };
        assert_eq!(time.to_clock_time(), Err(TimeFormatError::HourOutOfRange(13)));
        let time = TwelveHourTime { hour: 4, minutes: "75", period: Period::Pm };
        assert_eq!(time.to_clock_time(), Err(TimeFormatError::MinuteOutOfRange(75)));
    }

    #[test]
    fn test_unrecognized() {
        let parsed = parse("late night");
        assert!(!parsed.is_recognized());
        assert_eq!(parsed.clock_time(), None);
        assert_eq!(parsed.render(), "late night");
    }
}
