//! Show-time display formatting.
//!
//! [`to_display`] and [`normalize_display`] are permissive: input they do not
//! recognize comes back unchanged, and empty input comes back empty. Callers
//! that would rather reject bad data use [`try_to_display`] or a
//! [`TimeFormatter`] configured with [`UnrecognizedPolicy::Reject`].

use super::clock::ClockTime;
use super::parse::{parse, parse_12_hour, ParsedTime};
use crate::error::TimeFormatError;
use log::debug;
use serde::{Deserialize, Serialize};

/// Convert a strict 24-hour time (`16:30`) to its display form (`4:30 PM`).
///
/// Input that already carries an AM/PM marker is cleaned up the way
/// [`normalize_display`] does it. Anything else is returned unchanged.
///
/// # Examples
///
/// ```
/// use showtime::time::to_display;
///
/// assert_eq!(to_display("00:30"), "12:30 AM");
/// assert_eq!(to_display("09:00"), "9:00 AM");
/// assert_eq!(to_display("4:30 pm"), "4:30 PM");
/// assert_eq!(to_display("TBA"), "TBA");
/// ```
pub fn to_display(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }
    let parsed = parse(input);
    if !parsed.is_recognized() {
        debug!("Unrecognized show time, passing through: {:?}", input);
    }
    parsed.render()
}

/// Clean up a 12-hour time: uppercase the marker, single space before it,
/// hour `0` shown as `12`. Text around the time is kept.
///
/// Idempotent. Input without a 12-hour time is returned unchanged.
pub fn normalize_display(input: &str) -> String {
    if input.is_empty() {
        return String::new();
    }
    parse_12_hour(input).render()
}

/// Like [`to_display`], but unrecognized input is an error.
///
/// Only the shape is checked; an out-of-range 12-hour time such as
/// `13:30 pm` renders as `13:30 PM` here too.
pub fn try_to_display(input: &str) -> Result<String, TimeFormatError> {
    if input.is_empty() {
        return Err(TimeFormatError::Empty);
    }
    match parse(input) {
        ParsedTime::Unrecognized(original) => {
            Err(TimeFormatError::Unrecognized(original.to_string()))
        }
        parsed => Ok(parsed.render()),
    }
}

/// Parse either display shape into a [`ClockTime`].
///
/// Stricter than [`to_display`]: a 12-hour time must make up the whole
/// input (surrounding whitespace aside) and be in range, so `13:30 PM` is
/// an error here even though display normalization accepts it.
pub fn parse_clock_time(input: &str) -> Result<ClockTime, TimeFormatError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TimeFormatError::Empty);
    }
    match parse(trimmed) {
        ParsedTime::TwentyFourHour(time) => Ok(time),
        ParsedTime::TwelveHour { time, prefix, suffix } if prefix.is_empty() && suffix.is_empty() => {
            time.to_clock_time()
        }
        _ => Err(TimeFormatError::Unrecognized(input.to_string())),
    }
}

/// Minutes since midnight for ordering listings by show time.
///
/// Input that is not a real time of day sorts as `0`.
pub fn show_time_minutes(input: &str) -> u32 {
    parse(input).clock_time().map_or(0, |time| time.minutes_since_midnight())
}

/// Show time as decimal hours (`19:30` is `19.5`), if there is one.
pub fn show_time_hours(input: &str) -> Option<f64> {
    parse(input).clock_time().map(|time| time.decimal_hours())
}

/// Lenient `H:M` conversion that re-pads minutes: `16:5` becomes `4:05 PM`.
///
/// Empty input gives an empty string.
pub fn to_12_hour_string(input: &str) -> Result<String, TimeFormatError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(String::new());
    }

    let (hour, minute) = input
        .split_once(':')
        .ok_or_else(|| TimeFormatError::Unrecognized(input.to_string()))?;
    let hour = parse_part(hour)?;
    let minute = parse_part(minute)?;

    Ok(ClockTime::new(hour, minute)?.to_string())
}

fn parse_part(part: &str) -> Result<u32, TimeFormatError> {
    if part.is_empty() || part.len() > 2 || !part.chars().all(|c| c.is_ascii_digit()) {
        return Err(TimeFormatError::InvalidNumber(part.to_string()));
    }
    part.parse::<u32>().map_err(|_| TimeFormatError::InvalidNumber(part.to_string()))
}

/// What to do with a show time that matches neither display shape
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnrecognizedPolicy {
    /// Leave the text as it is
    #[default]
    PassThrough,
    /// Report an error
    Reject,
}

/// Display formatter bound to an [`UnrecognizedPolicy`]
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeFormatter {
    policy: UnrecognizedPolicy,
}

impl TimeFormatter {
    pub fn new(policy: UnrecognizedPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> UnrecognizedPolicy {
        self.policy
    }

    pub fn format(&self, input: &str) -> Result<String, TimeFormatError> {
        match self.policy {
            UnrecognizedPolicy::PassThrough => Ok(to_display(input)),
            UnrecognizedPolicy::Reject => try_to_display(input),
        }
    }
}
