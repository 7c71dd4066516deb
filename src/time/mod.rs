//! Time-of-day parsing and display formatting
//!
//! This module converts show times between the 24-hour form stored in
//! listings (`16:30`) and the 12-hour form shown to users (`4:30 PM`).

pub mod clock;
pub mod format;
pub mod parse;

pub use clock::{ClockTime, Period};
pub use format::{
    normalize_display, parse_clock_time, show_time_hours, show_time_minutes, to_12_hour_string,
    to_display, try_to_display, TimeFormatter, UnrecognizedPolicy,
};
pub use parse::{parse, ParsedTime, TwelveHourTime};
