/// Errors returned by the strict formatting entry points.
///
/// The permissive operations (`to_display`, `normalize_display`) never
/// produce these; they hand the input back instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TimeFormatError {
    #[error("No time provided")]
    Empty,
    #[error("Unrecognized time format: {0}")]
    Unrecognized(String),
    #[error("Hour out of range: {0}")]
    HourOutOfRange(u32),
    #[error("Minute out of range: {0}")]
    MinuteOutOfRange(u32),
    #[error("Invalid number in time: {0}")]
    InvalidNumber(String),
}
