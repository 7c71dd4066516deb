//! Set lengths shown as `M:SS`.
//!
//! Used by the setlist timer and the set-length input field. Parsing is
//! forgiving: parts it cannot read count as zero seconds.

use once_cell::sync::Lazy;
use regex::Regex;

static PARTIAL_INPUT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{1,2}:?\d{0,2}$").expect("valid partial set length pattern"));

/// `seconds` as `M:SS` (minutes unpadded, may exceed 59).
pub fn format_set_length(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Read `M:SS` or a bare number of seconds, clamped to `max`.
pub fn parse_set_length(input: &str, max: u32) -> u32 {
    let input = input.trim();
    if input.is_empty() {
        return 0;
    }

    if input.chars().all(|c| c.is_ascii_digit()) {
        return input.parse::<u32>().unwrap_or(u32::MAX).min(max);
    }

    let parts: Vec<&str> = input.split(':').collect();
    if let [mins, secs] = parts.as_slice() {
        let mins = mins.trim().parse::<u32>().unwrap_or(0);
        let secs = secs.trim().parse::<u32>().unwrap_or(0);
        return mins.saturating_mul(60).saturating_add(secs).min(max);
    }

    0
}

/// Whether a set-length field may hold `input`, including while it is
/// still being typed (`4:`, `4:3`).
pub fn is_valid_set_length_input(input: &str) -> bool {
    input.is_empty()
        || input.chars().all(|c| c.is_ascii_digit())
        || PARTIAL_INPUT.is_match(input)
}

/// Difference between a setlist's total and its target, `+` when over.
pub fn format_target_delta(total: u32, target: u32) -> String {
    if total > target {
        format!("+{}", format_set_length(total - target))
    } else {
        format_set_length(target - total)
    }
}
