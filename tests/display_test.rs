use pretty_assertions::assert_eq;
use showtime::time::{normalize_display, parse, to_display, ParsedTime};
use test_case::test_case;

const SAMPLES: &[&str] = &[
    "",
    "4:30 pm",
    "4:30PM",
    "04:30   am",
    "0:45 am",
    "12:00 PM",
    "Doors 7:30pm / Show 8:00pm",
    "16:30",
    "13:30 pm",
    "4:75 pm",
    "1:30:45 pm",
    "TBA",
    "7pm",
    "Every other Tuesday",
];

#[test]
fn test_normalize_display_is_idempotent() {
    for sample in SAMPLES {
        let once = normalize_display(sample);
        assert_eq!(normalize_display(&once), once, "input: {:?}", sample);
    }
}

#[test]
fn test_to_display_output_is_stable() {
    for sample in SAMPLES {
        let once = to_display(sample);
        assert_eq!(to_display(&once), once, "input: {:?}", sample);
    }
}

#[test]
fn test_empty_passes_through() {
    assert_eq!(to_display(""), "");
    assert_eq!(normalize_display(""), "");
}

#[test_case("TBA")]
#[test_case("7pm")]
#[test_case("half past seven")]
#[test_case("19.30")]
#[test_case("25:00")]
fn test_garbage_passes_through(input: &str) {
    assert_eq!(to_display(input), input);
    assert_eq!(normalize_display(input), input);
}

#[test]
fn test_noon_and_midnight() {
    assert_eq!(to_display("00:30"), "12:30 AM");
    assert_eq!(to_display("12:00"), "12:00 PM");
}

#[test]
fn test_standard_conversion() {
    assert_eq!(to_display("16:30"), "4:30 PM");
    assert_eq!(to_display("09:00"), "9:00 AM");
}

#[test]
fn test_already_12_hour_cleanup() {
    assert_eq!(normalize_display("4:30 pm"), "4:30 PM");
}

#[test_case("13:30 pm", "13:30 PM")]
#[test_case("4:75 pm", "4:75 PM")]
#[test_case("1:30:45 pm", "1:30:45 PM")]
fn test_out_of_range_12_hour_marker_is_uppercased(input: &str, expected: &str) {
    assert_eq!(normalize_display(input), expected);
    assert_eq!(to_display(input), expected);
}

#[test]
fn test_no_conversion_back_to_24_hour() {
    // 12-hour input stays 12-hour; nothing produces "16:30" from it
    assert_eq!(to_display("4:30 PM"), "4:30 PM");
    assert_eq!(normalize_display("4:30 PM"), "4:30 PM");
    assert!(matches!(parse("4:30 PM"), ParsedTime::TwelveHour { .. }));
}

#[test]
fn test_every_24_hour_time_renders_canonically() {
    for hour in 0..24 {
        for minute in [0, 5, 30, 59] {
            let input = format!("{:02}:{:02}", hour, minute);
            let output = to_display(&input);

            let (time, period) = output.split_once(' ').expect("period marker");
            let (display_hour, display_minute) = time.split_once(':').expect("colon");
            let display_hour: u32 = display_hour.parse().expect("numeric hour");

            assert!((1..=12).contains(&display_hour), "{} -> {}", input, output);
            assert_eq!(display_minute, format!("{:02}", minute));
            assert_eq!(period, if hour >= 12 { "PM" } else { "AM" });
        }
    }
}
