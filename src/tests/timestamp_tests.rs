// src/tests/timestamp_tests.rs

//! tests for `timestamp.rs` and the `PreciseTimestampFormatter`

#![allow(non_snake_case)]

use crate::common::NANOSECONDS_PER_SECOND;
use crate::data::timestamp::{ymdhmsn, Timestamp};
use crate::printer::timestamp::{
    Locale,
    PreciseTimestampFormatter,
    LOCALE_DE,
    LOCALE_EN,
};
use crate::tests::common::{
    formatter_de,
    formatter_en,
    TS_20160201_123055_0,
    TS_20160201_123055_N1,
    TS_20160201_123055_N9,
    TS_20160201_123056_0,
};

use ::chrono::{FixedOffset, NaiveDate, TimeZone};
use ::test_case::test_case;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// Timestamp

#[test]
fn test_nanosecond_of_day_zero() {
    assert_eq!(ymdhmsn(2016, 2, 1, 0, 0, 0, 0).nanosecond_of_day(), 0);
}

#[test_case(TS_20160201_123055_0, 45_055_000_000_000; "on the second")]
#[test_case(TS_20160201_123055_N9, 45_055_999_999_999; "last nanosecond")]
#[test_case(TS_20160201_123056_0, 45_056_000_000_000; "next second")]
#[test_case(ymdhmsn(2016, 2, 1, 23, 59, 59, 999_999_999), 86_399_999_999_999; "last nanosecond of day")]
fn test_nanosecond_of_day(
    timestamp: Timestamp,
    expect: u64,
) {
    assert_eq!(timestamp.nanosecond_of_day(), expect);
}

#[test]
fn test_weekday_index() {
    // 2016-02-01 was a Monday
    assert_eq!(TS_20160201_123055_0.weekday_index(), 1);
    // 2016-02-07 was a Sunday
    assert_eq!(ymdhmsn(2016, 2, 7, 0, 0, 0, 0).weekday_index(), 0);
}

#[test]
fn test_weekday_index_impossible_date_falls_back() {
    assert_eq!(ymdhmsn(2016, 2, 30, 0, 0, 0, 0).weekday_index(), 0);
}

#[test]
fn test_from_datetime() {
    let offset = FixedOffset::east_opt(3600).unwrap();
    let datetime = offset
        .with_ymd_and_hms(2016, 2, 1, 12, 30, 55)
        .unwrap();
    assert_eq!(
        Timestamp::from_datetime(&datetime),
        TS_20160201_123055_0,
    );
}

#[test]
fn test_from_datetime_clamps_leap_second() {
    // chrono represents a leap second as nanosecond ≥ 10⁹
    let datetime = NaiveDate::from_ymd_opt(2016, 12, 31)
        .unwrap()
        .and_hms_nano_opt(23, 59, 59, 1_500_000_000)
        .unwrap()
        .and_utc();
    let timestamp = Timestamp::from_datetime(&datetime);
    assert_eq!(timestamp.nanosecond, NANOSECONDS_PER_SECOND - 1);
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// format: precision tiers

#[test_case(TS_20160201_123055_0, "2016-02-01 12:30"; "on the second")]
#[test_case(ymdhmsn(2016, 2, 1, 12, 30, 55, 999_000_000), "2016-02-01 12:30"; "milliseconds ignored")]
#[test_case(TS_20160201_123056_0, "2016-02-01 12:30"; "second rollover does not reach minute")]
fn test_format_minute_precision(
    timestamp: Timestamp,
    expect: &str,
) {
    let formatter = formatter_en("yyyy-MM-dd HH:mm");
    assert_eq!(formatter.format(&timestamp), expect);
}

#[test_case(TS_20160201_123055_0, "2016-02-01 12:30:55"; "on the second")]
#[test_case(ymdhmsn(2016, 2, 1, 12, 30, 55, 999_000_000), "2016-02-01 12:30:55"; "milliseconds ignored")]
#[test_case(TS_20160201_123056_0, "2016-02-01 12:30:56"; "next second")]
fn test_format_second_precision(
    timestamp: Timestamp,
    expect: &str,
) {
    let formatter = formatter_en("yyyy-MM-dd HH:mm:ss");
    assert_eq!(formatter.format(&timestamp), expect);
}

#[test_case(ymdhmsn(2016, 2, 1, 12, 30, 55, 999_000_000), "12:30:55.999"; "exact milliseconds")]
#[test_case(TS_20160201_123055_N9, "12:30:55.999"; "truncated, never rounded")]
#[test_case(TS_20160201_123056_0, "12:30:56.000"; "next second")]
fn test_format_millisecond_precision(
    timestamp: Timestamp,
    expect: &str,
) {
    let formatter = formatter_en("HH:mm:ss.SSS");
    assert_eq!(formatter.format(&timestamp), expect);
}

#[test_case(ymdhmsn(2016, 2, 1, 12, 30, 55, 999_999_000), "12:30:55.999999"; "exact microseconds")]
#[test_case(TS_20160201_123055_N9, "12:30:55.999999"; "truncated, never rounded")]
#[test_case(TS_20160201_123056_0, "12:30:56.000000"; "next second")]
fn test_format_microsecond_precision(
    timestamp: Timestamp,
    expect: &str,
) {
    let formatter = formatter_en("HH:mm:ss.SSSSSS");
    assert_eq!(formatter.format(&timestamp), expect);
}

#[test_case(TS_20160201_123055_N1, "12:30:55.000000001"; "one nanosecond")]
#[test_case(TS_20160201_123055_N9, "12:30:55.999999999"; "last nanosecond")]
#[test_case(TS_20160201_123056_0, "12:30:56.000000000"; "next second")]
fn test_format_nanosecond_precision(
    timestamp: Timestamp,
    expect: &str,
) {
    let formatter = formatter_en("HH:mm:ss.SSSSSSSSS");
    assert_eq!(formatter.format(&timestamp), expect);
}

/// for any fractional width, the rendering is the first `width` digits of
/// the zero-padded 9-digit nanosecond-of-second; no carry into seconds
#[test_case(1)]
#[test_case(2)]
#[test_case(3)]
#[test_case(4)]
#[test_case(5)]
#[test_case(6)]
#[test_case(7)]
#[test_case(8)]
#[test_case(9)]
fn test_format_fractional_truncates_at_width(width: usize) {
    let pattern: String = format!("ss.{}", "S".repeat(width));
    let formatter = formatter_en(&pattern);
    for (nanosecond, digits9) in [
        (999_999_999, "999999999"),
        (123_456_789, "123456789"),
        (1, "000000001"),
        (0, "000000000"),
    ] {
        let timestamp = ymdhmsn(2016, 2, 1, 12, 30, 55, nanosecond);
        let expect = format!("55.{}", &digits9[..width]);
        assert_eq!(
            formatter.format(&timestamp),
            expect,
            "\nnanosecond {} width {}\n",
            nanosecond,
            width,
        );
    }
}

#[test_case(TS_20160201_123055_N1, "12:30:55 / 1"; "one nanosecond unpadded")]
#[test_case(TS_20160201_123055_N9, "12:30:55 / 999999999"; "last nanosecond")]
#[test_case(TS_20160201_123056_0, "12:30:56 / 0"; "zero unpadded")]
fn test_format_nanosecond_of_second(
    timestamp: Timestamp,
    expect: &str,
) {
    let formatter = formatter_en("HH:mm:ss / n");
    assert_eq!(formatter.format(&timestamp), expect);
}

#[test_case(TS_20160201_123055_0, "20160201 45055000000000"; "on the second")]
#[test_case(TS_20160201_123055_N9, "20160201 45055999999999"; "last nanosecond")]
#[test_case(TS_20160201_123056_0, "20160201 45056000000000"; "next second")]
fn test_format_nanosecond_of_day(
    timestamp: Timestamp,
    expect: &str,
) {
    let formatter = formatter_en("yyyyMMdd N");
    assert_eq!(formatter.format(&timestamp), expect);
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// format: calendar fields and locales

#[test]
fn test_format_year_of_century() {
    let formatter = formatter_en("yy-MM-dd");
    assert_eq!(formatter.format(&TS_20160201_123055_0), "16-02-01");
}

#[test]
fn test_format_single_letter_fields_unpadded() {
    let formatter = formatter_en("y-M-d H:m:s");
    assert_eq!(formatter.format(&TS_20160201_123055_0), "2016-2-1 12:30:55");
    assert_eq!(
        formatter.format(&ymdhmsn(2016, 11, 21, 3, 4, 5, 0)),
        "2016-11-21 3:4:5",
    );
}

#[test]
fn test_format_textual_fields_en() {
    let formatter = formatter_en("EEEE, MMMM d yyyy");
    assert_eq!(
        formatter.format(&TS_20160201_123055_0),
        "Monday, February 1 2016",
    );
    let formatter = formatter_en("EEE d MMM");
    assert_eq!(formatter.format(&TS_20160201_123055_0), "Mon 1 Feb");
}

#[test]
fn test_format_textual_fields_de() {
    let formatter = formatter_de("EEEE, d. MMMM yyyy");
    assert_eq!(
        formatter.format(&TS_20160201_123055_0),
        "Montag, 1. Februar 2016",
    );
}

#[test]
fn test_format_empty_pattern() {
    let formatter = formatter_en("");
    assert_eq!(formatter.format(&TS_20160201_123055_0), "");
}

#[test]
fn test_format_quoted_literal() {
    let formatter = formatter_en("HH'h'mm''ss");
    assert_eq!(formatter.format(&TS_20160201_123055_0), "12h30'55");
}

// locale selection

#[test_case("en", LOCALE_EN; "bare english")]
#[test_case("en-US", LOCALE_EN; "english region")]
#[test_case("en_US", LOCALE_EN; "underscore normalized")]
#[test_case("C", LOCALE_EN; "posix c")]
#[test_case("de", LOCALE_DE; "bare german")]
#[test_case("de-AT", LOCALE_DE; "german region")]
#[test_case("de-XX", LOCALE_DE; "unknown german region falls back to primary subtag")]
#[test_case("tlh", LOCALE_EN; "unknown language falls back to english")]
#[test_case("", LOCALE_EN; "empty tag falls back to english")]
fn test_locale_for_tag(
    tag: &str,
    expect: Locale,
) {
    assert_eq!(Locale::for_tag(tag), expect);
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// is_valid

#[test]
fn test_is_valid_accepts_valid_formatted_timestamp() {
    let formatter = formatter_en("HH:mm:ss.SSSSSSSSS");
    assert!(formatter.is_valid("12:30:55.999999999"));
}

#[test]
fn test_is_valid_refuses_invalid_formatted_timestamp() {
    let formatter = formatter_en("HH:mm:ss.SSSSSSSSS");
    assert!(!formatter.is_valid("1985-06-03"));
}

#[test_case("12:30:55.999999999", true; "full nanosecond width")]
#[test_case("00:00:00.000000000", true; "all zeros")]
#[test_case("12:30:55.999", false; "too few fractional digits")]
#[test_case("12:30:55.9999999990", false; "leftover digit")]
#[test_case("12:30:55.99999999x", false; "non digit in fraction")]
#[test_case("12-30-55.999999999", false; "wrong separators")]
#[test_case("2:30:55.999999999", false; "hour not fixed width")]
#[test_case("", false; "empty candidate")]
fn test_is_valid_nanosecond_pattern(
    candidate: &str,
    expect: bool,
) {
    let formatter = formatter_en("HH:mm:ss.SSSSSSSSS");
    assert_eq!(formatter.is_valid(candidate), expect);
}

#[test_case("1985-06-03", true; "date shaped")]
#[test_case("12:30:55", false; "time shaped")]
#[test_case("1985-06-03 ", false; "trailing leftover")]
fn test_is_valid_date_pattern(
    candidate: &str,
    expect: bool,
) {
    let formatter = formatter_en("yyyy-MM-dd");
    assert_eq!(formatter.is_valid(candidate), expect);
}

/// structural validation only: calendar-impossible values are accepted
#[test]
fn test_is_valid_is_lexical_not_calendar() {
    let formatter = formatter_en("yyyy-MM-dd");
    assert!(formatter.is_valid("2016-02-31"));
    assert!(formatter.is_valid("2016-13-01"));
}

#[test]
fn test_is_valid_unbounded_fields() {
    let formatter = formatter_en("HH:mm:ss / n");
    assert!(formatter.is_valid("12:30:55 / 1"));
    assert!(formatter.is_valid("12:30:55 / 999999999"));
    assert!(!formatter.is_valid("12:30:55 / "));
    assert!(!formatter.is_valid("12:30:55 / x"));
}

#[test]
fn test_is_valid_single_letter_fields() {
    let formatter = formatter_en("M/d/yyyy");
    assert!(formatter.is_valid("2/5/2016"));
    assert!(formatter.is_valid("12/31/2016"));
    assert!(!formatter.is_valid("112/31/2016"));
}

#[test]
fn test_is_valid_textual_fields() {
    let formatter = formatter_en("dd MMMM yyyy");
    assert!(formatter.is_valid("01 February 2016"));
    assert!(!formatter.is_valid("01 Februar 2016"));
    let formatter = formatter_de("dd MMMM yyyy");
    assert!(formatter.is_valid("01 Februar 2016"));
}

#[test]
fn test_is_valid_empty_pattern() {
    let formatter = formatter_en("");
    assert!(formatter.is_valid(""));
    assert!(!formatter.is_valid("x"));
}

/// anything `format` produces must validate under the same pattern
#[test_case("yyyy-MM-dd HH:mm:ss.SSSSSSSSS")]
#[test_case("yyyy-MM-dd HH:mm:ss.SSS")]
#[test_case("yyyyMMdd N")]
#[test_case("HH:mm:ss / n")]
#[test_case("EEEE, MMMM d yyyy")]
#[test_case("M/d/yy HH'h'mm")]
#[test_case("")]
fn test_format_round_trips_through_is_valid(pattern: &str) {
    let formatter = formatter_en(pattern);
    for timestamp in [
        TS_20160201_123055_0,
        TS_20160201_123055_N1,
        TS_20160201_123055_N9,
        TS_20160201_123056_0,
        ymdhmsn(1999, 12, 31, 23, 59, 59, 123_456_789),
        ymdhmsn(2016, 11, 21, 3, 4, 5, 0),
    ] {
        let rendered: String = formatter.format(&timestamp);
        assert!(
            formatter.is_valid(&rendered),
            "\npattern {:?} rendered {:?} did not validate\n",
            pattern,
            rendered,
        );
    }
}

/// compiling the same pattern twice renders identically
#[test]
fn test_recompiled_formatter_renders_identically() {
    let formatter1 = formatter_en("yyyy-MM-dd HH:mm:ss.SSSSSSSSS");
    let formatter2 = formatter_en("yyyy-MM-dd HH:mm:ss.SSSSSSSSS");
    for timestamp in [TS_20160201_123055_0, TS_20160201_123055_N9] {
        assert_eq!(formatter1.format(&timestamp), formatter2.format(&timestamp));
    }
}

#[test]
fn test_new_rejects_bad_pattern() {
    assert!(PreciseTimestampFormatter::new("SSSSSSSSSS", Locale::default()).is_err());
    assert!(PreciseTimestampFormatter::new("yyyy-Q", Locale::default()).is_err());
    assert!(PreciseTimestampFormatter::new("'open", Locale::default()).is_err());
}
