// src/printer/timestamp.rs

//! Format and validate decomposed [`Timestamp`]s against a compiled
//! date/time pattern, at up to nanosecond precision.
//!
//! The precision-critical rule: a fractional-second field of width _w_
//! takes the nanosecond-of-second, divides by 10^(9−w) with integer floor
//! division, and zero-pads the quotient to _w_ digits. That is truncation
//! toward zero, never rounding; `999999999` at width 3 renders `999`, not
//! `000` with a carry, and the seconds field is never perturbed by
//! fractional rendering.
//!
//! [`PreciseTimestampFormatter::format`] is deterministic and total for
//! any in-contract [`Timestamp`]; the pattern was already validated at
//! construction. [`PreciseTimestampFormatter::is_valid`] mirrors the
//! format algorithm structurally, consuming the candidate string token by
//! token; it is a lexical check, not calendar validation, and returns
//! `false` for a mismatch rather than erring.

use crate::common::{
    Month,
    NanosecondOfSecond,
    Pattern_str,
    Width,
    CLOCK_WIDTH_NATURAL,
    FRACTIONAL_WIDTH_MAX,
    NANOSECONDS_PER_SECOND,
    YEAR_WIDTH_NATURAL,
};
use crate::data::pattern::{
    CompiledPattern,
    PatternError,
    TextForm,
    Token,
};
use crate::data::timestamp::Timestamp;
#[cfg(any(debug_assertions, test))]
use crate::debug::printers::str_to_String_noraw;

use std::collections::BTreeMap;

use ::lazy_static::lazy_static;
use ::more_asserts::debug_assert_lt;
use ::si_trace_print::{defn, defo, defx};

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// locale name tables
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

const MONTHS_FULL_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTHS_ABBR_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

// index 0 is Sunday, matching `Timestamp::weekday_index`
const DAYS_FULL_EN: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const DAYS_ABBR_EN: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const MONTHS_FULL_DE: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

const MONTHS_ABBR_DE: [&str; 12] = [
    "Jan", "Feb", "Mär", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez",
];

const DAYS_FULL_DE: [&str; 7] = [
    "Sonntag",
    "Montag",
    "Dienstag",
    "Mittwoch",
    "Donnerstag",
    "Freitag",
    "Samstag",
];

const DAYS_ABBR_DE: [&str; 7] = ["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"];

/// Month and weekday name tables for one language.
///
/// Selects only names; numeric fields always render ASCII decimal digits
/// regardless of locale. Carried by a formatter alongside the compiled
/// pattern, never embedded in tokens, so one token sequence renders under
/// different locales.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Locale {
    months_full: &'static [&'static str; 12],
    months_abbr: &'static [&'static str; 12],
    days_full: &'static [&'static str; 7],
    days_abbr: &'static [&'static str; 7],
}

/// English name tables, the fallback for unknown locale tags.
pub const LOCALE_EN: Locale = Locale {
    months_full: &MONTHS_FULL_EN,
    months_abbr: &MONTHS_ABBR_EN,
    days_full: &DAYS_FULL_EN,
    days_abbr: &DAYS_ABBR_EN,
};

/// German name tables.
pub const LOCALE_DE: Locale = Locale {
    months_full: &MONTHS_FULL_DE,
    months_abbr: &MONTHS_ABBR_DE,
    days_full: &DAYS_FULL_DE,
    days_abbr: &DAYS_ABBR_DE,
};

/// locale identifier tags and the language key each selects
const LOCALE_TAGS: [(&str, &str); 14] = [
    ("c", "en"),
    ("posix", "en"),
    ("en", "en"),
    ("en-au", "en"),
    ("en-ca", "en"),
    ("en-gb", "en"),
    ("en-nz", "en"),
    ("en-us", "en"),
    ("de", "de"),
    ("de-at", "de"),
    ("de-ch", "de"),
    ("de-de", "de"),
    ("de-li", "de"),
    ("de-lu", "de"),
];

#[allow(non_camel_case_types)]
type Map_LocaleTag_to_Key<'a> = BTreeMap<&'a str, &'a str>;

lazy_static! {
    /// Map of lowercased locale identifier tags, e.g. `"en-US"` or
    /// `"de_DE"` (underscore normalized to hyphen), to a language key.
    static ref MAP_LOCALETAG_TO_KEY: Map_LocaleTag_to_Key<'static> = {
        let mut map = Map_LocaleTag_to_Key::new();
        for tag_key in LOCALE_TAGS.iter() {
            map.insert(tag_key.0, tag_key.1);
        }

        map
    };
}

impl Locale {
    /// Select name tables for a locale identifier tag, e.g. `"en-US"`,
    /// `"de_AT"`, `"C"`.
    ///
    /// Matching is case-insensitive and accepts `_` for `-`. An unmatched
    /// full tag falls back to its primary subtag (`"en-XX"` → `"en"`); an
    /// unknown language falls back to English.
    pub fn for_tag(tag: &str) -> Locale {
        let tag_lc: String = tag
            .to_ascii_lowercase()
            .replace('_', "-");
        let key: &str = match MAP_LOCALETAG_TO_KEY.get(tag_lc.as_str()) {
            Some(key) => key,
            None => {
                let primary = tag_lc
                    .split('-')
                    .next()
                    .unwrap_or("");
                MAP_LOCALETAG_TO_KEY
                    .get(primary)
                    .unwrap_or(&"en")
            }
        };
        match key {
            "de" => LOCALE_DE,
            _ => LOCALE_EN,
        }
    }

    /// Name of `month` 1 to 12 in the requested form. Total; an
    /// out-of-contract month clamps to the table bounds.
    fn month_name(
        &self,
        form: TextForm,
        month: Month,
    ) -> &'static str {
        let index: usize = (month.saturating_sub(1) as usize).min(11);
        match form {
            TextForm::Abbreviated => self.months_abbr[index],
            TextForm::Full => self.months_full[index],
        }
    }

    /// Name of the weekday at `weekday_index` (0 is Sunday) in the
    /// requested form.
    fn day_name(
        &self,
        form: TextForm,
        weekday_index: usize,
    ) -> &'static str {
        let index: usize = weekday_index.min(6);
        match form {
            TextForm::Abbreviated => self.days_abbr[index],
            TextForm::Full => self.days_full[index],
        }
    }

    /// All names of the form, for validation matching.
    fn month_names(
        &self,
        form: TextForm,
    ) -> &'static [&'static str] {
        match form {
            TextForm::Abbreviated => self.months_abbr,
            TextForm::Full => self.months_full,
        }
    }

    fn day_names(
        &self,
        form: TextForm,
    ) -> &'static [&'static str] {
        match form {
            TextForm::Abbreviated => self.days_abbr,
            TextForm::Full => self.days_full,
        }
    }
}

impl Default for Locale {
    fn default() -> Locale {
        LOCALE_EN
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// token rendering
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Append `value` to `out` as decimal ASCII digits zero-padded to `width`.
/// A value whose decimal form exceeds `width` digits renders at natural
/// width.
fn push_padded(
    out: &mut String,
    value: u64,
    width: Width,
) {
    out.push_str(&format!("{:0width$}", value, width = width));
}

/// Render one temporal or literal token of a compiled pattern.
///
/// Shared by [`PreciseTimestampFormatter::format`] and the entry
/// formatter, which handles the non-temporal entry fields itself before
/// delegating here. Entry fields reaching this function render nothing.
pub(crate) fn render_temporal_token(
    out: &mut String,
    token: &Token,
    timestamp: &Timestamp,
    locale: &Locale,
) {
    match token {
        Token::Literal(text) => out.push_str(text),
        Token::Year(width) => {
            // `yy` is the year-of-century; `rem_euclid` keeps years
            // before year 0 in 0–99
            let year: i64 = match *width {
                2 => (timestamp.year as i64).rem_euclid(100),
                _ => timestamp.year as i64,
            };
            out.push_str(&format!("{:0width$}", year, width = *width));
        }
        Token::Month(width) => push_padded(out, timestamp.month as u64, *width),
        Token::MonthName(form) => out.push_str(locale.month_name(*form, timestamp.month)),
        Token::Day(width) => push_padded(out, timestamp.day as u64, *width),
        Token::DayName(form) => {
            out.push_str(locale.day_name(*form, timestamp.weekday_index()))
        }
        Token::Hour(width) => push_padded(out, timestamp.hour as u64, *width),
        Token::Minute(width) => push_padded(out, timestamp.minute as u64, *width),
        Token::Second(width) => push_padded(out, timestamp.second as u64, *width),
        Token::Fractional(width) => {
            debug_assert_lt!(timestamp.nanosecond, NANOSECONDS_PER_SECOND);
            // integer floor division truncates toward zero; the seconds
            // field is never perturbed
            let divisor: NanosecondOfSecond =
                10u32.pow((FRACTIONAL_WIDTH_MAX - width) as u32);
            push_padded(out, (timestamp.nanosecond / divisor) as u64, *width);
        }
        Token::NanosecondOfSecond => {
            out.push_str(&timestamp.nanosecond.to_string());
        }
        Token::NanosecondOfDay => {
            out.push_str(&timestamp.nanosecond_of_day().to_string());
        }
        Token::Thread | Token::Class | Token::Level | Token::Message => {
            debug_assert!(false, "entry token {:?} in a date/time pattern", token);
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// token validation
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Consume `min` to `max` leading ASCII digits of `input`, greedily.
/// Returns the remainder, or `None` when fewer than `min` digits lead.
fn consume_digits(
    input: &str,
    min: Width,
    max: Width,
) -> Option<&str> {
    let leading: usize = input
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    let take: usize = leading.min(max);
    if take < min {
        return None;
    }

    Some(&input[take..])
}

/// Consume one or more leading ASCII digits, greedily; for the unbounded
/// `n` and `N` fields.
fn consume_digits_unbounded(input: &str) -> Option<&str> {
    consume_digits(input, 1, usize::MAX)
}

/// Consume a leading locale name out of `names`. Within one table no name
/// is a prefix of another, so the first match is the only match.
fn consume_name<'a>(
    input: &'a str,
    names: &[&'static str],
) -> Option<&'a str> {
    for name in names.iter() {
        if let Some(remainder) = input.strip_prefix(name) {
            return Some(remainder);
        }
    }

    None
}

/// Digit bounds of a numeric calendar field: a width ≥ 2 is fixed-width
/// and consumes exactly `width` digits; width 1 consumes 1 up to the
/// field's natural width (greedily, without backtracking) so that
/// unpadded `format` output always validates.
const fn numeric_bounds(
    width: Width,
    natural: Width,
) -> (Width, Width) {
    if width >= 2 {
        (width, width)
    } else {
        (1, natural)
    }
}

/// Consume the slice of `input` that `token` could have rendered.
/// Returns the remainder, or `None` on a structural mismatch.
fn consume_token<'a>(
    token: &Token,
    input: &'a str,
    locale: &Locale,
) -> Option<&'a str> {
    match token {
        Token::Literal(text) => input.strip_prefix(text.as_str()),
        Token::Year(width) => {
            let (min, max) = numeric_bounds(*width, YEAR_WIDTH_NATURAL);
            consume_digits(input, min, max)
        }
        Token::Month(width)
        | Token::Day(width)
        | Token::Hour(width)
        | Token::Minute(width)
        | Token::Second(width) => {
            let (min, max) = numeric_bounds(*width, CLOCK_WIDTH_NATURAL);
            consume_digits(input, min, max)
        }
        Token::Fractional(width) => consume_digits(input, *width, *width),
        Token::NanosecondOfSecond | Token::NanosecondOfDay => {
            consume_digits_unbounded(input)
        }
        Token::MonthName(form) => consume_name(input, locale.month_names(*form)),
        Token::DayName(form) => consume_name(input, locale.day_names(*form)),
        Token::Thread | Token::Class | Token::Level | Token::Message => {
            debug_assert!(false, "entry token {:?} in a date/time pattern", token);
            None
        }
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// PreciseTimestampFormatter
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Formats and validates decomposed [`Timestamp`]s against one date/time
/// pattern compiled at construction.
///
/// Immutable after construction; `format` and `is_valid` are pure
/// functions of their inputs, so one formatter is safely shared by
/// concurrent callers without locking.
#[derive(Clone, Debug)]
pub struct PreciseTimestampFormatter {
    pattern: CompiledPattern,
    locale: Locale,
}

impl PreciseTimestampFormatter {
    /// Compile `pattern` under the date/time grammar. The only fallible
    /// step; `format` and `is_valid` never fail afterward.
    pub fn new(
        pattern: &Pattern_str,
        locale: Locale,
    ) -> Result<PreciseTimestampFormatter, PatternError> {
        let compiled = CompiledPattern::compile_datetime(pattern)?;

        Ok(PreciseTimestampFormatter {
            pattern: compiled,
            locale,
        })
    }

    /// The compiled token sequence.
    pub fn pattern(&self) -> &CompiledPattern {
        &self.pattern
    }

    /// Render `timestamp` against the compiled pattern. Deterministic and
    /// total for any in-contract `Timestamp`; an empty pattern renders an
    /// empty string.
    pub fn format(
        &self,
        timestamp: &Timestamp,
    ) -> String {
        let mut out = String::with_capacity(self.pattern.len() * 4 + 16);
        for token in self.pattern.tokens() {
            render_temporal_token(&mut out, token, timestamp, &self.locale);
        }

        out
    }

    /// Could `candidate` have been produced by [`Self::format`] for some
    /// in-contract [`Timestamp`] under this pattern?
    ///
    /// Structural/lexical validation only: each token in order consumes a
    /// matching slice of `candidate`, and nothing may be left over.
    /// Calendar consistency is not checked; day 31 in a 30-day month
    /// passes. Never errs; a mismatch is the normal `false` result.
    pub fn is_valid(
        &self,
        candidate: &str,
    ) -> bool {
        defn!("({:?})", str_to_String_noraw(candidate));
        let mut remainder: &str = candidate;
        for token in self.pattern.tokens() {
            remainder = match consume_token(token, remainder, &self.locale) {
                Some(remainder) => remainder,
                None => {
                    defx!("return false; mismatch at {:?}", token);
                    return false;
                }
            };
            defo!("consumed through {:?}, remainder {:?}", token, remainder);
        }
        defx!("return {}; remainder {:?}", remainder.is_empty(), remainder);

        remainder.is_empty()
    }
}
