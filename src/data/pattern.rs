// src/data/pattern.rs

//! Compile a format pattern string into an ordered sequence of [`Token`]s.
//!
//! Two pattern grammars share one token data model:
//! 1. the date/time grammar of field letters, handled by
//!    [`CompiledPattern::compile_datetime`]
//! 2. the log-entry grammar of `{name}` placeholders, handled by
//!    [`CompiledPattern::compile_entry`]; its `{date:…}` placeholder
//!    splices date/time tokens inline so one flat token sequence renders a
//!    whole log entry
//!
//! Compilation happens once per distinct pattern string. A
//! [`CompiledPattern`] is immutable and replayed for many log entries by
//! the [`PreciseTimestampFormatter`] and the [`EntryFormatter`].
//!
//! Date/time field letters:
//!
//! | letter | runs      | renders                                        |
//! |--------|-----------|------------------------------------------------|
//! | `y`    | 1–9       | year, zero-padded; `yy` is year-of-century     |
//! | `M`    | 1–2, 3, 4 | month number; `MMM` abbreviated, `MMMM` full   |
//! | `d`    | 1–2       | day of month                                   |
//! | `E`    | 1–3, 4    | weekday name; `EEEE` full                      |
//! | `H`    | 1–2       | hour of day, 0–23                              |
//! | `m`    | 1–2       | minute of hour                                 |
//! | `s`    | 1–2       | second of minute                               |
//! | `S`    | 1–9       | fractional second, truncated, run = width      |
//! | `n`    | 1         | nanosecond-of-second, unpadded                 |
//! | `N`    | 1         | nanosecond-of-day, unpadded                    |
//!
//! Characters between single quotes are literal text; the two-character
//! sequence `''` is one literal apostrophe, inside or outside a quoted
//! section. Any other character that is not an ASCII letter is literal
//! text as-is. A run length outside a field's supported set, an ASCII
//! letter outside the table, or a pattern ending inside an open quoted
//! section is a [`PatternError`], raised at compile time and never later.
//!
//! [`PreciseTimestampFormatter`]: crate::printer::timestamp::PreciseTimestampFormatter
//! [`EntryFormatter`]: crate::printer::entry::EntryFormatter

use crate::common::{
    Pattern_str,
    Width,
    FRACTIONAL_WIDTH_MAX,
    YEAR_WIDTH_MAX,
};
#[cfg(any(debug_assertions, test))]
use crate::debug::printers::str_to_String_noraw;

use ::si_trace_print::{defn, defo, defx};
use ::thiserror::Error;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// tokens
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Requested form of a locale textual field, e.g. `"Feb"` versus
/// `"February"`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TextForm {
    Abbreviated,
    Full,
}

/// One compiled unit of a format pattern.
///
/// Numeric calendar variants carry the zero-pad [`Width`] derived from the
/// field-letter run length. Textual variants carry the requested
/// [`TextForm`]; the name tables themselves live in a
/// [`Locale`], carried alongside the compiled pattern rather than embedded
/// in it, so one token sequence renders under different locales.
///
/// [`Locale`]: crate::printer::timestamp::Locale
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Token {
    /// verbatim pattern text
    Literal(String),
    /// calendar year; width 2 renders the year-of-century
    Year(Width),
    /// month number, 1 to 12
    Month(Width),
    /// month name from the locale tables
    MonthName(TextForm),
    /// day of month
    Day(Width),
    /// weekday name from the locale tables
    DayName(TextForm),
    /// hour of day, 0 to 23
    Hour(Width),
    /// minute of hour
    Minute(Width),
    /// second of minute
    Second(Width),
    /// fractional second of width 1 to 9, truncated from
    /// nanosecond-of-second, never rounded
    Fractional(Width),
    /// nanosecond-of-second as an unpadded decimal, `0` to `999999999`
    NanosecondOfSecond,
    /// nanosecond-of-day as an unpadded decimal; the monotonically
    /// increasing sub-second-precise value within one calendar day
    NanosecondOfDay,
    /// name of the thread that created the log entry
    Thread,
    /// name of the class (logging target) that created the log entry
    Class,
    /// severity level of the log entry
    Level,
    /// the log message text
    Message,
}

impl Token {
    /// Is this token rendered from a [`Timestamp`]?
    ///
    /// `false` for [`Token::Literal`] and the log-entry fields.
    ///
    /// [`Timestamp`]: crate::data::timestamp::Timestamp
    pub const fn is_temporal(&self) -> bool {
        !matches!(
            *self,
            Token::Literal(_) | Token::Thread | Token::Class | Token::Level | Token::Message
        )
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// compile errors
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// A malformed format pattern, raised once at compile time.
///
/// Never raised by rendering or validation; those operate on an
/// already-compiled pattern.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum PatternError {
    /// an ASCII letter outside the recognized field-letter set
    #[error("unrecognized field letter {letter:?} at pattern offset {position}")]
    UnrecognizedField { letter: char, position: usize },
    /// a recognized field letter repeated to a length outside its
    /// supported width set, e.g. `SSSSSSSSSS` or `nn`
    #[error("field letter {letter:?} does not support a run of length {width}")]
    UnsupportedWidth { letter: char, width: Width },
    /// a quoted literal section opened but never closed
    #[error("unbalanced quote at pattern offset {position}")]
    UnbalancedQuote { position: usize },
    /// a `{…}` placeholder with an unknown name
    #[error("unknown placeholder {name:?}")]
    UnknownPlaceholder { name: String },
    /// a `{` placeholder opened but never closed
    #[error("placeholder opened with '{{' but never closed")]
    UnclosedPlaceholder,
}

pub type ResultCompile = Result<CompiledPattern, PatternError>;

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// compiled pattern
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Date/time pattern used for a bare `{date}` entry placeholder.
pub const DATETIME_PATTERN_DEFAULT: &Pattern_str = "yyyy-MM-dd HH:mm:ss";

/// Log-entry pattern used when the caller supplies none.
pub const ENTRY_PATTERN_DEFAULT: &Pattern_str =
    "{date:yyyy-MM-dd HH:mm:ss.SSS} [{thread}] {class} {level}: {message}";

/// the literal-escaping marker of the date/time grammar
const QUOTE: char = '\'';

/// An ordered sequence of [`Token`]s compiled from one format pattern
/// string. Token order reproduces the pattern's field order exactly.
///
/// Immutable after compilation; a new pattern string requires a new
/// `CompiledPattern`. Compiling the same pattern string twice yields
/// value-equal results.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CompiledPattern {
    tokens: Vec<Token>,
}

impl CompiledPattern {
    /// Compile a date/time format pattern, e.g.
    /// `"yyyy-MM-dd HH:mm:ss.SSSSSS"`.
    ///
    /// A run of identical recognized field letters is grouped into a
    /// single field token whose width is the run length. Adjacent literal
    /// characters coalesce into one [`Token::Literal`]. The empty pattern
    /// compiles to an empty token sequence.
    pub fn compile_datetime(pattern: &Pattern_str) -> ResultCompile {
        defn!("({:?})", str_to_String_noraw(pattern));
        let chars: Vec<char> = pattern.chars().collect();
        let mut tokens: Vec<Token> = Vec::with_capacity(chars.len());
        let mut literal = String::new();
        let mut at: usize = 0;
        while at < chars.len() {
            let c = chars[at];
            if c == QUOTE {
                at = consume_quoted(&chars, at, &mut literal)?;
                continue;
            }
            if c.is_ascii_alphabetic() {
                let mut width: Width = 1;
                while at + width < chars.len() && chars[at + width] == c {
                    width += 1;
                }
                let token = token_for_run(c, width, at)?;
                defo!("field run {:?} × {} at offset {}", c, width, at);
                flush_literal(&mut literal, &mut tokens);
                tokens.push(token);
                at += width;
                continue;
            }
            literal.push(c);
            at += 1;
        }
        flush_literal(&mut literal, &mut tokens);
        defx!("{} tokens", tokens.len());

        Ok(CompiledPattern { tokens })
    }

    /// Compile a log-entry format pattern, e.g.
    /// `"{date:HH:mm:ss.SSS} [{thread}] {level}: {message}"`.
    ///
    /// Recognized placeholders are `{date}`, `{date:PATTERN}`, `{thread}`,
    /// `{class}`, `{level}`, and `{message}`. A bare `{date}` uses
    /// [`DATETIME_PATTERN_DEFAULT`]. The `{date:…}` sub-pattern is
    /// compiled by [`CompiledPattern::compile_datetime`] and its tokens
    /// spliced inline. `{{` and `}}` are literal braces; all other text is
    /// literal as-is.
    pub fn compile_entry(pattern: &Pattern_str) -> ResultCompile {
        defn!("({:?})", str_to_String_noraw(pattern));
        let chars: Vec<char> = pattern.chars().collect();
        let mut tokens: Vec<Token> = Vec::new();
        let mut literal = String::new();
        let mut at: usize = 0;
        while at < chars.len() {
            let c = chars[at];
            if c == '{' && chars.get(at + 1) == Some(&'{') {
                literal.push('{');
                at += 2;
                continue;
            }
            if c == '}' && chars.get(at + 1) == Some(&'}') {
                literal.push('}');
                at += 2;
                continue;
            }
            if c == '{' {
                let close = match chars[at + 1..].iter().position(|&c_| c_ == '}') {
                    Some(offset) => at + 1 + offset,
                    None => {
                        defx!("return PatternError::UnclosedPlaceholder");
                        return Err(PatternError::UnclosedPlaceholder);
                    }
                };
                let body: String = chars[at + 1..close].iter().collect();
                defo!("placeholder {:?} at offset {}", body, at);
                flush_literal(&mut literal, &mut tokens);
                tokens_for_placeholder(&body, &mut tokens)?;
                at = close + 1;
                continue;
            }
            literal.push(c);
            at += 1;
        }
        flush_literal(&mut literal, &mut tokens);
        defx!("{} tokens", tokens.len());

        Ok(CompiledPattern { tokens })
    }

    /// The compiled tokens, in pattern order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
// scanning helpers
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Move a pending literal accumulation into `tokens` as one
/// [`Token::Literal`]. A no-op for an empty accumulation.
fn flush_literal(literal: &mut String, tokens: &mut Vec<Token>) {
    if literal.is_empty() {
        return;
    }
    tokens.push(Token::Literal(std::mem::take(literal)));
}

/// Consume a quoted literal section starting at the opening [`QUOTE`] at
/// `chars[at]`, appending its contents to `literal`. Returns the index one
/// past the closing quote.
///
/// `''` is one literal apostrophe, both as a complete two-character
/// sequence and inside a quoted section.
fn consume_quoted(
    chars: &[char],
    at: usize,
    literal: &mut String,
) -> Result<usize, PatternError> {
    debug_assert_eq!(chars[at], QUOTE);
    if chars.get(at + 1) == Some(&QUOTE) {
        literal.push(QUOTE);
        return Ok(at + 2);
    }
    let mut index = at + 1;
    while index < chars.len() {
        if chars[index] != QUOTE {
            literal.push(chars[index]);
            index += 1;
            continue;
        }
        if chars.get(index + 1) == Some(&QUOTE) {
            literal.push(QUOTE);
            index += 2;
            continue;
        }

        return Ok(index + 1);
    }

    Err(PatternError::UnbalancedQuote { position: at })
}

/// Map one field-letter run to its [`Token`].
///
/// `position` is the run's offset within the pattern, for error reporting.
fn token_for_run(
    letter: char,
    width: Width,
    position: usize,
) -> Result<Token, PatternError> {
    let token: Option<Token> = match letter {
        'y' => (1..=YEAR_WIDTH_MAX)
            .contains(&width)
            .then_some(Token::Year(width)),
        'M' => match width {
            1 | 2 => Some(Token::Month(width)),
            3 => Some(Token::MonthName(TextForm::Abbreviated)),
            4 => Some(Token::MonthName(TextForm::Full)),
            _ => None,
        },
        'd' => (width <= 2).then_some(Token::Day(width)),
        'E' => match width {
            1..=3 => Some(Token::DayName(TextForm::Abbreviated)),
            4 => Some(Token::DayName(TextForm::Full)),
            _ => None,
        },
        'H' => (width <= 2).then_some(Token::Hour(width)),
        'm' => (width <= 2).then_some(Token::Minute(width)),
        's' => (width <= 2).then_some(Token::Second(width)),
        'S' => (1..=FRACTIONAL_WIDTH_MAX)
            .contains(&width)
            .then_some(Token::Fractional(width)),
        'n' => (width == 1).then_some(Token::NanosecondOfSecond),
        'N' => (width == 1).then_some(Token::NanosecondOfDay),
        _ => {
            return Err(PatternError::UnrecognizedField { letter, position });
        }
    };
    match token {
        Some(token) => Ok(token),
        None => Err(PatternError::UnsupportedWidth { letter, width }),
    }
}

/// Map one `{…}` placeholder body to tokens, appending to `tokens`.
///
/// `{date:…}` may splice several tokens; every other placeholder is a
/// single token and takes no argument.
fn tokens_for_placeholder(
    body: &str,
    tokens: &mut Vec<Token>,
) -> Result<(), PatternError> {
    let (name, argument) = match body.split_once(':') {
        Some((name, argument)) => (name, Some(argument)),
        None => (body, None),
    };
    match (name, argument) {
        ("date", argument) => {
            let sub = CompiledPattern::compile_datetime(
                argument.unwrap_or(DATETIME_PATTERN_DEFAULT),
            )?;
            tokens.extend(sub.tokens);
        }
        ("thread", None) => tokens.push(Token::Thread),
        ("class", None) => tokens.push(Token::Class),
        ("level", None) => tokens.push(Token::Level),
        ("message", None) => tokens.push(Token::Message),
        _ => {
            return Err(PatternError::UnknownPlaceholder {
                name: body.to_string(),
            });
        }
    }

    Ok(())
}
