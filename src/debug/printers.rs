// src/debug/printers.rs

//! Helpers for printing pattern and candidate strings in debug and test
//! builds.

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

/// Transform control characters to their pictoral Unicode representation,
/// e.g. `'\n'` returns `'␊'`.
///
/// This is intended as an improvement of `fmt::Debug` display of `str`
/// which escapes control codes with backslash sequences, e.g. `'\n'`
/// becomes two characters. This function keeps the printing width of a
/// control character to 1, which helps humans visually review various
/// debug outputs.
///
/// Only intended to aid visual debugging.
#[cfg(any(debug_assertions, test))]
pub fn char_to_char_noraw(c: char) -> char {
    // C0 control codes and space map into the contiguous
    // Unicode Control Pictures block
    // https://en.wikipedia.org/wiki/Control_Pictures
    match c as u32 {
        0..=32 => char::from_u32(0x2400 + c as u32).unwrap_or(c),
        127 => '␡',
        _ => c,
    }
}

/// Transform all control characters of `s` to pictoral Unicode
/// representations; see [`char_to_char_noraw`].
///
/// Only intended to aid visual debugging.
#[allow(non_snake_case)]
#[cfg(any(debug_assertions, test))]
pub fn str_to_String_noraw(s: &str) -> String {
    s.chars()
        .map(char_to_char_noraw)
        .collect()
}
