//! Character-class parsers usable over any token type with a textual view
//!
//! Each parser here goes through [`Atomic::as_char`], so the same grammar runs
//! over `&str`, ASCII bytes or code-point ids alike.

use crate::atomic::Atomic;
use crate::map::MapExt;
use crate::optional::OptionalExt;
use crate::parser::Parser;
use crate::seq::SeqExt;
use crate::token::satisfy;

/// Match the character `expected` in any token type
pub fn char<'code, T: Atomic>(expected: char) -> impl Parser<'code, Token = T, Output = T> + Clone {
    satisfy(move |token: T| {
        if token.as_char() == Some(expected) {
            Ok(())
        } else {
            Err(format!("expected '{}'", expected.escape_debug()))
        }
    })
}

/// A single space or tab
pub fn ws<'code, T: Atomic>() -> impl Parser<'code, Token = T, Output = T> + Clone {
    satisfy(|token: T| match token.as_char() {
        Some(' ' | '\t') => Ok(()),
        _ => Err("expected whitespace"),
    })
}

/// A line ending, either `\n` or `\r\n`
pub fn eol<'code, T: Atomic>() -> impl Parser<'code, Token = T, Output = ()> + Clone {
    char('\r').optional().seq(char('\n')).skip()
}

/// A single digit valid in `radix`, returned as its numeric value
///
/// # Panics
///
/// Panics if `radix` is outside `2..=36`.
pub fn digit<'code, T: Atomic>(radix: u32) -> impl Parser<'code, Token = T, Output = u32> + Clone {
    assert!(
        (2..=36).contains(&radix),
        "radix must be in 2..=36, got {}",
        radix
    );
    satisfy(move |token: T| match token.as_char() {
        Some(c) if c.is_digit(radix) => Ok(()),
        _ => Err("expected digit"),
    })
    .map(move |token: T| token.as_char().and_then(|c| c.to_digit(radix)).unwrap_or_default())
}
