//! Entry points that run a parser over a whole input

use crate::cursor::Cursor;
use crate::eof::eof;
use crate::error::RunError;
use crate::parser::Parser;
use crate::seq::SeqLeft;

/// Run `parser` from the start of `input` and return its value
///
/// Trailing input is allowed; use [`parse_complete`] to reject it. On failure
/// the error carries the unconsumed input at the failure point, rendered as
///
/// ```text
/// Parser error:
///     <error>
/// Remainder:
///     <remaining input>
/// ```
pub fn parse<'code, P, I>(parser: P, input: I) -> Result<P::Output, RunError<P::Token>>
where
    P: Parser<'code>,
    I: Into<Cursor<'code, P::Token>>,
{
    let (value, _) = parser.parse(input.into())?;
    Ok(value)
}

/// Run `parser` over `input`, requiring it to consume everything
pub fn parse_complete<'code, P, I>(parser: P, input: I) -> Result<P::Output, RunError<P::Token>>
where
    P: Parser<'code>,
    I: Into<Cursor<'code, P::Token>>,
{
    parse(SeqLeft::new(parser, eof()), input)
}
