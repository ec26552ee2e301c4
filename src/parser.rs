use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::error::ParseFailure;
use crate::mute::Mute;
use crate::skip::Skip;

/// Outcome of applying one parser to one cursor
pub type ParseResult<'code, T, O> = Result<(O, Cursor<'code, T>), ParseFailure<'code, T>>;

/// Core parser trait for parser combinators
///
/// A parser is an immutable value. It can be invoked any number of times, on
/// any number of inputs, and holds no state between invocations.
pub trait Parser<'code> {
    type Token: Atomic;
    type Output;

    /// Attempt to parse from the given cursor position
    ///
    /// Returns the parsed value and the advanced cursor on success, or the
    /// error and the cursor where it was detected on failure.
    fn parse(&self, cursor: Cursor<'code, Self::Token>)
    -> ParseResult<'code, Self::Token, Self::Output>;

    /// Discard the value on success, keeping the error on failure
    fn skip(self) -> Skip<Self>
    where
        Self: Sized,
    {
        Skip::new(self)
    }

    /// Discard the error detail on failure, keeping the value on success
    fn mute(self) -> Mute<Self>
    where
        Self: Sized,
    {
        Mute::new(self)
    }
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    type Token = P::Token;
    type Output = P::Output;

    fn parse(
        &self,
        cursor: Cursor<'code, Self::Token>,
    ) -> ParseResult<'code, Self::Token, Self::Output> {
        (**self).parse(cursor)
    }
}

impl<'code, P> Parser<'code> for Box<P>
where
    P: Parser<'code> + ?Sized,
{
    type Token = P::Token;
    type Output = P::Output;

    fn parse(
        &self,
        cursor: Cursor<'code, Self::Token>,
    ) -> ParseResult<'code, Self::Token, Self::Output> {
        (**self).parse(cursor)
    }
}
