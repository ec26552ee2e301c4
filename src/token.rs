use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::error::{ParseError, ParseFailure};
use crate::parser::{ParseResult, Parser};
use std::fmt;
use std::marker::PhantomData;

/// Parser that consumes and returns any single token
pub struct Any<T> {
    _phantom: PhantomData<T>,
}

impl<T> Any<T> {
    pub fn new() -> Self {
        Any {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for Any<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Any<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> Copy for Any<T> {}

impl<T> fmt::Debug for Any<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Any")
    }
}

/// Convenience function to create an Any parser
pub fn any<T: Atomic>() -> Any<T> {
    Any::new()
}

impl<'code, T: Atomic> Parser<'code> for Any<T> {
    type Token = T;
    type Output = T;

    fn parse(&self, cursor: Cursor<'code, T>) -> ParseResult<'code, T, T> {
        match cursor.bump() {
            Some((token, next)) => Ok((token, next)),
            None => Err(ParseFailure::new(ParseError::UnexpectedEof, cursor)),
        }
    }
}

/// Parser that matches one specific token
#[derive(Debug, Clone, Copy)]
pub struct Literal<T> {
    expected: T,
}

impl<T> Literal<T> {
    pub fn new(expected: T) -> Self {
        Literal { expected }
    }
}

/// Convenience function to create a Literal parser
pub fn literal<T: Atomic>(expected: T) -> Literal<T> {
    Literal::new(expected)
}

impl<'code, T: Atomic> Parser<'code> for Literal<T> {
    type Token = T;
    type Output = T;

    fn parse(&self, cursor: Cursor<'code, T>) -> ParseResult<'code, T, T> {
        match cursor.bump() {
            Some((token, next)) if token == self.expected => Ok((token, next)),
            found => {
                let error = ParseError::ExpectedLiteral {
                    expected: self.expected,
                    found: found.map(|(token, _)| token),
                };
                Err(ParseFailure::new(error, cursor))
            }
        }
    }
}

/// Parser that consumes one token accepted by a predicate
///
/// The predicate returns `Ok(())` to accept a token or an error explaining the
/// rejection, which is reported wrapped in [`ParseError::Rejected`].
pub struct Satisfy<T, F> {
    predicate: F,
    _phantom: PhantomData<T>,
}

impl<T, F> Satisfy<T, F> {
    pub fn new(predicate: F) -> Self {
        Satisfy {
            predicate,
            _phantom: PhantomData,
        }
    }
}

impl<T, F: Clone> Clone for Satisfy<T, F> {
    fn clone(&self) -> Self {
        Satisfy::new(self.predicate.clone())
    }
}

impl<T, F> fmt::Debug for Satisfy<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Satisfy")
            .field("predicate", &"<function>")
            .finish()
    }
}

/// Convenience function to create a Satisfy parser
pub fn satisfy<T, F, E>(predicate: F) -> Satisfy<T, F>
where
    T: Atomic,
    F: Fn(T) -> Result<(), E>,
    E: Into<ParseError<T>>,
{
    Satisfy::new(predicate)
}

impl<'code, T, F, E> Parser<'code> for Satisfy<T, F>
where
    T: Atomic,
    F: Fn(T) -> Result<(), E>,
    E: Into<ParseError<T>>,
{
    type Token = T;
    type Output = T;

    fn parse(&self, cursor: Cursor<'code, T>) -> ParseResult<'code, T, T> {
        let (token, next) = cursor
            .bump()
            .ok_or_else(|| ParseFailure::new(ParseError::UnexpectedEof, cursor))?;

        match (self.predicate)(token) {
            Ok(()) => Ok((token, next)),
            Err(reason) => {
                let error = ParseError::Rejected {
                    found: token,
                    reason: Box::new(reason.into()),
                };
                Err(ParseFailure::new(error, cursor))
            }
        }
    }
}
