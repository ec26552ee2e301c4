use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::error::{ParseError, ParseFailure};
use crate::parser::{ParseResult, Parser};
use std::fmt;
use std::marker::PhantomData;

/// Parser that succeeds only at the end of input, consuming nothing
pub struct Eof<T> {
    _phantom: PhantomData<T>,
}

impl<T> Eof<T> {
    pub fn new() -> Self {
        Eof {
            _phantom: PhantomData,
        }
    }
}

impl<T> Default for Eof<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Eof<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> Copy for Eof<T> {}

impl<T> fmt::Debug for Eof<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Eof")
    }
}

/// Convenience function to create an Eof parser
pub fn eof<T: Atomic>() -> Eof<T> {
    Eof::new()
}

impl<'code, T: Atomic> Parser<'code> for Eof<T> {
    type Token = T;
    type Output = ();

    fn parse(&self, cursor: Cursor<'code, T>) -> ParseResult<'code, T, ()> {
        if cursor.is_empty() {
            return Ok(((), cursor));
        }

        let remaining = T::slice_to_string(cursor.remaining());
        Err(ParseFailure::new(
            ParseError::ExpectedEof { remaining },
            cursor,
        ))
    }
}
