use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::error::{ParseError, ParseFailure};
use crate::parser::{ParseResult, Parser};
use std::marker::PhantomData;

/// Parser that always succeeds without consuming input, producing a fixed value
pub struct Pure<T, V> {
    value: V,
    _phantom: PhantomData<T>,
}

impl<T, V> Pure<T, V> {
    pub fn new(value: V) -> Self {
        Pure {
            value,
            _phantom: PhantomData,
        }
    }
}

impl<T, V: Clone> Clone for Pure<T, V> {
    fn clone(&self) -> Self {
        Pure::new(self.value.clone())
    }
}

/// Convenience function to create a Pure parser
pub fn pure<T: Atomic, V: Clone>(value: V) -> Pure<T, V> {
    Pure::new(value)
}

/// Parser that consumes nothing and produces `()`
pub fn noop<T: Atomic>() -> Pure<T, ()> {
    Pure::new(())
}

impl<'code, T: Atomic, V: Clone> Parser<'code> for Pure<T, V> {
    type Token = T;
    type Output = V;

    fn parse(&self, cursor: Cursor<'code, T>) -> ParseResult<'code, T, V> {
        Ok((self.value.clone(), cursor))
    }
}

/// Parser that always fails without consuming input
pub struct Fail<T: Atomic, O> {
    error: ParseError<T>,
    _phantom: PhantomData<fn() -> O>,
}

impl<T: Atomic, O> Fail<T, O> {
    pub fn new(error: ParseError<T>) -> Self {
        Fail {
            error,
            _phantom: PhantomData,
        }
    }
}

impl<T: Atomic, O> Clone for Fail<T, O> {
    fn clone(&self) -> Self {
        Fail::new(self.error.clone())
    }
}

/// Convenience function to create a parser failing with a fixed error
pub fn fail<T: Atomic, O>(error: impl Into<ParseError<T>>) -> Fail<T, O> {
    Fail::new(error.into())
}

impl<'code, T: Atomic, O> Parser<'code> for Fail<T, O> {
    type Token = T;
    type Output = O;

    fn parse(&self, cursor: Cursor<'code, T>) -> ParseResult<'code, T, O> {
        Err(ParseFailure::new(self.error.clone(), cursor))
    }
}

/// Parser that always fails with an error computed at parse time
pub struct FailWith<F, O> {
    make_error: F,
    _phantom: PhantomData<fn() -> O>,
}

impl<F, O> FailWith<F, O> {
    pub fn new(make_error: F) -> Self {
        FailWith {
            make_error,
            _phantom: PhantomData,
        }
    }
}

/// Convenience function to create a parser failing with a computed error
pub fn fail_with<T, O, F>(make_error: F) -> FailWith<F, O>
where
    T: Atomic,
    F: Fn() -> ParseError<T>,
{
    FailWith::new(make_error)
}

impl<'code, T, O, F> Parser<'code> for FailWith<F, O>
where
    T: Atomic,
    F: Fn() -> ParseError<T>,
{
    type Token = T;
    type Output = O;

    fn parse(&self, cursor: Cursor<'code, T>) -> ParseResult<'code, T, O> {
        Err(ParseFailure::new((self.make_error)(), cursor))
    }
}
