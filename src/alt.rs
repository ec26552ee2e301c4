use crate::cursor::Cursor;
use crate::either::Either;
use crate::error::{ParseError, ParseFailure};
use crate::parser::{ParseResult, Parser};

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// Both branches start from the same input: nothing the first branch consumed
/// before failing carries over to the second. When both fail the error is
/// [`ParseError::Combined`], holding both branch errors, and the failure
/// cursor is the original input.
///
/// The value records which branch matched. Use [`Either::into_inner`] or the
/// [`or`](crate::or::or) combinator when both branches produce the same type.
#[derive(Debug, Clone, Copy)]
pub struct Alt<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Alt<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Alt { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for Alt<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Token = P1::Token>,
{
    type Token = P1::Token;
    type Output = Either<P1::Output, P2::Output>;

    fn parse(
        &self,
        cursor: Cursor<'code, Self::Token>,
    ) -> ParseResult<'code, Self::Token, Self::Output> {
        let left = match self.parser1.parse(cursor) {
            Ok((value, rest)) => return Ok((Either::Left(value), rest)),
            Err(failure) => failure,
        };

        match self.parser2.parse(cursor) {
            Ok((value, rest)) => Ok((Either::Right(value), rest)),
            Err(right) => Err(ParseFailure::new(
                ParseError::combine(left.error, right.error),
                cursor,
            )),
        }
    }
}

/// Convenience function to create an Alt parser
pub fn alt<'code, P1, P2>(parser1: P1, parser2: P2) -> Alt<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Token = P1::Token>,
{
    Alt::new(parser1, parser2)
}

/// Extension trait to add .alt() method support for parsers
pub trait AltExt<'code>: Parser<'code> + Sized {
    fn alt<P>(self, other: P) -> Alt<Self, P>
    where
        P: Parser<'code, Token = Self::Token>,
    {
        Alt::new(self, other)
    }
}

/// Implement AltExt for all parsers
impl<'code, P> AltExt<'code> for P where P: Parser<'code> {}

/// Alternate two or more parsers, nesting to the right
#[macro_export]
macro_rules! alt {
    ($p:expr, $q:expr $(,)?) => {
        $crate::alt::alt($p, $q)
    };
    ($p:expr, $($rest:expr),+ $(,)?) => {
        $crate::alt::alt($p, $crate::alt!($($rest),+))
    };
}
