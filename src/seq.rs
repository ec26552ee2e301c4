use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Evaluation is strictly left to right and stops at the first failure, whose
/// error and cursor are returned unchanged. The second parser is not invoked
/// when the first one fails.
///
/// Longer sequences nest to the right: `seq!(a, b, c)` is `seq(a, seq(b, c))`
/// and produces `(a, (b, c))`. The nested tuple keeps the combinator free of
/// per-arity code while destructuring still reads in parsing order.
///
/// Example:
/// ```
/// use yeti::{Cursor, Parser, any, eof, seq};
///
/// let cursor = Cursor::from("ab");
/// let ((a, (b, ())), rest) = seq!(any(), any(), eof()).parse(cursor).unwrap();
/// assert_eq!((a, b), ('a', 'b'));
/// assert!(rest.is_empty());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Seq<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Seq<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Seq { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for Seq<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Token = P1::Token>,
{
    type Token = P1::Token;
    type Output = (P1::Output, P2::Output);

    fn parse(
        &self,
        cursor: Cursor<'code, Self::Token>,
    ) -> ParseResult<'code, Self::Token, Self::Output> {
        let (result1, cursor) = self.parser1.parse(cursor)?;
        let (result2, cursor) = self.parser2.parse(cursor)?;
        Ok(((result1, result2), cursor))
    }
}

/// Sequence two parsers, keeping only the left value
#[derive(Debug, Clone, Copy)]
pub struct SeqLeft<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> SeqLeft<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        SeqLeft { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for SeqLeft<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Token = P1::Token>,
{
    type Token = P1::Token;
    type Output = P1::Output;

    fn parse(
        &self,
        cursor: Cursor<'code, Self::Token>,
    ) -> ParseResult<'code, Self::Token, Self::Output> {
        let (result, cursor) = self.parser1.parse(cursor)?;
        let (_, cursor) = self.parser2.parse(cursor)?;
        Ok((result, cursor))
    }
}

/// Sequence two parsers, keeping only the right value
#[derive(Debug, Clone, Copy)]
pub struct SeqRight<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> SeqRight<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        SeqRight { parser1, parser2 }
    }
}

impl<'code, P1, P2> Parser<'code> for SeqRight<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Token = P1::Token>,
{
    type Token = P1::Token;
    type Output = P2::Output;

    fn parse(
        &self,
        cursor: Cursor<'code, Self::Token>,
    ) -> ParseResult<'code, Self::Token, Self::Output> {
        let (_, cursor) = self.parser1.parse(cursor)?;
        self.parser2.parse(cursor)
    }
}

/// Convenience function to create a Seq parser
pub fn seq<'code, P1, P2>(parser1: P1, parser2: P2) -> Seq<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Token = P1::Token>,
{
    Seq::new(parser1, parser2)
}

/// Convenience function to create a SeqLeft parser
pub fn seq_left<'code, P1, P2>(parser1: P1, parser2: P2) -> SeqLeft<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Token = P1::Token>,
{
    SeqLeft::new(parser1, parser2)
}

/// Convenience function to create a SeqRight parser
pub fn seq_right<'code, P1, P2>(parser1: P1, parser2: P2) -> SeqRight<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code, Token = P1::Token>,
{
    SeqRight::new(parser1, parser2)
}

/// Extension trait to add .seq(), .seq_left() and .seq_right() method support for parsers
pub trait SeqExt<'code>: Parser<'code> + Sized {
    fn seq<P>(self, other: P) -> Seq<Self, P>
    where
        P: Parser<'code, Token = Self::Token>,
    {
        Seq::new(self, other)
    }

    fn seq_left<P>(self, other: P) -> SeqLeft<Self, P>
    where
        P: Parser<'code, Token = Self::Token>,
    {
        SeqLeft::new(self, other)
    }

    fn seq_right<P>(self, other: P) -> SeqRight<Self, P>
    where
        P: Parser<'code, Token = Self::Token>,
    {
        SeqRight::new(self, other)
    }
}

/// Implement SeqExt for all parsers
impl<'code, P> SeqExt<'code> for P where P: Parser<'code> {}

/// Sequence two or more parsers, nesting to the right
#[macro_export]
macro_rules! seq {
    ($p:expr, $q:expr $(,)?) => {
        $crate::seq::seq($p, $q)
    };
    ($p:expr, $($rest:expr),+ $(,)?) => {
        $crate::seq::seq($p, $crate::seq!($($rest),+))
    };
}
