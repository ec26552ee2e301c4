use crate::alt::Alt;
use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// Same backtracking and error behavior as [`Alt`], for branches that produce
/// the same type: the value is returned directly instead of as an `Either`.
#[derive(Debug, Clone, Copy)]
pub struct Or<P1, P2> {
    alt: Alt<P1, P2>,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or {
            alt: Alt::new(parser1, parser2),
        }
    }
}

impl<'code, P1, P2, O> Parser<'code> for Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Token = P1::Token, Output = O>,
{
    type Token = P1::Token;
    type Output = O;

    fn parse(&self, cursor: Cursor<'code, Self::Token>) -> ParseResult<'code, Self::Token, O> {
        let (value, rest) = self.alt.parse(cursor)?;
        Ok((value.into_inner(), rest))
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'code>: Parser<'code> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'code, Token = Self::Token, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'code, P> OrExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an Or parser
pub fn or<'code, P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'code, Output = O>,
    P2: Parser<'code, Token = P1::Token, Output = O>,
{
    Or::new(parser1, parser2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use crate::token::literal;

    #[test]
    fn test_or_first_succeeds() {
        let cursor = Cursor::from(b"abc");
        let parser = or(literal(b'a'), literal(b'b'));

        let (byte, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(byte, b'a');
        assert_eq!(cursor.peek(), Some(b'b'));
    }

    #[test]
    fn test_or_second_succeeds() {
        let cursor = Cursor::from(b"bcd");
        let parser = or(literal(b'a'), literal(b'b'));

        let (byte, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(byte, b'b');
        assert_eq!(cursor.peek(), Some(b'c'));
    }

    #[test]
    fn test_or_both_fail() {
        let cursor = Cursor::from(b"xyz");
        let parser = or(literal(b'a'), literal(b'b'));

        let failure = parser.parse(cursor).unwrap_err();
        assert!(matches!(failure.error, ParseError::Combined { .. }));
        assert_eq!(failure.cursor, cursor);
    }

    #[test]
    fn test_or_method_complex_chain() {
        let cursor = Cursor::from(b"d");
        let parser = literal(b'a')
            .or(literal(b'b'))
            .or(literal(b'c'))
            .or(literal(b'd'));

        let (byte, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(byte, b'd');
        assert!(cursor.is_empty());
    }
}
