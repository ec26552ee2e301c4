use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that makes a parser optional
///
/// Produces `Some(value)` when the inner parser succeeds, and `None` without
/// consuming input when it fails. Never fails.
#[derive(Debug, Clone, Copy)]
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<'code, P> Parser<'code> for Optional<P>
where
    P: Parser<'code>,
{
    type Token = P::Token;
    type Output = Option<P::Output>;

    fn parse(
        &self,
        cursor: Cursor<'code, Self::Token>,
    ) -> ParseResult<'code, Self::Token, Self::Output> {
        match self.parser.parse(cursor) {
            Ok((value, rest)) => Ok((Some(value), rest)),
            Err(_) => Ok((None, cursor)),
        }
    }
}

/// Convenience function to create an Optional parser
pub fn optional<'code, P>(parser: P) -> Optional<P>
where
    P: Parser<'code>,
{
    Optional::new(parser)
}

/// Extension trait to add .optional() method support for parsers
pub trait OptionalExt<'code>: Parser<'code> + Sized {
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }
}

/// Implement OptionalExt for all parsers
impl<'code, P> OptionalExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number::number;
    use crate::seq::SeqExt;
    use crate::token::literal;

    #[test]
    fn test_optional_present() {
        let cursor = Cursor::from("-5");
        let (sign, rest) = literal('-').optional().parse(cursor).unwrap();
        assert_eq!(sign, Some('-'));
        assert_eq!(rest.remaining(), "5");
    }

    #[test]
    fn test_optional_absent_consumes_nothing() {
        let cursor = Cursor::from("ab");
        let parser = optional(literal('a').seq(literal('c')));
        let (value, rest) = parser.parse(cursor).unwrap();
        assert_eq!(value, None);
        assert_eq!(rest, cursor);
    }

    #[test]
    fn test_optional_then_required() {
        let parser = literal('+').optional().seq(number::<u16, char>(10));
        let ((sign, value), _) = parser.parse(Cursor::from("+12")).unwrap();
        assert_eq!((sign, value), (Some('+'), 12));

        let ((sign, value), _) = parser.parse(Cursor::from("12")).unwrap();
        assert_eq!((sign, value), (None, 12));
    }
}
