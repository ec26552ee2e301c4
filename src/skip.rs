use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that discards the value of a successful parse
///
/// Failures pass through unchanged. Built with [`Parser::skip`] or [`skip`].
#[derive(Debug, Clone, Copy)]
pub struct Skip<P> {
    parser: P,
}

impl<P> Skip<P> {
    pub fn new(parser: P) -> Self {
        Skip { parser }
    }
}

impl<'code, P> Parser<'code> for Skip<P>
where
    P: Parser<'code>,
{
    type Token = P::Token;
    type Output = ();

    fn parse(&self, cursor: Cursor<'code, Self::Token>) -> ParseResult<'code, Self::Token, ()> {
        let (_, cursor) = self.parser.parse(cursor)?;
        Ok(((), cursor))
    }
}

/// Convenience function to create a Skip parser
pub fn skip<'code, P>(parser: P) -> Skip<P>
where
    P: Parser<'code>,
{
    Skip::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::number::number;
    use crate::token::literal;

    #[test]
    fn test_skip_discards_value() {
        let cursor = Cursor::from("123,");
        let ((), rest) = number::<u32, char>(10).skip().parse(cursor).unwrap();
        assert_eq!(rest.remaining(), ",");
    }

    #[test]
    fn test_skip_has_same_cursor_and_error_as_inner() {
        let inputs = ["abc", "bcd", ""];
        for input in inputs {
            let cursor = Cursor::from(input);
            let plain = literal('a').parse(cursor);
            let skipped = skip(literal('a')).parse(cursor);

            match (plain, skipped) {
                (Ok((_, a)), Ok(((), b))) => assert_eq!(a, b),
                (Err(a), Err(b)) => assert_eq!(a, b),
                _ => panic!("skip changed the outcome for {:?}", input),
            }
        }
    }
}
