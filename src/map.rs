use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// Parser combinator that transforms the output of a parser using a mapping function
#[derive(Debug, Clone, Copy)]
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'code, P, F, U> Parser<'code> for Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    type Token = P::Token;
    type Output = U;

    fn parse(&self, cursor: Cursor<'code, Self::Token>) -> ParseResult<'code, Self::Token, U> {
        let (value, cursor) = self.parser.parse(cursor)?;
        Ok(((self.mapper)(value), cursor))
    }
}

/// Convenience function to create a Map parser
pub fn map<'code, P, F, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'code>,
    F: Fn(P::Output) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt<'code>: Parser<'code> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<'code, P> MapExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use crate::number::number;
    use crate::or::OrExt;
    use crate::token::literal;

    #[derive(Debug, PartialEq)]
    enum Token {
        Letter(char),
        Number(i64),
        Special(char),
    }

    #[test]
    fn test_map_char_to_digit() {
        let cursor = Cursor::from("5x");
        let parser = literal('5').map(|c: char| c.to_digit(10));

        let (digit, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(digit, Some(5));
        assert_eq!(cursor.remaining(), "x");
    }

    #[test]
    fn test_map_to_enum() {
        let cursor = Cursor::from("X");
        let parser = literal('X').map(Token::Letter);

        let (token, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(token, Token::Letter('X'));
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_map_chaining() {
        let cursor = Cursor::from(b"5");
        let parser = literal(b'5')
            .map(|byte: u8| byte as char)
            .map(|ch: char| ch.to_digit(10).unwrap_or(0))
            .map(|digit| format!("Digit: {}", digit));

        let (result, _) = parser.parse(cursor).unwrap();
        assert_eq!(result, "Digit: 5");
    }

    #[test]
    fn test_map_with_or_common_enum() {
        let cursor = Cursor::from("42");

        let letter_parser = literal('A').map(Token::Letter);
        let number_parser = number::<i64, char>(10).map(Token::Number);
        let special_parser = literal('!').map(Token::Special);

        let parser = letter_parser.or(number_parser).or(special_parser);

        let (token, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(token, Token::Number(42));
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_map_preserves_errors() {
        let cursor = Cursor::from("xyz");
        let parser = literal('A').map(|c: char| c.to_ascii_lowercase());

        let failure = parser.parse(cursor).unwrap_err();
        assert_eq!(
            failure.error,
            ParseError::ExpectedLiteral {
                expected: 'A',
                found: Some('x')
            }
        );
        assert_eq!(failure.cursor, cursor);
    }

    #[test]
    fn test_function_syntax() {
        let cursor = Cursor::from("9");
        let parser = map(literal('9'), |c: char| c as u32);

        let (code, _) = parser.parse(cursor).unwrap();
        assert_eq!(code, 57);
    }
}
