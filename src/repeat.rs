use crate::cursor::Cursor;
use crate::error::{ParseError, ParseFailure};
use crate::parser::{ParseResult, Parser};

/// Parser combinator that applies a parser repeatedly
///
/// Parsing stops at the first failure or after `max` matches. The failing
/// attempt is discarded, so the returned cursor sits right after the last
/// successful match. Fewer than `min` matches fail with
/// [`ParseError::MinRepetitionsNotMet`] at that same cursor.
///
/// Without an upper bound, a match that consumes no input ends the repetition
/// after being recorded, once at least `min` matches have been collected.
#[derive(Debug, Clone, Copy)]
pub struct Repeat<P> {
    parser: P,
    min: usize,
    max: Option<usize>,
}

impl<P> Repeat<P> {
    /// # Panics
    ///
    /// Panics if `max` is below `min`.
    pub fn new(parser: P, min: usize, max: Option<usize>) -> Self {
        if let Some(max) = max {
            assert!(
                min <= max,
                "repetition bounds out of order: min {} > max {}",
                min,
                max
            );
        }
        Repeat { parser, min, max }
    }
}

impl<'code, P> Parser<'code> for Repeat<P>
where
    P: Parser<'code>,
{
    type Token = P::Token;
    type Output = Vec<P::Output>;

    fn parse(
        &self,
        mut cursor: Cursor<'code, Self::Token>,
    ) -> ParseResult<'code, Self::Token, Self::Output> {
        let mut results = Vec::new();

        while self.max.is_none_or(|max| results.len() < max) {
            match self.parser.parse(cursor) {
                Ok((value, next_cursor)) => {
                    let stalled = next_cursor == cursor;
                    results.push(value);
                    cursor = next_cursor;
                    if stalled && self.max.is_none() && results.len() >= self.min {
                        break;
                    }
                }
                Err(_) => break,
            }
        }

        if results.len() < self.min {
            let error = ParseError::MinRepetitionsNotMet {
                expected: self.min,
                got: results.len(),
            };
            return Err(ParseFailure::new(error, cursor));
        }

        Ok((results, cursor))
    }
}

/// Zero or more matches; never fails
///
/// A match that consumes nothing is kept and ends the repetition, so
/// `star(optional(p))` always yields a trailing `None`.
pub fn star<'code, P>(parser: P) -> Repeat<P>
where
    P: Parser<'code>,
{
    Repeat::new(parser, 0, None)
}

/// One or more matches
///
/// As with [`star`], a match that consumes nothing is kept and ends the
/// repetition.
pub fn plus<'code, P>(parser: P) -> Repeat<P>
where
    P: Parser<'code>,
{
    Repeat::new(parser, 1, None)
}

/// Exactly `count` matches
pub fn rep<'code, P>(parser: P, count: usize) -> Repeat<P>
where
    P: Parser<'code>,
{
    Repeat::new(parser, count, Some(count))
}

/// Between `min` and `max` matches, inclusive; `None` leaves the count unbounded
pub fn rep_between<'code, P>(parser: P, min: usize, max: Option<usize>) -> Repeat<P>
where
    P: Parser<'code>,
{
    Repeat::new(parser, min, max)
}

/// Extension trait to add repetition method support for parsers
pub trait RepeatExt<'code>: Parser<'code> + Sized {
    fn star(self) -> Repeat<Self> {
        Repeat::new(self, 0, None)
    }

    fn plus(self) -> Repeat<Self> {
        Repeat::new(self, 1, None)
    }

    fn rep(self, count: usize) -> Repeat<Self> {
        Repeat::new(self, count, Some(count))
    }

    fn rep_between(self, min: usize, max: Option<usize>) -> Repeat<Self> {
        Repeat::new(self, min, max)
    }
}

/// Implement RepeatExt for all parsers
impl<'code, P> RepeatExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optional::{OptionalExt, optional};
    use crate::pure::noop;
    use crate::seq::SeqExt;
    use crate::token::{any, literal};

    #[test]
    fn test_star_zero_matches() {
        let cursor = Cursor::from("xyz");
        let (results, rest) = star(literal('a')).parse(cursor).unwrap();
        assert_eq!(results, vec![]);
        assert_eq!(rest, cursor);
    }

    #[test]
    fn test_star_multiple_matches() {
        let cursor = Cursor::from("xxxy");
        let (results, rest) = literal('x').star().parse(cursor).unwrap();
        assert_eq!(results, vec!['x', 'x', 'x']);
        assert_eq!(rest.remaining(), "y");
    }

    #[test]
    fn test_star_all_input() {
        let cursor = Cursor::from(b"hello");
        let (results, rest) = any().star().parse(cursor).unwrap();
        assert_eq!(results, b"hello".to_vec());
        assert!(rest.is_empty());
    }

    #[test]
    fn test_star_rolls_back_failed_attempt() {
        // Each attempt consumes 'a' and then fails on the missing 'b'.
        let cursor = Cursor::from("ababac");
        let (results, rest) = literal('a').seq(literal('b')).star().parse(cursor).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(rest.remaining(), "ac");
    }

    #[test]
    fn test_star_stops_on_stalled_match() {
        let cursor = Cursor::from("abc");
        let (results, rest) = star(noop()).parse(cursor).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(rest, cursor);
    }

    #[test]
    fn test_star_keeps_trailing_empty_match() {
        let cursor = Cursor::from("aab");
        let (results, rest) = star(literal('a').optional()).parse(cursor).unwrap();
        assert_eq!(results, vec![Some('a'), Some('a'), None]);
        assert_eq!(rest.remaining(), "b");
    }

    #[test]
    fn test_unbounded_non_consuming_reaches_min() {
        let cursor = Cursor::from("b");
        let (results, rest) = rep_between(noop(), 3, None).parse(cursor).unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(rest, cursor);

        let (results, rest) = rep_between(noop(), 2, None).parse(cursor).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(rest, cursor);
    }

    #[test]
    fn test_unbounded_min_filled_by_empty_matches() {
        let cursor = Cursor::from("ab");
        let (results, rest) = literal('a')
            .optional()
            .rep_between(3, None)
            .parse(cursor)
            .unwrap();
        assert_eq!(results, vec![Some('a'), None, None]);
        assert_eq!(rest.remaining(), "b");
    }

    #[test]
    fn test_plus_of_optional_never_fails() {
        let cursor = Cursor::from("xyz");
        let (results, rest) = plus(optional(literal('a'))).parse(cursor).unwrap();
        assert_eq!(results, vec![None]);
        assert_eq!(rest, cursor);
    }

    #[test]
    fn test_plus_zero_matches_fails() {
        let cursor = Cursor::from("xyz");
        let failure = plus(literal('a')).parse(cursor).unwrap_err();
        assert_eq!(
            failure.error,
            ParseError::MinRepetitionsNotMet {
                expected: 1,
                got: 0
            }
        );
        assert_eq!(failure.cursor, cursor);
    }

    #[test]
    fn test_plus_one_match() {
        let cursor = Cursor::from("abc");
        let (results, rest) = literal('a').plus().parse(cursor).unwrap();
        assert_eq!(results, vec!['a']);
        assert_eq!(rest.remaining(), "bc");
    }

    #[test]
    fn test_rep_exact() {
        let cursor = Cursor::from("aaaa");
        let (results, rest) = rep(literal('a'), 3).parse(cursor).unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(rest.remaining(), "a");
    }

    #[test]
    fn test_rep_too_few() {
        let cursor = Cursor::from("aab");
        let failure = literal('a').rep(3).parse(cursor).unwrap_err();
        assert_eq!(
            failure.error,
            ParseError::MinRepetitionsNotMet {
                expected: 3,
                got: 2
            }
        );
        assert_eq!(failure.cursor.remaining(), "b");
    }

    #[test]
    fn test_rep_exact_with_non_consuming_parser() {
        let cursor = Cursor::from("");
        let (results, _) = noop().rep(4).parse(cursor).unwrap();
        assert_eq!(results.len(), 4);
    }

    #[test]
    fn test_rep_between() {
        let parser = rep_between(literal('a'), 2, Some(3));

        let (results, rest) = parser.parse(Cursor::from("aaaaa")).unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(rest.remaining(), "aa");

        let (results, _) = parser.parse(Cursor::from("aab")).unwrap();
        assert_eq!(results.len(), 2);

        assert!(parser.parse(Cursor::from("ab")).is_err());
    }

    #[test]
    fn test_rep_between_unbounded() {
        let parser = literal('a').rep_between(2, None);
        let (results, rest) = parser.parse(Cursor::from("aaaaab")).unwrap();
        assert_eq!(results.len(), 5);
        assert_eq!(rest.remaining(), "b");
    }

    #[test]
    #[should_panic(expected = "repetition bounds out of order")]
    fn test_rep_between_rejects_inverted_bounds() {
        let _ = rep_between(literal('a'), 3, Some(1));
    }
}
