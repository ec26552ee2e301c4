use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};
use std::borrow::Cow;

/// Parser combinator that labels the error of a failed parse
///
/// Failures become `"{label}: {original}"` with the original error kept as
/// the inner error. Successes pass through unchanged.
#[derive(Debug, Clone)]
pub struct Describe<P> {
    parser: P,
    label: Cow<'static, str>,
}

impl<P> Describe<P> {
    pub fn new(parser: P, label: Cow<'static, str>) -> Self {
        Describe { parser, label }
    }
}

impl<'code, P> Parser<'code> for Describe<P>
where
    P: Parser<'code>,
{
    type Token = P::Token;
    type Output = P::Output;

    fn parse(
        &self,
        cursor: Cursor<'code, Self::Token>,
    ) -> ParseResult<'code, Self::Token, Self::Output> {
        self.parser
            .parse(cursor)
            .map_err(|failure| failure.map_error(|error| error.describe(self.label.clone())))
    }
}

/// Extension trait to add .describe() method support for parsers
pub trait DescribeExt<'code>: Parser<'code> + Sized {
    fn describe(self, label: impl Into<Cow<'static, str>>) -> Describe<Self> {
        Describe::new(self, label.into())
    }
}

/// Implement DescribeExt for all parsers
impl<'code, P> DescribeExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create a Describe parser
pub fn describe<'code, P>(parser: P, label: impl Into<Cow<'static, str>>) -> Describe<P>
where
    P: Parser<'code>,
{
    Describe::new(parser, label.into())
}
