use crate::parser::Parser;

/// A type-erased parser
///
/// Boxing trades static dispatch for a nameable type, which is what grammars
/// assembled at runtime or defined recursively need.
pub type BoxedParser<'p, 'code, T, O> = Box<dyn Parser<'code, Token = T, Output = O> + 'p>;

/// Extension trait to add .boxed() method support for parsers
pub trait BoxedExt<'code>: Parser<'code> + Sized {
    fn boxed<'p>(self) -> BoxedParser<'p, 'code, Self::Token, Self::Output>
    where
        Self: 'p,
    {
        Box::new(self)
    }
}

/// Implement BoxedExt for all parsers
impl<'code, P> BoxedExt<'code> for P where P: Parser<'code> {}
