use crate::atomic::Atomic;
use crate::cursor::Cursor;
use crate::error::{ParseError, ParseFailure};
use crate::parser::{ParseResult, Parser};
use std::fmt;
use std::marker::PhantomData;
use std::num::ParseIntError;

/// Integer types a numeric literal can be parsed into
pub trait Integer: Sized {
    /// Whether a leading `-` is accepted
    const SIGNED: bool;

    fn from_str_radix(digits: &str, radix: u32) -> Result<Self, ParseIntError>;
}

macro_rules! impl_integer {
    ($signed:expr => $($ty:ty),+) => {
        $(
            impl Integer for $ty {
                const SIGNED: bool = $signed;

                fn from_str_radix(digits: &str, radix: u32) -> Result<Self, ParseIntError> {
                    <$ty>::from_str_radix(digits, radix)
                }
            }
        )+
    };
}

impl_integer!(true => i8, i16, i32, i64, i128, isize);
impl_integer!(false => u8, u16, u32, u64, u128, usize);

/// Parser for integer literals in a fixed radix
///
/// Scans an optional `-` (signed targets only) followed by the longest run of
/// digits valid in the radix. Letters count as digits from radix 11 upward and
/// match in either case. Tokens with no textual meaning end the scan.
///
/// Both failure modes leave the input untouched: no digits at all yields
/// [`ParseError::InvalidNumber`] carrying whatever sign was scanned, and a
/// value that does not fit `N` yields [`ParseError::NumberOutOfRange`].
pub struct NumberParser<T, N> {
    radix: u32,
    _phantom: PhantomData<fn() -> (T, N)>,
}

impl<T, N> NumberParser<T, N> {
    /// # Panics
    ///
    /// Panics if `radix` is outside `2..=36`.
    pub fn new(radix: u32) -> Self {
        assert!(
            (2..=36).contains(&radix),
            "radix must be in 2..=36, got {}",
            radix
        );
        NumberParser {
            radix,
            _phantom: PhantomData,
        }
    }

    pub fn radix(&self) -> u32 {
        self.radix
    }
}

impl<T, N> Clone for NumberParser<T, N> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, N> Copy for NumberParser<T, N> {}

impl<T, N> fmt::Debug for NumberParser<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumberParser")
            .field("radix", &self.radix)
            .finish()
    }
}

impl<'code, T, N> Parser<'code> for NumberParser<T, N>
where
    T: Atomic,
    N: Integer,
{
    type Token = T;
    type Output = N;

    fn parse(&self, cursor: Cursor<'code, T>) -> ParseResult<'code, T, N> {
        let mut text = String::new();
        let mut rest = cursor;

        if N::SIGNED {
            if let Some((token, next)) = rest.bump() {
                if token.as_char() == Some('-') {
                    text.push('-');
                    rest = next;
                }
            }
        }
        let sign_len = text.len();

        while let Some((token, next)) = rest.bump() {
            match token.as_char() {
                Some(c) if c.is_digit(self.radix) => {
                    text.push(c);
                    rest = next;
                }
                _ => break,
            }
        }

        if text.len() == sign_len {
            let error = ParseError::InvalidNumber { prefix: text };
            return Err(ParseFailure::new(error, cursor));
        }

        match N::from_str_radix(&text, self.radix) {
            Ok(value) => Ok((value, rest)),
            Err(_) => {
                let error = ParseError::NumberOutOfRange { digits: text };
                Err(ParseFailure::new(error, cursor))
            }
        }
    }
}

/// Parse an integer of type `N` in the given radix
///
/// # Panics
///
/// Panics if `radix` is outside `2..=36`.
pub fn number<N: Integer, T: Atomic>(radix: u32) -> NumberParser<T, N> {
    NumberParser::new(radix)
}

/// Parse a base 10 integer of type `N`
pub fn decimal<N: Integer, T: Atomic>() -> NumberParser<T, N> {
    NumberParser::new(10)
}
