use crate::atomic::Atomic;
use crate::cursor::Cursor;
use std::borrow::Cow;
use std::error::Error;
use std::fmt;

/// Why a parser failed
///
/// Errors are plain values. Combinators that wrap a child error keep the child
/// intact, so the full chain of an alternation or a labelled sub-grammar can be
/// inspected structurally after the fact.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError<T: Atomic> {
    /// Input exhausted where a token was required
    UnexpectedEof,
    /// Token mismatch; `found` is `None` at end of input
    ExpectedLiteral { expected: T, found: Option<T> },
    /// Trailing input where none was expected
    ExpectedEof { remaining: String },
    /// A numeric literal scan found no digits
    InvalidNumber { prefix: String },
    /// Digits were found but do not fit the target type
    NumberOutOfRange { digits: String },
    /// A repetition stopped before reaching its minimum count
    MinRepetitionsNotMet { expected: usize, got: usize },
    /// Both branches of an alternation failed
    Combined {
        left: Box<ParseError<T>>,
        right: Box<ParseError<T>>,
    },
    /// A human-readable label wrapped around another error
    Described {
        label: Cow<'static, str>,
        inner: Box<ParseError<T>>,
    },
    /// A token predicate rejected `found`
    Rejected {
        found: T,
        reason: Box<ParseError<T>>,
    },
    /// Free-form failure supplied by a grammar author
    Message(Cow<'static, str>),
    /// Placeholder left behind when error detail was discarded on purpose
    Muted,
}

impl<T: Atomic> ParseError<T> {
    /// Wrap this error with a context label
    pub fn describe(self, label: impl Into<Cow<'static, str>>) -> Self {
        ParseError::Described {
            label: label.into(),
            inner: Box::new(self),
        }
    }

    /// Combine the errors of two failed alternatives
    pub fn combine(left: Self, right: Self) -> Self {
        ParseError::Combined {
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Flatten nested alternations into the list of individual branch errors
    ///
    /// Labels are kept: a `Described` error counts as one leaf.
    pub fn leaves(&self) -> Vec<&ParseError<T>> {
        match self {
            ParseError::Combined { left, right } => {
                let mut leaves = left.leaves();
                leaves.extend(right.leaves());
                leaves
            }
            other => vec![other],
        }
    }

    /// Strip every `Described` layer and return the underlying error
    pub fn root(&self) -> &ParseError<T> {
        match self {
            ParseError::Described { inner, .. } => inner.root(),
            other => other,
        }
    }

    pub fn is_muted(&self) -> bool {
        matches!(self, ParseError::Muted)
    }
}

impl<T: Atomic> fmt::Display for ParseError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedEof => write!(f, "unexpected end of input"),
            ParseError::ExpectedLiteral { expected, found } => match found {
                Some(found) => write!(
                    f,
                    "expected {} but got {}",
                    expected.describe(),
                    found.describe()
                ),
                None => write!(f, "expected {} but got EOF", expected.describe()),
            },
            ParseError::ExpectedEof { remaining } => {
                write!(f, "expected EOF but got '{}'", remaining)
            }
            ParseError::InvalidNumber { prefix } => {
                write!(f, "failed to parse number, consumed '{}'", prefix)
            }
            ParseError::NumberOutOfRange { digits } => {
                write!(f, "number out of range: {}", digits)
            }
            ParseError::MinRepetitionsNotMet { expected, got } => {
                write!(f, "expected at least {} repetitions, got {}", expected, got)
            }
            ParseError::Combined { left, right } => {
                write!(f, "both alternatives failed:\n\t{}\n\t{}", left, right)
            }
            ParseError::Described { label, inner } => write!(f, "{}: {}", label, inner),
            ParseError::Rejected { found, reason } => {
                write!(f, "rejected {}: {}", found.describe(), reason)
            }
            ParseError::Message(message) => write!(f, "{}", message),
            ParseError::Muted => write!(f, "()"),
        }
    }
}

impl<T: Atomic> Error for ParseError<T> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ParseError::Described { inner, .. } => Some(inner.as_ref()),
            ParseError::Rejected { reason, .. } => Some(reason.as_ref()),
            _ => None,
        }
    }
}

impl<T: Atomic> From<&'static str> for ParseError<T> {
    fn from(message: &'static str) -> Self {
        ParseError::Message(Cow::Borrowed(message))
    }
}

impl<T: Atomic> From<String> for ParseError<T> {
    fn from(message: String) -> Self {
        ParseError::Message(Cow::Owned(message))
    }
}

/// A failed parse: the error plus the cursor where it was detected
#[derive(Debug, Clone, PartialEq)]
pub struct ParseFailure<'code, T: Atomic> {
    pub error: ParseError<T>,
    pub cursor: Cursor<'code, T>,
}

impl<'code, T: Atomic> ParseFailure<'code, T> {
    pub fn new(error: ParseError<T>, cursor: Cursor<'code, T>) -> Self {
        ParseFailure { error, cursor }
    }

    /// Replace the error, keeping the failure cursor
    pub fn map_error<F>(self, f: F) -> Self
    where
        F: FnOnce(ParseError<T>) -> ParseError<T>,
    {
        ParseFailure {
            error: f(self.error),
            cursor: self.cursor,
        }
    }

    /// Render the unconsumed input at the failure point
    pub fn remainder(&self) -> String {
        T::slice_to_string(self.cursor.remaining())
    }
}

impl<'code, T: Atomic> fmt::Display for ParseFailure<'code, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at offset {})", self.error, self.cursor.position())
    }
}

/// Top-level failure returned by the runner
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Parser error:\n\t{error}\nRemainder:\n\t{remainder}")]
pub struct RunError<T: Atomic> {
    pub error: ParseError<T>,
    /// Unconsumed input at the failure point
    pub remainder: String,
    /// Offset of the failure point, in source units
    pub position: usize,
}

impl<'code, T: Atomic> From<ParseFailure<'code, T>> for RunError<T> {
    fn from(failure: ParseFailure<'code, T>) -> Self {
        let remainder = failure.remainder();
        RunError {
            error: failure.error,
            remainder,
            position: failure.cursor.position(),
        }
    }
}
