//! # Yeti - Parser Combinator Library
//!
//! Composable parsers over borrowed token streams.
//!
//! A parser is an immutable value implementing [`Parser`]. It reads from a
//! [`Cursor`], a copyable view into input it never mutates, and returns either
//! a value with the advanced cursor or a [`ParseFailure`] holding a structured
//! [`ParseError`] and the cursor where the failure was detected. Small parsers
//! combine into grammars through free functions, fluent extension methods and
//! the [`seq!`] / [`alt!`] macros.
//!
//! - **Any token type**: text is parsed as `char`s straight out of a `&str`;
//!   bytes and `u32` token ids parse from slices (see [`Atomic`])
//! - **Structured errors**: alternation keeps every branch error, labels wrap
//!   rather than replace, and nothing is swallowed except through [`ignore_error`]
//! - **Backtracking by copy**: a saved cursor is the whole backtracking state
//! - **Shareable grammars**: parsers hold no state between calls, so one
//!   grammar can serve any number of threads at once
//!
//! Parsing is plain recursive descent. Recursion is not depth limited, so a
//! left-recursive grammar built with [`lazy`] overflows the stack.
//!
//! ```
//! use yeti::{MapExt, RepeatExt, SeqExt, decimal, parse_complete, text};
//!
//! let row = decimal::<i64, char>()
//!     .seq_left(text::ws().plus())
//!     .seq(decimal::<i64, char>())
//!     .seq_left(text::eol());
//! let total = row.star().map(|rows| rows.iter().map(|(a, b)| (a - b).abs()).sum::<i64>());
//!
//! assert_eq!(parse_complete(&total, "3   4\n4   3\n").unwrap(), 2);
//! assert!(parse_complete(&total, "3   x\n").is_err());
//! ```

pub mod alt;
pub mod atomic;
pub mod boxed;
pub mod cursor;
pub mod describe;
pub mod either;
pub mod eof;
pub mod error;
pub mod filter;
pub mod lazy;
pub mod map;
pub mod map_err;
pub mod mute;
pub mod number;
pub mod optional;
pub mod or;
pub mod parser;
pub mod pure;
pub mod repeat;
pub mod runner;
pub mod seq;
pub mod skip;
pub mod text;
pub mod token;

pub use alt::{Alt, AltExt, alt};
pub use atomic::Atomic;
pub use boxed::{BoxedExt, BoxedParser};
pub use cursor::Cursor;
pub use describe::{Describe, DescribeExt, describe};
pub use either::Either;
pub use eof::{Eof, eof};
pub use error::{ParseError, ParseFailure, RunError};
pub use filter::{FilterExt, FilterParser, filter};
pub use lazy::{Lazy, lazy};
pub use map::{Map, MapExt, map};
pub use map_err::{MapErr, MapErrExt, map_err};
pub use mute::{Mute, ignore_error};
pub use number::{Integer, NumberParser, decimal, number};
pub use optional::{Optional, OptionalExt, optional};
pub use or::{Or, OrExt, or};
pub use parser::{ParseResult, Parser};
pub use pure::{Fail, FailWith, Pure, fail, fail_with, noop, pure};
pub use repeat::{Repeat, RepeatExt, plus, rep, rep_between, star};
pub use runner::{parse, parse_complete};
pub use seq::{Seq, SeqExt, SeqLeft, SeqRight, seq, seq_left, seq_right};
pub use skip::{Skip, skip};
pub use token::{Any, Literal, Satisfy, any, literal, satisfy};
