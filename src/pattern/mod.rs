//! Regex pattern reversal.
//!
//! A pattern is decomposed into atoms, each optionally followed by one
//! repetition operator. Reversal emits the atoms in the opposite order,
//! reverses the inside of every group, and swaps lookahead for lookbehind.
//!
//! # Accepted syntax
//!
//! | Token          | Meaning                                            |
//! |----------------|----------------------------------------------------|
//! | `a`, `7`, `é`  | Alphabetic or numeric character                    |
//! | `.` ` ` `-`    | Dot, space and hyphen stand alone                  |
//! | `\X`           | Escape pair                                        |
//! | `[…]`          | Character class                                    |
//! | `(…)`          | Capturing group                                    |
//! | `(?:…)`        | Non-capturing group                                |
//! | `(?=…)` `(?!…)`   | Positive / negative lookahead                   |
//! | `(?<=…)` `(?<!…)` | Positive / negative lookbehind                  |
//! | `X\|Y`         | Alternation, inside a group only                   |
//! | `*` `+` `?`    | Repetition of the preceding atom                   |
//! | `{n}` `{n,}` `{n,m}` | Counted repetition of the preceding atom     |
//!
//! Anything else, including `^`, `$`, top-level `|` and lazy suffixes, is
//! rejected with [`ParseErrorKind::UnrecognizedToken`].
//!
//! Escape pairs are copied through unchanged. The anchors `\A` and `\z` keep
//! their meaning while moving to the other end of the pattern, so `\Aab`
//! reverses to `ba\A` and no longer mirrors the input. Swap them by hand if
//! needed.

pub mod ast;
pub mod brackets;
pub mod error;
pub mod parser;
pub mod reverse;

pub use error::{ParseError, ParseErrorKind};
pub use parser::{decompose, split_atom};
pub use reverse::{reverse_atom, reverse_pattern};
