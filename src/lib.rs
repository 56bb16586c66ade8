//! Reverse regular expressions so the last match in a string can be found
//! with an ordinary forward search.
//!
//! For a pattern `P` and any string `S`, `reverse_pattern(P)` matches the
//! reverse of `S` exactly where `P` matches `S`, at the mirrored position.
//!
//! # Example
//!
//! ```rust
//! use rxrev::{find_last, reverse_pattern};
//!
//! assert_eq!(reverse_pattern("x(?=y)[0-9]+").unwrap(), "[0-9]+(?<=y)x");
//!
//! let m = find_last("a.c", "xacxabc").unwrap().unwrap();
//! assert_eq!(m.as_str(), "abc");
//! assert_eq!(m.range(), 4..7);
//! ```

pub mod logger;
pub mod pattern;
pub mod search;

pub use pattern::ast::{Atom, GroupTag, Piece};
pub use pattern::{ParseError, ParseErrorKind, decompose, reverse_pattern};
pub use search::{LastMatch, ReverseSearcher, SearchError, find_last};
