//! Errors raised while decomposing or reversing a pattern.

use std::fmt;

/// What went wrong while reading a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// An opening `(`, `[` or `{` has no matching close before the end of input.
    UnbalancedDelimiter { open: char, close: char },
    /// The pattern ends with a bare `\`.
    TruncatedEscape,
    /// A character that cannot start an atom.
    UnrecognizedToken(char),
    /// An atom reached the reverser in a shape the splitter never produces.
    /// Carries the offending atom text.
    InternalInvariantViolation(String),
}

/// A failure to reverse a pattern.
///
/// `position` is the byte offset, in the pattern passed to
/// [`reverse_pattern`](super::reverse_pattern), of the construct at fault.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub position: usize,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, position: usize) -> Self {
        Self { kind, position }
    }

    /// True when the error signals a bug in this crate rather than bad input.
    pub fn is_defect(&self) -> bool {
        matches!(self.kind, ParseErrorKind::InternalInvariantViolation(_))
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pos = self.position;
        match &self.kind {
            ParseErrorKind::UnbalancedDelimiter { open, close } => {
                write!(f, "No closing '{close}' for '{open}' at position {pos}")
            }
            ParseErrorKind::TruncatedEscape => {
                write!(f, "Pattern ends with a bare '\\' at position {pos}")
            }
            ParseErrorKind::UnrecognizedToken(c) => {
                write!(f, "Unexpected character {c:?} at position {pos}")
            }
            ParseErrorKind::InternalInvariantViolation(atom) => {
                write!(f, "'{atom}' at position {pos} is not an atom (internal error)")
            }
        }
    }
}

impl std::error::Error for ParseError {}
