//! Last-match search built on forward-only regex matching.
//!
//! The pattern and the haystack are both reversed and the first match of the
//! reversed pattern is mapped back onto the original text. The result is the
//! match that ends furthest to the right, extended as far left as the
//! pattern's greediness allows.

use std::fmt;
use std::ops::Range;

use fancy_regex::Regex;

use crate::pattern::{ParseError, reverse_pattern};

/// Errors from a last-match search.
#[derive(Debug)]
pub enum SearchError {
    /// The pattern could not be reversed.
    Parse(ParseError),
    /// The regex engine rejected the reversed pattern or gave up matching.
    Regex(fancy_regex::Error),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "{err}"),
            Self::Regex(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Regex(err) => Some(err),
        }
    }
}

impl From<ParseError> for SearchError {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

impl From<fancy_regex::Error> for SearchError {
    fn from(err: fancy_regex::Error) -> Self {
        Self::Regex(err)
    }
}

/// A match located by a reversed search, in original text orientation.
///
/// Offsets are byte offsets into the searched text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastMatch<'t> {
    haystack: &'t str,
    start: usize,
    end: usize,
}

impl<'t> LastMatch<'t> {
    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// The matched text.
    pub fn as_str(&self) -> &'t str {
        &self.haystack[self.start..self.end]
    }
}

/// A pattern reversed and compiled once, for repeated last-match searches.
#[derive(Debug)]
pub struct ReverseSearcher {
    pattern: String,
    regex: Regex,
}

impl ReverseSearcher {
    pub fn new(pattern: &str) -> Result<Self, SearchError> {
        let reversed = reverse_pattern(pattern)?;
        Ok(Self {
            pattern: pattern.to_string(),
            regex: Regex::new(&reversed)?,
        })
    }

    /// The pattern as given.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// The reversed pattern handed to the regex engine.
    pub fn reversed_pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Find the last match in `text`.
    pub fn find_last<'t>(&self, text: &'t str) -> Result<Option<LastMatch<'t>>, SearchError> {
        self.find_last_before(text, text.len())
    }

    /// Find the last match lying wholly within `text[..limit]`.
    ///
    /// `limit` is clamped to the text and rounded down to a character
    /// boundary. Lookarounds cannot see past `limit`.
    pub fn find_last_before<'t>(
        &self,
        text: &'t str,
        limit: usize,
    ) -> Result<Option<LastMatch<'t>>, SearchError> {
        let limit = char_boundary_at_or_before(text, limit);
        let reversed = reverse_text(&text[..limit]);
        let found = self.regex.find(&reversed)?;
        Ok(found.map(|m| mirror(text, limit, m.start()..m.end())))
    }

    /// Find all non-overlapping matches, last first.
    pub fn rfind_all<'t>(&self, text: &'t str) -> Result<Vec<LastMatch<'t>>, SearchError> {
        let reversed = reverse_text(text);
        self.regex
            .find_iter(&reversed)
            .map(|found| {
                found
                    .map(|m| mirror(text, text.len(), m.start()..m.end()))
                    .map_err(SearchError::from)
            })
            .collect()
    }
}

/// Find the last match of `pattern` in `text`.
///
/// Returns `Ok(None)` when nothing matches.
pub fn find_last<'t>(pattern: &str, text: &'t str) -> Result<Option<LastMatch<'t>>, SearchError> {
    ReverseSearcher::new(pattern)?.find_last(text)
}

fn reverse_text(text: &str) -> String {
    text.chars().rev().collect()
}

/// Map a byte range in the reversal of `text[..len]` back onto `text`.
///
/// Reversing by character keeps every character's encoded length, so byte
/// offset `i` in the reversed text is offset `len - i` in the original.
fn mirror(text: &str, len: usize, reversed: Range<usize>) -> LastMatch<'_> {
    LastMatch {
        haystack: text,
        start: len - reversed.end,
        end: len - reversed.start,
    }
}

fn char_boundary_at_or_before(text: &str, limit: usize) -> usize {
    let limit = limit.min(text.len());
    (0..=limit)
        .rev()
        .find(|&i| text.is_char_boundary(i))
        .unwrap_or(0)
}
