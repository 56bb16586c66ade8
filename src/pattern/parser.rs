//! Recursive descent decomposition of regex patterns into atoms.

use phf::{Map, phf_map};

use super::ast::*;
use super::brackets::closing_index;
use super::error::{ParseError, ParseErrorKind};

/// Group tags recognised after `(`. Anything else is a capturing group.
const GROUP_TAGS: Map<&'static str, GroupTag> = phf_map! {
    "?:" => GroupTag::NonCapturing,
    "?=" => GroupTag::Lookahead,
    "?!" => GroupTag::NegativeLookahead,
    "?<=" => GroupTag::Lookbehind,
    "?<!" => GroupTag::NegativeLookbehind,
};

/// True for characters that form an atom on their own.
pub fn is_unit(c: char) -> bool {
    c.is_alphabetic() || c.is_numeric() || matches!(c, '.' | ' ' | '-')
}

/// Split a leading repetition operator off `rest`.
///
/// Returns `(operator, remainder)`; the operator is empty when `rest` does not
/// start with `*`, `+`, `?` or `{`.
pub fn extract_operator(rest: &str, offset: usize) -> Result<(&str, &str), ParseError> {
    match rest.chars().next() {
        Some('*' | '+' | '?') => Ok(rest.split_at(1)),
        Some('{') => {
            let end = closing_index(rest, offset, '{', '}')? + 1;
            Ok(rest.split_at(end))
        }
        _ => Ok(("", rest)),
    }
}

/// Split one atom and its operator off the front of `pattern`.
///
/// Returns `None` for an empty pattern, otherwise the piece and the
/// unconsumed remainder. `offset` is the position of `pattern` in the
/// top-level pattern.
pub fn split_atom(pattern: &str, offset: usize) -> Result<Option<(Piece<'_>, &str)>, ParseError> {
    let Some(first) = pattern.chars().next() else {
        return Ok(None);
    };

    let (atom, end) = match first {
        '\\' => {
            let escaped = pattern[1..]
                .chars()
                .next()
                .ok_or_else(|| ParseError::new(ParseErrorKind::TruncatedEscape, offset))?;
            let end = 1 + escaped.len_utf8();
            (Atom::Escape(&pattern[..end]), end)
        }
        '[' => {
            let end = closing_index(pattern, offset, '[', ']')? + 1;
            (Atom::Class(&pattern[..end]), end)
        }
        '(' => {
            let end = closing_index(pattern, offset, '(', ')')? + 1;
            (Atom::Group(&pattern[..end]), end)
        }
        c if is_unit(c) => {
            let end = c.len_utf8();
            (Atom::Literal(&pattern[..end]), end)
        }
        c => {
            return Err(ParseError::new(
                ParseErrorKind::UnrecognizedToken(c),
                offset,
            ));
        }
    };

    let (operator, rest) = extract_operator(&pattern[end..], offset + end)?;
    Ok(Some((
        Piece {
            atom,
            operator,
            offset,
        },
        rest,
    )))
}

/// Decompose a whole pattern into its top-level pieces, left to right.
pub fn decompose(pattern: &str) -> Result<Vec<Piece<'_>>, ParseError> {
    decompose_at(pattern, 0)
}

pub(crate) fn decompose_at(pattern: &str, offset: usize) -> Result<Vec<Piece<'_>>, ParseError> {
    let mut pieces = Vec::new();
    let mut rest = pattern;
    let mut pos = offset;
    while let Some((piece, tail)) = split_atom(rest, pos)? {
        pos += rest.len() - tail.len();
        rest = tail;
        pieces.push(piece);
    }
    Ok(pieces)
}

/// Split a group atom into its tag and its top-level alternation branches.
///
/// Branches are split on `|` outside any nested parentheses. Bracket classes
/// are not tracked, so a `|`, `(` or `)` inside `[...]` in the body splits
/// (or unbalances) the group.
pub fn decompose_group(text: &str, offset: usize) -> Result<Group<'_>, ParseError> {
    if text.len() < 2 || !text.starts_with('(') || !text.ends_with(')') {
        return Err(ParseError::new(
            ParseErrorKind::InternalInvariantViolation(text.to_string()),
            offset,
        ));
    }
    let inner = &text[1..text.len() - 1];

    // Three-character tags first so `?<=` is not mistaken for something shorter.
    let (tag, tag_len) = [3, 2]
        .into_iter()
        .find_map(|n| {
            inner
                .get(..n)
                .and_then(|prefix| GROUP_TAGS.get(prefix))
                .map(|tag| (*tag, n))
        })
        .unwrap_or((GroupTag::Capturing, 0));

    Ok(Group {
        tag,
        branches: split_branches(&inner[tag_len..], offset + 1 + tag_len),
    })
}

fn split_branches(body: &str, offset: usize) -> Vec<Branch<'_>> {
    let mut branches = Vec::new();
    let mut depth = 0isize;
    let mut start = 0;
    let mut chars = body.char_indices();
    while let Some((idx, c)) = chars.next() {
        match c {
            '\\' => {
                chars.next();
            }
            '(' => depth += 1,
            ')' => depth -= 1,
            '|' if depth == 0 => {
                branches.push(Branch {
                    text: &body[start..idx],
                    offset: offset + start,
                });
                start = idx + 1;
            }
            _ => {}
        }
    }
    branches.push(Branch {
        text: &body[start..],
        offset: offset + start,
    });
    branches
}
