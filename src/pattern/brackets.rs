//! Delimiter matching for `(...)`, `[...]` and `{...}`.

use super::error::{ParseError, ParseErrorKind};

/// Return the byte index of the `close` that balances the `open` at the start
/// of `pattern`.
///
/// Only `open`/`close` change the depth. A `\` and the character after it are
/// skipped together, so escaped delimiters never count. `offset` is the
/// position of `pattern` in the top-level pattern and is used for errors only.
pub fn closing_index(
    pattern: &str,
    offset: usize,
    open: char,
    close: char,
) -> Result<usize, ParseError> {
    debug_assert!(pattern.starts_with(open), "{pattern:?} must start with {open:?}");

    let mut depth = 0usize;
    let mut chars = pattern.char_indices();
    while let Some((idx, c)) = chars.next() {
        if c == '\\' {
            chars.next();
        } else if c == open {
            depth += 1;
        } else if c == close {
            depth -= 1;
            if depth == 0 {
                return Ok(idx);
            }
        }
    }
    Err(ParseError::new(
        ParseErrorKind::UnbalancedDelimiter { open, close },
        offset,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unbalanced(open: char, close: char, position: usize) -> ParseError {
        ParseError::new(ParseErrorKind::UnbalancedDelimiter { open, close }, position)
    }

    #[test]
    fn simple_group() {
        assert_eq!(closing_index("(ab)cd", 0, '(', ')'), Ok(3));
    }

    #[test]
    fn nested_groups() {
        assert_eq!(closing_index("(a(b)c)d", 0, '(', ')'), Ok(6));
        assert_eq!(closing_index("((()))", 0, '(', ')'), Ok(5));
    }

    #[test]
    fn other_delimiters_are_ignored() {
        assert_eq!(closing_index("[(]", 0, '[', ']'), Ok(2));
        assert_eq!(closing_index("{2,3}x", 0, '{', '}'), Ok(4));
    }

    #[test]
    fn escaped_delimiters_do_not_count() {
        assert_eq!(closing_index(r"(a\))", 0, '(', ')'), Ok(4));
        assert_eq!(closing_index(r"[\]]x", 0, '[', ']'), Ok(3));
        assert_eq!(closing_index(r"(\()", 0, '(', ')'), Ok(3));
    }

    #[test]
    fn multibyte_content() {
        assert_eq!(closing_index("(éa)", 0, '(', ')'), Ok(4));
    }

    #[test]
    fn unbalanced_reports_opening_position() {
        assert_eq!(closing_index("(ab", 7, '(', ')'), Err(unbalanced('(', ')', 7)));
        assert_eq!(closing_index("[a[b]", 2, '[', ']'), Err(unbalanced('[', ']', 2)));
        assert_eq!(closing_index(r"(a\)", 0, '(', ')'), Err(unbalanced('(', ')', 0)));
    }

    #[test]
    fn trailing_backslash_is_unbalanced() {
        assert_eq!(closing_index("{2\\", 0, '{', '}'), Err(unbalanced('{', '}', 0)));
    }
}
