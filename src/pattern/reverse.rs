//! Structural reversal of decomposed patterns.
//!
//! Top-level pieces are emitted last to first, each atom followed by its own
//! operator. Groups are reversed branch by branch, keeping branch order, and
//! lookarounds change direction.

use std::borrow::Cow;

use itertools::Itertools;

use super::ast::Atom;
use super::error::{ParseError, ParseErrorKind};
use super::parser::{decompose_at, decompose_group};

/// Reverse `pattern` so that it matches the reverse of every string the
/// original matches.
///
/// ```rust
/// use rxrev::reverse_pattern;
///
/// assert_eq!(reverse_pattern("ab*c").unwrap(), "cb*a");
/// assert_eq!(reverse_pattern("(?=ab)").unwrap(), "(?<=ba)");
/// ```
pub fn reverse_pattern(pattern: &str) -> Result<String, ParseError> {
    reverse_at(pattern, 0)
}

fn reverse_at(pattern: &str, offset: usize) -> Result<String, ParseError> {
    // Every piece is split before any atom is reversed, so a splitting error
    // always wins over a reversal error further left.
    let pieces = decompose_at(pattern, offset)?;
    let mut out = String::with_capacity(pattern.len());
    for piece in pieces.iter().rev() {
        out.push_str(&reverse_atom(piece.atom, piece.offset)?);
        out.push_str(piece.operator);
    }
    Ok(out)
}

/// Reverse the inside of a single atom.
///
/// Literals, escapes and classes match one character and come back as they
/// are. Groups are rebuilt with a flipped tag and reversed branches.
pub fn reverse_atom<'a>(atom: Atom<'a>, offset: usize) -> Result<Cow<'a, str>, ParseError> {
    match atom {
        Atom::Literal(s) if s.chars().count() == 1 => Ok(Cow::Borrowed(s)),
        Atom::Escape(s) if s.starts_with('\\') && s.chars().count() == 2 => Ok(Cow::Borrowed(s)),
        Atom::Class(s) if s.len() >= 2 && s.starts_with('[') && s.ends_with(']') => {
            Ok(Cow::Borrowed(s))
        }
        Atom::Group(s) => reverse_group(s, offset).map(Cow::Owned),
        _ => Err(ParseError::new(
            ParseErrorKind::InternalInvariantViolation(atom.as_str().to_string()),
            offset,
        )),
    }
}

fn reverse_group(text: &str, offset: usize) -> Result<String, ParseError> {
    let group = decompose_group(text, offset)?;
    let branches = itertools::process_results(
        group
            .branches
            .iter()
            .map(|branch| reverse_at(branch.text, branch.offset)),
        |mut reversed| reversed.join("|"),
    )?;
    Ok(format!("({}{})", group.tag.flipped().as_str(), branches))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rev(s: &str) -> String {
        reverse_pattern(s).expect("reversal should succeed")
    }

    fn rev_err(s: &str) -> ParseError {
        reverse_pattern(s).expect_err("reversal should fail")
    }

    #[test]
    fn test_empty_pattern() {
        assert_eq!(rev(""), "");
    }

    #[test]
    fn test_concatenation_is_reversed() {
        assert_eq!(rev("ab"), "ba");
        assert_eq!(rev("abc d"), "d cba");
    }

    #[test]
    fn test_operator_stays_with_its_atom() {
        assert_eq!(rev("ab*c"), "cb*a");
        assert_eq!(rev("a+b?c{2,3}"), "c{2,3}b?a+");
        assert_eq!(rev(r"x\d{4}[a-f]*"), r"[a-f]*\d{4}x");
    }

    #[test]
    fn test_simple_atoms_unchanged() {
        assert_eq!(rev(r"\("), r"\(");
        assert_eq!(rev("[abc]"), "[abc]");
        assert_eq!(rev("."), ".");
    }

    #[test]
    fn test_group_contents_reversed() {
        assert_eq!(rev("(ab)"), "(ba)");
        assert_eq!(rev("(?:ab)+c"), "c(?:ba)+");
        assert_eq!(rev("x(a(bc)d)*"), "(d(cb)a)*x");
    }

    #[test]
    fn test_lookarounds_flip() {
        assert_eq!(rev("(?=ab)"), "(?<=ba)");
        assert_eq!(rev("(?<=ab)"), "(?=ba)");
        assert_eq!(rev("(?!ab)"), "(?<!ba)");
        assert_eq!(rev("(?<!ab)"), "(?!ba)");
        assert_eq!(rev("a(?=bc)"), "(?<=cb)a");
    }

    #[test]
    fn test_alternation_order_preserved() {
        assert_eq!(rev("(ab|cd|ef)"), "(ba|dc|fe)");
        assert_eq!(rev("(a|(bc|de)f)"), "(a|f(cb|ed))");
        assert_eq!(rev("(|ab)"), "(|ba)");
    }

    #[test]
    fn test_branches_with_escapes_and_lookbehind() {
        assert_eq!(rev(r"(a\))"), r"(\)a)");
        assert_eq!(rev("(?<=a|bc)d"), "d(?=a|cb)");
    }

    #[test]
    fn test_unclosed_brace_after_atom() {
        assert_eq!(
            rev_err("a{2"),
            ParseError::new(
                ParseErrorKind::UnbalancedDelimiter {
                    open: '{',
                    close: '}'
                },
                1
            )
        );
    }

    #[test]
    fn test_anchor_escapes_are_not_mirrored() {
        // `\A` and `\z` keep their meaning, so they end up on the wrong side.
        assert_eq!(rev(r"\Aab"), r"ba\A");
        assert_eq!(rev(r"ab\z"), r"\zba");
    }

    #[test]
    fn test_multibyte_pattern() {
        assert_eq!(rev("héllo"), "olléh");
        assert_eq!(rev(r"\éa"), r"a\é");
    }

    #[test]
    fn test_double_reversal_round_trips() {
        let patterns = [
            "ab*c",
            "(?=x)y+",
            "(?<!a[bc])d{2,}",
            r"(foo|b\.r)?-(?:baz)*",
            "((a|b)c|d)e",
            "",
        ];
        for p in patterns {
            assert_eq!(rev(&rev(p)), p, "{p}");
        }
    }

    #[test]
    fn test_unbalanced_group() {
        let err = rev_err("(ab");
        assert_eq!(
            err,
            ParseError::new(
                ParseErrorKind::UnbalancedDelimiter {
                    open: '(',
                    close: ')'
                },
                0
            )
        );
        assert!(!err.is_defect());
    }

    #[test]
    fn test_truncated_escape() {
        assert_eq!(
            rev_err("ab\\"),
            ParseError::new(ParseErrorKind::TruncatedEscape, 2)
        );
    }

    #[test]
    fn test_bare_alternation_rejected() {
        assert_eq!(
            rev_err("a|bc"),
            ParseError::new(ParseErrorKind::UnrecognizedToken('|'), 1)
        );
    }

    #[test]
    fn test_error_position_inside_group() {
        assert_eq!(
            rev_err("x(ab|c$)"),
            ParseError::new(ParseErrorKind::UnrecognizedToken('$'), 6)
        );
    }

    #[test]
    fn test_splitting_error_beats_group_error() {
        // The group body is bad, but the trailing '^' is found first.
        assert_eq!(
            rev_err("(a$)b^").kind,
            ParseErrorKind::UnrecognizedToken('^')
        );
    }

    #[test]
    fn test_bar_inside_class_in_group_is_rejected() {
        assert!(matches!(
            rev_err("(a[|]b)").kind,
            ParseErrorKind::UnbalancedDelimiter { open: '[', .. }
        ));
    }

    #[test]
    fn test_paren_inside_class_is_rejected() {
        assert!(matches!(
            rev_err("(a[(]b)").kind,
            ParseErrorKind::UnbalancedDelimiter { open: '(', .. }
        ));
        assert_eq!(rev_err("(?=[)])").kind, ParseErrorKind::UnrecognizedToken(']'));
    }

    #[test]
    fn test_lazy_quantifier_rejected() {
        assert_eq!(rev_err("a*?").kind, ParseErrorKind::UnrecognizedToken('?'));
    }

    #[test]
    fn test_malformed_atoms_are_defects() {
        for atom in [
            Atom::Literal("ab"),
            Atom::Escape("ab"),
            Atom::Class("[ab"),
            Atom::Group("ab"),
        ] {
            let err = reverse_atom(atom, 4).expect_err("malformed atom");
            assert!(err.is_defect(), "{atom:?}");
            assert_eq!(err.position, 4);
        }
    }

    #[test]
    fn test_reverse_atom_borrows_simple_atoms() {
        assert!(matches!(
            reverse_atom(Atom::Class("[xy]"), 0),
            Ok(Cow::Borrowed("[xy]"))
        ));
    }
}
