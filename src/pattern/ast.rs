//! Decomposition types for regex patterns.
//!
//! Everything here borrows from the pattern being reversed; nothing is copied
//! until the reversed output is assembled.

/// The smallest indivisible unit of a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Atom<'a> {
    /// One character from the plain-unit set, e.g. `a`, `7`, `.`.
    Literal(&'a str),
    /// A backslash and the character after it, e.g. `\d`, `\(`.
    Escape(&'a str),
    /// A bracketed character class including its brackets, e.g. `[a-z]`.
    Class(&'a str),
    /// A parenthesised group including its parentheses, e.g. `(?=ab|c)`.
    Group(&'a str),
}

impl<'a> Atom<'a> {
    pub fn as_str(&self) -> &'a str {
        match *self {
            Atom::Literal(s) | Atom::Escape(s) | Atom::Class(s) | Atom::Group(s) => s,
        }
    }
}

/// An atom with the repetition operator that follows it.
///
/// The operator is one of `*`, `+`, `?`, a braced `{...}` quantifier, or empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece<'a> {
    pub atom: Atom<'a>,
    pub operator: &'a str,
    /// Byte offset of the atom in the top-level pattern.
    pub offset: usize,
}

/// How a group participates in matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupTag {
    Capturing,          // (...)
    NonCapturing,       // (?:...)
    Lookahead,          // (?=...)
    Lookbehind,         // (?<=...)
    NegativeLookahead,  // (?!...)
    NegativeLookbehind, // (?<!...)
}

impl GroupTag {
    /// The text between `(` and the group body.
    pub fn as_str(self) -> &'static str {
        match self {
            GroupTag::Capturing => "",
            GroupTag::NonCapturing => "?:",
            GroupTag::Lookahead => "?=",
            GroupTag::Lookbehind => "?<=",
            GroupTag::NegativeLookahead => "?!",
            GroupTag::NegativeLookbehind => "?<!",
        }
    }

    /// The tag to use once the group body matches in the opposite direction.
    ///
    /// Applying this twice returns the original tag.
    pub fn flipped(self) -> GroupTag {
        match self {
            GroupTag::Capturing => GroupTag::Capturing,
            GroupTag::NonCapturing => GroupTag::NonCapturing,
            GroupTag::Lookahead => GroupTag::Lookbehind,
            GroupTag::Lookbehind => GroupTag::Lookahead,
            GroupTag::NegativeLookahead => GroupTag::NegativeLookbehind,
            GroupTag::NegativeLookbehind => GroupTag::NegativeLookahead,
        }
    }
}

/// One `|`-separated arm of a group body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Branch<'a> {
    pub text: &'a str,
    /// Byte offset of the branch in the top-level pattern.
    pub offset: usize,
}

/// A group split into its tag and alternation branches.
///
/// There is always at least one branch; `()` has a single empty one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<'a> {
    pub tag: GroupTag,
    pub branches: Vec<Branch<'a>>,
}
