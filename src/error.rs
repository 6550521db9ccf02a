//! Errors raised while parsing a pattern.
//!
//! Only malformed patterns are errors here: match failure is never one. An
//! `Error` always means the pattern itself could not be turned into
//! something matchable, not that it failed to match a line.

use thiserror::Error;

/// Something wrong with a pattern string, caught at parse time.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// A `\` appeared as the final character of the pattern (or of a group
    /// body), with nothing left to escape.
    #[error("dangling escape at end of pattern")]
    DanglingEscape,

    /// A `[` was never closed by a matching `]`.
    #[error("unclosed character class: missing ']'")]
    UnclosedClass,

    /// A `(` was never closed by a matching `)`.
    #[error("unclosed group: missing ')'")]
    UnclosedGroup,

    /// A `)` appeared with no matching open `(`.
    #[error("unmatched ')'")]
    UnmatchedCloseGroup,

    /// `*` applied to a parenthesised group. Atoms allow `*`; groups only
    /// allow `?` and `+`.
    #[error("'*' is not supported on a group")]
    GroupStarUnsupported,
}
