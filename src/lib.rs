//! A small regular expression engine: literals, `.`, character classes,
//! `\d`/`\w`, the quantifiers `?`/`*`/`+`, parenthesised capturing groups
//! with `|` alternation, numbered backreferences `\1`-`\9`, and the
//! anchors `^`/`$`.
//!
//! This is a recursive backtracking matcher, not a compiled automaton:
//! backreferences make a DFA or Thompson-NFA construction impossible, so
//! unlike a general-purpose engine this one parses the pattern into a
//! small AST once and walks it directly against the input, accepting
//! worst-case exponential backtracking in exchange for supporting
//! backreferences at all.
//!
//! ```
//! use rgrep::Regex;
//!
//! let re = Regex::new(r"(\w+)-(\w+) \1").unwrap();
//! assert!(re.is_match("foo-bar foo"));
//! assert!(!re.is_match("foo-bar baz"));
//! ```

mod backtrack;
mod captures;
mod classes;
mod error;
mod exec;
mod input;
mod parser;

pub use error::PatternError as Error;

use parser::{parse_sequence, Term};

/// A compiled pattern, ready to test lines against.
#[derive(Debug, Clone)]
pub struct Regex {
    source: String,
    start_anchored: bool,
    end_anchored: bool,
    terms: Vec<Term>,
    num_groups: usize,
}

impl Regex {
    /// Parse `pattern` into a matchable `Regex`.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the pattern is malformed: a dangling `\`, an
    /// unclosed `[` or `(`, an unmatched `)`, or `*` applied to a group.
    pub fn new(pattern: &str) -> Result<Regex, Error> {
        let chars: Vec<char> = pattern.chars().collect();
        let (start_anchored, end_anchored, inner) = exec::strip_anchors(&chars);
        let mut num_groups = 0;
        let terms = parse_sequence(inner, &mut num_groups)?;
        Ok(Regex { source: pattern.to_string(), start_anchored, end_anchored, terms, num_groups })
    }

    /// Does this pattern match anywhere in `text`?
    pub fn is_match(&self, text: &str) -> bool {
        let chars: Vec<char> = text.chars().collect();
        exec::has_match(&chars, &self.terms, self.num_groups, self.start_anchored, self.end_anchored)
    }

    /// The original pattern string this `Regex` was compiled from.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Anchor idempotence: wrapping any anchor-free pattern in `^...$`
        /// matching implies some unanchored match of the inner pattern
        /// consumes the input exactly.
        #[test]
        fn anchor_idempotence(s in "[a-c]{0,6}") {
            let inner = "a+b*c?";
            let anchored = Regex::new(&format!("^{inner}$")).unwrap();
            let unanchored = Regex::new(inner).unwrap();
            if anchored.is_match(&s) {
                prop_assert!(unanchored.is_match(&s));
            }
        }

        /// Literal round-trip over strings free of metacharacters.
        #[test]
        fn literal_round_trip_prop(s in "[a-zA-Z0-9 ]{0,12}") {
            let re = Regex::new(&s).unwrap();
            prop_assert!(re.is_match(&s));
        }

        /// Quantifier monotonicity, generalized to `\d`: any run of digits
        /// that `\d+$` matches, `\d*$` matches too.
        #[test]
        fn quantifier_monotonicity_digits(s in "[0-9]{0,8}") {
            let plus = Regex::new(r"^\d+$").unwrap();
            let star = Regex::new(r"^\d*$").unwrap();
            if plus.is_match(&s) {
                prop_assert!(star.is_match(&s));
            }
        }
    }
}
