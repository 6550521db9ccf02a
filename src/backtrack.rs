//! The recursive backtracking matcher.
//!
//! `match_terms` enumerates match lengths for a sequence of terms against a
//! slice of input, greedy-first, by recursion with an accept continuation
//! rather than materializing a lazy sequence: stable Rust has no
//! generators, so an accept-continuation callback stands in for one.
//! `accept` is called once per candidate total match length (measured from
//! the start of the slice passed to the outermost call); it returns `true`
//! to stop searching (a satisfactory match was found) or `false` to keep
//! backtracking.
//!
//! Capture writes happen only inside group matching, and are snapshotted
//! and restored around every alternative and every `+` repetition.

use crate::captures::Captures;
use crate::classes::atom_matches;
use crate::input::Input;
use crate::parser::{Node, Quant, Term};

type Accept<'k> = dyn FnMut(&mut Captures, usize) -> bool + 'k;

/// Match `terms` against the front of `input`, calling `accept` for every
/// successful total length. Returns whatever `accept` returned the last
/// time it was invoked along the path that terminated the search (i.e.
/// `true` iff some invocation of `accept` returned `true`).
pub fn match_terms(input: Input, terms: &[Term], caps: &mut Captures, accept: &mut Accept<'_>) -> bool {
    let Some((term, rest)) = terms.split_first() else {
        return accept(caps, 0);
    };

    match &term.node {
        Node::Backref(n) => match_backref(input, *n, rest, caps, accept),
        Node::Group { index, alternatives } => {
            match_group(input, *index, alternatives, term.quant, rest, caps, accept)
        }
        atom => match_atom(input, atom, term.quant, rest, caps, accept),
    }
}

fn match_atom(
    input: Input,
    atom: &Node,
    quant: Quant,
    rest: &[Term],
    caps: &mut Captures,
    accept: &mut Accept<'_>,
) -> bool {
    match quant {
        Quant::One => {
            if input.first().is_some_and(|c| atom_matches(atom, c)) {
                match_terms(input.tail(1), rest, caps, &mut |caps, r| accept(caps, 1 + r))
            } else {
                false
            }
        }
        Quant::OneOrMore => {
            let max = greedy_run(input, atom);
            if max == 0 {
                return false;
            }
            for k in (1..=max).rev() {
                if match_terms(input.tail(k), rest, caps, &mut |caps, r| accept(caps, k + r)) {
                    return true;
                }
            }
            false
        }
        Quant::ZeroOrMore => {
            let max = greedy_run(input, atom);
            for k in (0..=max).rev() {
                if match_terms(input.tail(k), rest, caps, &mut |caps, r| accept(caps, k + r)) {
                    return true;
                }
            }
            false
        }
        Quant::ZeroOrOne => {
            if input.first().is_some_and(|c| atom_matches(atom, c))
                && match_terms(input.tail(1), rest, caps, &mut |caps, r| accept(caps, 1 + r))
            {
                return true;
            }
            match_terms(input, rest, caps, accept)
        }
    }
}

/// The longest prefix of `input` whose characters all satisfy `atom`.
fn greedy_run(input: Input, atom: &Node) -> usize {
    let mut k = 0;
    while k < input.len() && atom_matches(atom, input[k]) {
        k += 1;
    }
    k
}

fn match_backref(
    input: Input,
    n: u8,
    rest: &[Term],
    caps: &mut Captures,
    accept: &mut Accept<'_>,
) -> bool {
    let Some(captured) = caps.get(n as usize) else {
        return false;
    };
    let len = captured.len();
    if len <= input.len() && &input[..len] == captured {
        match_terms(input.tail(len), rest, caps, &mut |caps, r| accept(caps, len + r))
    } else {
        false
    }
}

/// Match `alternatives` once against the front of `input`, writing `index`
/// on success. Restores captures to their pre-attempt state on every
/// alternative that does not ultimately lead to an accepted match.
fn match_group_once(
    input: Input,
    index: usize,
    alternatives: &[Vec<Term>],
    caps: &mut Captures,
    k: &mut Accept<'_>,
) -> bool {
    for alt in alternatives {
        let snapshot = caps.snapshot();
        let matched = match_terms(input, alt, caps, &mut |caps, m| {
            caps.set(index, &input[..m]);
            k(caps, m)
        });
        if matched {
            return true;
        }
        caps.restore(snapshot);
    }
    false
}

/// One-or-more repetitions of a group: try extending the repetition first
/// (greedy), then try stopping after the repetition just matched.
fn match_group_plus(
    input: Input,
    index: usize,
    alternatives: &[Vec<Term>],
    caps: &mut Captures,
    k: &mut Accept<'_>,
) -> bool {
    match_group_once(input, index, alternatives, caps, &mut |caps, m1| {
        let snapshot = caps.snapshot();
        if match_group_plus(input.tail(m1), index, alternatives, caps, &mut |caps, more| {
            k(caps, m1 + more)
        }) {
            return true;
        }
        caps.restore(snapshot);
        k(caps, m1)
    })
}

fn match_group(
    input: Input,
    index: usize,
    alternatives: &[Vec<Term>],
    quant: Quant,
    rest: &[Term],
    caps: &mut Captures,
    accept: &mut Accept<'_>,
) -> bool {
    match quant {
        Quant::One => match_group_once(input, index, alternatives, caps, &mut |caps, m| {
            match_terms(input.tail(m), rest, caps, &mut |caps, r| accept(caps, m + r))
        }),
        Quant::OneOrMore => match_group_plus(input, index, alternatives, caps, &mut |caps, m| {
            match_terms(input.tail(m), rest, caps, &mut |caps, r| accept(caps, m + r))
        }),
        Quant::ZeroOrOne => {
            if match_group_once(input, index, alternatives, caps, &mut |caps, m| {
                match_terms(input.tail(m), rest, caps, &mut |caps, r| accept(caps, m + r))
            }) {
                return true;
            }
            match_terms(input, rest, caps, accept)
        }
        Quant::ZeroOrMore => {
            unreachable!("'*' on a group is rejected at parse time")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_sequence;

    fn match_lengths(pattern: &str, text: &str) -> Vec<usize> {
        let pat_chars: Vec<char> = pattern.chars().collect();
        let mut counter = 0;
        let terms = parse_sequence(&pat_chars, &mut counter).unwrap();
        let text_chars: Vec<char> = text.chars().collect();
        let mut caps = Captures::new(counter);
        let mut lengths = Vec::new();
        match_terms(Input::new(&text_chars), &terms, &mut caps, &mut |_, len| {
            lengths.push(len);
            false
        });
        lengths
    }

    #[test]
    fn greedy_first_star() {
        assert_eq!(match_lengths("a*", "aaab"), vec![3, 2, 1, 0]);
    }

    #[test]
    fn greedy_first_plus() {
        assert_eq!(match_lengths("a+", "aaab"), vec![3, 2, 1]);
    }

    #[test]
    fn optional_tries_one_then_zero() {
        assert_eq!(match_lengths("a?", "ab"), vec![1, 0]);
    }

    #[test]
    fn capture_group_records_last_iteration_committed() {
        let pat_chars: Vec<char> = "(a+)a".chars().collect();
        let mut counter = 0;
        let terms = parse_sequence(&pat_chars, &mut counter).unwrap();
        let text_chars: Vec<char> = "aaaa".chars().collect();
        let mut caps = Captures::new(counter);
        let matched = match_terms(Input::new(&text_chars), &terms, &mut caps, &mut |_, _| true);
        assert!(matched);
        assert_eq!(caps.get(1), Some(&['a', 'a', 'a'][..]));
    }

    #[test]
    fn backreference_requires_exact_repeat() {
        let pat_chars: Vec<char> = r"(a+)b\1".chars().collect();
        let mut counter = 0;
        let terms = parse_sequence(&pat_chars, &mut counter).unwrap();
        for (text, expect) in [("aaabaaa", true), ("aaabaa", false)] {
            let text_chars: Vec<char> = text.chars().collect();
            let mut caps = Captures::new(counter);
            let matched =
                match_terms(Input::new(&text_chars), &terms, &mut caps, &mut |_, len| len == text_chars.len());
            assert_eq!(matched, expect, "text={text}");
        }
    }
}
