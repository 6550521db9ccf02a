//! The top-level driver: strips anchors, picks starting positions, and
//! consumes the matcher's enumeration until a verdict is reached.

use crate::backtrack::match_terms;
use crate::captures::Captures;
use crate::input::Input;
use crate::parser::Term;

/// `^` / `$` presence, and the pattern with them stripped. Anchors are only
/// recognized at the pattern's extremes; the degenerate patterns `^`, `$`,
/// `^$` fall out of the slicing below without any special-casing.
pub fn strip_anchors(chars: &[char]) -> (bool, bool, &[char]) {
    let start_anchored = chars.first() == Some(&'^');
    let end_anchored = chars.last() == Some(&'$');
    let lo = if start_anchored { 1 } else { 0 };
    let mut hi = chars.len();
    if end_anchored {
        hi -= 1;
    }
    (start_anchored, end_anchored, &chars[lo..hi])
}

/// Does `terms` (with the given anchoring) match somewhere in `input`?
///
/// The capture table is allocated once per call and, in the unanchored
/// case, is *not* reset between starting offsets: a backreference can only
/// ever observe a slot that some earlier step on its own path has already
/// set, so leftover captures from an abandoned offset are harmless.
pub fn has_match(
    input: &[char],
    terms: &[Term],
    num_groups: usize,
    start_anchored: bool,
    end_anchored: bool,
) -> bool {
    let mut caps = Captures::new(num_groups);

    if start_anchored {
        return attempt(Input::new(input), terms, &mut caps, end_accepts(end_anchored, input.len()));
    }

    for i in 0..=input.len() {
        let need = if end_anchored { Some(input.len() - i) } else { None };
        if attempt(Input::new(&input[i..]), terms, &mut caps, accept_for(need)) {
            return true;
        }
    }
    false
}

fn attempt(
    input: Input,
    terms: &[Term],
    caps: &mut Captures,
    mut accept: impl FnMut(usize) -> bool,
) -> bool {
    match_terms(input, terms, caps, &mut |_caps, len| accept(len))
}

fn end_accepts(end_anchored: bool, full_len: usize) -> impl FnMut(usize) -> bool {
    accept_for(if end_anchored { Some(full_len) } else { None })
}

/// Build the accept predicate used by a single starting offset: if `need`
/// is `Some(n)`, only a match of length exactly `n` is satisfactory
/// (anchored-at-end), and the search keeps backtracking past shorter or
/// longer ones; otherwise the first match of any length is satisfactory.
fn accept_for(need: Option<usize>) -> impl FnMut(usize) -> bool {
    move |len| match need {
        Some(n) => len == n,
        None => true,
    }
}
