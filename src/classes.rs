//! The character predicate builder: given a parsed atom, answer whether a
//! single input character matches it.

use crate::parser::{ClassItem, Node};

/// Test a single character against an atom node. Only valid for the atom
/// variants of [`Node`] — groups and backreferences are dispatched
/// elsewhere in the matcher and never reach here.
pub fn atom_matches(node: &Node, c: char) -> bool {
    match node {
        Node::Literal(lit) => c == *lit,
        Node::Wildcard => true,
        Node::Digit => c.is_ascii_digit(),
        Node::Word => c.is_ascii_alphanumeric() || c == '_',
        Node::Class { items, negated } => {
            let hit = class_items_match(items, c);
            if *negated { !hit } else { hit }
        }
        Node::Group { .. } | Node::Backref(_) => {
            unreachable!("atom_matches called on a non-atom node")
        }
    }
}

fn class_items_match(items: &[ClassItem], c: char) -> bool {
    items.iter().any(|item| match *item {
        ClassItem::Single(ch) => ch == c,
        ClassItem::Range(lo, hi) => lo <= c && c <= hi,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_class() {
        assert!(atom_matches(&Node::Digit, '7'));
        assert!(!atom_matches(&Node::Digit, 'a'));
    }

    #[test]
    fn word_class_includes_underscore() {
        assert!(atom_matches(&Node::Word, '_'));
        assert!(atom_matches(&Node::Word, 'Z'));
        assert!(atom_matches(&Node::Word, '3'));
        assert!(!atom_matches(&Node::Word, '-'));
    }

    #[test]
    fn wildcard_matches_anything() {
        assert!(atom_matches(&Node::Wildcard, '\n'));
        assert!(atom_matches(&Node::Wildcard, ' '));
    }

    #[test]
    fn negated_class_inverts() {
        let node = Node::Class { items: vec![ClassItem::Range('x', 'z')], negated: true };
        assert!(!atom_matches(&node, 'y'));
        assert!(atom_matches(&node, 'a'));
    }

    #[test]
    fn class_range_is_inclusive() {
        let node = Node::Class { items: vec![ClassItem::Range('a', 'c')], negated: false };
        assert!(atom_matches(&node, 'a'));
        assert!(atom_matches(&node, 'c'));
        assert!(!atom_matches(&node, 'd'));
    }
}
