//! The capture slot table: mutable shared state for a single match attempt,
//! with explicit snapshot/restore at every backtrack point that might have
//! written it.

/// Ordered, 1-indexed (by capture group number) capture slots. Slot `n`
/// holds the text last captured by group `n` on the current search path,
/// or `None` if that path has never entered group `n`.
#[derive(Debug, Clone)]
pub struct Captures {
    slots: Vec<Option<Vec<char>>>,
}

/// An opaque snapshot of a [`Captures`] table, taken before a backtrack
/// point and handed back to [`Captures::restore`] if that point is
/// abandoned.
pub type Snapshot = Vec<Option<Vec<char>>>;

impl Captures {
    pub fn new(num_groups: usize) -> Captures {
        Captures { slots: vec![None; num_groups] }
    }

    /// The text most recently captured by group `n` (1-based), if any path
    /// to this point has set it.
    pub fn get(&self, n: usize) -> Option<&[char]> {
        self.slots.get(n - 1).and_then(|slot| slot.as_deref())
    }

    pub fn set(&mut self, n: usize, text: &[char]) {
        if let Some(slot) = self.slots.get_mut(n - 1) {
            *slot = Some(text.to_vec());
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        self.slots.clone()
    }

    pub fn restore(&mut self, snapshot: Snapshot) {
        self.slots = snapshot;
    }
}
