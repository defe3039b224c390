use std::iter::Rev;
use std::ops::Deref;
use std::vec::Drain;

use crate::csp_assert_simple;

/// A stack of records split into decision levels. Popping never crosses into an earlier decision
/// level; [`Trail::synchronise`] is the only way to discard whole levels.
#[derive(Clone, Debug)]
pub(crate) struct Trail<T> {
    current_decision_level: usize,
    /// At index i is the position where the i-th decision level ends (exclusive) on the trail
    trail_delimiter: Vec<usize>,
    trail: Vec<T>,
}

// Not derived, to avoid imposing `Default` on `T`.
impl<T> Default for Trail<T> {
    fn default() -> Self {
        Trail {
            current_decision_level: Default::default(),
            trail_delimiter: Default::default(),
            trail: Default::default(),
        }
    }
}

impl<T> Trail<T> {
    pub(crate) fn increase_decision_level(&mut self) {
        self.current_decision_level += 1;
        self.trail_delimiter.push(self.trail.len());
    }

    pub(crate) fn get_decision_level(&self) -> usize {
        self.current_decision_level
    }

    /// Removes every entry above `new_decision_level`, yielding them most-recent-first.
    pub(crate) fn synchronise(&mut self, new_decision_level: usize) -> Rev<Drain<'_, T>> {
        csp_assert_simple!(new_decision_level < self.current_decision_level);

        let new_trail_len = self.trail_delimiter[new_decision_level];

        self.current_decision_level = new_decision_level;
        self.trail_delimiter.truncate(new_decision_level);
        self.trail.drain(new_trail_len..).rev()
    }

    pub(crate) fn push(&mut self, elem: T) {
        self.trail.push(elem)
    }

    /// The entries of the current decision level, oldest first.
    pub(crate) fn current_level(&self) -> &[T] {
        &self.trail[self.current_level_start()..]
    }

    /// Pops the most recent entry of the current decision level. Returns `None` when the current
    /// level is empty, even if earlier levels still hold entries.
    pub(crate) fn pop(&mut self) -> Option<T> {
        if self.trail.len() > self.current_level_start() {
            self.trail.pop()
        } else {
            None
        }
    }

    fn current_level_start(&self) -> usize {
        self.trail_delimiter.last().copied().unwrap_or(0)
    }
}

impl<T> Deref for Trail<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.trail
    }
}
