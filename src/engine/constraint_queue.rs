use std::collections::VecDeque;

use crate::basic_types::HashSet;
use crate::constraints::ConstraintId;
use crate::csp_assert_eq_simple;
use crate::csp_assert_moderate;

/// FIFO queue of constraints which still need to be revised. A constraint is pending at most once;
/// once popped it may be enqueued again.
#[derive(Debug, Default)]
pub(crate) struct ConstraintQueue {
    queue: VecDeque<ConstraintId>,
    present_constraints: HashSet<ConstraintId>,
}

impl ConstraintQueue {
    pub(crate) fn is_empty(&self) -> bool {
        self.present_constraints.is_empty()
    }

    pub(crate) fn len(&self) -> usize {
        self.queue.len()
    }

    /// Adds `constraint` to the back of the queue unless it is already pending. Returns whether it
    /// was added.
    pub(crate) fn enqueue(&mut self, constraint: ConstraintId) -> bool {
        if !self.present_constraints.insert(constraint) {
            return false;
        }

        self.queue.push_back(constraint);
        true
    }

    pub(crate) fn pop(&mut self) -> Option<ConstraintId> {
        let next_constraint = self.queue.pop_front()?;

        let was_present = self.present_constraints.remove(&next_constraint);
        csp_assert_moderate!(was_present);
        csp_assert_eq_simple!(self.queue.len(), self.present_constraints.len());

        Some(next_constraint)
    }

    pub(crate) fn clear(&mut self) {
        self.queue.clear();
        self.present_constraints.clear();
    }
}
