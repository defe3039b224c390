use std::fmt::Debug;

use crate::basic_types::PropagationStatus;
#[cfg(doc)]
use crate::basic_types::Inconsistency;
use crate::variables::VariableId;
use crate::Problem;

/// A propagation strategy for backtracking search. After the search driver assigns a variable it
/// calls [`Propagator::propagate`] with that variable; before the first assignment it calls it
/// with `None`.
///
/// A propagator only ever removes values from current domains. Every removal is reported in the
/// returned prune list, on success as well as in the [`Inconsistency`] on failure, and it is up to
/// the caller to undo them with [`Problem::restore`] when it backtracks. Propagators never prune a
/// value which is already pruned.
pub trait Propagator: Debug {
    /// Return the name of the propagator, this is a convenience method that is used for printing.
    fn name(&self) -> &str;

    /// Reduce the domains of `problem` given that `new_variable` was just assigned, or establish
    /// initial consistency if `new_variable` is `None`.
    fn propagate(
        &mut self,
        problem: &mut Problem,
        new_variable: Option<VariableId>,
    ) -> PropagationStatus;
}
