//! The propagation strategies which can be used during backtracking search, from weakest to
//! strongest:
//! - [`PlainCheck`] only checks constraints whose variables are all assigned;
//! - [`ForwardCheck`] additionally prunes the last unassigned variable of a constraint;
//! - [`GeneralisedArcConsistency`] prunes every value without a support, until a fixpoint.
//!
//! See [`crate::Propagator`] for the contract they share with the search driver.

mod forward_check;
mod gac;
mod plain_check;

use std::fmt::Display;
use std::fmt::Formatter;

use clap::ValueEnum;
pub use forward_check::ForwardCheck;
pub use gac::GeneralisedArcConsistency;
pub use plain_check::PlainCheck;

use crate::constraints::ConstraintId;
use crate::engine::ConstraintStore;
use crate::variables::VariableId;
use crate::Propagator;

/// Selects one of the propagators of this module, e.g. from the command line of a search driver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, ValueEnum)]
pub enum PropagationStrategy {
    /// Check fully assigned constraints only.
    PlainCheck,
    /// Prune the last unassigned variable of every constraint.
    ForwardCheck,
    /// Enforce generalised arc consistency.
    #[default]
    #[value(name = "gac")]
    GeneralisedArcConsistency,
}

impl PropagationStrategy {
    pub fn create(self) -> Box<dyn Propagator> {
        match self {
            PropagationStrategy::PlainCheck => Box::new(PlainCheck),
            PropagationStrategy::ForwardCheck => Box::new(ForwardCheck),
            PropagationStrategy::GeneralisedArcConsistency => {
                Box::new(GeneralisedArcConsistency::default())
            }
        }
    }
}

impl Display for PropagationStrategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.to_possible_value() {
            Some(value) => write!(f, "{}", value.get_name()),
            None => write!(f, "{self:?}"),
        }
    }
}

/// The constraints to consider: those containing the newly assigned variable, or all of them
/// before search starts.
fn candidate_constraints(
    constraints: &ConstraintStore,
    new_variable: Option<VariableId>,
) -> &[ConstraintId] {
    match new_variable {
        Some(variable) => constraints.constraints_containing(variable),
        None => constraints.all_constraints(),
    }
}
