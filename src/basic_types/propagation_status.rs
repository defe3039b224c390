use std::fmt::Display;
use std::fmt::Formatter;

use thiserror::Error;

use crate::basic_types::Prune;
use crate::constraints::ConstraintId;
use crate::variables::VariableId;

/// The result of invoking a propagator. On success it holds every prune that was performed, on
/// failure the [`Inconsistency`] holds the prunes performed before the failure was detected.
/// Either way the caller owns undoing those prunes.
pub type PropagationStatus = Result<Vec<Prune>, Inconsistency>;

/// A dead end found during propagation.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("inconsistency detected ({cause}) after {} prunes", .pruned.len())]
pub struct Inconsistency {
    /// The prunes performed by the failing call, in the order they happened.
    pub pruned: Vec<Prune>,
    pub cause: InconsistencyCause,
}

impl Inconsistency {
    pub(crate) fn empty_domain(variable: VariableId, pruned: Vec<Prune>) -> Inconsistency {
        Inconsistency {
            pruned,
            cause: InconsistencyCause::EmptyDomain(variable),
        }
    }

    pub(crate) fn violated(constraint: ConstraintId, pruned: Vec<Prune>) -> Inconsistency {
        Inconsistency {
            pruned,
            cause: InconsistencyCause::Violated(constraint),
        }
    }
}

/// Why a propagator failed. Only meant for diagnostics; a search driver treats every cause the
/// same way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InconsistencyCause {
    /// The current domain of the variable became empty.
    EmptyDomain(VariableId),
    /// A constraint over fully assigned variables is not satisfied.
    Violated(ConstraintId),
}

impl Display for InconsistencyCause {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            InconsistencyCause::EmptyDomain(variable) => write!(f, "{variable} has an empty domain"),
            InconsistencyCause::Violated(constraint) => write!(f, "{constraint} is violated"),
        }
    }
}
