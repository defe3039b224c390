use thiserror::Error;

use crate::basic_types::Prune;
use crate::variables::VariableId;

/// Misuse of the domain store, e.g. restoring a value which was never pruned.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{0} is not a variable of this problem")]
    UnknownVariable(VariableId),
    #[error("{value} is not in the initial domain of {variable}")]
    UnknownValue { variable: VariableId, value: i32 },
    #[error("{value} is already pruned from {variable}")]
    AlreadyPruned { variable: VariableId, value: i32 },
    #[error("{value} is not pruned from {variable}")]
    NotPruned { variable: VariableId, value: i32 },
    #[error("{value} is not in the current domain of {variable}")]
    NotInDomain { variable: VariableId, value: i32 },
    #[error("{0} is already assigned")]
    AlreadyAssigned(VariableId),
    #[error("{0} is not assigned")]
    NotAssigned(VariableId),
    /// Prunes must be restored most-recent-first; `expected` is the prune on the current decision
    /// level which `restored` would have to match (if any).
    #[error("restoring {restored} out of order, the most recent prune is {expected:?}")]
    RestoreOutOfOrder {
        restored: Prune,
        expected: Option<Prune>,
    },
}
