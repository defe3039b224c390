use thiserror::Error;

#[cfg(doc)]
use crate::Problem;
use crate::variables::VariableId;

/// Errors related to adding variables and constraints to a [`Problem`].
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConstraintOperationError {
    /// A variable must start with at least one value in its domain.
    #[error("Creating the variable failed because its domain is empty")]
    EmptyDomain,
    /// A constraint must constrain at least one variable.
    #[error("Adding the constraint failed because its scope is empty")]
    EmptyScope,
    /// The scope refers to a variable which was not created on this [`Problem`].
    #[error("Adding the constraint failed because {0} is not part of the problem")]
    UnknownVariable(VariableId),
    /// A tuple of a table constraint does not have one value per scope position.
    #[error("Tuple has {actual} values but the scope has {expected} variables")]
    ArityMismatch { expected: usize, actual: usize },
}
