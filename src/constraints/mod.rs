//! Defines the constraints which can be added to a [`crate::Problem`].
//!
//! A constraint is anything implementing [`Constraint`]. The functions in this module create the
//! common ones:
//! ```
//! use csp_propagators::constraints;
//! use csp_propagators::Problem;
//!
//! let mut problem = Problem::default();
//! let x = problem.new_bounded_variable(0, 3).unwrap();
//! let y = problem.new_bounded_variable(0, 3).unwrap();
//!
//! problem.add_constraint(constraints::not_equals(x, y)).unwrap();
//! problem.add_constraint(constraints::equals([x, y], 3)).unwrap();
//! ```

mod all_different;
mod arithmetic;
mod constraint;
mod predicate;
mod table;

pub use all_different::AllDifferent;
pub use arithmetic::*;
pub use constraint::Constraint;
pub use constraint::ConstraintId;
pub use predicate::PredicateConstraint;
pub use table::TableConstraint;

use crate::basic_types::ConstraintOperationError;
use crate::variables::VariableId;

/// Creates the [`Constraint`] `lhs != rhs`.
pub fn not_equals(lhs: VariableId, rhs: VariableId) -> NotEqual {
    NotEqual::new(lhs, rhs)
}

/// Creates the [`Constraint`] that all `variables` take different values.
pub fn all_different(variables: impl Into<Box<[VariableId]>>) -> AllDifferent {
    AllDifferent::new(variables)
}

/// Creates the [`Constraint`] `\sum terms_i = rhs`.
pub fn equals(terms: impl Into<Box<[VariableId]>>, rhs: i32) -> LinearEqual {
    LinearEqual::new(terms, rhs)
}

/// Creates a [`Constraint`] from its satisfying tuples. Fails if a tuple does not have one value
/// for every variable of `scope`.
pub fn table(
    scope: impl Into<Box<[VariableId]>>,
    tuples: impl IntoIterator<Item = Vec<i32>>,
) -> Result<TableConstraint, ConstraintOperationError> {
    TableConstraint::new("Table", scope, tuples)
}

/// Creates a [`Constraint`] which accepts the tuples for which `predicate` holds.
pub fn predicate<F: Fn(&[i32]) -> bool>(
    name: impl Into<String>,
    scope: impl Into<Box<[VariableId]>>,
    predicate: F,
) -> PredicateConstraint<F> {
    PredicateConstraint::new(name, scope, predicate)
}
