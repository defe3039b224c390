//! # csp-propagators
//! Constraint propagation for backtracking search over finite-domain constraint satisfaction
//! problems. A search driver builds a [`Problem`], assigns a variable, and asks one of the
//! [`propagators`] to prune the values which can no longer be part of a solution:
//! * [`propagators::PlainCheck`] only checks constraints whose variables are all assigned.
//! * [`propagators::ForwardCheck`] prunes the last unassigned variable of a constraint.
//! * [`propagators::GeneralisedArcConsistency`] prunes every unsupported value until a fixpoint.
//!
//! Every call reports the values it pruned, also when it detects a dead end. The driver restores
//! exactly those values when it backtracks:
//! ```
//! use csp_propagators::constraints;
//! use csp_propagators::propagators::PropagationStrategy;
//! use csp_propagators::Problem;
//!
//! let mut problem = Problem::default();
//! let x = problem.new_bounded_variable(0, 1).unwrap();
//! let y = problem.new_bounded_variable(0, 1).unwrap();
//! problem.add_constraint(constraints::not_equals(x, y)).unwrap();
//!
//! let mut propagator = PropagationStrategy::ForwardCheck.create();
//!
//! problem.assign(x, 0).unwrap();
//! let pruned = propagator.propagate(&mut problem, Some(x)).unwrap();
//! assert_eq!(vec![1], problem.domains().current_domain(y).collect::<Vec<_>>());
//!
//! problem.restore(&pruned).unwrap();
//! problem.unassign(x).unwrap();
//! assert_eq!(2, problem.domains().current_domain_size(y));
//! ```

pub mod asserts;
mod basic_types;
pub mod constraints;
mod engine;
pub mod propagators;

pub mod variables {
    pub use crate::engine::variables::VariableId;
}

pub use basic_types::ConstraintOperationError;
pub use basic_types::DomainError;
pub use basic_types::Inconsistency;
pub use basic_types::InconsistencyCause;
pub use basic_types::PropagationStatus;
pub use basic_types::Prune;
pub use engine::ConstraintStore;
pub use engine::Domains;
pub use engine::Problem;
pub use engine::PropagationContextMut;
pub use engine::Propagator;
