use std::fmt::Debug;
use std::fmt::Formatter;

use super::Constraint;
use crate::variables::VariableId;

/// A constraint defined by an arbitrary predicate over complete tuples. Support is found by
/// enumerating the current domains, so this is best suited to small scopes.
pub struct PredicateConstraint<F> {
    name: String,
    scope: Box<[VariableId]>,
    predicate: F,
}

impl<F: Fn(&[i32]) -> bool> PredicateConstraint<F> {
    pub fn new(name: impl Into<String>, scope: impl Into<Box<[VariableId]>>, predicate: F) -> Self {
        PredicateConstraint {
            name: name.into(),
            scope: scope.into(),
            predicate,
        }
    }
}

impl<F> Debug for PredicateConstraint<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PredicateConstraint")
            .field("name", &self.name)
            .field("scope", &self.scope)
            .finish_non_exhaustive()
    }
}

impl<F: Fn(&[i32]) -> bool> Constraint for PredicateConstraint<F> {
    fn name(&self) -> &str {
        &self.name
    }

    fn scope(&self) -> &[VariableId] {
        &self.scope
    }

    fn check(&self, values: &[i32]) -> bool {
        (self.predicate)(values)
    }
}
