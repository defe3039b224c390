use super::ConstraintStore;
use super::VariableNames;
use crate::basic_types::Prune;
use crate::variables::VariableId;
use crate::Domains;

/// The view of a [`crate::Problem`] handed to a propagator: the constraints can only be read, the
/// domains can only shrink.
#[derive(Debug)]
pub struct PropagationContextMut<'a> {
    domains: &'a mut Domains,
    constraints: &'a ConstraintStore,
    variable_names: &'a VariableNames,
}

impl<'a> PropagationContextMut<'a> {
    pub(crate) fn new(
        domains: &'a mut Domains,
        constraints: &'a ConstraintStore,
        variable_names: &'a VariableNames,
    ) -> Self {
        PropagationContextMut {
            domains,
            constraints,
            variable_names,
        }
    }

    pub fn domains(&self) -> &Domains {
        self.domains
    }

    /// The constraints outlive the context, so they can be read while domains are being changed.
    pub fn constraints(&self) -> &'a ConstraintStore {
        self.constraints
    }

    /// Removes `value` from the current domain of `variable` and records the prune on the trail.
    ///
    /// # Panics
    /// If `value` is not in the current domain of `variable`.
    pub fn remove(&mut self, variable: VariableId, value: i32) -> Prune {
        self.domains.remove(variable, value)
    }

    /// The name of the variable, for logging.
    pub fn describe(&self, variable: VariableId) -> String {
        self.variable_names.describe(variable)
    }
}
