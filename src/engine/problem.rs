use std::fmt::Display;

use log::warn;

use super::PropagationContextMut;
use super::VariableNames;
use crate::basic_types::ConstraintOperationError;
use crate::basic_types::DomainError;
use crate::basic_types::KeyedVec;
use crate::basic_types::Prune;
use crate::constraints::Constraint;
use crate::constraints::ConstraintId;
use crate::csp_assert_advanced;
use crate::variables::VariableId;
use crate::Domains;

/// The constraints of a [`Problem`], indexed by the variables in their scope.
#[derive(Debug, Default)]
pub struct ConstraintStore {
    constraints: KeyedVec<ConstraintId, Box<dyn Constraint>>,
    all_constraints: Vec<ConstraintId>,
    /// For every variable the constraints which have it in their scope, in the order the
    /// constraints were added. A constraint is listed once even if the variable occurs in its scope
    /// multiple times.
    constraints_by_variable: KeyedVec<VariableId, Vec<ConstraintId>>,
}

impl ConstraintStore {
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.len() == 0
    }

    pub fn all_constraints(&self) -> &[ConstraintId] {
        &self.all_constraints
    }

    pub fn constraints_containing(&self, variable: VariableId) -> &[ConstraintId] {
        &self.constraints_by_variable[variable]
    }

    pub fn get(&self, constraint: ConstraintId) -> &dyn Constraint {
        self.constraints[constraint].as_ref()
    }

    fn add_variable(&mut self) {
        let _ = self.constraints_by_variable.push(Vec::new());
    }

    fn add(&mut self, constraint: Box<dyn Constraint>) -> ConstraintId {
        let scope = constraint.scope().to_vec();
        let id = self.constraints.push(constraint);
        self.all_constraints.push(id);

        for variable in scope {
            let containing = &mut self.constraints_by_variable[variable];
            if containing.last() != Some(&id) {
                containing.push(id);
            }
        }

        csp_assert_advanced!(self.constraints[id]
            .scope()
            .iter()
            .all(|&variable| self.constraints_by_variable[variable].contains(&id)));

        id
    }
}

/// A constraint satisfaction problem: variables with finite domains and constraints over them.
///
/// The problem is built up front with [`Problem::new_variable`] and [`Problem::add_constraint`].
/// During search the domains change through [`Problem::assign`]/[`Problem::unassign`], through the
/// prunes of a [`crate::Propagator`], and through [`Problem::restore`] which undoes those prunes.
#[derive(Debug, Default)]
pub struct Problem {
    domains: Domains,
    constraints: ConstraintStore,
    variable_names: VariableNames,
}

impl Problem {
    /// Create a new variable with the given values as its initial domain.
    pub fn new_variable(
        &mut self,
        values: impl IntoIterator<Item = i32>,
    ) -> Result<VariableId, ConstraintOperationError> {
        let mut values = values.into_iter().peekable();
        if values.peek().is_none() {
            return Err(ConstraintOperationError::EmptyDomain);
        }

        let variable = self.domains.grow(values);
        self.constraints.add_variable();

        Ok(variable)
    }

    /// Create a new variable with the domain `[lower_bound..=upper_bound]`.
    pub fn new_bounded_variable(
        &mut self,
        lower_bound: i32,
        upper_bound: i32,
    ) -> Result<VariableId, ConstraintOperationError> {
        self.new_variable(lower_bound..=upper_bound)
    }

    /// Create a new variable with a name, which is used when logging.
    pub fn new_named_variable(
        &mut self,
        name: impl Display,
        values: impl IntoIterator<Item = i32>,
    ) -> Result<VariableId, ConstraintOperationError> {
        let variable = self.new_variable(values)?;
        self.variable_names.add(variable, name.to_string());

        Ok(variable)
    }

    /// Add a constraint over variables of this problem.
    pub fn add_constraint(
        &mut self,
        constraint: impl Constraint + 'static,
    ) -> Result<ConstraintId, ConstraintOperationError> {
        let scope = constraint.scope();

        if scope.is_empty() {
            return Err(ConstraintOperationError::EmptyScope);
        }
        if let Some(&unknown) = scope
            .iter()
            .find(|&&variable| !self.domains.is_known(variable))
        {
            return Err(ConstraintOperationError::UnknownVariable(unknown));
        }
        if self.domains.decision_level() > 0 || self.domains.num_trail_entries() > 0 {
            warn!(
                "Constraint '{}' is added while prunes are outstanding; they are not revisited for it",
                constraint.name()
            );
        }

        Ok(self.constraints.add(Box::new(constraint)))
    }

    pub fn domains(&self) -> &Domains {
        &self.domains
    }

    pub fn constraints(&self) -> &ConstraintStore {
        &self.constraints
    }

    pub fn all_constraints(&self) -> &[ConstraintId] {
        self.constraints.all_constraints()
    }

    pub fn constraints_containing(&self, variable: VariableId) -> &[ConstraintId] {
        self.constraints.constraints_containing(variable)
    }

    pub fn constraint(&self, constraint: ConstraintId) -> &dyn Constraint {
        self.constraints.get(constraint)
    }

    pub fn variable_name(&self, variable: VariableId) -> Option<&str> {
        self.variable_names.get_name(variable)
    }

    pub fn get_variable_by_name(&self, name: &str) -> Option<VariableId> {
        self.variable_names.get_variable_by_name(name)
    }

    pub fn assign(&mut self, variable: VariableId, value: i32) -> Result<(), DomainError> {
        self.domains.assign(variable, value)
    }

    pub fn unassign(&mut self, variable: VariableId) -> Result<(), DomainError> {
        self.domains.unassign(variable)
    }

    /// Undo the prunes returned by a propagator, most-recent-first. Nothing is undone on an error.
    pub fn restore(&mut self, pruned: &[Prune]) -> Result<(), DomainError> {
        self.domains.restore(pruned)
    }

    pub fn decision_level(&self) -> usize {
        self.domains.decision_level()
    }

    pub fn increase_decision_level(&mut self) {
        self.domains.increase_decision_level()
    }

    /// Restore every prune made above `decision_level`. Returns them most-recent-first; empty if
    /// `decision_level` is not below the current level.
    pub fn synchronise(&mut self, decision_level: usize) -> Vec<Prune> {
        self.domains.synchronise(decision_level)
    }

    pub fn propagation_context(&mut self) -> PropagationContextMut<'_> {
        PropagationContextMut::new(
            &mut self.domains,
            &self.constraints,
            &self.variable_names,
        )
    }
}
