#![cfg(test)]
//! This module exposes helpers that aid testing of the propagators. The [`TestProblem`] allows
//! setting up specific scenarios under which to run a propagation strategy, and checks the
//! bookkeeping of every propagation call it performs.

use super::DebugHelper;
use crate::basic_types::PropagationStatus;
use crate::basic_types::Prune;
use crate::constraints::Constraint;
use crate::constraints::ConstraintId;
use crate::propagators::PropagationStrategy;
use crate::variables::VariableId;
use crate::Problem;
use crate::Propagator;

/// A container for a [`Problem`], which can be used to test propagators.
#[derive(Debug)]
pub(crate) struct TestProblem {
    pub(crate) problem: Problem,
}

impl Default for TestProblem {
    fn default() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();

        TestProblem {
            problem: Problem::default(),
        }
    }
}

#[allow(unused, reason = "not every helper is used by every test")]
impl TestProblem {
    pub(crate) fn new_variable(&mut self, lb: i32, ub: i32) -> VariableId {
        self.problem
            .new_bounded_variable(lb, ub)
            .expect("the domain should not be empty")
    }

    pub(crate) fn new_sparse_variable(&mut self, values: &[i32]) -> VariableId {
        self.problem
            .new_variable(values.iter().copied())
            .expect("the domain should not be empty")
    }

    pub(crate) fn add_constraint(&mut self, constraint: impl Constraint + 'static) -> ConstraintId {
        self.problem
            .add_constraint(constraint)
            .expect("the constraint should be valid")
    }

    pub(crate) fn assign(&mut self, variable: VariableId, value: i32) {
        self.problem
            .assign(variable, value)
            .expect("the value should be in the current domain");
    }

    pub(crate) fn unassign(&mut self, variable: VariableId) {
        self.problem
            .unassign(variable)
            .expect("the variable should be assigned");
    }

    /// Run `strategy` once and check that the prunes it reports are exactly the prunes it made.
    pub(crate) fn propagate(
        &mut self,
        strategy: PropagationStrategy,
        new_variable: Option<VariableId>,
    ) -> PropagationStatus {
        let mut propagator = strategy.create();
        self.propagate_with(propagator.as_mut(), new_variable)
    }

    fn propagate_with(
        &mut self,
        propagator: &mut dyn Propagator,
        new_variable: Option<VariableId>,
    ) -> PropagationStatus {
        let num_trail_entries_before = self.problem.domains().num_trail_entries();

        let status = propagator.propagate(&mut self.problem, new_variable);

        let pruned = match &status {
            Ok(pruned) => pruned,
            Err(inconsistency) => &inconsistency.pruned,
        };
        assert_eq!(
            num_trail_entries_before + pruned.len(),
            self.problem.domains().num_trail_entries(),
            "{} did not report every prune it made",
            propagator.name()
        );
        assert!(
            DebugHelper::debug_check_prunes(self.problem.domains(), pruned),
            "{} reported an invalid prune list",
            propagator.name()
        );

        status
    }

    pub(crate) fn restore(&mut self, pruned: &[Prune]) {
        self.problem
            .restore(pruned)
            .expect("prunes should be restored most-recent-first");
    }

    pub(crate) fn contains(&self, variable: VariableId, value: i32) -> bool {
        self.problem.domains().contains(variable, value)
    }

    pub(crate) fn domain(&self, variable: VariableId) -> Vec<i32> {
        self.problem.domains().current_domain(variable).collect()
    }

    pub(crate) fn assert_domain(&self, variable: VariableId, domain: &[i32]) {
        assert_eq!(
            domain,
            self.domain(variable).as_slice(),
            "The expected domain of {variable} did not match the actual domain"
        );
    }

    /// Every complete assignment which takes its values from the current domains and satisfies
    /// all constraints, found by brute force. Values are given in variable creation order.
    pub(crate) fn solutions(&self) -> Vec<Vec<i32>> {
        let variables: Vec<VariableId> = self.problem.domains().variables().collect();
        let mut solutions = Vec::new();
        let mut values = Vec::with_capacity(variables.len());

        self.enumerate(&variables, &mut values, &mut solutions);

        solutions
    }

    fn enumerate(
        &self,
        variables: &[VariableId],
        values: &mut Vec<i32>,
        solutions: &mut Vec<Vec<i32>>,
    ) {
        if values.len() == variables.len() {
            let satisfied = self.problem.all_constraints().iter().all(|&constraint_id| {
                let constraint = self.problem.constraint(constraint_id);
                let tuple: Vec<i32> = constraint
                    .scope()
                    .iter()
                    .map(|variable| values[variables.iter().position(|v| v == variable).unwrap()])
                    .collect();
                constraint.check(&tuple)
            });

            if satisfied {
                solutions.push(values.clone());
            }
            return;
        }

        let variable = variables[values.len()];
        for value in self.domain(variable) {
            values.push(value);
            self.enumerate(variables, values, solutions);
            let _ = values.pop();
        }
    }

    /// Finds all solutions with a backtracking search which propagates with `strategy` after every
    /// assignment. The problem is back in its initial state afterwards.
    pub(crate) fn search(&mut self, strategy: PropagationStrategy) -> Vec<Vec<i32>> {
        let num_trail_entries_before = self.problem.domains().num_trail_entries();
        let mut propagator = strategy.create();
        let mut solutions = Vec::new();

        match self.propagate_with(propagator.as_mut(), None) {
            Ok(pruned) => {
                self.search_from(propagator.as_mut(), &mut solutions);
                self.restore(&pruned);
            }
            Err(inconsistency) => self.restore(&inconsistency.pruned),
        }

        assert_eq!(
            num_trail_entries_before,
            self.problem.domains().num_trail_entries()
        );

        solutions
    }

    fn search_from(&mut self, propagator: &mut dyn Propagator, solutions: &mut Vec<Vec<i32>>) {
        let domains = self.problem.domains();
        let Some(variable) = domains
            .variables()
            .find(|&variable| !domains.is_assigned(variable))
        else {
            solutions.push(
                domains
                    .variables()
                    .map(|variable| domains.assigned_value(variable).unwrap())
                    .collect(),
            );
            return;
        };

        for value in self.domain(variable) {
            self.assign(variable, value);

            match self.propagate_with(propagator, Some(variable)) {
                Ok(pruned) => {
                    self.search_from(propagator, solutions);
                    self.restore(&pruned);
                }
                Err(inconsistency) => self.restore(&inconsistency.pruned),
            }

            self.unassign(variable);
        }
    }
}
