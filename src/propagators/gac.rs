use log::debug;
use log::trace;

use super::candidate_constraints;
use crate::asserts::CSP_ASSERT_EXTREME;
use crate::asserts::CSP_ASSERT_LEVEL_DEFINITION;
use crate::basic_types::HashSet;
use crate::basic_types::Inconsistency;
use crate::basic_types::PropagationStatus;
use crate::constraints::ConstraintId;
use crate::csp_assert_advanced;
use crate::csp_assert_extreme;
use crate::csp_assert_simple;
use crate::engine::ConstraintQueue;
use crate::engine::DebugHelper;
use crate::variables::VariableId;
use crate::Problem;
use crate::Propagator;

/// Generalised arc consistency over constraints of arbitrary arity (GAC-3).
///
/// The queue is seeded with every constraint before search, and with the constraints over the
/// newly assigned variable afterwards. A popped constraint is revised by pruning every value of
/// every scope variable which has no support in it. Whenever a variable loses a value, all
/// constraints over that variable which are not pending yet are enqueued again, so the loss of
/// support is propagated until the queue runs dry or a domain is wiped out.
///
/// Scope variables are revised left to right and their values in ascending order, which makes the
/// order of the returned prunes deterministic.
#[derive(Debug, Default)]
pub struct GeneralisedArcConsistency {
    queue: ConstraintQueue,
    /// Buffer for the values of the variable under revision.
    values: Vec<i32>,
    /// The constraints revised during the current call; only tracked for the debug checks.
    revised: HashSet<ConstraintId>,
}

impl Propagator for GeneralisedArcConsistency {
    fn name(&self) -> &str {
        "GeneralisedArcConsistency"
    }

    fn propagate(
        &mut self,
        problem: &mut Problem,
        new_variable: Option<VariableId>,
    ) -> PropagationStatus {
        let mut context = problem.propagation_context();
        let constraints = context.constraints();
        let mut pruned = Vec::new();

        csp_assert_simple!(self.queue.is_empty());
        self.revised.clear();

        for &constraint_id in candidate_constraints(constraints, new_variable) {
            let _ = self.queue.enqueue(constraint_id);
        }

        while let Some(constraint_id) = self.queue.pop() {
            let constraint = constraints.get(constraint_id);
            trace!(
                "{}: revising {constraint_id} ({}), {} pending",
                self.name(),
                constraint.name(),
                self.queue.len()
            );

            if CSP_ASSERT_LEVEL_DEFINITION >= CSP_ASSERT_EXTREME {
                let _ = self.revised.insert(constraint_id);
            }

            for &variable in constraint.scope() {
                self.values.clear();
                self.values.extend(context.domains().current_domain(variable));

                for &value in &self.values {
                    if constraint.has_support(context.domains(), variable, value) {
                        continue;
                    }

                    pruned.push(context.remove(variable, value));

                    if context.domains().current_domain_size(variable) == 0 {
                        debug!(
                            "{}: domain of {} wiped out while revising {constraint_id} ({})",
                            self.name(),
                            context.describe(variable),
                            constraint.name()
                        );
                        self.queue.clear();
                        return Err(Inconsistency::empty_domain(variable, pruned));
                    }

                    for &neighbour in constraints.constraints_containing(variable) {
                        let _ = self.queue.enqueue(neighbour);
                    }
                }
            }
        }

        csp_assert_advanced!(DebugHelper::debug_check_prunes(context.domains(), &pruned));
        csp_assert_extreme!(DebugHelper::debug_check_arc_consistency(
            context.domains(),
            constraints,
            self.revised.iter().copied()
        ));
        debug!("{}: pruned {} values", self.name(), pruned.len());

        Ok(pruned)
    }
}
