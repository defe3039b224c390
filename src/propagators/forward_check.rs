use log::debug;
use log::trace;

use super::candidate_constraints;
use crate::basic_types::Inconsistency;
use crate::basic_types::PropagationStatus;
use crate::csp_assert_advanced;
use crate::engine::DebugHelper;
use crate::variables::VariableId;
use crate::Problem;
use crate::Propagator;

/// Forward checking: every candidate constraint with exactly one unassigned variable is checked
/// for each value of that variable, and the values for which it is violated are pruned.
///
/// Before search (`new_variable` is `None`) every constraint is a candidate, which in practice
/// forward checks the unary constraints; afterwards only the constraints over the newly assigned
/// variable are.
#[derive(Clone, Copy, Debug, Default)]
pub struct ForwardCheck;

impl Propagator for ForwardCheck {
    fn name(&self) -> &str {
        "ForwardCheck"
    }

    fn propagate(
        &mut self,
        problem: &mut Problem,
        new_variable: Option<VariableId>,
    ) -> PropagationStatus {
        let mut context = problem.propagation_context();
        let constraints = context.constraints();
        let mut pruned = Vec::new();

        for &constraint_id in candidate_constraints(constraints, new_variable) {
            let constraint = constraints.get(constraint_id);

            let unassigned = constraint.unassigned_variables(context.domains());
            let [target] = unassigned[..] else {
                continue;
            };

            trace!(
                "{}: checking {constraint_id} ({}) on {}",
                self.name(),
                constraint.name(),
                context.describe(target)
            );

            // Every slot of the target is overwritten below, the others hold assigned values.
            let mut tuple: Vec<i32> = constraint
                .scope()
                .iter()
                .map(|&variable| context.domains().assigned_value(variable).unwrap_or_default())
                .collect();
            let values: Vec<i32> = context.domains().current_domain(target).collect();

            for value in values {
                for (slot, &variable) in tuple.iter_mut().zip(constraint.scope()) {
                    if variable == target {
                        *slot = value;
                    }
                }

                if !constraint.check(&tuple) {
                    pruned.push(context.remove(target, value));
                }
            }

            if context.domains().current_domain_size(target) == 0 {
                debug!(
                    "{}: domain of {} wiped out by {constraint_id} ({})",
                    self.name(),
                    context.describe(target),
                    constraint.name()
                );
                return Err(Inconsistency::empty_domain(target, pruned));
            }
        }

        csp_assert_advanced!(DebugHelper::debug_check_prunes(context.domains(), &pruned));
        debug!("{}: pruned {} values", self.name(), pruned.len());

        Ok(pruned)
    }
}
