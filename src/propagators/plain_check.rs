use log::debug;

use crate::basic_types::Inconsistency;
use crate::basic_types::PropagationStatus;
use crate::variables::VariableId;
use crate::Problem;
use crate::Propagator;

/// Plain backtracking: no propagation at all, only the constraints over the newly assigned
/// variable which became fully assigned are checked. Never prunes.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainCheck;

impl Propagator for PlainCheck {
    fn name(&self) -> &str {
        "PlainCheck"
    }

    fn propagate(
        &mut self,
        problem: &mut Problem,
        new_variable: Option<VariableId>,
    ) -> PropagationStatus {
        // Before search no constraint can be fully assigned yet.
        let Some(new_variable) = new_variable else {
            return Ok(Vec::new());
        };

        let domains = problem.domains();

        for &constraint_id in problem.constraints_containing(new_variable) {
            let constraint = problem.constraint(constraint_id);

            let Some(values) = constraint.assigned_values(domains) else {
                continue;
            };

            if !constraint.check(&values) {
                debug!(
                    "{}: {constraint_id} ({}) is violated by {values:?}",
                    self.name(),
                    constraint.name()
                );
                return Err(Inconsistency::violated(constraint_id, Vec::new()));
            }
        }

        Ok(Vec::new())
    }
}
