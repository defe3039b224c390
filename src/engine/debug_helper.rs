use log::warn;

use super::ConstraintStore;
use crate::basic_types::HashSet;
use crate::basic_types::Prune;
use crate::constraints::ConstraintId;
use crate::Domains;

#[derive(Debug, Copy, Clone)]
pub(crate) struct DebugHelper {}

impl DebugHelper {
    /// Checks that every value in the current domain of every scope variable of the given
    /// constraints has a support in that constraint. Meant to be called after a propagator
    /// reached its fixpoint without a conflict.
    pub(crate) fn debug_check_arc_consistency(
        domains: &Domains,
        constraints: &ConstraintStore,
        to_check: impl IntoIterator<Item = ConstraintId>,
    ) -> bool {
        for constraint_id in to_check {
            let constraint = constraints.get(constraint_id);

            for &variable in constraint.scope() {
                for value in domains.current_domain(variable) {
                    if !constraint.has_support(domains, variable, value) {
                        warn!(
                            "{variable} = {value} has no support in {constraint_id} ({}) after propagation",
                            constraint.name()
                        );
                        return false;
                    }
                }
            }
        }

        true
    }

    /// Checks that a prune list contains every pair at most once and that all of them are still
    /// pruned.
    pub(crate) fn debug_check_prunes(domains: &Domains, pruned: &[Prune]) -> bool {
        let mut seen: HashSet<Prune> = HashSet::default();

        for &prune in pruned {
            if !seen.insert(prune) {
                warn!("{prune} is reported twice");
                return false;
            }

            if !domains.is_pruned(prune.variable, prune.value) {
                warn!("{prune} is reported but the value is not pruned");
                return false;
            }
        }

        true
    }
}
