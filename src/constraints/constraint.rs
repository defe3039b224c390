use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;

use crate::basic_types::StorageKey;
use crate::variables::VariableId;
use crate::Domains;

/// A handle to a constraint of a [`crate::Problem`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConstraintId {
    pub(crate) id: u32,
}

impl ConstraintId {
    pub(crate) fn new(id: u32) -> Self {
        ConstraintId { id }
    }
}

impl StorageKey for ConstraintId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        ConstraintId::new(index as u32)
    }
}

impl Display for ConstraintId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "c{}", self.id)
    }
}

/// A constraint over an ordered scope of variables. The constraint is defined by the tuples it
/// accepts: [`Constraint::check`] decides whether a tuple, with one value per scope position in
/// scope order, satisfies it.
///
/// The only required functions are [`Constraint::name`], [`Constraint::scope`] and
/// [`Constraint::check`]. [`Constraint::has_support`] has a default implementation which
/// enumerates the current domains of the scope; constraints with more structure should override it
/// since it is called for every (variable, value) pair during arc consistency.
pub trait Constraint: Debug {
    /// Return the name of the constraint, used for printing.
    fn name(&self) -> &str;

    /// The variables of the constraint. A variable may occur more than once, in which case every
    /// occurrence takes the same value.
    fn scope(&self) -> &[VariableId];

    /// Whether the tuple `values` satisfies the constraint. `values` has exactly one value per
    /// scope position.
    fn check(&self, values: &[i32]) -> bool;

    /// Whether there is a satisfying tuple where `variable` takes `value` and every other scope
    /// variable takes a value from its current domain (its assigned value, if it is assigned).
    fn has_support(&self, domains: &Domains, variable: VariableId, value: i32) -> bool {
        search_support(self, domains, variable, value)
    }

    /// The number of distinct unassigned variables in the scope.
    fn unassigned_count(&self, domains: &Domains) -> usize {
        self.unassigned_variables(domains).len()
    }

    /// The distinct unassigned variables in the scope, in scope order.
    fn unassigned_variables(&self, domains: &Domains) -> Vec<VariableId> {
        let mut unassigned: Vec<VariableId> = Vec::new();

        for &variable in self.scope() {
            if !domains.is_assigned(variable) && !unassigned.contains(&variable) {
                unassigned.push(variable);
            }
        }

        unassigned
    }

    /// The assigned values in scope order, or `None` if some scope variable is unassigned.
    fn assigned_values(&self, domains: &Domains) -> Option<Vec<i32>> {
        self.scope()
            .iter()
            .map(|&variable| domains.assigned_value(variable))
            .collect()
    }
}

/// Looks for a support of `variable = value` by enumerating the current domains of the other scope
/// variables in scope order, checking every complete tuple.
pub(crate) fn search_support<C: Constraint + ?Sized>(
    constraint: &C,
    domains: &Domains,
    variable: VariableId,
    value: i32,
) -> bool {
    let mut tuple = vec![0; constraint.scope().len()];
    extend_support(constraint, domains, variable, value, &mut tuple, 0)
}

fn extend_support<C: Constraint + ?Sized>(
    constraint: &C,
    domains: &Domains,
    variable: VariableId,
    value: i32,
    tuple: &mut [i32],
    position: usize,
) -> bool {
    let scope = constraint.scope();
    if position == scope.len() {
        return constraint.check(tuple);
    }

    let current = scope[position];
    if current == variable {
        tuple[position] = value;
        return extend_support(constraint, domains, variable, value, tuple, position + 1);
    }

    // A repeated variable has to take the value chosen at its first occurrence.
    if let Some(earlier) = scope[..position].iter().position(|&other| other == current) {
        tuple[position] = tuple[earlier];
        return extend_support(constraint, domains, variable, value, tuple, position + 1);
    }

    for candidate in domains.current_domain(current) {
        tuple[position] = candidate;
        if extend_support(constraint, domains, variable, value, tuple, position + 1) {
            return true;
        }
    }

    false
}
