use log::warn;

use super::Constraint;
use crate::basic_types::ConstraintOperationError;
use crate::basic_types::HashMap;
use crate::basic_types::HashSet;
use crate::variables::VariableId;
use crate::Domains;

/// A constraint given by its explicit list of satisfying tuples.
///
/// Besides the tuples themselves, the constraint keeps for every (scope position, value) pair the
/// tuples in which that position takes that value, so a support check only looks at tuples which
/// can possibly support the value.
#[derive(Clone, Debug)]
pub struct TableConstraint {
    name: String,
    scope: Box<[VariableId]>,
    tuples: Vec<Box<[i32]>>,
    satisfying: HashSet<Box<[i32]>>,
    supports: HashMap<(usize, i32), Vec<usize>>,
}

impl TableConstraint {
    pub fn new(
        name: impl Into<String>,
        scope: impl Into<Box<[VariableId]>>,
        tuples: impl IntoIterator<Item = Vec<i32>>,
    ) -> Result<TableConstraint, ConstraintOperationError> {
        let name = name.into();
        let scope = scope.into();

        let mut constraint = TableConstraint {
            name,
            scope,
            tuples: Vec::new(),
            satisfying: HashSet::default(),
            supports: HashMap::default(),
        };

        for tuple in tuples {
            constraint.add_tuple(tuple)?;
        }

        if constraint.tuples.is_empty() {
            warn!(
                "Table constraint '{}' has no satisfying tuples and can never be satisfied",
                constraint.name
            );
        }

        Ok(constraint)
    }

    fn add_tuple(&mut self, tuple: Vec<i32>) -> Result<(), ConstraintOperationError> {
        if tuple.len() != self.scope.len() {
            return Err(ConstraintOperationError::ArityMismatch {
                expected: self.scope.len(),
                actual: tuple.len(),
            });
        }

        let tuple: Box<[i32]> = tuple.into();
        if !self.satisfying.insert(tuple.clone()) {
            return Ok(());
        }

        let tuple_idx = self.tuples.len();
        for (position, &value) in tuple.iter().enumerate() {
            self.supports
                .entry((position, value))
                .or_default()
                .push(tuple_idx);
        }
        self.tuples.push(tuple);

        Ok(())
    }

    /// The number of distinct satisfying tuples.
    pub fn num_tuples(&self) -> usize {
        self.tuples.len()
    }

    /// A tuple supports `variable = value` if every occurrence of `variable` takes `value` and
    /// every other position holds a value from the current domain of its variable.
    fn is_valid(&self, tuple: &[i32], domains: &Domains, variable: VariableId, value: i32) -> bool {
        self.scope
            .iter()
            .zip(tuple)
            .all(|(&other, &other_value)| {
                if other == variable {
                    other_value == value
                } else {
                    domains.contains(other, other_value)
                }
            })
    }
}

impl Constraint for TableConstraint {
    fn name(&self) -> &str {
        &self.name
    }

    fn scope(&self) -> &[VariableId] {
        &self.scope
    }

    fn check(&self, values: &[i32]) -> bool {
        self.satisfying.contains(values)
    }

    fn has_support(&self, domains: &Domains, variable: VariableId, value: i32) -> bool {
        let Some(position) = self.scope.iter().position(|&other| other == variable) else {
            return false;
        };

        self.supports
            .get(&(position, value))
            .is_some_and(|candidates| {
                candidates
                    .iter()
                    .any(|&tuple_idx| self.is_valid(&self.tuples[tuple_idx], domains, variable, value))
            })
    }
}
