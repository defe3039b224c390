use super::Constraint;
use crate::variables::VariableId;
use crate::Domains;

/// All variables in the scope take pairwise different values.
#[derive(Clone, Debug)]
pub struct AllDifferent {
    variables: Box<[VariableId]>,
    /// A variable occurring twice can never differ from itself.
    has_repeated_variable: bool,
}

impl AllDifferent {
    pub fn new(variables: impl Into<Box<[VariableId]>>) -> Self {
        let variables = variables.into();
        let has_repeated_variable = variables
            .iter()
            .enumerate()
            .any(|(idx, variable)| variables[..idx].contains(variable));

        AllDifferent {
            variables,
            has_repeated_variable,
        }
    }
}

impl Constraint for AllDifferent {
    fn name(&self) -> &str {
        "AllDifferent"
    }

    fn scope(&self) -> &[VariableId] {
        &self.variables
    }

    fn check(&self, values: &[i32]) -> bool {
        values
            .iter()
            .enumerate()
            .all(|(idx, value)| !values[..idx].contains(value))
    }

    fn has_support(&self, domains: &Domains, variable: VariableId, value: i32) -> bool {
        if self.has_repeated_variable || !self.variables.contains(&variable) {
            return false;
        }

        let mut others: Vec<Vec<i32>> = self
            .variables
            .iter()
            .filter(|&&other| other != variable)
            .map(|&other| domains.current_domain(other).collect())
            .collect();
        // Smallest domains first, so dead ends are found early.
        others.sort_by_key(Vec::len);

        let mut used = vec![value];
        assign_distinct(&others, &mut used)
    }
}

/// Whether every domain in `domains` can take a value that is not in `used` and differs from the
/// values chosen for the other domains.
fn assign_distinct(domains: &[Vec<i32>], used: &mut Vec<i32>) -> bool {
    let Some((first, rest)) = domains.split_first() else {
        return true;
    };

    for &candidate in first {
        if used.contains(&candidate) {
            continue;
        }

        used.push(candidate);
        if assign_distinct(rest, used) {
            return true;
        }
        let _ = used.pop();
    }

    false
}
