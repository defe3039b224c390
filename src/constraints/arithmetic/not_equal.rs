use crate::constraints::Constraint;
use crate::variables::VariableId;
use crate::Domains;

/// The binary constraint `lhs != rhs`.
#[derive(Clone, Debug)]
pub struct NotEqual {
    scope: [VariableId; 2],
}

impl NotEqual {
    pub fn new(lhs: VariableId, rhs: VariableId) -> Self {
        NotEqual { scope: [lhs, rhs] }
    }
}

impl Constraint for NotEqual {
    fn name(&self) -> &str {
        "NotEqual"
    }

    fn scope(&self) -> &[VariableId] {
        &self.scope
    }

    fn check(&self, values: &[i32]) -> bool {
        values[0] != values[1]
    }

    fn has_support(&self, domains: &Domains, variable: VariableId, value: i32) -> bool {
        let [lhs, rhs] = self.scope;

        if lhs == rhs {
            return false;
        }

        let other = if variable == lhs {
            rhs
        } else if variable == rhs {
            lhs
        } else {
            return false;
        };

        domains
            .current_domain(other)
            .any(|other_value| other_value != value)
    }
}
