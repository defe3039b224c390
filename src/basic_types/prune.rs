use std::fmt::Display;
use std::fmt::Formatter;

use crate::variables::VariableId;

/// The removal of `value` from the current domain of `variable`. Propagators return the prunes
/// they performed so that the caller can undo them when backtracking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Prune {
    pub variable: VariableId,
    pub value: i32,
}

impl Prune {
    pub fn new(variable: VariableId, value: i32) -> Prune {
        Prune { variable, value }
    }
}

impl Display for Prune {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} != {}]", self.variable, self.value)
    }
}
