use std::fmt::Display;
use std::fmt::Formatter;

use crate::basic_types::StorageKey;

/// A handle to a variable of a [`crate::Problem`]. Only meaningful for the problem which created
/// it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VariableId {
    pub(crate) id: u32,
}

impl VariableId {
    pub(crate) fn new(id: u32) -> Self {
        VariableId { id }
    }
}

impl StorageKey for VariableId {
    fn index(&self) -> usize {
        self.id as usize
    }

    fn create_from_index(index: usize) -> Self {
        VariableId::new(index as u32)
    }
}

impl Display for VariableId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "x{}", self.id)
    }
}
