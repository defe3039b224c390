pub(crate) mod constraint_queue;
pub(crate) mod domains;
pub(crate) mod problem;
pub(crate) mod propagation_context;
pub(crate) mod propagator;
#[cfg(test)]
pub(crate) mod test_helper;
pub(crate) mod variables;

mod debug_helper;
mod variable_names;

pub(crate) use constraint_queue::ConstraintQueue;
pub(crate) use debug_helper::DebugHelper;
pub use domains::Domains;
pub use problem::ConstraintStore;
pub use problem::Problem;
pub use propagation_context::PropagationContextMut;
pub use propagator::Propagator;
pub(crate) use variable_names::VariableNames;
