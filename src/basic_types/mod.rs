mod constraint_operation_error;
mod domain_error;
mod hash_structures;
mod keyed_vec;
mod propagation_status;
mod prune;
mod trail;

pub use constraint_operation_error::ConstraintOperationError;
pub use domain_error::DomainError;
pub(crate) use hash_structures::*;
pub(crate) use keyed_vec::KeyedVec;
pub(crate) use keyed_vec::StorageKey;
pub use propagation_status::Inconsistency;
pub use propagation_status::InconsistencyCause;
pub use propagation_status::PropagationStatus;
pub use prune::Prune;
pub(crate) use trail::Trail;
