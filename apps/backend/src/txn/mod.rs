//! Transaction core: reversible operations, an ordered rollback log, and
//! the manager that runs caller bodies atomically.

pub mod context;
pub mod locks;
pub mod manager;
pub mod operations;
pub mod plan;
pub mod policy;
pub mod transaction;

pub use context::TxnContext;
pub use locks::{EntityKey, EntityLease, EntityLocks};
pub use manager::TxnManager;
pub use operations::{
    ConsumeAction, DeductResources, Operation, ValidateResources, ValidateTurn, ACTIONABLE_PHASE,
};
pub use plan::{PlanStep, TxnPlan};
pub use policy::TxnPolicy;
pub use transaction::Transaction;
