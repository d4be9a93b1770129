//! Runtime configuration read from the environment.

pub mod txn;

pub use txn::{ConfigError, TxnConfig};
