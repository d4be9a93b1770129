use std::env;
use std::time::Duration;

use thiserror::Error;

use crate::errors::ErrorCode;
use crate::txn::policy::{TxnPolicy, UnknownPolicy};

pub const LOCK_TIMEOUT_VAR: &str = "TXN_LOCK_TIMEOUT_MS";
pub const POLICY_VAR: &str = "TXN_POLICY";

const DEFAULT_LOCK_TIMEOUT_MS: u64 = 2000;

/// Settings for the transaction manager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxnConfig {
    /// How long a transaction waits for another one to release a player
    pub lock_timeout: Duration,
    /// What to do after a successful body
    pub policy: TxnPolicy,
}

impl Default for TxnConfig {
    fn default() -> Self {
        Self {
            lock_timeout: Duration::from_millis(DEFAULT_LOCK_TIMEOUT_MS),
            policy: TxnPolicy::CommitOnOk,
        }
    }
}

/// Invalid configuration value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("environment variable '{name}' must be a positive integer, got '{value}'")]
    InvalidNumber { name: &'static str, value: String },
    #[error("environment variable '{name}': {source}")]
    InvalidPolicy {
        name: &'static str,
        #[source]
        source: UnknownPolicy,
    },
}

impl ConfigError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::ConfigError
    }
}

impl TxnConfig {
    /// Build from `TXN_LOCK_TIMEOUT_MS` and `TXN_POLICY`, falling back to
    /// defaults for unset variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            lock_timeout: lock_timeout()?,
            policy: policy()?,
        })
    }

    pub fn with_lock_timeout(mut self, lock_timeout: Duration) -> Self {
        self.lock_timeout = lock_timeout;
        self
    }

    pub fn with_policy(mut self, policy: TxnPolicy) -> Self {
        self.policy = policy;
        self
    }
}

fn lock_timeout() -> Result<Duration, ConfigError> {
    let Some(raw) = opt_var(LOCK_TIMEOUT_VAR) else {
        return Ok(Duration::from_millis(DEFAULT_LOCK_TIMEOUT_MS));
    };
    match raw.trim().parse::<u64>() {
        Ok(ms) if ms > 0 => Ok(Duration::from_millis(ms)),
        _ => Err(ConfigError::InvalidNumber {
            name: LOCK_TIMEOUT_VAR,
            value: raw,
        }),
    }
}

fn policy() -> Result<TxnPolicy, ConfigError> {
    match opt_var(POLICY_VAR) {
        None => Ok(TxnPolicy::default()),
        Some(raw) => raw.parse().map_err(|source| ConfigError::InvalidPolicy {
            name: POLICY_VAR,
            source,
        }),
    }
}

/// Read an optional environment variable; empty counts as unset
fn opt_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
