use std::fmt;
use std::str::FromStr;

/// What `execute_atomic` does after the body succeeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TxnPolicy {
    /// Keep the applied mutations (default behavior)
    #[default]
    CommitOnOk,
    /// Undo the applied mutations anyway and return the body's value (dry run)
    RollbackOnOk,
}

impl TxnPolicy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            TxnPolicy::CommitOnOk => "commit",
            TxnPolicy::RollbackOnOk => "rollback",
        }
    }
}

impl fmt::Display for TxnPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognised policy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown transaction policy '{0}' (expected 'commit' or 'rollback')")]
pub struct UnknownPolicy(pub String);

impl FromStr for TxnPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "commit" => Ok(TxnPolicy::CommitOnOk),
            "rollback" => Ok(TxnPolicy::RollbackOnOk),
            other => Err(UnknownPolicy(other.to_string())),
        }
    }
}
