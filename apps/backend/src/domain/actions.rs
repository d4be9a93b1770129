//! Per-turn action allowance.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Raw counter value that stands for "unlimited" on the wire.
pub const UNLIMITED_ACTIONS: i32 = -1;

/// Actions a player may still take this turn.
///
/// `Unlimited` is used in single-player games and is never decremented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum ActionAllowance {
    Unlimited,
    Remaining(u32),
}

impl ActionAllowance {
    /// Whether at least one action can still be taken.
    pub fn can_act(&self) -> bool {
        match self {
            ActionAllowance::Unlimited => true,
            ActionAllowance::Remaining(n) => *n > 0,
        }
    }

    /// Counter after spending one action.
    ///
    /// `Some(Unlimited)` for the unlimited allowance, `None` when exhausted.
    pub fn consumed(self) -> Option<ActionAllowance> {
        match self {
            ActionAllowance::Unlimited => Some(ActionAllowance::Unlimited),
            ActionAllowance::Remaining(0) => None,
            ActionAllowance::Remaining(n) => Some(ActionAllowance::Remaining(n - 1)),
        }
    }

    /// Counter after handing one action back.
    pub fn restored(self) -> Option<ActionAllowance> {
        match self {
            ActionAllowance::Unlimited => Some(ActionAllowance::Unlimited),
            ActionAllowance::Remaining(n) => n.checked_add(1).map(ActionAllowance::Remaining),
        }
    }
}

impl Default for ActionAllowance {
    fn default() -> Self {
        ActionAllowance::Remaining(0)
    }
}

impl fmt::Display for ActionAllowance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionAllowance::Unlimited => f.write_str("unlimited"),
            ActionAllowance::Remaining(n) => write!(f, "{n}"),
        }
    }
}

/// Rejected raw counter (negative and not the unlimited sentinel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid action count {0}")]
pub struct InvalidActionCount(pub i32);

impl TryFrom<i32> for ActionAllowance {
    type Error = InvalidActionCount;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        match raw {
            UNLIMITED_ACTIONS => Ok(ActionAllowance::Unlimited),
            n if n >= 0 => Ok(ActionAllowance::Remaining(n as u32)),
            n => Err(InvalidActionCount(n)),
        }
    }
}

/// Wire value of an allowance. Counts above `i32::MAX` saturate to
/// `i32::MAX`, so they do not survive a round trip unchanged.
impl From<ActionAllowance> for i32 {
    fn from(value: ActionAllowance) -> Self {
        match value {
            ActionAllowance::Unlimited => UNLIMITED_ACTIONS,
            ActionAllowance::Remaining(n) => i32::try_from(n).unwrap_or(i32::MAX),
        }
    }
}
