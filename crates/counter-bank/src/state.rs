//! Bank lifecycle state.

use crate::BankError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of a counter bank.
///
/// A bank starts `Active` and latches to `Inactive` the moment any
/// counter's reset tally reaches the configured limit. Only an explicit
/// reactivation brings it back; there is no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BankState {
    /// Bank accepts mutations (default for new banks).
    #[default]
    Active,
    /// Bank rejects mutations until reactivated.
    Inactive,
}

impl BankState {
    /// Returns true if the bank accepts mutations.
    pub const fn is_active(&self) -> bool {
        matches!(self, BankState::Active)
    }

    /// Returns true if the bank rejects mutations.
    pub const fn is_inactive(&self) -> bool {
        matches!(self, BankState::Inactive)
    }
}

impl fmt::Display for BankState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BankState::Active => write!(f, "active"),
            BankState::Inactive => write!(f, "inactive"),
        }
    }
}

impl FromStr for BankState {
    type Err = BankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(BankState::Active),
            "inactive" => Ok(BankState::Inactive),
            _ => Err(BankError::invalid_argument(
                "state",
                format!("invalid bank state: {}", s),
            )),
        }
    }
}
