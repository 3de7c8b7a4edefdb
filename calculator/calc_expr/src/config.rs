//! Builder configuration.

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// How the bracket counters follow the token sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum BracketAccounting {
    /// Counters always equal the brackets present in the expression.
    #[default]
    Tracked,
    /// Older counter rules: `remove_last` leaves the counters alone and
    /// `set` counts every raw bracket a second time, whether or not it was
    /// appended.
    Legacy,
}

impl FromStr for BracketAccounting {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tracked" => Ok(BracketAccounting::Tracked),
            "legacy" => Ok(BracketAccounting::Legacy),
            _ => Err(ConfigError::UnknownAccounting(s.to_string())),
        }
    }
}

impl fmt::Display for BracketAccounting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BracketAccounting::Tracked => f.write_str("tracked"),
            BracketAccounting::Legacy => f.write_str("legacy"),
        }
    }
}

/// Configuration for [`crate::ExprBuilder`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuilderConfig {
    /// Bracket counter policy
    pub accounting: BracketAccounting,
}

impl BuilderConfig {
    /// Configuration reproducing the legacy counter behavior
    pub fn legacy() -> Self {
        Self {
            accounting: BracketAccounting::Legacy,
        }
    }
}
