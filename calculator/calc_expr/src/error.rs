use thiserror::Error;

/// Errors raised while reading builder configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unknown bracket accounting '{0}' (expected 'tracked' or 'legacy')")]
    UnknownAccounting(String),
}
