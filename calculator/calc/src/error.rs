use thiserror::Error;

/// Failures of the command-line front end
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to initialize repl: {0}")]
    Repl(String),

    #[error("failed to encode snapshot: {0}")]
    Json(#[from] serde_json::Error),
}
