//! Keystroke sessions for the calculator expression builder.
//!
//! The `calc` binary is a thin shell over [`Session`]: every line it reads
//! is either a `:command` or a run of whitespace separated keystrokes.

pub mod error;
pub mod session;

pub use error::CliError;
pub use session::{OutputMode, Session};
