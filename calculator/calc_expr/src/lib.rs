//! Incremental infix expression builder
//!
//! [`ExprBuilder`] receives calculator keystrokes one token at a time and
//! only appends the ones that keep the expression a valid infix prefix.
//! Tokens that do not fit are ignored without an error. At any point the
//! builder can produce a finalized copy of the expression with open brackets
//! closed and a dangling operator removed, ready for an evaluator.

pub mod balance;
pub mod builder;
pub mod config;
pub mod error;
pub mod expression;
pub mod snapshot;
pub mod state;

pub use balance::BracketBalance;
pub use builder::ExprBuilder;
pub use config::{BracketAccounting, BuilderConfig};
pub use error::ConfigError;
pub use expression::Expression;
pub use snapshot::Snapshot;
pub use state::{Acceptance, ExprState};

pub use calc_lexer::{Classify, LogosClassifier, Token, TokenKind};

#[cfg(test)]
mod tests {
    use std::sync::Once;

    static INIT: Once = Once::new();

    /// Initialize the logger for tests
    pub fn init_test_logger() {
        INIT.call_once(|| {
            let _ = env_logger::builder()
                .is_test(true)
                .filter_level(log::LevelFilter::Trace)
                .try_init();
        });
    }
}
