//! Shared helpers for the integration tests.

use calc_expr::{BuilderConfig, ExprBuilder};

/// Build an expression by typing every word of `keys` through `add`
pub fn type_keys(config: BuilderConfig, keys: &str) -> ExprBuilder {
    let mut builder = ExprBuilder::with_config(config);
    for key in keys.split_whitespace() {
        builder.add(key);
    }
    builder
}
