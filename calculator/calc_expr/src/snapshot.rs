use calc_lexer::Token;

use crate::balance::BracketBalance;
use crate::config::BracketAccounting;
use crate::expression::Expression;
use crate::state::ExprState;

/// The live and finalized forms of an expression at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Snapshot {
    pub live: String,
    pub finalized: String,
    pub tokens: Vec<Token>,
    pub state: ExprState,
    pub balance: BracketBalance,
    pub accounting: BracketAccounting,
}

impl Snapshot {
    pub fn new(expr: &Expression, accounting: BracketAccounting) -> Self {
        Self {
            live: expr.to_string(),
            finalized: expr.finalized().to_string(),
            tokens: expr.tokens().to_vec(),
            state: expr.state(),
            balance: expr.balance(),
            accounting,
        }
    }
}
