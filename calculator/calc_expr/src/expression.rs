//! Token sequence plus the cached machine state.

use std::fmt;

use calc_lexer::{Location, Token, TokenKind};
use log::{debug, trace};

use crate::balance::BracketBalance;
use crate::state::{Acceptance, ExprState};

/// An infix expression under construction.
///
/// Every mutation goes through the acceptance table, so the tokens always
/// form a valid infix prefix. Read access is public; mutation is reserved
/// for [`crate::ExprBuilder`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Expression {
    tokens: Vec<Token>,
    balance: BracketBalance,
    state: ExprState,
}

impl Expression {
    /// Create an empty expression
    pub fn new() -> Self {
        Self::default()
    }

    /// The tokens in insertion order
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// The token texts in insertion order
    pub fn lexemes(&self) -> Vec<&str> {
        self.tokens.iter().map(Token::as_str).collect()
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    pub fn last(&self) -> Option<&Token> {
        self.tokens.last()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Current bracket counters
    pub fn balance(&self) -> BracketBalance {
        self.balance
    }

    /// Category of the last token
    pub fn state(&self) -> ExprState {
        self.state
    }

    /// Whether `kind` would be appended right now
    pub fn accepts(&self, kind: TokenKind) -> bool {
        match self.state.acceptance(kind) {
            Acceptance::Accept => true,
            Acceptance::Guarded => self.balance.can_close(),
            Acceptance::Reject => false,
        }
    }

    /// Append `token` if the acceptance table allows it. Brackets are stored
    /// with their canonical text.
    pub(crate) fn offer(&mut self, token: Token) -> bool {
        if !self.accepts(token.kind) {
            debug!(
                "ignoring {} {:?} at {} in state {:?}",
                token.kind, token.lexeme, token.location, self.state
            );
            return false;
        }
        self.append(token);
        true
    }

    fn append(&mut self, token: Token) {
        let token = match token.kind {
            TokenKind::LeftBracket => {
                self.balance.open();
                Token::left_bracket(token.location)
            }
            TokenKind::RightBracket => {
                self.balance.close();
                Token::right_bracket(token.location)
            }
            TokenKind::Number | TokenKind::Operator => token,
        };
        trace!("append {} {:?}", token.kind, token.lexeme);
        self.state = ExprState::after(token.kind);
        self.tokens.push(token);
    }

    /// Remove the last token without touching the counters.
    pub(crate) fn pop(&mut self) -> Option<Token> {
        let token = self.tokens.pop()?;
        self.state = ExprState::of_last(self.tokens.last());
        Some(token)
    }

    pub(crate) fn clear(&mut self) {
        self.tokens.clear();
        self.balance = BracketBalance::default();
        self.state = ExprState::Empty;
    }

    pub(crate) fn balance_mut(&mut self) -> &mut BracketBalance {
        &mut self.balance
    }

    /// A repaired copy of this expression, ready for evaluation.
    ///
    /// Trailing opening brackets are dropped, then a trailing operator is
    /// dropped, then if the expression ends in a number every unclosed
    /// bracket is closed. An expression ending in `)` keeps its counts as
    /// they are. `self` is left untouched.
    pub fn finalized(&self) -> Expression {
        let mut copy = self.clone();
        copy.finalize();
        copy
    }

    fn finalize(&mut self) {
        while self.state == ExprState::LastIsLeftBracket {
            self.pop();
            self.balance.unopen();
        }

        if self.state == ExprState::LastIsOperator {
            if let Some(op) = self.pop() {
                debug!("dropping trailing operator {:?}", op.lexeme);
            }
        }

        if self.state == ExprState::LastIsNumber {
            let mut closed = 0;
            while self.balance.can_close() {
                self.append(Token::right_bracket(Location::default()));
                closed += 1;
            }
            if closed > 0 {
                debug!("closed {closed} open bracket(s)");
            }
        }
    }
}

/// Tokens joined by single spaces
impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tokens = self.tokens.iter();
        if let Some(first) = tokens.next() {
            write!(f, "{first}")?;
            for token in tokens {
                write!(f, " {token}")?;
            }
        }
        Ok(())
    }
}
