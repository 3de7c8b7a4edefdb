//! The expression builder API.
//!
//! ```text
//! let mut builder = ExprBuilder::new();
//! builder.add("(").add("1").add("+").add("2");
//! assert_eq!(builder.to_string(), "( 1 + 2");
//! assert_eq!(builder.to_finalized_string(), "( 1 + 2 )");
//! ```

use std::fmt;

use calc_lexer::{Classify, Lexer, Location, LogosClassifier, Token, TokenKind};
use log::debug;

use crate::balance::BracketBalance;
use crate::config::{BracketAccounting, BuilderConfig};
use crate::expression::Expression;
use crate::snapshot::Snapshot;
use crate::state::ExprState;

/// Assembles an infix expression from keystroke tokens.
///
/// Tokens that would make the expression ill-formed at the current position
/// are silently ignored; none of the operations can fail.
#[derive(Debug, Clone)]
pub struct ExprBuilder<C = LogosClassifier> {
    expr: Expression,
    config: BuilderConfig,
    classifier: C,
}

impl ExprBuilder<LogosClassifier> {
    /// Create an empty builder with the default classifier and configuration
    pub fn new() -> Self {
        Self::with_config(BuilderConfig::default())
    }

    /// Create an empty builder with the default classifier
    pub fn with_config(config: BuilderConfig) -> Self {
        Self::with_classifier(LogosClassifier, config)
    }
}

impl Default for ExprBuilder<LogosClassifier> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Classify> ExprBuilder<C> {
    /// Create an empty builder that classifies tokens with `classifier`
    pub fn with_classifier(classifier: C, config: BuilderConfig) -> Self {
        Self {
            expr: Expression::new(),
            config,
            classifier,
        }
    }

    /// Append `lexeme` if it fits at the end of the expression.
    pub fn add(&mut self, lexeme: &str) -> &mut Self {
        self.push(lexeme);
        self
    }

    /// Like [`add`](Self::add), but reports whether the token was appended
    pub fn push(&mut self, lexeme: &str) -> bool {
        match self.classifier.classify(lexeme) {
            Some(kind) => self.expr.offer(Token::new(kind, lexeme, Location::default())),
            None => {
                debug!("ignoring unclassified token {lexeme:?}");
                false
            }
        }
    }

    /// Append an already classified token if it fits
    pub fn push_token(&mut self, token: Token) -> bool {
        self.expr.offer(token)
    }

    /// Whether `lexeme` would be appended right now
    pub fn would_accept(&self, lexeme: &str) -> bool {
        self.classifier
            .classify(lexeme)
            .is_some_and(|kind| self.expr.accepts(kind))
    }

    /// Remove the last token. Does nothing if empty
    pub fn remove_last(&mut self) {
        let Some(token) = self.expr.pop() else {
            return;
        };
        if self.config.accounting == BracketAccounting::Tracked {
            let balance = self.expr.balance_mut();
            match token.kind {
                TokenKind::LeftBracket => balance.unopen(),
                TokenKind::RightBracket => balance.unclose(),
                TokenKind::Number | TokenKind::Operator => {}
            }
        }
    }

    /// Empty the expression and reset the bracket counters
    pub fn clear(&mut self) {
        self.expr.clear();
    }

    /// Replace the expression with the whitespace separated tokens of
    /// `expression`, replayed one by one as if typed. `None` does nothing.
    pub fn set(&mut self, expression: Option<&str>) {
        let Some(expression) = expression else {
            return;
        };
        self.clear();
        for word in Lexer::new(expression) {
            let Some(token) = word.classify(&self.classifier) else {
                debug!("ignoring unclassified token {:?} at {}", word.lexeme, word.location);
                continue;
            };
            let kind = token.kind;
            self.expr.offer(token);
            if self.config.accounting == BracketAccounting::Legacy {
                let balance = self.expr.balance_mut();
                match kind {
                    TokenKind::LeftBracket => balance.open(),
                    TokenKind::RightBracket => balance.close(),
                    TokenKind::Number | TokenKind::Operator => {}
                }
            }
        }
    }

    /// The finalized expression as a token sequence
    pub fn get(&self) -> Vec<Token> {
        self.finalized().into_tokens()
    }

    /// The finalized expression, joined by single spaces
    pub fn to_finalized_string(&self) -> String {
        self.finalized().to_string()
    }

    /// A finalized copy of the expression; the builder is not modified
    pub fn finalized(&self) -> Expression {
        self.expr.finalized()
    }

    /// Capture the live and finalized forms for display or serialization
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(&self.expr, self.config.accounting)
    }

    pub fn is_empty(&self) -> bool {
        self.expr.is_empty()
    }

    pub fn len(&self) -> usize {
        self.expr.len()
    }

    /// The live expression
    pub fn expression(&self) -> &Expression {
        &self.expr
    }

    /// The live tokens
    pub fn tokens(&self) -> &[Token] {
        self.expr.tokens()
    }

    pub fn state(&self) -> ExprState {
        self.expr.state()
    }

    pub fn balance(&self) -> BracketBalance {
        self.expr.balance()
    }

    pub fn config(&self) -> BuilderConfig {
        self.config
    }
}

/// The live expression, tokens joined by single spaces
impl<C> fmt::Display for ExprBuilder<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.expr, f)
    }
}

#[cfg(test)]
mod tests;
