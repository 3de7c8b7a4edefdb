use calc_lexer::{Token, TokenKind};

/// Counts of opening and closing brackets in an expression.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BracketBalance {
    left: usize,
    right: usize,
}

impl BracketBalance {
    /// Count the brackets present in `tokens`
    pub fn count(tokens: &[Token]) -> Self {
        tokens.iter().fold(Self::default(), |mut balance, token| {
            match token.kind {
                TokenKind::LeftBracket => balance.open(),
                TokenKind::RightBracket => balance.close(),
                _ => {}
            }
            balance
        })
    }

    /// Number of opening brackets
    pub fn left(&self) -> usize {
        self.left
    }

    /// Number of closing brackets
    pub fn right(&self) -> usize {
        self.right
    }

    /// Whether another closing bracket may be appended
    pub fn can_close(&self) -> bool {
        self.right < self.left
    }

    /// Opening brackets still waiting for a partner
    pub fn unclosed(&self) -> usize {
        self.left.saturating_sub(self.right)
    }

    pub fn is_balanced(&self) -> bool {
        self.left == self.right
    }

    pub(crate) fn open(&mut self) {
        self.left += 1;
    }

    pub(crate) fn close(&mut self) {
        self.right += 1;
    }

    pub(crate) fn unopen(&mut self) {
        self.left = self.left.saturating_sub(1);
    }

    pub(crate) fn unclose(&mut self) {
        self.right = self.right.saturating_sub(1);
    }
}
