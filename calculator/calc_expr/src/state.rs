//! The token acceptance state machine.
//!
//! The state is the category of the last token in the expression. Each
//! state maps every incoming [`TokenKind`] to an [`Acceptance`] through one
//! constant table.

use calc_lexer::{Token, TokenKind};

/// Category of the last token in the expression, or `Empty`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "snake_case")
)]
pub enum ExprState {
    #[default]
    Empty,
    LastIsNumber,
    LastIsLeftBracket,
    LastIsRightBracket,
    LastIsOperator,
}

/// What the machine does with an incoming token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Acceptance {
    /// Append unconditionally
    Accept,
    /// Append only while an opened bracket is still unclosed
    Guarded,
    /// Drop the token
    Reject,
}

use Acceptance::{Accept, Guarded, Reject};

/// Rows follow `ExprState`, columns follow `TokenKind::ALL`:
/// number, operator, left bracket, right bracket.
const TRANSITIONS: [[Acceptance; 4]; 5] = [
    /* Empty              */ [Accept, Reject, Accept, Reject],
    /* LastIsNumber       */ [Reject, Accept, Reject, Guarded],
    /* LastIsLeftBracket  */ [Accept, Reject, Accept, Reject],
    /* LastIsRightBracket */ [Reject, Accept, Reject, Guarded],
    /* LastIsOperator     */ [Accept, Reject, Accept, Reject],
];

impl ExprState {
    /// All states, in table order
    pub const ALL: [ExprState; 5] = [
        ExprState::Empty,
        ExprState::LastIsNumber,
        ExprState::LastIsLeftBracket,
        ExprState::LastIsRightBracket,
        ExprState::LastIsOperator,
    ];

    /// Look up how a token of `kind` is treated in this state
    pub fn acceptance(self, kind: TokenKind) -> Acceptance {
        TRANSITIONS[self.row()][column(kind)]
    }

    /// The state after a token of `kind` has been appended
    pub fn after(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Number => ExprState::LastIsNumber,
            TokenKind::Operator => ExprState::LastIsOperator,
            TokenKind::LeftBracket => ExprState::LastIsLeftBracket,
            TokenKind::RightBracket => ExprState::LastIsRightBracket,
        }
    }

    /// The state of an expression whose last token is `last`
    pub fn of_last(last: Option<&Token>) -> Self {
        last.map_or(ExprState::Empty, |token| Self::after(token.kind))
    }

    fn row(self) -> usize {
        match self {
            ExprState::Empty => 0,
            ExprState::LastIsNumber => 1,
            ExprState::LastIsLeftBracket => 2,
            ExprState::LastIsRightBracket => 3,
            ExprState::LastIsOperator => 4,
        }
    }
}

fn column(kind: TokenKind) -> usize {
    match kind {
        TokenKind::Number => 0,
        TokenKind::Operator => 1,
        TokenKind::LeftBracket => 2,
        TokenKind::RightBracket => 3,
    }
}
