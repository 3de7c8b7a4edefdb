//! Raw token patterns recognised by the classifier.

use logos::Logos;

use crate::token::TokenKind;

/// Every lexeme a calculator keypad can produce.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum LogosToken {
    // Numbers with an optional sign, fraction and exponent (e.g. -3.5e2, .25)
    #[regex(r"-?[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?")]
    #[regex(r"-?\.[0-9]+([eE][+-]?[0-9]+)?")]
    Number,

    // Operators, including the typographic forms a keypad may send
    #[token("+")]
    Plus,
    #[token("-")]
    #[token("−")]
    Minus,
    #[token("*")]
    #[token("×")]
    Star,
    #[token("/")]
    #[token("÷")]
    Slash,
    #[token("%")]
    Percent,
    #[token("^")]
    Caret,

    // Delimiters
    #[token("(")]
    #[token("[")]
    LeftParen,
    #[token(")")]
    #[token("]")]
    RightParen,
}

impl LogosToken {
    /// The builder category this raw token belongs to
    pub fn kind(self) -> TokenKind {
        match self {
            LogosToken::Number => TokenKind::Number,
            LogosToken::Plus
            | LogosToken::Minus
            | LogosToken::Star
            | LogosToken::Slash
            | LogosToken::Percent
            | LogosToken::Caret => TokenKind::Operator,
            LogosToken::LeftParen => TokenKind::LeftBracket,
            LogosToken::RightParen => TokenKind::RightBracket,
        }
    }
}
