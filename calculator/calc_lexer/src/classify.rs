//! Classification predicates.
//!
//! A lexeme classifies only when a single [`LogosToken`] spans all of it, so
//! `"12"` is a number while `"12+"`, `" 12"` and `""` are unclassified.

use logos::Logos;

use crate::logos_token::LogosToken;
use crate::token::TokenKind;

/// Classify the text of one token, or `None` if it is not a token at all.
pub fn classify(lexeme: &str) -> Option<TokenKind> {
    let mut lex = LogosToken::lexer(lexeme);
    let token = lex.next()?.ok()?;
    if lex.span().end != lexeme.len() {
        return None;
    }
    Some(token.kind())
}

/// Returns true if `lexeme` is a number
pub fn is_number(lexeme: &str) -> bool {
    classify(lexeme) == Some(TokenKind::Number)
}

/// Returns true if `lexeme` is an operator
pub fn is_operator(lexeme: &str) -> bool {
    classify(lexeme) == Some(TokenKind::Operator)
}

/// Returns true if `lexeme` opens a bracket
pub fn is_left_bracket(lexeme: &str) -> bool {
    classify(lexeme) == Some(TokenKind::LeftBracket)
}

/// Returns true if `lexeme` closes a bracket
pub fn is_right_bracket(lexeme: &str) -> bool {
    classify(lexeme) == Some(TokenKind::RightBracket)
}

/// Maps token text to a category.
///
/// The expression builder is generic over this trait so a caller with its
/// own notion of numbers or operators can plug it in.
pub trait Classify {
    /// The category of `lexeme`, or `None` if it should be ignored
    fn classify(&self, lexeme: &str) -> Option<TokenKind>;
}

/// The default classifier backed by [`LogosToken`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogosClassifier;

impl Classify for LogosClassifier {
    fn classify(&self, lexeme: &str) -> Option<TokenKind> {
        classify(lexeme)
    }
}
