//! Calculator token model
//!
//! This crate classifies the text of a single keystroke token into one of
//! the four categories the expression builder understands (number,
//! operator, left bracket, right bracket) and splits bulk input into
//! whitespace separated words.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod lexer;
pub mod logos_token;
pub mod string_interner;
pub mod token;

// Re-export the main types for convenience
pub use classify::{
    classify, is_left_bracket, is_number, is_operator, is_right_bracket, Classify,
    LogosClassifier,
};
pub use lexer::{Lexer, Word};
pub use logos_token::LogosToken;
pub use string_interner::InternedString;
pub use token::{Location, Token, TokenKind, LEFT_BRACKET, RIGHT_BRACKET};
