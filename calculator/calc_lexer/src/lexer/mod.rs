//! Whitespace lexer for bulk expression input.
//!
//! Splits a string such as `"1 + ( 2 - 3"` into words and records where each
//! one starts. Words are not classified here: a word the classifier rejects
//! still reaches the expression builder so it can be dropped there.

use crate::classify::Classify;
use crate::token::{Location, Token};

/// A whitespace separated word of the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word<'a> {
    /// The text of the word
    pub lexeme: &'a str,
    /// Where the word starts
    pub location: Location,
}

impl<'a> Word<'a> {
    /// Classify the word into a token, if the classifier knows it
    pub fn classify<C: Classify + ?Sized>(&self, classifier: &C) -> Option<Token> {
        classifier
            .classify(self.lexeme)
            .map(|kind| Token::new(kind, self.lexeme, self.location))
    }
}

/// Iterator over the words of an input string
pub struct Lexer<'a> {
    /// The text being split
    source: &'a str,
    /// The current line number (1-based)
    line: usize,
    /// The current column number (1-based)
    column: usize,
    /// The current byte offset in the source
    offset: usize,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given input
    pub fn new(source: &'a str) -> Self {
        let start = Location::start();
        Self {
            source,
            line: start.line,
            column: start.column,
            offset: start.offset,
        }
    }

    /// Move past `text`, which must start at the current offset.
    /// Columns count characters, not bytes.
    fn advance(&mut self, text: &str) {
        let mut iter = text.chars().peekable();
        while let Some(c) = iter.next() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else if c == '\r' {
                // Windows line endings count once
                if iter.peek() == Some(&'\n') {
                    iter.next();
                }
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
        self.offset += text.len();
    }

    fn location(&self) -> Location {
        Location {
            line: self.line,
            column: self.column,
            offset: self.offset,
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Word<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.source[self.offset..];
        let Some(start) = rest.find(|c: char| !c.is_whitespace()) else {
            self.advance(rest);
            return None;
        };
        self.advance(&rest[..start]);

        let rest = &self.source[self.offset..];
        let len = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let word = Word {
            lexeme: &rest[..len],
            location: self.location(),
        };
        self.advance(word.lexeme);

        #[cfg(feature = "logging")]
        log::trace!("word {:?} at {}", word.lexeme, word.location);

        Some(word)
    }
}

#[cfg(test)]
mod tests;
