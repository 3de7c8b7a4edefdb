use std::fmt;

use crate::string_interner::InternedString;

/// Text the builder stores for every accepted opening bracket.
pub const LEFT_BRACKET: &str = "(";
/// Text the builder stores for every accepted or synthesized closing bracket.
pub const RIGHT_BRACKET: &str = ")";

/// Represents a token's location in the input.
///
/// Line and column are 1-based and counted in characters; the offset is a
/// 0-based byte offset. Tokens synthesized by the expression builder carry
/// the zeroed default location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Location {
    /// The 1-based line number
    pub line: usize,
    /// The 1-based column number
    pub column: usize,
    /// The 0-based byte offset from the start of the input
    pub offset: usize,
}

impl Location {
    /// Location of the first character of an input
    pub fn start() -> Self {
        Self {
            line: 1,
            column: 1,
            offset: 0,
        }
    }

    /// Whether this is the zeroed location of a synthesized token
    pub fn is_synthetic(&self) -> bool {
        *self == Self::default()
    }
}

/// The category a token falls into.
///
/// Every classified token belongs to exactly one category; the builder never
/// looks at a token's text beyond this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum TokenKind {
    /// A numeric operand
    Number,
    /// A binary operator
    Operator,
    /// An opening bracket
    LeftBracket,
    /// A closing bracket
    RightBracket,
}

impl TokenKind {
    /// All categories, in table order
    pub const ALL: [TokenKind; 4] = [
        TokenKind::Number,
        TokenKind::Operator,
        TokenKind::LeftBracket,
        TokenKind::RightBracket,
    ];

    /// Returns true for either bracket category
    pub fn is_bracket(self) -> bool {
        matches!(self, TokenKind::LeftBracket | TokenKind::RightBracket)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Number => "number",
            TokenKind::Operator => "operator",
            TokenKind::LeftBracket => "left bracket",
            TokenKind::RightBracket => "right bracket",
        };
        f.write_str(name)
    }
}

/// A classified token, including its category, lexeme, and location.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    /// The category of the token
    pub kind: TokenKind,
    /// The text of the token
    pub lexeme: InternedString,
    /// Where the token was typed
    pub location: Location,
}

impl Token {
    /// Creates a new token from a string that can be converted to an InternedString.
    /// This will intern the string if it's not already interned.
    pub fn new<S: Into<InternedString>>(kind: TokenKind, lexeme: S, location: Location) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            location,
        }
    }

    /// An opening bracket with the canonical `(` text
    pub fn left_bracket(location: Location) -> Self {
        Self::new(TokenKind::LeftBracket, LEFT_BRACKET, location)
    }

    /// A closing bracket with the canonical `)` text
    pub fn right_bracket(location: Location) -> Self {
        Self::new(TokenKind::RightBracket, RIGHT_BRACKET, location)
    }

    /// The token text
    pub fn as_str(&self) -> &str {
        self.lexeme.as_str()
    }
}

/// Tokens render as their text so expressions can be joined directly.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}
