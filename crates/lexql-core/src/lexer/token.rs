//! Token types produced by the lexer.

use core::fmt;

use serde::Serialize;

/// The category a scanned lexeme was classified into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    /// Aggregate or scalar function name (e.g., `COUNT`).
    Function,
    /// Column, table, or quoted identifier.
    Identifier,
    /// Reserved word (e.g., `SELECT`).
    Keyword,
    /// Decimal literal (e.g., `3.14`).
    Number,
    /// Comparison or logical operator.
    Operator,
    /// One of `( ) ; ,`.
    Punctuation,
    /// Single-quoted string literal, quotes removed.
    String,
}

impl TokenKind {
    /// Returns the upper-case name of the kind.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Function => "FUNCTION",
            Self::Identifier => "IDENTIFIER",
            Self::Keyword => "KEYWORD",
            Self::Number => "NUMBER",
            Self::Operator => "OPERATOR",
            Self::Punctuation => "PUNCTUATION",
            Self::String => "STRING",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified lexeme.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// Literal or case-normalized text.
    pub value: String,
    /// Byte offset in the original input where the token starts.
    pub position: usize,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub fn new(kind: TokenKind, value: impl Into<String>, position: usize) -> Self {
        Self {
            kind,
            value: value.into(),
            position,
        }
    }

    /// Returns true if this is the keyword `keyword` (expects upper case).
    #[must_use]
    pub fn is_keyword(&self, keyword: &str) -> bool {
        self.kind == TokenKind::Keyword && self.value == keyword
    }

    /// Returns true if this is the punctuation character `c`.
    #[must_use]
    pub fn is_punctuation(&self, c: char) -> bool {
        let mut buf = [0; 4];
        self.kind == TokenKind::Punctuation && self.value == *c.encode_utf8(&mut buf)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}@{}", self.kind, self.value, self.position)
    }
}
