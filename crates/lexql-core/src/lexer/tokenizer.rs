//! SQL Tokenizer implementation.

use tracing::trace;

use super::tables;
use super::{Token, TokenKind};

/// Returns true for characters that survive the trailing trim.
const fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// A lexer that tokenizes SQL input.
///
/// Trailing non-word characters (a statement terminator, trailing whitespace)
/// are dropped once at construction. Scanning is cursor based and never
/// backtracks.
///
/// ```
/// use lexql_core::lexer::{Lexer, TokenKind};
///
/// let tokens = Lexer::new("SELECT * FROM test;").tokenize();
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens[2].kind, TokenKind::Keyword);
/// assert_eq!(tokens[2].value, "FROM");
/// ```
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    /// The input with trailing non-word characters removed.
    input: &'a str,
    /// The current byte position.
    pos: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Self {
            input: input.trim_end_matches(|c: char| !is_word_char(c)),
            pos: 0,
        }
    }

    /// Returns true while unconsumed characters remain.
    #[must_use]
    pub const fn has_next_token(&self) -> bool {
        self.pos < self.input.len()
    }

    /// Scans the next token, or returns `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Option<Token> {
        self.skip_whitespace();
        let start = self.pos;

        let token = match self.peek()? {
            '\'' => self.scan_string(start),
            '"' => self.scan_quoted_identifier(start),
            c if tables::is_punctuation(c) => {
                self.advance();
                Token::new(TokenKind::Punctuation, c.to_string(), start)
            }
            _ => self.scan_lexeme(start),
        };

        trace!(kind = %token.kind, value = %token.value, position = token.position, "token");
        Some(token)
    }

    /// Tokenizes the remaining input.
    #[must_use]
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        tokens
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Consumes characters up to, not including, `end` or the end of input.
    fn gather_until(&mut self, end: char) -> &'a str {
        let from = self.pos;
        while self.peek().is_some_and(|c| c != end) {
            self.advance();
        }
        &self.input[from..self.pos]
    }

    /// Scans a single-quoted string literal. The value excludes the quotes.
    fn scan_string(&mut self, start: usize) -> Token {
        self.advance(); // opening quote
        let content = self.gather_until('\'');
        self.advance(); // closing quote
        Token::new(TokenKind::String, content, start)
    }

    /// Scans a double-quoted identifier. The value keeps both quotes and the
    /// original casing.
    fn scan_quoted_identifier(&mut self, start: usize) -> Token {
        self.advance(); // opening quote
        self.gather_until('"');
        self.advance(); // closing quote
        Token::new(TokenKind::Identifier, &self.input[start..self.pos], start)
    }

    /// Scans a run of characters ending at whitespace or punctuation and
    /// classifies it.
    fn scan_lexeme(&mut self, start: usize) -> Token {
        self.advance();
        while self
            .peek()
            .is_some_and(|c| !c.is_whitespace() && !tables::is_punctuation(c))
        {
            self.advance();
        }
        classify(&self.input[start..self.pos], start)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.next_token()
    }
}

/// Classifies a lexeme. Earlier categories win: number, operator, keyword,
/// function, then identifier.
fn classify(lexeme: &str, position: usize) -> Token {
    if tables::is_number(lexeme) {
        return Token::new(TokenKind::Number, lexeme, position);
    }
    if let Some(op) = tables::operator(lexeme) {
        return Token::new(TokenKind::Operator, op, position);
    }
    if let Some(kw) = tables::keyword(lexeme) {
        return Token::new(TokenKind::Keyword, kw, position);
    }
    if let Some(func) = tables::function(lexeme) {
        return Token::new(TokenKind::Function, func, position);
    }
    Token::new(TokenKind::Identifier, lexeme.to_lowercase(), position)
}
