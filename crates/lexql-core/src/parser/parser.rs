//! SQL Parser implementation.

use tracing::debug;

use super::error::ParseError;
use crate::ast::{
    DisplayFunction, DisplaySelector, DisplayValue, FunctionArgument, SelectStatement, Statement,
    TableSource,
};
use crate::lexer::{Lexer, Token, TokenKind};

/// Recursive descent parser over an already scanned token sequence.
///
/// Accepted grammar:
///
/// ```text
/// select        := SELECT [ display_value { "," display_value } ] FROM IDENTIFIER
/// display_value := IDENTIFIER | call
/// call          := FUNCTION "(" [ argument { "," argument } ] ")"
/// argument      := NUMBER | STRING | IDENTIFIER | call
/// ```
///
/// Anything else fails fast; no tokens are skipped.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    /// Creates a new parser for the given tokens.
    #[must_use]
    pub const fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Tokenizes `sql` and creates a parser over the result.
    #[must_use]
    pub fn from_sql(sql: &str) -> Self {
        Self::new(Lexer::new(sql).tokenize())
    }

    /// Parses the token sequence into a statement.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the tokens are empty, do not start with
    /// SELECT, or fall outside the accepted grammar.
    pub fn parse(&mut self) -> Result<Statement, ParseError> {
        debug!(tokens = self.tokens.len(), "parsing statement");
        self.parse_statement()
            .inspect_err(|e| debug!(error = %e, "parse failed"))
    }

    fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        let first = self.peek().ok_or(ParseError::Empty)?;
        if !first.is_keyword("SELECT") {
            return Err(ParseError::UnsupportedStatement {
                keyword: first.value.clone(),
                position: first.position,
            });
        }
        self.advance();

        let display_values = self.parse_display_values()?;
        let data_source = self.parse_table_source()?;
        Ok(Statement::Select(SelectStatement::new(
            display_values,
            data_source,
        )))
    }

    /// Parses the comma separated list between SELECT and FROM.
    fn parse_display_values(&mut self) -> Result<Vec<DisplayValue>, ParseError> {
        let mut values = vec![];
        match self.peek() {
            Some(t) if !t.is_keyword("FROM") => {}
            _ => return Ok(values),
        }

        loop {
            values.push(self.parse_display_value()?);
            if !self.check_punctuation(',') {
                break;
            }
            self.advance();
        }

        Ok(values)
    }

    fn parse_display_value(&mut self) -> Result<DisplayValue, ParseError> {
        let Some(token) = self.peek() else {
            return Err(ParseError::expected("display value", self.last_position()));
        };

        match token.kind {
            TokenKind::Identifier => {
                let selector = DisplaySelector::new(token.value.clone());
                self.advance();
                Ok(DisplayValue::Selector(selector))
            }
            TokenKind::Function => Ok(DisplayValue::Function(self.parse_function()?)),
            TokenKind::Keyword if token.value == "FROM" => {
                Err(ParseError::expected("display value", token.position))
            }
            TokenKind::Number | TokenKind::String | TokenKind::Keyword => Err(
                ParseError::unsupported(token.value.clone(), token.position),
            ),
            TokenKind::Operator | TokenKind::Punctuation => {
                Err(ParseError::expected("display value", token.position))
            }
        }
    }

    /// Parses `NAME ( args )` with the current token on the function name.
    fn parse_function(&mut self) -> Result<DisplayFunction, ParseError> {
        let name = self
            .advance()
            .map(|t| t.value)
            .ok_or_else(|| ParseError::expected("function", self.last_position()))?;
        self.expect_punctuation('(')?;

        let mut args = vec![];
        if !self.check_punctuation(')') {
            loop {
                args.push(self.parse_argument()?);
                if !self.check_punctuation(',') {
                    break;
                }
                self.advance();
            }
        }
        self.expect_punctuation(')')?;

        Ok(DisplayFunction::new(name, args))
    }

    fn parse_argument(&mut self) -> Result<FunctionArgument, ParseError> {
        let Some(token) = self.peek() else {
            return Err(ParseError::expected("function argument", self.last_position()));
        };

        match token.kind {
            TokenKind::Number => {
                let n = token
                    .value
                    .parse::<f64>()
                    .map_err(|_| ParseError::expected("number", token.position))?;
                self.advance();
                Ok(FunctionArgument::Number(n))
            }
            TokenKind::String => {
                let s = token.value.clone();
                self.advance();
                Ok(FunctionArgument::String(s))
            }
            TokenKind::Identifier => {
                let selector = DisplaySelector::new(token.value.clone());
                self.advance();
                Ok(FunctionArgument::Selector(selector))
            }
            TokenKind::Function => Ok(FunctionArgument::Function(self.parse_function()?)),
            TokenKind::Keyword | TokenKind::Operator | TokenKind::Punctuation => {
                Err(ParseError::expected("function argument", token.position))
            }
        }
    }

    /// Parses `FROM table`. Nothing may follow the table name.
    fn parse_table_source(&mut self) -> Result<TableSource, ParseError> {
        match self.peek() {
            Some(t) if t.is_keyword("FROM") => {
                self.advance();
            }
            Some(t) => return Err(ParseError::expected("FROM", t.position)),
            None => return Err(ParseError::expected("FROM", self.last_position())),
        }

        let source = match self.peek() {
            Some(t) if t.kind == TokenKind::Identifier => TableSource::new(t.value.clone()),
            Some(t) => return Err(ParseError::expected("table name", t.position)),
            None => return Err(ParseError::expected("table name", self.last_position())),
        };
        self.advance();

        // JOIN, WHERE, GROUP BY and friends are rejected rather than dropped.
        if let Some(extra) = self.peek() {
            return Err(ParseError::unsupported(extra.value.clone(), extra.position));
        }

        Ok(source)
    }

    // --- Helper methods ---

    /// Returns the current token without advancing.
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// Advances to the next token, returning the one consumed.
    fn advance(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Position of the last consumed token, used when input runs out.
    fn last_position(&self) -> usize {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .map_or(0, |t| t.position)
    }

    /// Checks if the current token is the punctuation character `c`.
    fn check_punctuation(&self, c: char) -> bool {
        self.peek().is_some_and(|t| t.is_punctuation(c))
    }

    /// Expects the current token to be the punctuation character `c`.
    fn expect_punctuation(&mut self, c: char) -> Result<(), ParseError> {
        match self.peek() {
            Some(t) if t.is_punctuation(c) => {
                self.advance();
                Ok(())
            }
            Some(t) => Err(ParseError::expected(c.to_string(), t.position)),
            None => Err(ParseError::expected(c.to_string(), self.last_position())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tok(kind: TokenKind, value: &str, position: usize) -> Token {
        Token::new(kind, value, position)
    }

    fn parse(sql: &str) -> Result<Statement, ParseError> {
        Parser::from_sql(sql).parse()
    }

    #[test]
    fn test_column_and_table_selectors() {
        let tokens = vec![
            tok(TokenKind::Keyword, "SELECT", 0),
            tok(TokenKind::Identifier, "column_name", 7),
            tok(TokenKind::Keyword, "FROM", 9),
            tok(TokenKind::Identifier, "table_name", 14),
        ];
        let expected = Statement::Select(SelectStatement::new(
            vec![DisplaySelector::new("column_name").into()],
            TableSource::new("table_name"),
        ));
        assert_eq!(Parser::new(tokens).parse(), Ok(expected));
    }

    #[test]
    fn test_create_not_supported() {
        let tokens = vec![
            tok(TokenKind::Keyword, "CREATE", 0),
            tok(TokenKind::Keyword, "TABLE", 7),
            tok(TokenKind::Identifier, "table_name", 12),
        ];
        let err = Parser::new(tokens).parse().unwrap_err();
        assert!(matches!(err, ParseError::UnsupportedStatement { .. }));
        assert!(err.to_string().contains("not supported"));
    }

    #[test]
    fn test_missing_from() {
        let tokens = vec![
            tok(TokenKind::Keyword, "SELECT", 0),
            tok(TokenKind::Identifier, "*", 7),
            tok(TokenKind::Keyword, "BY", 9),
        ];
        let err = Parser::new(tokens).parse().unwrap_err();
        assert_eq!(err.to_string(), "Expected FROM at position 9");
    }

    #[test]
    fn test_missing_from_at_end_of_input() {
        let err = parse("SELECT a, b").unwrap_err();
        assert_eq!(err, ParseError::expected("FROM", 10));
    }

    #[test]
    fn test_empty_display_list() {
        let Statement::Select(select) = parse("SELECT FROM t").unwrap();
        assert!(select.display_values.is_empty());
        assert_eq!(select.data_source, TableSource::new("t"));
    }

    #[test]
    fn test_select_alone_expects_from() {
        assert_eq!(parse("SELECT").unwrap_err(), ParseError::expected("FROM", 0));
    }

    #[test]
    fn test_empty_tokens() {
        assert_eq!(Parser::new(vec![]).parse(), Err(ParseError::Empty));
    }

    #[test]
    fn test_function_display_value() {
        let Statement::Select(select) = parse("SELECT COUNT(*) FROM test").unwrap();
        assert_eq!(
            select.display_values,
            vec![DisplayValue::Function(DisplayFunction::new(
                "COUNT",
                vec![FunctionArgument::Selector(DisplaySelector::new("*"))],
            ))]
        );
    }

    #[test]
    fn test_trailing_clause_rejected() {
        let err = parse("SELECT * FROM test AS T GROUP BY T.id;").unwrap_err();
        assert_eq!(err, ParseError::unsupported("AS", 19));
    }
}
