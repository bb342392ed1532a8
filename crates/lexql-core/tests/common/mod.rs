#![allow(dead_code)]

use lexql_core::ast::{SelectStatement, Statement};
use lexql_core::{Lexer, ParseError, Parser, Token, TokenKind};

pub fn tokens(sql: &str) -> Vec<Token> {
    Lexer::new(sql).tokenize()
}

/// Renders tokens as `(kind, value, position)` triples for compact asserts.
pub fn triples(sql: &str) -> Vec<(TokenKind, String, usize)> {
    tokens(sql)
        .into_iter()
        .map(|t| (t.kind, t.value, t.position))
        .collect()
}

/// Renders tokens without positions.
pub fn shape(sql: &str) -> Vec<(TokenKind, String)> {
    tokens(sql).into_iter().map(|t| (t.kind, t.value)).collect()
}

pub fn parse_select(sql: &str) -> SelectStatement {
    match Parser::from_sql(sql).parse() {
        Ok(Statement::Select(s)) => s,
        Err(e) => panic!("Failed to parse: {sql}\nError: {e:?}"),
    }
}

pub fn parse_err(sql: &str) -> ParseError {
    Parser::from_sql(sql)
        .parse()
        .expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn kw(value: &str, position: usize) -> (TokenKind, String, usize) {
    (TokenKind::Keyword, value.to_string(), position)
}

pub fn ident(value: &str, position: usize) -> (TokenKind, String, usize) {
    (TokenKind::Identifier, value.to_string(), position)
}

pub fn punct(value: &str, position: usize) -> (TokenKind, String, usize) {
    (TokenKind::Punctuation, value.to_string(), position)
}
