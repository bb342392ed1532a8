//! # lexql-core
//!
//! A two-stage SQL front end for a constrained subset of SELECT statements.
//!
//! This crate provides:
//! - A cursor-based lexer producing classified tokens with source offsets
//! - A recursive descent parser producing a small, closed AST
//! - An insertion-ordered set used for the lexer's lookup tables
//!
//! ## Tokenizing
//!
//! ```rust
//! use lexql_core::{tokenize, TokenKind};
//!
//! let tokens = tokenize("SELECT * from TEST;");
//! let values: Vec<_> = tokens.iter().map(|t| t.value.as_str()).collect();
//! assert_eq!(values, ["SELECT", "*", "FROM", "test"]);
//! assert_eq!(tokens[3].kind, TokenKind::Identifier);
//! assert_eq!(tokens[3].position, 14);
//! ```
//!
//! ## Parsing
//!
//! ```rust
//! use lexql_core::parse_sql;
//!
//! let stmt = parse_sql("SELECT id, COUNT(*) FROM users").unwrap();
//! assert_eq!(stmt.to_string(), "SELECT id, COUNT(*) FROM users");
//!
//! let err = parse_sql("SELECT * BY").unwrap_err();
//! assert_eq!(err.to_string(), "Expected FROM at position 9");
//! ```

pub mod ast;
pub mod collections;
pub mod lexer;
pub mod parser;

pub use ast::{SelectStatement, Statement};
pub use collections::OrderedSet;
pub use lexer::{Lexer, Token, TokenKind};
pub use parser::{ParseError, Parser};

/// Tokenizes `sql` into a vector of tokens.
#[must_use]
pub fn tokenize(sql: &str) -> Vec<Token> {
    Lexer::new(sql).tokenize()
}

/// Tokenizes and parses `sql` into a statement.
///
/// # Errors
///
/// Returns a `ParseError` if the SQL is not a supported SELECT statement.
pub fn parse_sql(sql: &str) -> Result<Statement, ParseError> {
    Parser::from_sql(sql).parse()
}
