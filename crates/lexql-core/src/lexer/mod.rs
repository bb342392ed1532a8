//! SQL Lexer/Tokenizer
//!
//! This module provides a hand-written lexer that turns SQL text into a
//! stream of classified tokens.

pub mod tables;
mod token;
mod tokenizer;

pub use token::{Token, TokenKind};
pub use tokenizer::Lexer;
