//! SQL Parser
//!
//! A hand-written recursive descent parser over the lexer's token stream.

mod error;
#[allow(clippy::module_inception)]
mod parser;

pub use error::ParseError;
pub use parser::Parser;
