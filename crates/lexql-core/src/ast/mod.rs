//! Abstract Syntax Tree (AST) types for SQL statements.
//!
//! Nodes own their children outright; the parser is the only producer.

mod condition;
mod display;
mod statement;

pub use condition::{ComparisonOp, DataConditional};
pub use display::{DisplayFunction, DisplaySelector, DisplayValue, FunctionArgument, QualifiedColumn};
pub use statement::{Join, JoinType, QualifiedTable, SelectStatement, Statement, TableSource};
