//! Small container types shared by the lexer and its lookup tables.

mod ordered_set;

pub use ordered_set::OrderedSet;
