//! Fixed lookup tables used to classify lexemes.
//!
//! The tables are built once on first use and never written afterwards.

use std::sync::LazyLock;

use regex::Regex;

use crate::collections::OrderedSet;

/// Function names recognized by the lexer.
pub static FUNCTIONS: LazyLock<OrderedSet<&'static str>> =
    LazyLock::new(|| OrderedSet::from(["AVG", "COUNT", "MAX", "MIN", "ROUND", "SUM"]));

/// Reserved words recognized by the lexer.
pub static KEYWORDS: LazyLock<OrderedSet<&'static str>> = LazyLock::new(|| {
    OrderedSet::from([
        "ALTER", "AS", "BY", "CREATE", "DELETE", "DISTINCT", "FROM", "GROUP", "INNER", "INSERT",
        "JOIN", "LEFT", "LIMIT", "ORDER", "OUTER", "RIGHT", "SELECT", "TABLE", "UPDATE", "WHERE",
    ])
});

/// Comparison and logical operators.
pub static OPERATORS: LazyLock<OrderedSet<&'static str>> = LazyLock::new(|| {
    OrderedSet::from([
        "!=", "<", "<=", "<>", "=", ">", ">=", "AND", "BETWEEN", "LIKE", "OR",
    ])
});

/// Single-character punctuation that always forms its own token.
pub static PUNCTUATION: LazyLock<OrderedSet<char>> =
    LazyLock::new(|| OrderedSet::from(['(', ')', ';', ',']));

// Optional sign, digits, mandatory decimal point, digits.
static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?[0-9]*\.[0-9]*$").expect("number pattern is valid"));

/// Returns true if `lexeme` is a decimal literal.
#[must_use]
pub fn is_number(lexeme: &str) -> bool {
    NUMBER.is_match(lexeme)
}

/// Returns true if `c` is one of the punctuation characters.
#[must_use]
pub fn is_punctuation(c: char) -> bool {
    PUNCTUATION.has(&c)
}

/// Returns the operator text if `lexeme` is an operator.
///
/// Matching is exact: `and` is not the operator `AND`.
#[must_use]
pub fn operator(lexeme: &str) -> Option<String> {
    OPERATORS.has(lexeme).then(|| lexeme.to_string())
}

/// Returns the upper-cased keyword if `lexeme` is one.
#[must_use]
pub fn keyword(lexeme: &str) -> Option<String> {
    let upper = lexeme.to_ascii_uppercase();
    KEYWORDS.has(upper.as_str()).then_some(upper)
}

/// Returns the upper-cased function name if `lexeme` is one.
#[must_use]
pub fn function(lexeme: &str) -> Option<String> {
    let upper = lexeme.to_ascii_uppercase();
    FUNCTIONS.has(upper.as_str()).then_some(upper)
}
