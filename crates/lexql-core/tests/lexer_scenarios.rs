//! Tests for token classification and source positions.

mod common;
use common::*;

use lexql_core::TokenKind;

#[test]
fn simple_select() {
    assert_eq!(
        triples("SELECT * FROM test"),
        vec![kw("SELECT", 0), ident("*", 7), kw("FROM", 9), ident("test", 14)]
    );
}

#[test]
fn case_folding_and_terminator() {
    assert_eq!(triples("SELECT * from TEST;"), triples("SELECT * FROM test"));
}

#[test]
fn function_group_by_and_qualified_column() {
    assert_eq!(
        triples("SELECT COUNT(*) FROM test AS T GROUP BY T.id;"),
        vec![
            kw("SELECT", 0),
            (TokenKind::Function, "COUNT".to_string(), 7),
            punct("(", 12),
            ident("*", 13),
            punct(")", 14),
            kw("FROM", 16),
            ident("test", 21),
            kw("AS", 26),
            ident("t", 29),
            kw("GROUP", 31),
            kw("BY", 37),
            ident("t.id", 40),
        ]
    );
}

#[test]
fn keywords_always_upper_case() {
    for input in ["from", "FROM", "From", "fRoM"] {
        let toks = tokens(input);
        assert_eq!(toks.len(), 1);
        assert_eq!(toks[0].kind, TokenKind::Keyword);
        assert_eq!(toks[0].value, "FROM");
    }
}

#[test]
fn functions_always_upper_case() {
    for input in ["avg(x) a", "AVG(x) a", "Avg(x) a"] {
        assert_eq!(tokens(input)[0].value, "AVG");
        assert_eq!(tokens(input)[0].kind, TokenKind::Function);
    }
}

#[test]
fn plain_identifiers_always_lower_case() {
    assert_eq!(
        shape("Users USERS users"),
        vec![
            (TokenKind::Identifier, "users".to_string()),
            (TokenKind::Identifier, "users".to_string()),
            (TokenKind::Identifier, "users".to_string()),
        ]
    );
}

#[test]
fn quoted_identifier_preserves_case_and_quotes() {
    let toks = tokens("SELECT \"UserName\" FROM t");
    assert_eq!(toks[1].kind, TokenKind::Identifier);
    assert_eq!(toks[1].value, "\"UserName\"");
}

#[test]
fn string_literal_preserves_case() {
    let toks = tokens("SELECT 'MiXeD' FROM t");
    assert_eq!(toks[1].kind, TokenKind::String);
    assert_eq!(toks[1].value, "MiXeD");
    assert_eq!(toks[1].position, 7);
    assert_eq!(toks[2].position, 15);
}

#[test]
fn number_before_operator() {
    assert_eq!(
        shape("a >= -1.5"),
        vec![
            (TokenKind::Identifier, "a".to_string()),
            (TokenKind::Operator, ">=".to_string()),
            (TokenKind::Number, "-1.5".to_string()),
        ]
    );
}

#[test]
fn keyword_before_function() {
    // No lexeme is in both tables; the check is that neither shadows the other.
    assert_eq!(tokens("SELECT x")[0].kind, TokenKind::Keyword);
    assert_eq!(tokens("MAX x")[0].kind, TokenKind::Function);
}

#[test]
fn all_punctuation_kinds() {
    assert_eq!(
        triples("f(a,b);g"),
        vec![
            ident("f", 0),
            punct("(", 1),
            ident("a", 2),
            punct(",", 3),
            ident("b", 4),
            punct(")", 5),
            punct(";", 6),
            ident("g", 7),
        ]
    );
}

#[test]
fn lexeme_count_bounded_by_input() {
    for sql in [
        "SELECT a, b FROM t",
        "SELECT COUNT(*) FROM test AS T GROUP BY T.id;",
        "  x  ",
        "",
    ] {
        let lexemes = sql
            .split(|c: char| c.is_whitespace() || "(),;".contains(c))
            .filter(|s| !s.is_empty())
            .count()
            + sql.chars().filter(|c| "(),;".contains(*c)).count();
        assert!(tokens(sql).len() <= lexemes, "too many tokens for {sql:?}");
    }
}
