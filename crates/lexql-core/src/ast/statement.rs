//! SQL statement AST types.

use core::fmt;

use serde::Serialize;

use super::{DataConditional, DisplayValue};

/// Fully qualified breakdown of a table reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QualifiedTable {
    /// Schema name.
    pub schema: String,
    /// Table name.
    pub table: String,
}

/// Join type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum JoinType {
    /// INNER JOIN.
    Inner,
    /// OUTER JOIN.
    Outer,
    /// LEFT JOIN.
    Left,
    /// RIGHT JOIN.
    Right,
}

impl JoinType {
    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inner => "INNER",
            Self::Outer => "OUTER",
            Self::Left => "LEFT",
            Self::Right => "RIGHT",
        }
    }
}

/// A join attached to a [`TableSource`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Join {
    /// The joined table.
    pub join_table: TableSource,
    /// The type of join.
    pub join_type: JoinType,
    /// The ON condition.
    pub join_condition: DataConditional,
}

/// The table a SELECT reads from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableSource {
    /// Table name as it appeared in the token stream.
    pub selector: String,
    /// Schema/table breakdown.
    pub fully_qualified: QualifiedTable,
    /// Optional join.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_with: Option<Box<Join>>,
}

impl TableSource {
    /// Creates a table source without a join.
    #[must_use]
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            fully_qualified: QualifiedTable::default(),
            join_with: None,
        }
    }

    /// Attaches a join.
    #[must_use]
    pub fn join(mut self, table: Self, join_type: JoinType, condition: DataConditional) -> Self {
        self.join_with = Some(Box::new(Join {
            join_table: table,
            join_type,
            join_condition: condition,
        }));
        self
    }
}

impl fmt::Display for TableSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.selector)?;
        if let Some(join) = &self.join_with {
            write!(
                f,
                " {} JOIN {} ON {}",
                join.join_type.as_str(),
                join.join_table,
                join.join_condition
            )?;
        }
        Ok(())
    }
}

/// A SELECT statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectStatement {
    /// Items between SELECT and FROM.
    pub display_values: Vec<DisplayValue>,
    /// The FROM table.
    pub data_source: TableSource,
    /// Optional WHERE condition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<DataConditional>,
}

impl SelectStatement {
    /// Creates a statement without a condition.
    #[must_use]
    pub const fn new(display_values: Vec<DisplayValue>, data_source: TableSource) -> Self {
        Self {
            display_values,
            data_source,
            condition: None,
        }
    }
}

impl fmt::Display for SelectStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SELECT")?;
        for (i, value) in self.display_values.iter().enumerate() {
            f.write_str(if i == 0 { " " } else { ", " })?;
            write!(f, "{value}")?;
        }
        write!(f, " FROM {}", self.data_source)?;
        if let Some(cond) = &self.condition {
            write!(f, " WHERE {cond}")?;
        }
        Ok(())
    }
}

/// The root of a parsed statement.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "statement", rename_all = "snake_case")]
pub enum Statement {
    /// SELECT statement.
    Select(SelectStatement),
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Select(select) => write!(f, "{select}"),
        }
    }
}
