//! Conditional expressions.

use core::fmt;

use serde::Serialize;

use super::DisplaySelector;

/// Binary comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComparisonOp {
    /// `!=`
    #[serde(rename = "!=")]
    NotEq,
    /// `<`
    #[serde(rename = "<")]
    Lt,
    /// `<=`
    #[serde(rename = "<=")]
    LtEq,
    /// `<>`
    #[serde(rename = "<>")]
    LtGt,
    /// `=`
    #[serde(rename = "=")]
    Eq,
    /// `>`
    #[serde(rename = ">")]
    Gt,
    /// `>=`
    #[serde(rename = ">=")]
    GtEq,
}

impl ComparisonOp {
    /// Parses an operator from its SQL spelling.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "!=" => Some(Self::NotEq),
            "<" => Some(Self::Lt),
            "<=" => Some(Self::LtEq),
            "<>" => Some(Self::LtGt),
            "=" => Some(Self::Eq),
            ">" => Some(Self::Gt),
            ">=" => Some(Self::GtEq),
            _ => None,
        }
    }

    /// Returns the SQL representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::LtGt => "<>",
            Self::Eq => "=",
            Self::Gt => ">",
            Self::GtEq => ">=",
        }
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A comparison between two selectors, e.g. `a.id = b.a_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataConditional {
    /// The comparison operator.
    pub operator: ComparisonOp,
    /// Left operand.
    pub left_val: DisplaySelector,
    /// Right operand.
    pub right_val: DisplaySelector,
}

impl DataConditional {
    /// Creates a comparison node.
    #[must_use]
    pub const fn new(
        operator: ComparisonOp,
        left_val: DisplaySelector,
        right_val: DisplaySelector,
    ) -> Self {
        Self {
            operator,
            left_val,
            right_val,
        }
    }
}

impl fmt::Display for DataConditional {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left_val, self.operator, self.right_val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_round_trip() {
        for s in ["!=", "<", "<=", "<>", "=", ">", ">="] {
            assert_eq!(ComparisonOp::parse(s).map(|op| op.as_str()), Some(s));
        }
        assert_eq!(ComparisonOp::parse("AND"), None);
    }

    #[test]
    fn test_conditional_display() {
        let cond = DataConditional::new(
            ComparisonOp::LtEq,
            DisplaySelector::new("a"),
            DisplaySelector::new("b"),
        );
        assert_eq!(cond.to_string(), "a <= b");
    }
}
