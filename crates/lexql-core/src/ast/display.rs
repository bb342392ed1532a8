//! Display-value nodes: the items between SELECT and FROM.

use core::fmt;

use serde::Serialize;

/// Fully qualified breakdown of a column reference.
///
/// Not filled in by the parser; every part defaults to an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QualifiedColumn {
    /// Schema name.
    pub schema: String,
    /// Table name.
    pub table: String,
    /// Column name.
    pub column: String,
}

/// A single selected identifier or `*`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplaySelector {
    /// The identifier as it appeared in the token stream.
    pub selector: String,
    /// Schema/table/column breakdown.
    pub fully_qualified: QualifiedColumn,
}

impl DisplaySelector {
    /// Creates a selector with an empty qualified breakdown.
    #[must_use]
    pub fn new(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
            fully_qualified: QualifiedColumn::default(),
        }
    }

    /// Attaches a qualified breakdown.
    #[must_use]
    pub fn with_qualified(mut self, fully_qualified: QualifiedColumn) -> Self {
        self.fully_qualified = fully_qualified;
        self
    }

    /// Returns true if this is the `*` wildcard.
    #[must_use]
    pub fn is_wildcard(&self) -> bool {
        self.selector == "*"
    }
}

impl fmt::Display for DisplaySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.selector)
    }
}

/// An argument passed to a [`DisplayFunction`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum FunctionArgument {
    /// Decimal literal.
    Number(f64),
    /// String literal.
    String(String),
    /// Column reference or `*`.
    Selector(DisplaySelector),
    /// Nested function call.
    Function(DisplayFunction),
}

impl fmt::Display for FunctionArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "'{s}'"),
            Self::Selector(sel) => write!(f, "{sel}"),
            Self::Function(func) => write!(f, "{func}"),
        }
    }
}

/// A function call in the display list, e.g. `COUNT(*)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayFunction {
    /// Upper-cased function name.
    pub function_name: String,
    /// Arguments in call order.
    pub args: Vec<FunctionArgument>,
}

impl DisplayFunction {
    /// Creates a function call node.
    #[must_use]
    pub fn new(function_name: impl Into<String>, args: Vec<FunctionArgument>) -> Self {
        Self {
            function_name: function_name.into(),
            args,
        }
    }
}

impl fmt::Display for DisplayFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.function_name)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{arg}")?;
        }
        f.write_str(")")
    }
}

/// One entry of the SELECT display list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DisplayValue {
    /// A column reference or `*`.
    Selector(DisplaySelector),
    /// A function call.
    Function(DisplayFunction),
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Selector(sel) => write!(f, "{sel}"),
            Self::Function(func) => write!(f, "{func}"),
        }
    }
}

impl From<DisplaySelector> for DisplayValue {
    fn from(sel: DisplaySelector) -> Self {
        Self::Selector(sel)
    }
}

impl From<DisplayFunction> for DisplayValue {
    fn from(func: DisplayFunction) -> Self {
        Self::Function(func)
    }
}
