//! Raw caller-supplied arguments.

use std::fmt;

use crate::Operator;

/// An unchecked argument, as handed to the evaluator by a caller.
///
/// Operand slots expect a `Number`, operator slots expect a `Str` holding
/// one of the four operator symbols. Nothing here enforces that; see the
/// validator in `shunt_eval`.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Number(f64),
    Str(String),
}

impl Value {
    /// The numeric payload, if this is a usable operand.
    ///
    /// `NaN` is not a usable operand and yields `None`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) if !n.is_nan() => Some(*n),
            _ => None,
        }
    }

    /// The operator this value spells, if it is exactly one of `+ - * /`.
    pub fn as_operator(&self) -> Option<Operator> {
        match self {
            Self::Str(s) => Operator::from_symbol(s),
            Self::Number(_) => None,
        }
    }

    /// Name of the value's type, for error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Str(_) => "string",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Str(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Number(f64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<Operator> for Value {
    fn from(op: Operator) -> Self {
        Self::Str(op.as_symbol().to_string())
    }
}
