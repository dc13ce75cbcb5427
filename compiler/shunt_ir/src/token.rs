use std::fmt;

use crate::Operator;

/// A checked element of an expression.
///
/// Produced by validation from a raw [`Value`](crate::Value) list; a
/// well-formed sequence alternates `Number`, `Operator`, ..., `Number`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(Operator),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Operator(op) => write!(f, "{op}"),
        }
    }
}

impl From<f64> for Token {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}
