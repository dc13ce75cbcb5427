//! Binary operators and their precedence table.

use std::fmt;

/// Binary arithmetic operators.
///
/// The set is closed: exactly the four printable symbols `+`, `-`, `*`
/// and `/` are recognized. Anything else is rejected during validation.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
}

impl Operator {
    /// Every operator, in symbol-table order.
    pub const ALL: [Self; 4] = [Self::Plus, Self::Minus, Self::Multiply, Self::Divide];

    /// Returns the source-level symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Look up an operator by its exact symbol.
    ///
    /// Matching is exact: `"//"`, `" +"` and `"%"` all return `None`.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Plus),
            "-" => Some(Self::Minus),
            "*" => Some(Self::Multiply),
            "/" => Some(Self::Divide),
            _ => None,
        }
    }

    /// Returns the precedence rank of this operator.
    ///
    /// Higher number = binds more tightly.
    /// - 2: `*` `/`
    /// - 1: `+` `-`
    pub const fn precedence(self) -> u8 {
        match self {
            // Multiplicative
            Self::Multiply | Self::Divide => 2,
            // Additive
            Self::Plus | Self::Minus => 1,
        }
    }

    /// The value an out-of-range operand is replaced with before this
    /// operator is applied: 0 for additive operators, 1 for multiplicative.
    pub const fn sentinel(self) -> f64 {
        match self {
            Self::Plus | Self::Minus => 0.0,
            Self::Multiply | Self::Divide => 1.0,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// Precedence rank of an arbitrary symbol.
///
/// Total over all strings: unrecognized symbols rank 0, below every real
/// operator.
pub fn precedence_of(symbol: &str) -> u8 {
    Operator::from_symbol(symbol).map_or(0, Operator::precedence)
}
