//! Error types for validation and evaluation.
//!
//! Every failure is terminal: evaluation stops at the first error and no
//! partial result is produced. `CalcError` carries the structured data for
//! each failure; [`ErrorKind`] is the fieldless category for callers that
//! only need to branch on what went wrong.

use shunt_ir::Value;

/// Result of validation or evaluation.
pub type CalcResult<T> = Result<T, CalcError>;

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    /// Argument count is below 3 or even, or a token stream does not
    /// alternate number/operator.
    #[error("invalid input: expected an odd number of at least 3 arguments, got {len}")]
    InvalidInput { len: usize },

    /// An operand slot holds something other than a usable number.
    #[error("invalid input type at position {position}: expected a number, got {found}")]
    InvalidInputType { position: usize, found: String },

    /// An operator slot holds something other than `+ - * /`.
    #[error("invalid operator at position {position}: {found}")]
    InvalidOperator { position: usize, found: String },

    #[error("division by zero")]
    DivisionByZero,
}

/// Category of a [`CalcError`], without its payload.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    InvalidInputType,
    InvalidOperator,
    DivisionByZero,
}

impl CalcError {
    /// The category of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput { .. } => ErrorKind::InvalidInput,
            Self::InvalidInputType { .. } => ErrorKind::InvalidInputType,
            Self::InvalidOperator { .. } => ErrorKind::InvalidOperator,
            Self::DivisionByZero => ErrorKind::DivisionByZero,
        }
    }
}

// Factory functions

/// Argument count or token alternation error.
#[cold]
pub fn invalid_input(len: usize) -> CalcError {
    CalcError::InvalidInput { len }
}

/// Non-numeric value in an operand slot.
#[cold]
pub fn invalid_input_type(position: usize, found: &Value) -> CalcError {
    CalcError::InvalidInputType {
        position,
        found: describe(found),
    }
}

/// Unrecognized value in an operator slot.
#[cold]
pub fn invalid_operator(position: usize, found: &Value) -> CalcError {
    CalcError::InvalidOperator {
        position,
        found: describe(found),
    }
}

/// Division by zero error.
#[cold]
pub fn division_by_zero() -> CalcError {
    CalcError::DivisionByZero
}

/// Render an offending value as `<type> <value>`, e.g. `string "a"`.
fn describe(value: &Value) -> String {
    format!("{} {value}", value.type_name())
}
