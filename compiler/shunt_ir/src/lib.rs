//! Shunt IR - Token and operator types for the shunt evaluator.
//!
//! Callers hand the evaluator a flat, pre-tokenized argument list:
//! operand, operator, operand, ..., operand. This crate defines the three
//! layers of that list:
//!
//! - [`Value`]: a raw, dynamically-typed argument as supplied by the caller.
//!   Anything can sit in any slot; validation decides whether it belongs.
//! - [`Token`]: a checked element, either a number or an [`Operator`].
//! - [`Operator`]: the fixed set `+ - * /` with its precedence table.
//!
//! The [`args!`] macro builds a `Vec<Value>` from mixed literals so call
//! sites read like the expression they describe.

mod operator;
mod token;
mod value;

pub use operator::{precedence_of, Operator};
pub use token::Token;
pub use value::Value;

/// Build a `Vec<Value>` from a mixed list of numbers and symbols.
///
/// ```
/// use shunt_ir::{args, Value};
///
/// let list = args![2, "+", 3.5];
/// assert_eq!(list[0], Value::Number(2.0));
/// assert_eq!(list[1], Value::Str("+".to_string()));
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Value>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        ::std::vec![$($crate::Value::from($arg)),+]
    };
}

#[cfg(test)]
mod tests;
