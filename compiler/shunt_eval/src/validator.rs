//! Input validation gate.
//!
//! Runs before any arithmetic. A raw argument list passes only if it has
//! an odd length of at least [`MIN_ARGS`], every even position holds a
//! usable number and every odd position holds one of `+ - * /`.
//!
//! Check order is fixed: the length check first, then operand types, then
//! operator symbols. When an input has both a bad operand and a bad
//! operator, the operand error wins regardless of position.

use shunt_ir::{Operator, Token, Value};

use crate::errors::{invalid_input, invalid_input_type, invalid_operator, CalcResult};

/// Smallest well-formed argument list: operand, operator, operand.
pub const MIN_ARGS: usize = 3;

/// Whether every value is a usable operand (a number that is not `NaN`).
pub fn operands_are_valid(values: &[Value]) -> bool {
    values.iter().all(|value| value.as_number().is_some())
}

/// Whether every value is exactly one of the four operator symbols.
pub fn operators_are_valid(values: &[Value]) -> bool {
    values.iter().all(|value| value.as_operator().is_some())
}

/// Validate a raw argument list and convert it into checked tokens.
///
/// The returned sequence alternates `Number`, `Operator`, ..., `Number`.
pub fn validate(args: &[Value]) -> CalcResult<Vec<Token>> {
    let len = args.len();
    if len < MIN_ARGS || len % 2 == 0 {
        return Err(invalid_input(len));
    }

    let operands = args
        .iter()
        .enumerate()
        .step_by(2)
        .map(|(position, value)| {
            value
                .as_number()
                .ok_or_else(|| invalid_input_type(position, value))
        })
        .collect::<CalcResult<Vec<f64>>>()?;

    let operators = args
        .iter()
        .enumerate()
        .skip(1)
        .step_by(2)
        .map(|(position, value)| {
            value
                .as_operator()
                .ok_or_else(|| invalid_operator(position, value))
        })
        .collect::<CalcResult<Vec<Operator>>>()?;

    let mut tokens = Vec::with_capacity(len);
    let mut operators = operators.into_iter();
    for operand in operands {
        tokens.push(Token::Number(operand));
        if let Some(op) = operators.next() {
            tokens.push(Token::Operator(op));
        }
    }
    Ok(tokens)
}
