//! Two-stack operator-precedence evaluation.
//!
//! Tokens are scanned left to right. Numbers go on the operand stack. An
//! incoming operator first reduces every stacked operator of greater or
//! equal precedence, which makes equal-precedence chains associate to the
//! left, and is then pushed itself. Once the scan ends the operator stack
//! is drained, leaving the result as the only operand.

use shunt_ir::{Operator, Token};

use crate::calculator::Calculator;
use crate::errors::{invalid_input, CalcResult};

impl Calculator {
    /// Evaluate a checked token sequence.
    ///
    /// `tokens` must alternate `Number`, `Operator`, ..., `Number`, as
    /// produced by [`validate`](crate::validate). A sequence that does not
    /// fails with `InvalidInput` rather than panicking.
    #[tracing::instrument(level = "trace", skip(self, tokens), fields(len = tokens.len()))]
    pub fn evaluate(&self, tokens: &[Token]) -> CalcResult<f64> {
        let len = tokens.len();
        let mut operands: Vec<f64> = Vec::with_capacity(len / 2 + 1);
        let mut operators: Vec<Operator> = Vec::with_capacity(len / 2);

        for (position, &token) in tokens.iter().enumerate() {
            // Even positions hold numbers, odd positions hold operators.
            match (token, position % 2 == 0) {
                (Token::Number(n), true) => operands.push(n),
                (Token::Operator(op), false) => {
                    while let Some(&top) = operators.last() {
                        if top.precedence() < op.precedence() {
                            break;
                        }
                        operators.pop();
                        self.reduce(top, &mut operands, len)?;
                    }
                    operators.push(op);
                }
                _ => return Err(invalid_input(len)),
            }
        }

        while let Some(op) = operators.pop() {
            self.reduce(op, &mut operands, len)?;
        }

        match operands.as_slice() {
            [result] => Ok(*result),
            _ => Err(invalid_input(len)),
        }
    }

    /// Pop two operands, apply `op`, push the result.
    ///
    /// The right operand is on top of the stack and comes off first.
    fn reduce(&self, op: Operator, operands: &mut Vec<f64>, len: usize) -> CalcResult<()> {
        let Some(right) = operands.pop() else {
            return Err(invalid_input(len));
        };
        let Some(left) = operands.pop() else {
            return Err(invalid_input(len));
        };
        let result = self.apply(op, left, right)?;
        tracing::trace!(%op, left, right, result, "reduce");
        operands.push(result);
        Ok(())
    }
}
