//! Binary operator application with operand saturation.

use shunt_ir::Operator;

use crate::calculator::Calculator;
use crate::errors::{division_by_zero, CalcResult};

impl Calculator {
    /// Apply `op` to `left` and `right`.
    ///
    /// Before the arithmetic runs, out-of-range operands saturate to the
    /// operator's [sentinel](Operator::sentinel) (0 for `+ -`, 1 for `* /`):
    ///
    /// - `left` saturates when `left > limit`. The test is one-sided, so a
    ///   large negative left operand is kept as is.
    /// - `right` saturates when `|right| > limit`.
    ///
    /// Both comparisons are strict; an operand equal to the limit is kept.
    ///
    /// Division checks its raw right operand for zero before saturation.
    pub fn apply(&self, op: Operator, left: f64, right: f64) -> CalcResult<f64> {
        if op == Operator::Divide && right == 0.0 {
            return Err(division_by_zero());
        }

        let limit = self.saturation_limit;
        let left = if left > limit { op.sentinel() } else { left };
        let right = if right.abs() > limit {
            op.sentinel()
        } else {
            right
        };

        Ok(match op {
            Operator::Plus => left + right,
            Operator::Minus => left - right,
            Operator::Multiply => left * right,
            Operator::Divide => left / right,
        })
    }
}
