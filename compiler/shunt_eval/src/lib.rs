//! Shunt Eval - Operator-precedence evaluator for flat infix expressions.
//!
//! Evaluates an already-tokenized argument list such as
//! `2, "+", 3, "*", 4` with the usual precedence (`*` and `/` before `+`
//! and `-`) and left associativity.
//!
//! # Architecture
//!
//! - `validator`: rejects malformed input and produces checked [`Token`]s
//! - `evaluator`: two-stack shunting-yard reduction over those tokens
//! - `operators`: single operator application, including operand saturation
//! - `calculator`: evaluator settings ([`Calculator`], [`CalculatorBuilder`])
//!
//! # Usage
//!
//! ```
//! use shunt_eval::{args, calc, ErrorKind};
//!
//! assert_eq!(calc(&args![2, "+", 3, "*", 4]), Ok(14.0));
//! assert_eq!(
//!     calc(&args![6, "/", 0]).map_err(|err| err.kind()),
//!     Err(ErrorKind::DivisionByZero)
//! );
//! ```
//!
//! # Re-exports
//!
//! The input types from `shunt_ir` are re-exported so callers need only
//! this crate: `Value`, `Token`, `Operator`, `precedence_of` and `args!`.

mod calculator;
pub mod errors;
mod evaluator;
mod operators;
mod validator;

pub use shunt_ir::{args, precedence_of, Operator, Token, Value};

pub use calculator::{Calculator, CalculatorBuilder, SATURATION_LIMIT};
pub use errors::{CalcError, CalcResult, ErrorKind};
pub use validator::{operands_are_valid, operators_are_valid, validate, MIN_ARGS};

use std::sync::Once;

/// Validate and evaluate `args` with the default [`Calculator`].
pub fn calc(args: &[Value]) -> CalcResult<f64> {
    Calculator::default().calc(args)
}

/// Evaluate a checked token sequence with the default [`Calculator`].
pub fn evaluate(tokens: &[Token]) -> CalcResult<f64> {
    Calculator::default().evaluate(tokens)
}

/// Apply one operator with the default [`Calculator`].
pub fn apply_operator(op: Operator, left: f64, right: f64) -> CalcResult<f64> {
    Calculator::default().apply(op, left, right)
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=shunt_eval=debug` or `RUST_LOG=shunt_eval=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

#[cfg(test)]
mod tests;
