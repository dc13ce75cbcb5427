//! Evaluator configuration.

use shunt_ir::Value;

use crate::errors::CalcResult;
use crate::validator::validate;

/// Default saturation limit.
///
/// Operands whose magnitude exceeds this value are replaced by the
/// operator's sentinel before the operator is applied. See
/// [`Calculator::apply`] for the exact rule.
pub const SATURATION_LIMIT: f64 = 1000.0;

/// A configured evaluator.
///
/// Holds settings only; every call allocates its own stacks, so one
/// `Calculator` can be shared freely across threads.
///
/// `Calculator::default()` reproduces the standard behavior, and the free
/// functions [`calc`](crate::calc), [`evaluate`](crate::evaluate) and
/// [`apply_operator`](crate::apply_operator) use it.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Calculator {
    pub(crate) saturation_limit: f64,
}

impl Default for Calculator {
    fn default() -> Self {
        Self {
            saturation_limit: SATURATION_LIMIT,
        }
    }
}

impl Calculator {
    /// Create a calculator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building a calculator with custom settings.
    pub fn builder() -> CalculatorBuilder {
        CalculatorBuilder::new()
    }

    /// The configured saturation limit.
    pub const fn saturation_limit(&self) -> f64 {
        self.saturation_limit
    }

    /// Validate `args` and evaluate the expression they spell.
    ///
    /// This is the public entry point: validation failures are reported
    /// before any arithmetic runs.
    #[tracing::instrument(level = "debug", skip(self, args), fields(len = args.len()))]
    pub fn calc(&self, args: &[Value]) -> CalcResult<f64> {
        let tokens =
            validate(args).inspect_err(|err| tracing::debug!(%err, "rejected input"))?;
        let result = self.evaluate(&tokens)?;
        tracing::debug!(result, "evaluated");
        Ok(result)
    }
}

/// Builder for [`Calculator`].
#[derive(Clone, Debug)]
pub struct CalculatorBuilder {
    saturation_limit: f64,
}

impl Default for CalculatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorBuilder {
    /// Create a builder preloaded with the default settings.
    pub fn new() -> Self {
        Self {
            saturation_limit: SATURATION_LIMIT,
        }
    }

    /// Set the saturation limit.
    ///
    /// `f64::INFINITY` turns saturation off.
    #[must_use]
    pub fn saturation_limit(mut self, limit: f64) -> Self {
        self.saturation_limit = limit;
        self
    }

    /// Finish building the calculator.
    pub fn build(self) -> Calculator {
        Calculator {
            saturation_limit: self.saturation_limit,
        }
    }
}
