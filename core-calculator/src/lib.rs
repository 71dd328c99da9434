//! # Calculator Module Core
//!
//! Stateless `f64` arithmetic. Results follow IEEE-754 double semantics,
//! with one exception: division by zero yields `0.0` instead of an infinity
//! or NaN.
//!
//! The logging side effect of `add` belongs to the calculator module wrapper
//! in `native-modules`, so this crate depends on nothing else in the
//! workspace.

use tracing::warn;

#[derive(Debug, Clone, Copy, Default)]
pub struct CalculatorService;

impl CalculatorService {
    pub fn new() -> Self {
        Self
    }

    pub fn add(&self, a: f64, b: f64) -> f64 {
        a + b
    }

    pub fn subtract(&self, a: f64, b: f64) -> f64 {
        a - b
    }

    pub fn multiply(&self, a: f64, b: f64) -> f64 {
        a * b
    }

    /// `a / b`, or `0.0` when `b` is zero (either sign).
    pub fn divide(&self, a: f64, b: f64) -> f64 {
        if b == 0.0 {
            warn!(dividend = a, "Division by zero, returning 0");
            return 0.0;
        }
        a / b
    }
}
