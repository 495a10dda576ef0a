//! # Decimal Arithmetic Engine
//!
//! Checked floating-point arithmetic for Standard mode, plus the unary
//! and trigonometric function evaluation.
//!
//! ## Checking Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Binary ops:   compute natively, then reject NaN/±∞ as Overflow        │
//! │                (divide checks the zero divisor BEFORE computing, so    │
//! │                 DivideByZero is reported distinctly)                   │
//! │                                                                         │
//! │  Unary ops:    domain-check the input first (InvalidInput), then       │
//! │                reject a non-finite result as Overflow                  │
//! │                                                                         │
//! │  Trig ops:     convert angle units around the native function; a      │
//! │                non-finite result is NotANumber, NOT Overflow           │
//! │                (asin(2) is out of domain, not out of range)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Power with a negative base and fractional exponent yields NaN, which
//! this module reports as `Overflow` — one message for every non-finite
//! binary result, the way classic desktop calculators do.

use crate::error::{CalcError, CalcResult};
use crate::types::{AngleUnit, BinaryOp, TrigFunction, TrigMode, UnaryFunction};
use crate::{FACTORIAL_LIMIT, INTEGRALITY_TOLERANCE};

// =============================================================================
// Binary Operations
// =============================================================================

/// Applies a binary operation on the Standard-mode path.
///
/// ## Example
/// ```rust
/// use calc_core::decimal;
/// use calc_core::types::BinaryOp;
///
/// assert_eq!(decimal::apply(2.0, 3.0, BinaryOp::Add), Ok(5.0));
/// assert_eq!(decimal::apply(2.0, 10.0, BinaryOp::Power), Ok(1024.0));
/// assert!(decimal::apply(1.0, 0.0, BinaryOp::Divide).is_err());
/// ```
pub fn apply(left: f64, right: f64, op: BinaryOp) -> CalcResult<f64> {
    let result = match op {
        BinaryOp::Add => left + right,
        BinaryOp::Subtract => left - right,
        BinaryOp::Multiply => left * right,
        BinaryOp::Divide => {
            if right == 0.0 {
                return Err(CalcError::DivideByZero);
            }
            left / right
        }
        BinaryOp::Power => left.powf(right),
    };

    if result.is_finite() {
        Ok(result)
    } else {
        Err(CalcError::Overflow)
    }
}

// =============================================================================
// Unary Functions
// =============================================================================

/// Applies a unary function to the display value.
pub fn apply_unary(function: UnaryFunction, input: f64) -> CalcResult<f64> {
    let result = match function {
        UnaryFunction::Sqrt => {
            if input < 0.0 {
                return Err(CalcError::InvalidInput);
            }
            input.sqrt()
        }
        UnaryFunction::Factorial => factorial(input)?,
        UnaryFunction::Ln => {
            if input <= 0.0 {
                return Err(CalcError::InvalidInput);
            }
            input.ln()
        }
        UnaryFunction::Log10 => {
            if input <= 0.0 {
                return Err(CalcError::InvalidInput);
            }
            input.log10()
        }
        UnaryFunction::Exp => input.exp(),
    };

    if result.is_finite() {
        Ok(result)
    } else {
        Err(CalcError::Overflow)
    }
}

/// Factorial as a cumulative product from 2 to n.
///
/// The input must be a non-negative integer (within a small tolerance for
/// values that went through decimal formatting) and at most
/// [`FACTORIAL_LIMIT`]: 171! is the first factorial past f64's finite
/// range.
fn factorial(input: f64) -> CalcResult<f64> {
    if input < 0.0 || (input - input.round()).abs() > INTEGRALITY_TOLERANCE {
        return Err(CalcError::InvalidInput);
    }

    let n = input.round() as i64;
    if n > FACTORIAL_LIMIT {
        return Err(CalcError::Overflow);
    }

    let mut result = 1.0;
    for factor in 2..=n {
        result *= factor as f64;
    }
    Ok(result)
}

// =============================================================================
// Trigonometric Functions
// =============================================================================

/// Applies a trig key according to the active trig mode and angle unit.
///
/// - `Standard`: the input is an angle in `unit`, converted to radians
///   before the native function runs.
/// - `Hyperbolic`: applied directly; hyperbolic functions are unit-less.
/// - `Arc`: the inverse function runs on the raw input and its radian
///   result is converted back into `unit`.
pub fn apply_trig(
    function: TrigFunction,
    mode: TrigMode,
    unit: AngleUnit,
    input: f64,
) -> CalcResult<f64> {
    let result = match mode {
        TrigMode::Standard => {
            let radians = unit.to_radians(input);
            match function {
                TrigFunction::Sin => radians.sin(),
                TrigFunction::Cos => radians.cos(),
                TrigFunction::Tan => radians.tan(),
            }
        }
        TrigMode::Hyperbolic => match function {
            TrigFunction::Sin => input.sinh(),
            TrigFunction::Cos => input.cosh(),
            TrigFunction::Tan => input.tanh(),
        },
        TrigMode::Arc => {
            let radians = match function {
                TrigFunction::Sin => input.asin(),
                TrigFunction::Cos => input.acos(),
                TrigFunction::Tan => input.atan(),
            };
            if radians.is_nan() {
                radians
            } else {
                unit.from_radians(radians)
            }
        }
    };

    if result.is_finite() {
        Ok(result)
    } else {
        Err(CalcError::NotANumber)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
