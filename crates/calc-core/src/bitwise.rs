//! # Bitwise Arithmetic Unit
//!
//! Integer arithmetic for Programmer mode, built from scratch out of
//! bitwise primitives.
//!
//! ## Why Reimplement Addition?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  RIPPLE-CARRY ADDITION WITHOUT `+`                                      │
//! │                                                                         │
//! │  XOR is a half-add:        0110 ^ 0011 = 0101   (sum without carries)  │
//! │  AND finds the carries:    0110 & 0011 = 0010   (both bits set)        │
//! │  Shift moves them left:    0010 << 1   = 0100   (carry into next bit)  │
//! │                                                                         │
//! │  Repeat until no carry remains. Every other operation here is built   │
//! │  on top of this: negate = add(!n, 1), subtract = add the complement,  │
//! │  multiply = shift-and-add, divide = repeated subtraction.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The arithmetic paths use only XOR, AND, NOT, and shifts — no native
//! `+`, `-`, `*`, or `/`. Overflow is detected explicitly from the sign
//! bits (two's complement: adding two same-sign values can never flip the
//! sign of a correct sum), and `multiply`/`divide` work on magnitudes and
//! restore the combined operand sign on the result.
//!
//! All functions are pure and operate on `i64`, the width of the
//! Programmer-mode operand.

use crate::error::{CalcError, CalcResult};
use crate::types::BinaryOp;

// =============================================================================
// Ripple-Carry Core
// =============================================================================

/// Ripple-carry addition with no overflow reporting.
///
/// Wraps exactly like two's-complement hardware; callers that care about
/// range inspect the sign bits afterwards.
const fn raw_add(a: i64, b: i64) -> i64 {
    let mut sum = a ^ b;
    let mut carry = (a & b) << 1;

    while carry != 0 {
        let next = sum ^ carry;
        carry = (sum & carry) << 1;
        sum = next;
    }

    sum
}

/// Sign mask of `n` via arithmetic shift: `-1` for negative, `0` otherwise.
#[inline]
pub const fn sign(n: i64) -> i64 {
    n >> 63
}

// =============================================================================
// Checked Operations
// =============================================================================

/// Adds two integers using only bitwise instructions.
///
/// ## Example
/// ```rust
/// use calc_core::bitwise;
///
/// assert_eq!(bitwise::add(19, 23), Ok(42));
/// assert_eq!(bitwise::add(-5, 3), Ok(-2));
/// assert!(bitwise::add(i64::MAX, 1).is_err());
/// ```
pub fn add(a: i64, b: i64) -> CalcResult<i64> {
    let sum = raw_add(a, b);

    // Same-sign operands with an opposite-sign sum: the carry left the
    // representable range.
    if sign(a) == sign(b) && sign(sum) != sign(a) {
        return Err(CalcError::Overflow);
    }

    Ok(sum)
}

/// Two's-complement negation: `add(!n, 1)`.
///
/// `i64::MIN` has no positive counterpart and reports [`CalcError::Overflow`].
pub fn negate(n: i64) -> CalcResult<i64> {
    if n == i64::MIN {
        return Err(CalcError::Overflow);
    }

    Ok(raw_add(!n, 1))
}

/// Subtracts `b` from `a` by adding the two's complement of `b`.
///
/// ## Example
/// ```rust
/// use calc_core::bitwise;
///
/// assert_eq!(bitwise::subtract(10, 3), Ok(7));
/// assert_eq!(bitwise::subtract(3, 10), Ok(-7));
/// ```
pub fn subtract(a: i64, b: i64) -> CalcResult<i64> {
    // Complement directly instead of going through `negate` so that
    // `a - i64::MIN` is rejected or accepted by the same sign predicate
    // native checked subtraction uses.
    let diff = raw_add(a, raw_add(!b, 1));

    // Opposite-sign operands with a result that left the minuend's sign:
    // the true difference is out of range.
    if sign(a) != sign(b) && sign(diff) != sign(a) {
        return Err(CalcError::Overflow);
    }

    Ok(diff)
}

/// Magnitude of `n`; `i64::MIN` reports overflow like [`negate`].
pub fn absolute(n: i64) -> CalcResult<i64> {
    if sign(n) != 0 {
        negate(n)
    } else {
        Ok(n)
    }
}

/// Multiplies via shift-and-add on magnitudes, restoring the combined sign.
///
/// Walks the multiplier's bits from least significant upwards; every set
/// bit contributes the correspondingly shifted multiplicand, accumulated
/// with [`add`]. Once a shift would push multiplicand bits past the value
/// range, any later set bit means the true product cannot fit.
///
/// ## Example
/// ```rust
/// use calc_core::bitwise;
///
/// assert_eq!(bitwise::multiply(6, 7), Ok(42));
/// assert_eq!(bitwise::multiply(-6, 7), Ok(-42));
/// assert_eq!(bitwise::multiply(-6, -7), Ok(42));
/// ```
pub fn multiply(a: i64, b: i64) -> CalcResult<i64> {
    let negative = sign(a) != sign(b);
    let mut multiplicand = absolute(a)?;
    let mut multiplier = absolute(b)?;

    let mut product: i64 = 0;
    let mut out_of_range = false;

    while multiplier != 0 {
        if multiplier & 1 != 0 {
            if out_of_range {
                return Err(CalcError::Overflow);
            }
            product = add(product, multiplicand)?;
        }

        if multiplicand > (i64::MAX >> 1) {
            out_of_range = true;
        }
        multiplicand <<= 1;
        // Operands are non-negative here, so the arithmetic shift is a
        // logical one.
        multiplier >>= 1;
    }

    if negative {
        negate(product)
    } else {
        Ok(product)
    }
}

/// Divides via repeated subtraction on magnitudes, restoring the sign.
///
/// Counts how many times the divisor fits into the dividend, accumulating
/// the unit count with [`add`]. Truncating division, like native `/`.
///
/// ## Example
/// ```rust
/// use calc_core::bitwise;
/// use calc_core::error::CalcError;
///
/// assert_eq!(bitwise::divide(42, 5), Ok(8));
/// assert_eq!(bitwise::divide(-42, 5), Ok(-8));
/// assert_eq!(bitwise::divide(1, 0), Err(CalcError::DivideByZero));
/// ```
pub fn divide(a: i64, b: i64) -> CalcResult<i64> {
    if b == 0 {
        return Err(CalcError::DivideByZero);
    }

    let negative = sign(a) != sign(b);
    let mut remainder = absolute(a)?;
    let divisor = absolute(b)?;

    let mut quotient: i64 = 0;
    while remainder >= divisor {
        remainder = subtract(remainder, divisor)?;
        quotient = add(quotient, 1)?;
    }

    if negative {
        negate(quotient)
    } else {
        Ok(quotient)
    }
}

// =============================================================================
// Engine Dispatch
// =============================================================================

/// Applies a binary operation on the Programmer-mode path.
///
/// `Power` never reaches this in practice (the engine refuses it before
/// capturing an operand) and reports [`CalcError::InvalidInput`].
pub fn apply(left: i64, right: i64, op: BinaryOp) -> CalcResult<i64> {
    match op {
        BinaryOp::Add => add(left, right),
        BinaryOp::Subtract => subtract(left, right),
        BinaryOp::Multiply => multiply(left, right),
        BinaryOp::Divide => divide(left, right),
        BinaryOp::Power => Err(CalcError::InvalidInput),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
