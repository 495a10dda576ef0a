//! # Error Types
//!
//! Domain-specific error types for calc-core.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Error Flow                                     │
//! │                                                                         │
//! │  bitwise / decimal / format                                            │
//! │  └── CalcError  - arithmetic & parsing failures                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  CalculatorEngine                                                      │
//! │  └── catches every CalcError, resets pending state, and shows the      │
//! │      error's display message in place of a number                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Presentation layer renders the message; the next digit or clear       │
//! │      command recovers. No error is ever fatal.                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Errors are enum variants, never String
//! 3. The `Display` text of each variant is exactly what the calculator
//!    shows in the result box (localization is a presentation concern)

use thiserror::Error;

// =============================================================================
// Calc Error
// =============================================================================

/// Arithmetic and input errors surfaced by the engine.
///
/// Every variant is locally recoverable: the engine displays the message
/// and the next digit, clear, or clear-entry command starts fresh input.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    /// Malformed or domain-invalid operand.
    ///
    /// ## When This Occurs
    /// - The display holds an error message and a command tries to parse it
    /// - Pasted text sanitizes to nothing
    /// - `sqrt` of a negative number, `ln`/`log` of a non-positive number
    /// - Factorial of a negative or non-integral value
    #[error("Invalid input")]
    InvalidInput,

    /// Magnitude exceeds the representable/finite range.
    ///
    /// ## When This Occurs
    /// - A decimal result is NaN or ±∞ (the classic calculator conflation)
    /// - Factorial input above the factorial limit
    /// - A bitwise integer operation leaves the i64 range
    #[error("Overflow")]
    Overflow,

    /// Explicit divisor-zero case, reported distinctly from overflow.
    #[error("Divide by zero")]
    DivideByZero,

    /// A function produced a non-finite result that is not classified as
    /// overflow (e.g. arcsine outside [-1, 1]).
    #[error("Not a number")]
    NotANumber,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CalcError.
pub type CalcResult<T> = Result<T, CalcError>;

// =============================================================================
// Unit Tests
// =============================================================================
