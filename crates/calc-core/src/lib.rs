//! # calc-core: Pure Calculator Logic
//!
//! This crate is the **heart** of the calculator. It contains the entire
//! computation engine and input state machine as pure logic with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Calculator Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Presentation Layer                           │   │
//! │  │    Key grid ──► Display ──► Equation line ──► Mode buttons     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Command in, Frame out                  │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ calc-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  engine   │  │  bitwise  │  │  decimal  │  │  format   │  │   │
//! │  │   │  state    │  │  ripple-  │  │  checked  │  │ 15-digit  │  │   │
//! │  │   │  machine  │  │  carry    │  │  f64 ops  │  │ round-trip│  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐                 │   │
//! │  │   │ equation  │  │   modes   │  │  memory   │                 │   │
//! │  │   │  trace    │  │ std/prog  │  │ register  │                 │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘                 │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLIPBOARD • NO CLOCK • PURE STATE TRANSITIONS    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`engine`] - The [`CalculatorEngine`] state machine; commands in, frames out
//! - [`bitwise`] - Programmer-mode integer arithmetic built from logic gates
//! - [`decimal`] - Standard-mode checked floating-point arithmetic
//! - [`format`] - Display formatting and parsing for every supported base
//! - [`equation`] - The running equation trace shown above the display
//! - [`modes`] - Calculator / trig / angle mode state and their captions
//! - [`memory`] - The single additive memory register
//! - [`types`] - Commands, operands, frames, and the shared enums
//! - [`error`] - The four user-visible error conditions
//!
//! ## Design Principles
//!
//! 1. **Pure State Transitions**: Every command is deterministic - same state
//!    plus same command = same next state
//! 2. **No I/O**: Clipboard, window, and rendering concerns live in the
//!    presentation layer; the engine only exchanges strings
//! 3. **Errors Are Display States**: Arithmetic failures are typed, rendered
//!    into the display, and always recoverable with the next keypress
//! 4. **Bitwise Means Bitwise**: Programmer mode never delegates to native
//!    `+`/`-`/`*`/`/` - the arithmetic is built from XOR/AND/shift loops
//!
//! ## Example Usage
//!
//! ```rust
//! use calc_core::engine::CalculatorEngine;
//! use calc_core::types::{BinaryOp, Command};
//!
//! let mut engine = CalculatorEngine::new();
//!
//! // Commands arrive from the presentation layer...
//! engine.dispatch(Command::Digit { value: 7 });
//! engine.dispatch(Command::BinaryOperator { op: BinaryOp::Multiply });
//! engine.dispatch(Command::Digit { value: 6 });
//!
//! // ...and every command returns the refreshed render state.
//! let frame = engine.dispatch(Command::Equals);
//! assert_eq!(frame.display_text, "42");
//! assert_eq!(frame.equation_text, "7 × 6 =");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod bitwise;
pub mod decimal;
pub mod engine;
pub mod equation;
pub mod error;
pub mod format;
pub mod memory;
pub mod modes;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use calc_core::CalculatorEngine` instead of
// `use calc_core::engine::CalculatorEngine`

pub use engine::CalculatorEngine;
pub use error::{CalcError, CalcResult};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Decimal separator used when no locale-specific one is supplied.
///
/// Pasted text that fails to parse with the locale separator gets a second
/// chance with this one, so `"3.25"` still pastes under a `,` locale.
pub const DEFAULT_DECIMAL_SEPARATOR: char = '.';

/// Largest integer whose factorial is representable as a finite `f64`.
///
/// `171!` is about `1.24e309`, past `f64::MAX`, so anything above this
/// limit reports overflow before the multiply loop runs away.
pub const FACTORIAL_LIMIT: i64 = 170;

/// Tolerance when deciding whether a display value counts as an integer.
///
/// Factorial input arrives through the 15-digit display round-trip, so an
/// exact `fract() == 0.0` test would reject values a user typed as whole
/// numbers.
pub const INTEGRALITY_TOLERANCE: f64 = 1e-10;

/// Maximum characters of the memory value shown in the memory label.
///
/// Longer values are cut and suffixed with `…` so the label never pushes
/// the layout around.
pub const MEMORY_LABEL_CHARS: usize = 12;
