//! # Domain Types
//!
//! Core domain types used throughout the calculator engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    BinaryOp     │   │    Operand      │   │ CalculatorMode  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Add  Subtract  │   │  None           │   │  Standard       │       │
//! │  │  Multiply       │   │  Decimal(f64)   │   │  Programmer     │       │
//! │  │  Divide  Power  │   │  Binary(i64)    │   └─────────────────┘       │
//! │  └─────────────────┘   └─────────────────┘                              │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    TrigMode     │   │   AngleUnit     │   │    Command      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  Standard       │   │  Radians        │   │  one variant    │       │
//! │  │  Hyperbolic     │   │  Degrees        │   │  per gesture    │       │
//! │  │  Arc            │   │  Gradians       │   │  (see engine)   │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The serializable types (`Command`, `Frame`, `ModeLabels`, the mode
//! enums) are the contract with the presentation layer; `Operand` is
//! internal engine state.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CalcError, CalcResult};

// =============================================================================
// Binary Operation
// =============================================================================

/// A binary arithmetic operation pending between two operands.
///
/// `Power` is only meaningful in Standard mode; the engine refuses it in
/// Programmer mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
}

impl BinaryOp {
    /// The symbol recorded in the equation trace.
    pub const fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "×",
            BinaryOp::Divide => "÷",
            BinaryOp::Power => "^",
        }
    }
}

// =============================================================================
// Operand
// =============================================================================

/// The captured left-hand operand, tagged by representation.
///
/// At most one representation is meaningful at a time, selected by the
/// calculator mode. Accessors are mode-gated: querying the wrong variant
/// is a typed error, never a silent zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    /// No pending left-hand value.
    None,
    /// Standard mode: floating-point decimal.
    Decimal(f64),
    /// Programmer mode: fixed-width integer entered in base 2.
    Binary(i64),
}

impl Operand {
    /// True when no left-hand value has been captured.
    #[inline]
    pub const fn is_none(&self) -> bool {
        matches!(self, Operand::None)
    }

    /// True when a left-hand value has been captured.
    #[inline]
    pub const fn is_some(&self) -> bool {
        !self.is_none()
    }

    /// Returns the decimal value, failing if the operand is absent or was
    /// captured in Programmer mode.
    pub fn as_decimal(&self) -> CalcResult<f64> {
        match self {
            Operand::Decimal(value) => Ok(*value),
            _ => Err(CalcError::InvalidInput),
        }
    }

    /// Returns the binary value, failing if the operand is absent or was
    /// captured in Standard mode.
    pub fn as_binary(&self) -> CalcResult<i64> {
        match self {
            Operand::Binary(value) => Ok(*value),
            _ => Err(CalcError::InvalidInput),
        }
    }
}

impl Default for Operand {
    fn default() -> Self {
        Operand::None
    }
}

// =============================================================================
// Calculator Mode
// =============================================================================

/// Which arithmetic back-end and digit set is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CalculatorMode {
    /// Decimal entry, checked floating-point arithmetic.
    Standard,
    /// Base-2 entry restricted to {0,1}, bitwise integer arithmetic.
    Programmer,
}

impl Default for CalculatorMode {
    fn default() -> Self {
        CalculatorMode::Standard
    }
}

// =============================================================================
// Trig Mode
// =============================================================================

/// Variant applied by the three trig function keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TrigMode {
    /// sin / cos / tan of an angle in the active unit.
    Standard,
    /// sinh / cosh / tanh (unit-less).
    Hyperbolic,
    /// asin / acos / atan; the radian result is converted back into the
    /// active angle unit.
    Arc,
}

impl Default for TrigMode {
    fn default() -> Self {
        TrigMode::Standard
    }
}

// =============================================================================
// Angle Unit
// =============================================================================

/// Unit of angle input for forward trig and of angle output for arc trig.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum AngleUnit {
    Radians,
    Degrees,
    Gradians,
}

impl AngleUnit {
    /// Converts an angle expressed in this unit to radians.
    pub fn to_radians(&self, angle: f64) -> f64 {
        match self {
            AngleUnit::Radians => angle,
            AngleUnit::Degrees => angle * PI / 180.0,
            AngleUnit::Gradians => angle * PI / 200.0,
        }
    }

    /// Converts an angle expressed in radians into this unit.
    pub fn from_radians(&self, radians: f64) -> f64 {
        match self {
            AngleUnit::Radians => radians,
            AngleUnit::Degrees => radians * 180.0 / PI,
            AngleUnit::Gradians => radians * 200.0 / PI,
        }
    }
}

impl Default for AngleUnit {
    fn default() -> Self {
        AngleUnit::Radians
    }
}

// =============================================================================
// Functions
// =============================================================================

/// Unary functions applied to the current display value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum UnaryFunction {
    Sqrt,
    Factorial,
    Ln,
    Log10,
    Exp,
}

/// The three trig keys; what they compute depends on [`TrigMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TrigFunction {
    Sin,
    Cos,
    Tan,
}

impl TrigFunction {
    /// Button caption / equation function name for a given trig mode.
    pub const fn caption(&self, mode: TrigMode) -> &'static str {
        match (mode, self) {
            (TrigMode::Standard, TrigFunction::Sin) => "sin",
            (TrigMode::Standard, TrigFunction::Cos) => "cos",
            (TrigMode::Standard, TrigFunction::Tan) => "tan",
            (TrigMode::Hyperbolic, TrigFunction::Sin) => "sinh",
            (TrigMode::Hyperbolic, TrigFunction::Cos) => "cosh",
            (TrigMode::Hyperbolic, TrigFunction::Tan) => "tanh",
            (TrigMode::Arc, TrigFunction::Sin) => "asin",
            (TrigMode::Arc, TrigFunction::Cos) => "acos",
            (TrigMode::Arc, TrigFunction::Tan) => "atan",
        }
    }
}

/// Memory register operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum MemoryOp {
    Clear,
    Recall,
    Add,
    Subtract,
}

// =============================================================================
// Presentation DTOs
// =============================================================================

/// Captions the presentation layer puts on the mode-dependent controls.
///
/// Pure lookup data: the engine exposes these strings, the UI decides how
/// to render them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ModeLabels {
    /// "RAD" / "DEG" / "GRAD" in Standard mode, "BIN→OCT" in Programmer.
    pub angle_unit: String,
    /// "STD" / "ARC" / "HYP" in Standard mode, "BIN→HEX" in Programmer.
    pub trig_mode: String,
    /// Caption of the sin key ("sin" / "sinh" / "asin").
    pub sin: String,
    /// Caption of the cos key ("cos" / "cosh" / "acos").
    pub cos: String,
    /// Caption of the tan key ("tan" / "tanh" / "atan").
    pub tan: String,
    /// Caption of the mode toggle: the mode it would switch to.
    pub mode_toggle: String,
}

/// The refreshed render state returned by every engine command.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    /// Text for the result box: a number in progress or an error message.
    pub display_text: String,
    /// Text for the equation trace box.
    pub equation_text: String,
    /// Text for the memory label, e.g. `"Memory: 42"`.
    pub memory_label: String,
    /// Captions for the mode-dependent controls.
    pub mode_labels: ModeLabels,
}

// =============================================================================
// Command
// =============================================================================

/// The engine's inbound command surface, one variant per user gesture.
///
/// This is the serializable mirror of the method API on
/// [`CalculatorEngine`](crate::engine::CalculatorEngine), for presentation
/// layers that dispatch over IPC instead of calling methods directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Command {
    Digit { value: u8 },
    DecimalPoint,
    BinaryOperator { op: BinaryOp },
    Equals,
    UnaryFunction { function: UnaryFunction },
    TrigFunction { function: TrigFunction },
    ConstantPi,
    ToggleSign,
    Memory { op: MemoryOp },
    ClearAll,
    ClearEntry,
    Backspace,
    Paste { text: String },
    ToggleMode,
    CycleAngleUnit,
    CycleTrigMode,
}

// =============================================================================
// Unit Tests
// =============================================================================
