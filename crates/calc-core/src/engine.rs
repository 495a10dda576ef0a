//! # Calculator Engine
//!
//! The top-level state machine. Every user gesture arrives as a command,
//! mutates the single authoritative state, and returns the refreshed
//! [`Frame`] for the presentation layer to render.
//!
//! ## Input State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Idle ────binary_operator───► PendingOperator ───equals───► Result    │
//! │    ▲  ▲                          │        ▲                    │        │
//! │    │  │                          │ operator with typed right   │ digit  │
//! │    │  │                          │ operand: evaluate first     │ starts │
//! │    │  │                          └───(chaining)────────────────┘ fresh  │
//! │    │  │                                                         entry   │
//! │    │  └───────digit / clear ◄──────────── Error ◄── any arithmetic or  │
//! │    │                                        │       parse failure      │
//! │    └── clear_all ───────────────────────────┘                           │
//! │                                                                         │
//! │  The states are realized through `pending`/`operand` plus the flag    │
//! │  trio (clear_on_next_digit, just_evaluated, is_typing_number); Error   │
//! │  is "display holds a message that refuses to parse".                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! The engine exclusively owns the state; no other component mutates it.
//! Commands are synchronous and run to completion — nothing here blocks,
//! suspends, or touches I/O. The clipboard is the presentation layer's
//! problem: the engine only offers [`copy_text`](CalculatorEngine::copy_text)
//! and [`paste_text`](CalculatorEngine::paste_text).

use std::f64::consts::PI;

use tracing::{debug, warn};

use crate::bitwise;
use crate::decimal;
use crate::equation::EquationTracker;
use crate::error::CalcError;
use crate::format::{
    format_binary, format_decimal, format_hex, format_octal, parse_binary, parse_decimal,
};
use crate::memory::MemoryRegister;
use crate::modes::ModeController;
use crate::types::{
    BinaryOp, CalculatorMode, Command, Frame, MemoryOp, Operand, TrigFunction, UnaryFunction,
};
use crate::DEFAULT_DECIMAL_SEPARATOR;

// =============================================================================
// Calculator Engine
// =============================================================================

/// The calculator's computation and input-state engine.
///
/// ## Invariants
/// - `display` is never empty: a number in progress or an error message
/// - `pending.is_some() == operand.is_some()` — an operator is pending
///   exactly when a left operand was captured
/// - the operand representation matches the mode it was captured in
/// - `memory` is always finite
///
/// ## Example
/// ```rust
/// use calc_core::engine::CalculatorEngine;
/// use calc_core::types::BinaryOp;
///
/// let mut engine = CalculatorEngine::new();
/// engine.digit(2);
/// engine.binary_operator(BinaryOp::Add);
/// engine.digit(3);
/// let frame = engine.equals();
///
/// assert_eq!(frame.display_text, "5");
/// assert_eq!(frame.equation_text, "2 + 3 =");
/// ```
#[derive(Debug)]
pub struct CalculatorEngine {
    display: String,
    equation: EquationTracker,
    operand: Operand,
    pending: Option<BinaryOp>,
    modes: ModeController,
    memory: MemoryRegister,
    separator: char,
    clear_on_next_digit: bool,
    just_evaluated: bool,
    is_typing_number: bool,
}

impl Default for CalculatorEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorEngine {
    /// Creates an engine with the invariant `'.'` decimal separator.
    pub fn new() -> Self {
        Self::with_separator(DEFAULT_DECIMAL_SEPARATOR)
    }

    /// Creates an engine using the given locale decimal separator.
    pub fn with_separator(separator: char) -> Self {
        CalculatorEngine {
            display: "0".to_string(),
            equation: EquationTracker::new(),
            operand: Operand::None,
            pending: None,
            modes: ModeController::new(),
            memory: MemoryRegister::new(),
            separator,
            clear_on_next_digit: false,
            just_evaluated: false,
            is_typing_number: false,
        }
    }

    // =========================================================================
    // Render State
    // =========================================================================

    /// The current display text (also what the copy button copies).
    #[inline]
    pub fn copy_text(&self) -> &str {
        &self.display
    }

    /// The current equation trace.
    #[inline]
    pub fn equation_text(&self) -> &str {
        self.equation.text()
    }

    /// Whether the user is mid-entry of a number.
    #[inline]
    pub fn is_typing_number(&self) -> bool {
        self.is_typing_number
    }

    /// Builds the refreshed render tuple.
    pub fn frame(&self) -> Frame {
        Frame {
            display_text: self.display.clone(),
            equation_text: self.equation.text().to_string(),
            memory_label: self.memory.label(self.separator),
            mode_labels: self.modes.labels(),
        }
    }

    /// Dispatches a serialized command to the matching method.
    pub fn dispatch(&mut self, command: Command) -> Frame {
        match command {
            Command::Digit { value } => self.digit(value),
            Command::DecimalPoint => self.decimal_point(),
            Command::BinaryOperator { op } => self.binary_operator(op),
            Command::Equals => self.equals(),
            Command::UnaryFunction { function } => self.unary_function(function),
            Command::TrigFunction { function } => self.trig_function(function),
            Command::ConstantPi => self.constant_pi(),
            Command::ToggleSign => self.toggle_sign(),
            Command::Memory { op } => self.memory_op(op),
            Command::ClearAll => self.clear_all(),
            Command::ClearEntry => self.clear_entry(),
            Command::Backspace => self.backspace(),
            Command::Paste { text } => self.paste_text(&text),
            Command::ToggleMode => self.toggle_mode(),
            Command::CycleAngleUnit => self.cycle_angle_unit(),
            Command::CycleTrigMode => self.cycle_trig_mode(),
        }
    }

    // =========================================================================
    // Digit & Decimal Entry
    // =========================================================================

    /// Appends a digit, starting a fresh number after a result, an
    /// operator press, or an error.
    ///
    /// Programmer mode accepts only `0` and `1`; anything else is ignored
    /// without touching state. `"0"` is replaced rather than extended and
    /// `"-0"` keeps its sign.
    pub fn digit(&mut self, digit: u8) -> Frame {
        debug!(digit, "digit command");
        if digit > 9 || (self.modes.is_programmer() && digit > 1) {
            return self.frame();
        }

        let mut current = self.display.clone();
        if self.clear_on_next_digit || self.just_evaluated {
            current.clear();
            self.clear_on_next_digit = false;
            self.just_evaluated = false;
        } else if current == "0" {
            current.clear();
        } else if current == "-0" {
            current = "-".to_string();
        }

        current.push(char::from(b'0' + digit));
        self.set_display(current);
        self.is_typing_number = true;
        self.frame()
    }

    /// Inserts the decimal separator (Standard mode only, at most once).
    pub fn decimal_point(&mut self) -> Frame {
        debug!("decimal point command");
        if self.modes.is_programmer() {
            return self.frame();
        }

        let mut current = self.display.clone();
        if self.clear_on_next_digit || self.just_evaluated {
            current = "0".to_string();
            self.clear_on_next_digit = false;
            self.just_evaluated = false;
        }

        if !current.contains(self.separator) {
            if current.is_empty() {
                current = "0".to_string();
            }
            current.push(self.separator);
            self.set_display(current);
            self.is_typing_number = true;
        }

        self.frame()
    }

    // =========================================================================
    // Binary Operations
    // =========================================================================

    /// Captures a binary operator, chain-evaluating a pending pair first
    /// when the user already typed a fresh right operand.
    ///
    /// `Power` in Programmer mode is refused without touching state; the
    /// presentation layer decides how to tell the user.
    pub fn binary_operator(&mut self, op: BinaryOp) -> Frame {
        debug!(?op, "binary operator command");
        if self.modes.is_programmer() {
            if op == BinaryOp::Power {
                debug!("power is unavailable in programmer mode");
                return self.frame();
            }
            self.prepare_programmer_operation(op);
        } else {
            self.prepare_standard_operation(op);
        }
        self.frame()
    }

    /// Evaluates the pending pair; a no-op when nothing is pending.
    pub fn equals(&mut self) -> Frame {
        debug!("equals command");
        match self.modes.mode() {
            CalculatorMode::Standard => self.evaluate_standard(),
            CalculatorMode::Programmer => self.evaluate_programmer(),
        }
        self.frame()
    }

    fn prepare_standard_operation(&mut self, op: BinaryOp) {
        let current = match parse_decimal(&self.display, self.separator) {
            Ok(value) => value,
            Err(error) => return self.show_error(error),
        };

        let left = match (self.pending, self.operand, self.right_operand_typed()) {
            (Some(pending_op), Operand::Decimal(left), true) => {
                // Chaining: evaluate the pending pair before accepting the
                // new operator.
                match decimal::apply(left, current, pending_op) {
                    Ok(intermediate) => {
                        self.set_display(format_decimal(intermediate, self.separator));
                        intermediate
                    }
                    Err(error) => return self.show_error(error),
                }
            }
            _ => current,
        };

        self.operand = Operand::Decimal(left);
        self.pending = Some(op);
        self.equation
            .record_operator(&format_decimal(left, self.separator), op.symbol());
        self.clear_on_next_digit = true;
        self.just_evaluated = false;
        self.is_typing_number = false;
    }

    fn prepare_programmer_operation(&mut self, op: BinaryOp) {
        let current = match parse_binary(&self.display) {
            Ok(value) => value,
            Err(error) => return self.show_error(error),
        };

        let left = match (self.pending, self.operand, self.right_operand_typed()) {
            (Some(pending_op), Operand::Binary(left), true) => {
                match bitwise::apply(left, current, pending_op) {
                    Ok(intermediate) => {
                        self.set_display(format_binary(intermediate));
                        intermediate
                    }
                    Err(error) => return self.show_error(error),
                }
            }
            _ => current,
        };

        self.operand = Operand::Binary(left);
        self.pending = Some(op);
        self.equation
            .record_operator(&format_binary(left), op.symbol());
        self.clear_on_next_digit = true;
        self.just_evaluated = false;
        self.is_typing_number = false;
    }

    fn evaluate_standard(&mut self) {
        let (pending_op, left) = match (self.pending, self.operand) {
            (Some(op), Operand::Decimal(left)) => (op, left),
            _ => return,
        };

        let right = match parse_decimal(&self.display, self.separator) {
            Ok(value) => value,
            Err(error) => return self.show_error(error),
        };

        match decimal::apply(left, right, pending_op) {
            Ok(result) => {
                self.equation
                    .finalize(&format_decimal(right, self.separator));
                self.display_result(result);
                self.pending = None;
                self.operand = Operand::None;
            }
            Err(error) => self.show_error(error),
        }
    }

    fn evaluate_programmer(&mut self) {
        let (pending_op, left) = match (self.pending, self.operand) {
            (Some(op), Operand::Binary(left)) => (op, left),
            _ => return,
        };

        let right = match parse_binary(&self.display) {
            Ok(value) => value,
            Err(error) => return self.show_error(error),
        };

        match bitwise::apply(left, right, pending_op) {
            Ok(result) => {
                self.equation.finalize(&format_binary(right));
                self.display_binary_result(result);
                self.pending = None;
                self.operand = Operand::None;
            }
            Err(error) => self.show_error(error),
        }
    }

    /// True when the user typed into the display since the last operator
    /// press or evaluation.
    fn right_operand_typed(&self) -> bool {
        !self.clear_on_next_digit && !self.just_evaluated
    }

    // =========================================================================
    // Functions & Constants
    // =========================================================================

    /// Applies a unary function to the display value (Standard mode only).
    pub fn unary_function(&mut self, function: UnaryFunction) -> Frame {
        debug!(?function, "unary function command");
        if self.modes.is_programmer() {
            return self.frame();
        }

        let input = match parse_decimal(&self.display, self.separator) {
            Ok(value) => value,
            Err(error) => {
                self.show_error(error);
                return self.frame();
            }
        };

        match decimal::apply_unary(function, input) {
            Ok(result) => {
                let operand_text = format_decimal(input, self.separator);
                let fragment = match function {
                    UnaryFunction::Sqrt => format!("√({operand_text})"),
                    UnaryFunction::Factorial => format!("fact({operand_text})"),
                    UnaryFunction::Ln => format!("ln({operand_text})"),
                    UnaryFunction::Log10 => format!("log({operand_text})"),
                    UnaryFunction::Exp => format!("exp({operand_text})"),
                };
                self.record_function_fragment(&fragment);
                self.display_result(result);
            }
            Err(error) => self.show_error(error),
        }

        self.frame()
    }

    /// Applies a trig key according to the active trig mode and angle
    /// unit (Standard mode only).
    pub fn trig_function(&mut self, function: TrigFunction) -> Frame {
        debug!(?function, "trig function command");
        if self.modes.is_programmer() {
            return self.frame();
        }

        let input = match parse_decimal(&self.display, self.separator) {
            Ok(value) => value,
            Err(error) => {
                self.show_error(error);
                return self.frame();
            }
        };

        let trig_mode = self.modes.trig_mode();
        match decimal::apply_trig(function, trig_mode, self.modes.angle_unit(), input) {
            Ok(result) => {
                let fragment = format!(
                    "{}({})",
                    function.caption(trig_mode),
                    format_decimal(input, self.separator)
                );
                self.record_function_fragment(&fragment);
                self.display_result(result);
            }
            Err(error) => self.show_error(error),
        }

        self.frame()
    }

    /// Shows the constant π (Standard mode only).
    pub fn constant_pi(&mut self) -> Frame {
        debug!("pi command");
        if self.modes.is_programmer() {
            return self.frame();
        }

        self.equation.replace("π");
        self.display_result(PI);
        self.frame()
    }

    fn record_function_fragment(&mut self, fragment: &str) {
        let operator_pending = self.pending.is_some() && self.operand.is_some();
        self.equation.record_function(fragment, operator_pending);
    }

    // =========================================================================
    // Sign & Memory
    // =========================================================================

    /// Toggles the leading minus sign of the display (Standard mode only).
    ///
    /// Only acts on a parseable display, so an error message never gains
    /// a sign.
    pub fn toggle_sign(&mut self) -> Frame {
        debug!("toggle sign command");
        if self.modes.is_programmer()
            || parse_decimal(&self.display, self.separator).is_err()
        {
            return self.frame();
        }

        let text = if let Some(unsigned) = self.display.strip_prefix('-') {
            unsigned.to_string()
        } else if self.display != "0" {
            format!("-{}", self.display)
        } else {
            "-0".to_string()
        };

        self.set_display(text);
        self.clear_on_next_digit = false;
        self.just_evaluated = false;
        self.frame()
    }

    /// Memory register operations (Standard mode only).
    ///
    /// Add and subtract read the display first; an error-state display is
    /// not a valid operand, so they quietly do nothing.
    pub fn memory_op(&mut self, op: MemoryOp) -> Frame {
        debug!(?op, "memory command");
        if self.modes.is_programmer() {
            return self.frame();
        }

        match op {
            MemoryOp::Clear => self.memory.clear(),
            MemoryOp::Recall => {
                let value = self.memory.recall();
                self.display_result(value);
            }
            MemoryOp::Add => {
                if let Ok(number) = parse_decimal(&self.display, self.separator) {
                    self.memory.add(number);
                }
            }
            MemoryOp::Subtract => {
                if let Ok(number) = parse_decimal(&self.display, self.separator) {
                    self.memory.subtract(number);
                }
            }
        }

        self.frame()
    }

    // =========================================================================
    // Clearing & Editing
    // =========================================================================

    /// Clears everything: display, equation, pending state, flags.
    pub fn clear_all(&mut self) -> Frame {
        debug!("clear all command");
        self.reset_input_state();
        self.set_display("0");
        self.equation.clear();
        self.frame()
    }

    /// Clears only the current entry; equation and pending state survive.
    pub fn clear_entry(&mut self) -> Frame {
        debug!("clear entry command");
        self.set_display("0");
        self.clear_on_next_digit = false;
        self.just_evaluated = false;
        self.is_typing_number = false;
        self.frame()
    }

    /// Deletes the last character of the display.
    ///
    /// On a fresh or just-evaluated display this resets the entry to
    /// `"0"` instead of eating result digits; a lone `-` collapses to
    /// `"-0"`.
    pub fn backspace(&mut self) -> Frame {
        debug!("backspace command");
        if self.clear_on_next_digit || self.just_evaluated {
            self.set_display("0");
            self.clear_on_next_digit = false;
            self.just_evaluated = false;
            return self.frame();
        }

        let length = self.display.chars().count();
        if length <= 1 || (length == 2 && self.display.starts_with('-')) {
            self.set_display("0");
            return self.frame();
        }

        let mut text = self.display.clone();
        text.pop();
        if text == "-" {
            text = "-0".to_string();
        }
        self.set_display(text);
        self.frame()
    }

    /// Accepts pasted text from the presentation layer's clipboard call.
    ///
    /// Standard mode parses with the locale separator then the invariant
    /// one; Programmer mode strips everything outside `{0,1}`. Blank
    /// input is ignored; unusable input reports invalid input.
    pub fn paste_text(&mut self, raw: &str) -> Frame {
        debug!("paste command");
        if raw.trim().is_empty() {
            return self.frame();
        }

        match self.modes.mode() {
            CalculatorMode::Programmer => {
                let sanitized: String =
                    raw.chars().filter(|c| *c == '0' || *c == '1').collect();
                if sanitized.is_empty() {
                    self.show_error(CalcError::InvalidInput);
                    return self.frame();
                }
                self.set_display(sanitized);
            }
            CalculatorMode::Standard => match parse_decimal(raw, self.separator) {
                Ok(value) => self.set_display(format_decimal(value, self.separator)),
                Err(error) => {
                    self.show_error(error);
                    return self.frame();
                }
            },
        }

        self.clear_on_next_digit = true;
        self.just_evaluated = true;
        self.is_typing_number = false;
        self.frame()
    }

    // =========================================================================
    // Mode Controls
    // =========================================================================

    /// Flips Standard ↔ Programmer, resetting the full input state.
    pub fn toggle_mode(&mut self) -> Frame {
        let mode = self.modes.toggle_mode();
        debug!(?mode, "mode toggled");
        self.reset_input_state();
        self.set_display("0");
        self.equation.clear();
        self.frame()
    }

    /// Standard mode: cycles the angle unit. Programmer mode: a one-shot
    /// BIN→OCT conversion of the display (no persistent state change).
    pub fn cycle_angle_unit(&mut self) -> Frame {
        debug!("cycle angle unit command");
        if self.modes.is_programmer() {
            let value = match parse_binary(&self.display) {
                Ok(value) => value,
                Err(error) => {
                    self.show_error(error);
                    return self.frame();
                }
            };
            self.equation
                .replace(format!("BIN→OCT({})", format_binary(value)));
            self.set_display(format_octal(value));
            self.clear_on_next_digit = true;
            self.just_evaluated = true;
            self.is_typing_number = false;
        } else {
            self.modes.cycle_angle_unit();
        }
        self.frame()
    }

    /// Standard mode: cycles the trig mode. Programmer mode: a one-shot
    /// BIN→HEX conversion of the display (uppercase digits).
    pub fn cycle_trig_mode(&mut self) -> Frame {
        debug!("cycle trig mode command");
        if self.modes.is_programmer() {
            let value = match parse_binary(&self.display) {
                Ok(value) => value,
                Err(error) => {
                    self.show_error(error);
                    return self.frame();
                }
            };
            self.equation
                .replace(format!("BIN→HEX({})", format_binary(value)));
            self.set_display(format_hex(value));
            self.clear_on_next_digit = true;
            self.just_evaluated = true;
            self.is_typing_number = false;
        } else {
            self.modes.cycle_trig_mode();
        }
        self.frame()
    }

    // =========================================================================
    // Internal Helpers
    // =========================================================================

    fn set_display(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.display = if text.is_empty() { "0".to_string() } else { text };
    }

    /// Shows a decimal result and arms the fresh-entry flags.
    fn display_result(&mut self, value: f64) {
        if !value.is_finite() {
            return self.show_error(CalcError::Overflow);
        }
        self.set_display(format_decimal(value, self.separator));
        self.clear_on_next_digit = true;
        self.just_evaluated = true;
        self.is_typing_number = false;
    }

    /// Shows a Programmer-mode result in binary.
    fn display_binary_result(&mut self, value: i64) {
        self.set_display(format_binary(value));
        self.clear_on_next_digit = true;
        self.just_evaluated = true;
        self.is_typing_number = false;
    }

    /// Surfaces an error: pending state is dropped, the message replaces
    /// the display, and the next digit starts fresh input.
    fn show_error(&mut self, error: CalcError) {
        warn!(%error, "arithmetic error surfaced to display");
        self.reset_input_state();
        self.set_display(error.to_string());
        self.equation.clear();
        self.clear_on_next_digit = true;
    }

    fn reset_input_state(&mut self) {
        self.clear_on_next_digit = false;
        self.just_evaluated = false;
        self.is_typing_number = false;
        self.operand = Operand::None;
        self.pending = None;
        self.equation.clear_prefix();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn type_number(engine: &mut CalculatorEngine, digits: &[u8]) {
        for &d in digits {
            engine.digit(d);
        }
    }

    #[test]
    fn test_digit_entry_replaces_leading_zero() {
        let mut engine = CalculatorEngine::new();
        assert_eq!(engine.copy_text(), "0");
        engine.digit(0);
        assert_eq!(engine.copy_text(), "0");
        engine.digit(7);
        assert_eq!(engine.copy_text(), "7");
        engine.digit(3);
        assert_eq!(engine.copy_text(), "73");
    }

    #[test]
    fn test_decimal_point_only_once() {
        let mut engine = CalculatorEngine::new();
        engine.digit(1);
        engine.decimal_point();
        engine.digit(5);
        engine.decimal_point();
        engine.digit(2);
        assert_eq!(engine.copy_text(), "1.52");
    }

    #[test]
    fn test_decimal_point_seeds_zero_after_result() {
        let mut engine = CalculatorEngine::new();
        engine.digit(2);
        engine.binary_operator(BinaryOp::Add);
        engine.decimal_point();
        engine.digit(5);
        assert_eq!(engine.copy_text(), "0.5");
    }

    #[test]
    fn test_simple_addition() {
        let mut engine = CalculatorEngine::new();
        engine.digit(2);
        engine.binary_operator(BinaryOp::Add);
        engine.digit(3);
        let frame = engine.equals();
        assert_eq!(frame.display_text, "5");
        assert_eq!(frame.equation_text, "2 + 3 =");
    }

    #[test]
    fn test_chaining_evaluates_intermediate() {
        let mut engine = CalculatorEngine::new();
        engine.digit(2);
        engine.binary_operator(BinaryOp::Add);
        engine.digit(3);
        let frame = engine.binary_operator(BinaryOp::Add);
        // 2 + 3 evaluated on the second operator press.
        assert_eq!(frame.display_text, "5");
        assert_eq!(frame.equation_text, "5 + ");
        engine.digit(4);
        let frame = engine.equals();
        assert_eq!(frame.display_text, "9");
        assert_eq!(frame.equation_text, "5 + 4 =");
    }

    #[test]
    fn test_repeated_operator_press_replaces_operation() {
        let mut engine = CalculatorEngine::new();
        engine.digit(6);
        engine.binary_operator(BinaryOp::Add);
        let frame = engine.binary_operator(BinaryOp::Multiply);
        // No fresh right operand: no evaluation, just a new operator.
        assert_eq!(frame.display_text, "6");
        assert_eq!(frame.equation_text, "6 × ");
        engine.digit(7);
        assert_eq!(engine.equals().display_text, "42");
    }

    #[test]
    fn test_equals_without_pending_is_noop() {
        let mut engine = CalculatorEngine::new();
        engine.digit(5);
        let frame = engine.equals();
        assert_eq!(frame.display_text, "5");
        assert_eq!(frame.equation_text, "");
    }

    #[test]
    fn test_equals_with_untyped_right_operand_reuses_display() {
        let mut engine = CalculatorEngine::new();
        engine.digit(4);
        engine.binary_operator(BinaryOp::Multiply);
        let frame = engine.equals();
        // "=" straight after the operator: display value is the right
        // operand.
        assert_eq!(frame.display_text, "16");
        assert_eq!(frame.equation_text, "4 × 4 =");
    }

    #[test]
    fn test_divide_by_zero_resets_to_error_state() {
        let mut engine = CalculatorEngine::new();
        engine.digit(5);
        engine.binary_operator(BinaryOp::Divide);
        engine.digit(0);
        let frame = engine.equals();
        assert_eq!(frame.display_text, "Divide by zero");
        assert_eq!(frame.equation_text, "");
        // Recovery: the next digit starts a fresh number.
        let frame = engine.digit(8);
        assert_eq!(frame.display_text, "8");
    }

    #[test]
    fn test_error_display_poisons_following_operator() {
        let mut engine = CalculatorEngine::new();
        engine.digit(5);
        engine.binary_operator(BinaryOp::Divide);
        engine.digit(0);
        engine.equals();
        let frame = engine.binary_operator(BinaryOp::Add);
        assert_eq!(frame.display_text, "Invalid input");
    }

    #[test]
    fn test_power_operator() {
        let mut engine = CalculatorEngine::new();
        engine.digit(2);
        engine.binary_operator(BinaryOp::Power);
        type_number(&mut engine, &[1, 0]);
        assert_eq!(engine.equals().display_text, "1024");
    }

    #[test]
    fn test_unary_function_composes_equation() {
        let mut engine = CalculatorEngine::new();
        engine.digit(9);
        let frame = engine.unary_function(UnaryFunction::Sqrt);
        assert_eq!(frame.display_text, "3");
        assert_eq!(frame.equation_text, "√(9)");
    }

    #[test]
    fn test_unary_function_appends_to_pending_prefix() {
        let mut engine = CalculatorEngine::new();
        engine.digit(5);
        engine.binary_operator(BinaryOp::Add);
        engine.digit(9);
        let frame = engine.unary_function(UnaryFunction::Sqrt);
        assert_eq!(frame.display_text, "3");
        assert_eq!(frame.equation_text, "5 + √(9)");
        // The composed equation survives evaluation.
        assert_eq!(engine.equals().equation_text, "5 + √(9) =");
        assert_eq!(engine.copy_text(), "8");
    }

    #[test]
    fn test_factorial_overflow_and_domain() {
        let mut engine = CalculatorEngine::new();
        type_number(&mut engine, &[1, 7, 1]);
        let frame = engine.unary_function(UnaryFunction::Factorial);
        assert_eq!(frame.display_text, "Overflow");

        type_number(&mut engine, &[5]);
        let frame = engine.unary_function(UnaryFunction::Factorial);
        assert_eq!(frame.display_text, "120");
        assert_eq!(frame.equation_text, "fact(5)");
    }

    #[test]
    fn test_trig_uses_angle_unit_and_caption() {
        let mut engine = CalculatorEngine::new();
        engine.cycle_angle_unit(); // degrees
        type_number(&mut engine, &[9, 0]);
        let frame = engine.trig_function(TrigFunction::Sin);
        assert_eq!(frame.display_text, "1");
        assert_eq!(frame.equation_text, "sin(90)");
    }

    #[test]
    fn test_arc_out_of_domain_shows_not_a_number() {
        let mut engine = CalculatorEngine::new();
        engine.cycle_trig_mode(); // arc
        engine.digit(2);
        let frame = engine.trig_function(TrigFunction::Sin);
        assert_eq!(frame.display_text, "Not a number");
    }

    #[test]
    fn test_constant_pi() {
        let mut engine = CalculatorEngine::new();
        let frame = engine.constant_pi();
        assert_eq!(frame.equation_text, "π");
        assert!(frame.display_text.starts_with("3.14159265358979"));
    }

    #[test]
    fn test_toggle_sign() {
        let mut engine = CalculatorEngine::new();
        engine.digit(5);
        assert_eq!(engine.toggle_sign().display_text, "-5");
        assert_eq!(engine.toggle_sign().display_text, "5");

        engine.clear_all();
        assert_eq!(engine.toggle_sign().display_text, "-0");
        engine.digit(3);
        assert_eq!(engine.copy_text(), "-3");
    }

    #[test]
    fn test_toggle_sign_ignores_error_display() {
        let mut engine = CalculatorEngine::new();
        engine.digit(5);
        engine.binary_operator(BinaryOp::Divide);
        engine.digit(0);
        engine.equals();
        let frame = engine.toggle_sign();
        assert_eq!(frame.display_text, "Divide by zero");
    }

    #[test]
    fn test_memory_round_trip() {
        let mut engine = CalculatorEngine::new();
        type_number(&mut engine, &[4, 2]);
        let frame = engine.memory_op(MemoryOp::Add);
        assert_eq!(frame.memory_label, "Memory: 42");

        engine.clear_all();
        let frame = engine.memory_op(MemoryOp::Recall);
        assert_eq!(frame.display_text, "42");

        engine.digit(2);
        engine.memory_op(MemoryOp::Subtract);
        let frame = engine.memory_op(MemoryOp::Clear);
        assert_eq!(frame.memory_label, "Memory: 0");
    }

    #[test]
    fn test_memory_add_on_error_display_is_noop() {
        let mut engine = CalculatorEngine::new();
        engine.digit(1);
        engine.binary_operator(BinaryOp::Divide);
        engine.digit(0);
        engine.equals();
        let frame = engine.memory_op(MemoryOp::Add);
        assert_eq!(frame.display_text, "Divide by zero");
        assert_eq!(frame.memory_label, "Memory: 0");
    }

    #[test]
    fn test_backspace() {
        let mut engine = CalculatorEngine::new();
        type_number(&mut engine, &[1, 2, 3]);
        assert_eq!(engine.backspace().display_text, "12");
        assert_eq!(engine.backspace().display_text, "1");
        assert_eq!(engine.backspace().display_text, "0");
        assert_eq!(engine.backspace().display_text, "0");
    }

    #[test]
    fn test_backspace_collapses_lone_minus() {
        let mut engine = CalculatorEngine::new();
        type_number(&mut engine, &[1, 2]);
        engine.toggle_sign();
        assert_eq!(engine.copy_text(), "-12");
        assert_eq!(engine.backspace().display_text, "-1");
        assert_eq!(engine.backspace().display_text, "0");
    }

    #[test]
    fn test_backspace_after_result_resets_entry() {
        let mut engine = CalculatorEngine::new();
        engine.digit(2);
        engine.binary_operator(BinaryOp::Add);
        engine.digit(3);
        engine.equals();
        // Results are not editable digit by digit.
        assert_eq!(engine.backspace().display_text, "0");
    }

    #[test]
    fn test_clear_entry_keeps_pending_operation() {
        let mut engine = CalculatorEngine::new();
        engine.digit(9);
        engine.binary_operator(BinaryOp::Subtract);
        engine.digit(7);
        let frame = engine.clear_entry();
        assert_eq!(frame.display_text, "0");
        assert_eq!(frame.equation_text, "9 - ");
        engine.digit(4);
        assert_eq!(engine.equals().display_text, "5");
    }

    #[test]
    fn test_clear_entry_is_idempotent() {
        let mut engine = CalculatorEngine::new();
        engine.digit(9);
        engine.binary_operator(BinaryOp::Subtract);
        let before = engine.clear_entry();
        let after = engine.clear_entry();
        assert_eq!(before, after);
    }

    #[test]
    fn test_paste_standard_mode() {
        let mut engine = CalculatorEngine::new();
        let frame = engine.paste_text("  12.50 ");
        assert_eq!(frame.display_text, "12.5");

        let frame = engine.paste_text("garbage");
        assert_eq!(frame.display_text, "Invalid input");

        // Blank paste is ignored.
        engine.clear_all();
        let frame = engine.paste_text("   ");
        assert_eq!(frame.display_text, "0");
    }

    #[test]
    fn test_paste_locale_fallback() {
        let mut engine = CalculatorEngine::with_separator(',');
        assert_eq!(engine.paste_text("2,5").display_text, "2,5");
        // Invariant fallback accepts '.' input under a ',' locale.
        assert_eq!(engine.paste_text("3.25").display_text, "3,25");
    }

    #[test]
    fn test_paste_programmer_mode_strips_to_bits() {
        let mut engine = CalculatorEngine::new();
        engine.toggle_mode();
        assert_eq!(engine.paste_text("1a0b1").display_text, "101");
        assert_eq!(engine.paste_text("xyz").display_text, "Invalid input");
    }

    #[test]
    fn test_programmer_digits_restricted() {
        let mut engine = CalculatorEngine::new();
        engine.toggle_mode();
        engine.digit(1);
        engine.digit(7); // ignored
        engine.digit(0);
        assert_eq!(engine.copy_text(), "10");
        // Decimal point is inert too.
        let frame = engine.decimal_point();
        assert_eq!(frame.display_text, "10");
    }

    #[test]
    fn test_programmer_arithmetic_is_binary() {
        let mut engine = CalculatorEngine::new();
        engine.toggle_mode();
        type_number(&mut engine, &[1, 0, 1]); // 5
        engine.binary_operator(BinaryOp::Add);
        type_number(&mut engine, &[1, 1]); // 3
        let frame = engine.equals();
        assert_eq!(frame.display_text, "1000");
        assert_eq!(frame.equation_text, "101 + 11 =");
    }

    #[test]
    fn test_programmer_divide_by_zero() {
        let mut engine = CalculatorEngine::new();
        engine.toggle_mode();
        type_number(&mut engine, &[1, 1]);
        engine.binary_operator(BinaryOp::Divide);
        engine.digit(0);
        assert_eq!(engine.equals().display_text, "Divide by zero");
    }

    #[test]
    fn test_programmer_rejects_power() {
        let mut engine = CalculatorEngine::new();
        engine.toggle_mode();
        engine.digit(1);
        let frame = engine.binary_operator(BinaryOp::Power);
        // Refused without touching state.
        assert_eq!(frame.display_text, "1");
        assert_eq!(frame.equation_text, "");
    }

    #[test]
    fn test_programmer_ignores_standard_functions() {
        let mut engine = CalculatorEngine::new();
        engine.toggle_mode();
        engine.digit(1);
        assert_eq!(engine.unary_function(UnaryFunction::Sqrt).display_text, "1");
        assert_eq!(engine.trig_function(TrigFunction::Sin).display_text, "1");
        assert_eq!(engine.constant_pi().display_text, "1");
        assert_eq!(engine.memory_op(MemoryOp::Add).memory_label, "Memory: 0");
        assert_eq!(engine.toggle_sign().display_text, "1");
    }

    #[test]
    fn test_mode_switch_resets_pending_state() {
        let mut engine = CalculatorEngine::new();
        engine.digit(7);
        engine.binary_operator(BinaryOp::Add);
        let frame = engine.toggle_mode();
        assert_eq!(frame.display_text, "0");
        assert_eq!(frame.equation_text, "");
        // The stale Add must not fire in the new mode.
        engine.digit(1);
        let frame = engine.equals();
        assert_eq!(frame.display_text, "1");
    }

    #[test]
    fn test_bin_to_oct_conversion() {
        let mut engine = CalculatorEngine::new();
        engine.toggle_mode();
        type_number(&mut engine, &[1, 0, 0, 0]); // 8
        let frame = engine.cycle_angle_unit();
        assert_eq!(frame.display_text, "10");
        assert_eq!(frame.equation_text, "BIN→OCT(1000)");
        // Mode state is untouched: label still reads BIN→OCT.
        assert_eq!(frame.mode_labels.angle_unit, "BIN→OCT");
    }

    #[test]
    fn test_bin_to_hex_conversion() {
        let mut engine = CalculatorEngine::new();
        engine.toggle_mode();
        type_number(&mut engine, &[1, 1, 1, 1]); // 15
        let frame = engine.cycle_trig_mode();
        assert_eq!(frame.display_text, "F");
        assert_eq!(frame.equation_text, "BIN→HEX(1111)");
    }

    #[test]
    fn test_angle_unit_cycle_in_standard_mode() {
        let mut engine = CalculatorEngine::new();
        assert_eq!(engine.frame().mode_labels.angle_unit, "RAD");
        assert_eq!(engine.cycle_angle_unit().mode_labels.angle_unit, "DEG");
        assert_eq!(engine.cycle_angle_unit().mode_labels.angle_unit, "GRAD");
        assert_eq!(engine.cycle_angle_unit().mode_labels.angle_unit, "RAD");
    }

    #[test]
    fn test_locale_separator_end_to_end() {
        let mut engine = CalculatorEngine::with_separator(',');
        engine.digit(1);
        engine.decimal_point();
        engine.digit(5);
        assert_eq!(engine.copy_text(), "1,5");
        engine.binary_operator(BinaryOp::Multiply);
        engine.digit(2);
        let frame = engine.equals();
        assert_eq!(frame.display_text, "3");
        assert_eq!(frame.equation_text, "1,5 × 2 =");
    }

    #[test]
    fn test_dispatch_mirrors_methods() {
        let mut engine = CalculatorEngine::new();
        engine.dispatch(Command::Digit { value: 2 });
        engine.dispatch(Command::BinaryOperator { op: BinaryOp::Add });
        engine.dispatch(Command::Digit { value: 3 });
        let frame = engine.dispatch(Command::Equals);
        assert_eq!(frame.display_text, "5");
    }
}
