//! # Equation Tracker
//!
//! Builds the human-readable equation trace shown above the result box.
//!
//! ## Trace Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  2       [+]        text = "2 + "        prefix = "2 + "               │
//! │  3       [+]        text = "5 + "        prefix = "5 + "   (chained)   │
//! │  4       [=]        text = "5 + 4 ="     prefix cleared                │
//! │                                                                         │
//! │  5  [+]  9  [sin]   text = "5 + sin(9)"  function appended to prefix   │
//! │          [sin] only text = "sin(9)"      function replaces equation    │
//! │                                                                         │
//! │  [=] with untyped right operand: the prefix alone is visible, so the  │
//! │  current display value is appended before the terminal " ="            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The pending prefix ("left operand + operator ") doubles as the marker
//! for whether the user typed a new right operand since the operator was
//! pressed.

// =============================================================================
// Equation Tracker
// =============================================================================

/// Mutable equation trace plus the pending "left op " prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EquationTracker {
    text: String,
    pending_prefix: String,
}

impl EquationTracker {
    /// Creates an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// The visible equation text.
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The pending "left operand + operator" fragment ("" when no
    /// operator is pending).
    #[inline]
    pub fn pending_prefix(&self) -> &str {
        &self.pending_prefix
    }

    /// Records an operator press: the left operand and operator symbol
    /// become both the new pending prefix and the visible equation.
    pub fn record_operator(&mut self, left_text: &str, symbol: &str) {
        self.pending_prefix = format!("{left_text} {symbol} ");
        self.text = self.pending_prefix.clone();
    }

    /// Finalizes the trace on evaluation.
    ///
    /// If the visible equation still equals just the prefix (the user
    /// pressed "=" without retyping the right operand), the given right
    /// operand text is appended first; a terminal `" ="` always follows.
    pub fn finalize(&mut self, right_text: &str) {
        if self.text.trim().is_empty() || self.text == self.pending_prefix {
            self.text = format!("{}{}", self.pending_prefix, right_text);
        }
        self.text.push_str(" =");
        self.pending_prefix.clear();
    }

    /// Records a function invocation fragment such as `"sin(3)"`.
    ///
    /// With a binary operation pending the fragment composes with the
    /// prefix (`"5 + sin(3)"`); otherwise it replaces the whole equation.
    pub fn record_function(&mut self, fragment: &str, operator_pending: bool) {
        self.text = if operator_pending {
            format!("{}{}", self.pending_prefix, fragment)
        } else {
            fragment.to_string()
        };
    }

    /// Replaces the visible equation outright (constants, base
    /// conversions).
    pub fn replace(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Clears the trace and the pending prefix.
    pub fn clear(&mut self) {
        self.text.clear();
        self.pending_prefix.clear();
    }

    /// Clears only the pending prefix, keeping the visible text.
    pub fn clear_prefix(&mut self) {
        self.pending_prefix.clear();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
