//! # Memory Register
//!
//! The single scalar memory behind MC / MR / M+ / M-.
//!
//! The register is always finite: inputs arrive through a successful
//! display parse (an error-state display refuses to parse), and an
//! accumulation that would leave the finite range is discarded.

use crate::format::{format_decimal, truncate_label};
use crate::MEMORY_LABEL_CHARS;

// =============================================================================
// Memory Register
// =============================================================================

/// Single mutable scalar with clear/recall/add/subtract operations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryRegister {
    value: f64,
}

impl MemoryRegister {
    /// Creates a register holding zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the register to zero.
    pub fn clear(&mut self) {
        self.value = 0.0;
    }

    /// Returns the stored value.
    #[inline]
    pub fn recall(&self) -> f64 {
        self.value
    }

    /// Adds to the register; a non-finite sum is discarded so the
    /// register stays finite.
    pub fn add(&mut self, amount: f64) {
        let sum = self.value + amount;
        if sum.is_finite() {
            self.value = sum;
        }
    }

    /// Subtracts from the register; same finiteness guard as [`add`].
    ///
    /// [`add`]: MemoryRegister::add
    pub fn subtract(&mut self, amount: f64) {
        let difference = self.value - amount;
        if difference.is_finite() {
            self.value = difference;
        }
    }

    /// Renders the memory label, e.g. `"Memory: 42"`.
    ///
    /// Near-zero values snap to `"0"` and long values get the 12-char
    /// data truncation with an ellipsis.
    pub fn label(&self, separator: char) -> String {
        let rendered = if self.value.abs() < f64::EPSILON {
            "0".to_string()
        } else {
            format_decimal(self.value, separator)
        };

        format!("Memory: {}", truncate_label(&rendered, MEMORY_LABEL_CHARS))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
