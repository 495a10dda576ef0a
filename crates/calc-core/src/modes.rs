//! # Mode Controller
//!
//! State machine over calculator mode × trig mode × angle unit, plus the
//! caption lookup tables the presentation layer renders.
//!
//! ## Mode-Dependent Control Reuse
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Control            Standard mode              Programmer mode         │
//! │  ────────────────   ────────────────────────   ──────────────────────  │
//! │  angle-unit key     cycles RAD→DEG→GRAD        one-shot BIN→OCT        │
//! │  trig-mode key      cycles STD→ARC→HYP         one-shot BIN→HEX        │
//! │  sin/cos/tan keys   caption follows trig mode  inert ("sin" captions)  │
//! │  mode toggle        shows "Programmer"         shows "Standard"        │
//! │                                                                         │
//! │  The one-shot conversions never mutate mode state; that is why the    │
//! │  controller only cycles in Standard mode and the engine handles the   │
//! │  Programmer branch.                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::types::{AngleUnit, CalculatorMode, ModeLabels, TrigFunction, TrigMode};

// =============================================================================
// Mode Controller
// =============================================================================

/// Owns the current calculator mode, trig mode, and angle unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModeController {
    mode: CalculatorMode,
    trig_mode: TrigMode,
    angle_unit: AngleUnit,
}

impl ModeController {
    /// Creates a controller with the defaults: Standard mode, standard
    /// trig, radians.
    pub fn new() -> Self {
        Self::default()
    }

    /// The active calculator mode.
    #[inline]
    pub fn mode(&self) -> CalculatorMode {
        self.mode
    }

    /// The active trig mode (meaningful in Standard mode only).
    #[inline]
    pub fn trig_mode(&self) -> TrigMode {
        self.trig_mode
    }

    /// The active angle unit (meaningful in Standard mode only).
    #[inline]
    pub fn angle_unit(&self) -> AngleUnit {
        self.angle_unit
    }

    /// True in Programmer mode.
    #[inline]
    pub fn is_programmer(&self) -> bool {
        self.mode == CalculatorMode::Programmer
    }

    /// Flips Standard ↔ Programmer and returns the new mode.
    ///
    /// The engine resets the full input state on every switch.
    pub fn toggle_mode(&mut self) -> CalculatorMode {
        self.mode = match self.mode {
            CalculatorMode::Standard => CalculatorMode::Programmer,
            CalculatorMode::Programmer => CalculatorMode::Standard,
        };
        self.mode
    }

    /// Cycles Radians → Degrees → Gradians → Radians.
    ///
    /// Only called in Standard mode; the Programmer reuse of this control
    /// (BIN→OCT) is a display conversion handled by the engine.
    pub fn cycle_angle_unit(&mut self) -> AngleUnit {
        self.angle_unit = match self.angle_unit {
            AngleUnit::Radians => AngleUnit::Degrees,
            AngleUnit::Degrees => AngleUnit::Gradians,
            AngleUnit::Gradians => AngleUnit::Radians,
        };
        self.angle_unit
    }

    /// Cycles Standard → Arc → Hyperbolic → Standard.
    pub fn cycle_trig_mode(&mut self) -> TrigMode {
        self.trig_mode = match self.trig_mode {
            TrigMode::Standard => TrigMode::Arc,
            TrigMode::Arc => TrigMode::Hyperbolic,
            TrigMode::Hyperbolic => TrigMode::Standard,
        };
        self.trig_mode
    }

    // =========================================================================
    // Label Tables
    // =========================================================================

    /// The caption of the angle-unit key.
    pub fn angle_unit_label(&self) -> &'static str {
        if self.is_programmer() {
            return "BIN→OCT";
        }
        match self.angle_unit {
            AngleUnit::Radians => "RAD",
            AngleUnit::Degrees => "DEG",
            AngleUnit::Gradians => "GRAD",
        }
    }

    /// The caption of the trig-mode key.
    pub fn trig_mode_label(&self) -> &'static str {
        if self.is_programmer() {
            return "BIN→HEX";
        }
        match self.trig_mode {
            TrigMode::Standard => "STD",
            TrigMode::Arc => "ARC",
            TrigMode::Hyperbolic => "HYP",
        }
    }

    /// The caption of the mode toggle: the mode it switches to.
    pub fn mode_toggle_label(&self) -> &'static str {
        if self.is_programmer() {
            "Standard"
        } else {
            "Programmer"
        }
    }

    /// The full caption set for the mode-dependent controls.
    pub fn labels(&self) -> ModeLabels {
        // In Programmer mode the trig keys are inert and keep the plain
        // captions.
        let caption_mode = if self.is_programmer() {
            TrigMode::Standard
        } else {
            self.trig_mode
        };

        ModeLabels {
            angle_unit: self.angle_unit_label().to_string(),
            trig_mode: self.trig_mode_label().to_string(),
            sin: TrigFunction::Sin.caption(caption_mode).to_string(),
            cos: TrigFunction::Cos.caption(caption_mode).to_string(),
            tan: TrigFunction::Tan.caption(caption_mode).to_string(),
            mode_toggle: self.mode_toggle_label().to_string(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
