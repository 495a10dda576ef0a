//! # Number Formatter
//!
//! Canonical text rendering and parsing of display values.
//!
//! ## Responsibilities
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  format_decimal   15-significant-digit rendering, trailing zeros       │
//! │                   trimmed, locale decimal separator substituted        │
//! │  format_binary/   two's-complement digit strings, the same output      │
//! │  octal/hex        a 64-bit convert-to-base routine produces            │
//! │  parse_decimal    locale separator first, invariant '.' fallback       │
//! │  parse_binary     strict {0,1} digits, up to 64 of them                │
//! │  truncate_label   DATA truncation for label text (12 chars + …);       │
//! │                   font shrinking for long strings is presentation      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is pure string work; no state, no I/O.

use crate::error::{CalcError, CalcResult};

// =============================================================================
// Decimal Rendering
// =============================================================================

/// Number of significant digits in decimal rendering.
const SIGNIFICANT_DIGITS: i32 = 15;

/// Renders a finite decimal value with up to 15 significant digits.
///
/// Values outside `[1e-4, 1e15)` in magnitude switch to scientific
/// notation; everything else is fixed-point with trailing zeros (and a
/// dangling separator) trimmed. Zero renders as `"0"`.
///
/// ## Example
/// ```rust
/// use calc_core::format::format_decimal;
///
/// assert_eq!(format_decimal(0.1 + 0.2, '.'), "0.3");
/// assert_eq!(format_decimal(-2.5, ','), "-2,5");
/// assert_eq!(format_decimal(0.0, '.'), "0");
/// ```
pub fn format_decimal(value: f64, separator: char) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    let mut text = if !(1e-4..1e15).contains(&magnitude) {
        format!("{value:E}")
    } else {
        let integer_digits = magnitude.log10().floor() as i32 + 1;
        let precision = (SIGNIFICANT_DIGITS - integer_digits).max(0) as usize;
        let mut fixed = format!("{value:.precision$}");
        if fixed.contains('.') {
            while fixed.ends_with('0') {
                fixed.pop();
            }
            if fixed.ends_with('.') {
                fixed.pop();
            }
        }
        fixed
    };

    if separator != '.' {
        text = text.replace('.', &separator.to_string());
    }

    if text.is_empty() {
        "0".to_string()
    } else {
        text
    }
}

// =============================================================================
// Integer Base Rendering
// =============================================================================

/// Renders an integer as its two's-complement binary digit string.
///
/// Negative values render as the full 64-bit pattern, the same output as
/// a convert-to-base-2 of the raw bits.
#[inline]
pub fn format_binary(value: i64) -> String {
    format!("{value:b}")
}

/// Renders an integer in octal (two's complement).
#[inline]
pub fn format_octal(value: i64) -> String {
    format!("{value:o}")
}

/// Renders an integer in uppercase hexadecimal (two's complement).
#[inline]
pub fn format_hex(value: i64) -> String {
    format!("{value:X}")
}

// =============================================================================
// Parsing
// =============================================================================

/// Parses decimal display/paste text.
///
/// Tries the active locale separator first, then falls back to the
/// invariant `'.'`. Empty input and non-finite values (pasted "inf",
/// "NaN") are rejected — the display must always hold a finite number.
pub fn parse_decimal(text: &str, separator: char) -> CalcResult<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CalcError::InvalidInput);
    }

    let localized = if separator != '.' {
        trimmed.replace(separator, ".")
    } else {
        trimmed.to_string()
    };

    let value = localized
        .parse::<f64>()
        .or_else(|_| trimmed.parse::<f64>())
        .map_err(|_| CalcError::InvalidInput)?;

    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::InvalidInput)
    }
}

/// Parses binary display text into an i64.
///
/// Only the digits `{0, 1}` are accepted, at most 64 of them; a 64-digit
/// string is interpreted as the two's-complement bit pattern, which is
/// how results that went negative round-trip through the display.
pub fn parse_binary(text: &str) -> CalcResult<i64> {
    let trimmed = text.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(CalcError::InvalidInput);
    }

    let bits = u64::from_str_radix(trimmed, 2).map_err(|_| CalcError::InvalidInput)?;
    Ok(bits as i64)
}

// =============================================================================
// Label Truncation
// =============================================================================

/// Truncates label text to `max_chars` characters with an ellipsis.
///
/// This is the data-level truncation used for the memory label; it is not
/// a font-metrics concern.
pub fn truncate_label(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        let mut truncated: String = text.chars().take(max_chars).collect();
        truncated.push('…');
        truncated
    } else {
        text.to_string()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
