
//! Rendering canonical inches for display.
//!
//! Every function here is a pure function of its arguments. Missing
//! and non-finite lengths render as the empty string.

pub mod fraction;
pub mod readout;

pub use fraction::MixedFraction;

use crate::units::{UnitMode, Rounding, inches_to_mm};
use crate::units::rounding::{SIXTEENTHS_PER_INCH, HALF_MM_PER_MM};

/// How an inch length is written. Millimeters are always decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayStyle {
  /// Mixed fraction, as in `1 1/2`. Used for read-only displays.
  Fraction,
  /// Decimal, as in `1.5`. Used for editable text.
  Decimal,
}

/// Formats a canonical length, rounding to the nearest 1/16" or 0.5
/// mm.
pub fn format_for_display(value: Option<f64>, mode: UnitMode, style: DisplayStyle) -> String {
  format_length(value, mode, style, Rounding::Nearest)
}

/// Formats a canonical length, flooring to 1/16" or 0.5 mm. For
/// derived read-outs that must never overstate a size.
pub fn format_floored_for_display(value: Option<f64>, mode: UnitMode, style: DisplayStyle) -> String {
  format_length(value, mode, style, Rounding::Floor)
}

fn format_length(value: Option<f64>, mode: UnitMode, style: DisplayStyle, rounding: Rounding) -> String {
  let Some(inches) = value else {
    return String::new();
  };
  match (mode, style) {
    (UnitMode::Millimeters, _) => format_mm(inches_to_mm(inches), rounding),
    (UnitMode::Inches, DisplayStyle::Fraction) => format_inches_fraction(inches, rounding),
    (UnitMode::Inches, DisplayStyle::Decimal) => format_inches_decimal(inches, rounding),
  }
}

/// Formats a millimeter value at 0.5 mm resolution, with one decimal
/// place and no trailing `.0`.
pub fn format_mm(mm: f64, rounding: Rounding) -> String {
  if !mm.is_finite() {
    return String::new();
  }
  let value = rounding.apply(mm, HALF_MM_PER_MM);
  let text = format!("{:.1}", value);
  match text.strip_suffix(".0") {
    Some(stripped) => stripped.to_owned(),
    None => text,
  }
}

/// Formats inches as a mixed fraction at 1/16" resolution. Lengths
/// too large to count in sixteenths fall back to the decimal style.
pub fn format_inches_fraction(inches: f64, rounding: Rounding) -> String {
  match MixedFraction::from_inches(inches, rounding) {
    Some(value) => value.to_string(),
    None => format_inches_decimal(inches, rounding),
  }
}

/// Formats inches as a decimal at 1/16" resolution, with at most four
/// decimal places and no trailing zeros.
pub fn format_inches_decimal(inches: f64, rounding: Rounding) -> String {
  if !inches.is_finite() {
    return String::new();
  }
  let value = rounding.apply(inches, SIXTEENTHS_PER_INCH);
  let text = format!("{:.4}", value);
  text.trim_end_matches('0').trim_end_matches('.').to_owned()
}
