
//! Composite read-outs built on the basic formatters: feet, paired
//! inch/millimeter values, and overall cabinet dimensions.

use super::{DisplayStyle, format_for_display, format_floored_for_display, format_mm};
use crate::units::{UnitMode, Rounding, mm_to_inches};

use itertools::Itertools;
use serde::{Serialize, Deserialize};

use std::fmt::{self, Display, Formatter};

/// Formats inches as feet with two decimal places, e.g. `2.50 ft`.
pub fn format_feet(inches: Option<f64>) -> String {
  match inches {
    Some(inches) if inches.is_finite() => format!("{:.2} ft", inches / 12.0),
    _ => String::new(),
  }
}

/// The same length shown side by side in inches and millimeters, both
/// floored. Material schedules store lengths in millimeters, so the
/// pair is built from a millimeter value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InMmPair {
  pub inches: String,
  pub mm: String,
}

impl InMmPair {
  pub fn floored_from_mm(mm: Option<f64>) -> Self {
    let inches = format_floored_for_display(mm.map(mm_to_inches), UnitMode::Inches, DisplayStyle::Fraction);
    let mm = mm.map(|mm| format_mm(mm, Rounding::Floor)).unwrap_or_default();
    Self { inches, mm }
  }

  pub fn is_empty(&self) -> bool {
    self.inches.is_empty() && self.mm.is_empty()
  }
}

/// Renders as `<in> | <mm>`. A missing side is shown as `-`, and a
/// pair with both sides missing is a lone `-`.
impl Display for InMmPair {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    if self.is_empty() {
      return write!(f, "-");
    }
    let inches = if self.inches.is_empty() { "-" } else { &self.inches };
    let mm = if self.mm.is_empty() { "-" } else { &self.mm };
    write!(f, "{} | {}", inches, mm)
  }
}

/// Overall width, height and depth of a cabinet, in canonical inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CabinetDims {
  pub width: f64,
  pub height: f64,
  pub depth: f64,
}

impl CabinetDims {
  pub fn new(width: f64, height: f64, depth: f64) -> Self {
    Self { width, height, depth }
  }

  /// One-line summary, e.g. `24"W × 30"H × 12 1/2"D` or
  /// `609.5 mm W × 762 mm H × 317.5 mm D`.
  pub fn summary(&self, mode: UnitMode) -> String {
    [(self.width, 'W'), (self.height, 'H'), (self.depth, 'D')]
      .into_iter()
      .map(|(value, axis)| match mode {
        UnitMode::Inches => {
          let text = format_for_display(Some(value), UnitMode::Inches, DisplayStyle::Fraction);
          format!("{}\"{}", text, axis)
        }
        UnitMode::Millimeters => {
          let text = format_for_display(Some(value), UnitMode::Millimeters, DisplayStyle::Decimal);
          format!("{} mm {}", text, axis)
        }
      })
      .join(" × ")
  }
}
