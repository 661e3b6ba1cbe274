
//! Rounding of lengths to the display resolution of each unit.
//!
//! Two policies exist side by side and are never inferred from the
//! value: [`Rounding::Nearest`] for editable values and general
//! display, [`Rounding::Floor`] for conservative read-outs that must
//! never overstate a size.

/// Display steps per inch (1/16").
pub const SIXTEENTHS_PER_INCH: f64 = 16.0;

/// Display steps per millimeter (0.5 mm).
pub const HALF_MM_PER_MM: f64 = 2.0;

// Absorbs representation error when flooring, so that e.g. 609.6 mm
// floors to exactly 24" instead of 23 15/16".
const FLOOR_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
  /// Round half away from zero to the nearest step.
  Nearest,
  /// Truncate the magnitude to the step at or below it.
  Floor,
}

impl Rounding {
  /// Number of whole steps in a non-negative `magnitude`, given
  /// `steps_per_unit` steps in one unit.
  pub fn steps(self, magnitude: f64, steps_per_unit: f64) -> f64 {
    let scaled = magnitude * steps_per_unit;
    match self {
      Rounding::Nearest => scaled.round(),
      Rounding::Floor => (scaled + FLOOR_TOLERANCE).floor(),
    }
  }

  /// Rounds a signed value to a multiple of `1 / steps_per_unit`. The
  /// sign is set aside and the magnitude rounded, so `Floor` moves
  /// negative values toward zero.
  pub fn apply(self, value: f64, steps_per_unit: f64) -> f64 {
    let magnitude = self.steps(value.abs(), steps_per_unit) / steps_per_unit;
    if value.is_sign_negative() && magnitude != 0.0 {
      - magnitude
    } else {
      magnitude
    }
  }
}

pub fn round_to_sixteenth(inches: f64) -> f64 {
  Rounding::Nearest.apply(inches, SIXTEENTHS_PER_INCH)
}

pub fn floor_to_sixteenth(inches: f64) -> f64 {
  Rounding::Floor.apply(inches, SIXTEENTHS_PER_INCH)
}

pub fn round_to_half_mm(mm: f64) -> f64 {
  Rounding::Nearest.apply(mm, HALF_MM_PER_MM)
}

pub fn floor_to_half_mm(mm: f64) -> f64 {
  Rounding::Floor.apply(mm, HALF_MM_PER_MM)
}
