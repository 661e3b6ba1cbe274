
//! Committing text typed into an editable dimension field.
//!
//! A field keeps a canonical value and shows it in the decimal style.
//! When the user commits, the text is parsed in the field's unit mode.
//! Text that fails to parse leaves the value untouched and the display
//! reverts to the last good value.

use crate::display::{DisplayStyle, format_for_display, format_floored_for_display};
use crate::parsing::{parse_dimension, parse_inches_expression};
use crate::units::UnitMode;

use log::debug;

/// Optional inclusive limits on a committed value, in canonical
/// inches.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
  pub min: Option<f64>,
  pub max: Option<f64>,
}

/// The result of committing a field's text.
#[derive(Debug, Clone, PartialEq)]
pub struct EditOutcome {
  /// The field's canonical value after the commit.
  pub value: Option<f64>,
  /// The text the field should show after the commit.
  pub display: String,
  /// Whether the text parsed and a new value was accepted.
  pub changed: bool,
}

impl Bounds {
  pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
    Self { min, max }
  }

  pub fn unbounded() -> Self {
    Self::default()
  }

  /// Applies the lower limit, then the upper limit.
  pub fn clamp(&self, value: f64) -> f64 {
    let value = self.min.map_or(value, |min| value.max(min));
    self.max.map_or(value, |max| value.min(max))
  }
}

/// The text an editable field shows for `value`.
pub fn editable_display(value: Option<f64>, mode: UnitMode) -> String {
  format_for_display(value, mode, DisplayStyle::Decimal)
}

/// Commits `text` against the field's `previous` value.
pub fn commit_edit(text: &str, mode: UnitMode, previous: Option<f64>, bounds: Bounds) -> EditOutcome {
  match parse_dimension(text, mode) {
    Ok(parsed) => {
      let value = bounds.clamp(parsed);
      EditOutcome {
        value: Some(value),
        display: editable_display(Some(value), mode),
        changed: true,
      }
    }
    Err(err) => {
      debug!("Keeping previous dimension, could not commit '{}': {}", text, err);
      EditOutcome {
        value: previous,
        display: editable_display(previous, mode),
        changed: false,
      }
    }
  }
}

/// Rewrites inch text as a mixed fraction floored to 1/16". Text that
/// is not an inches expression comes back trimmed but otherwise
/// unchanged.
pub fn normalize_inches_text_floor(text: &str) -> String {
  match parse_inches_expression(text) {
    Ok(inches) => format_floored_for_display(Some(inches), UnitMode::Inches, DisplayStyle::Fraction),
    Err(_) => text.trim().to_owned(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use approx::assert_abs_diff_eq;

  #[test]
  fn test_bounds_clamp() {
    let bounds = Bounds::new(Some(1.0), Some(48.0));
    assert_abs_diff_eq!(bounds.clamp(0.5), 1.0);
    assert_abs_diff_eq!(bounds.clamp(12.0), 12.0);
    assert_abs_diff_eq!(bounds.clamp(96.0), 48.0);
    assert_abs_diff_eq!(Bounds::unbounded().clamp(-3.0), -3.0);
    assert_abs_diff_eq!(Bounds::new(None, Some(10.0)).clamp(20.0), 10.0);
  }

  #[test]
  fn test_commit_valid_text() {
    let outcome = commit_edit("1 1/2", UnitMode::Inches, Some(3.0), Bounds::unbounded());
    assert_eq!(outcome.value, Some(1.5));
    assert_eq!(outcome.display, "1.5");
    assert!(outcome.changed);
  }

  #[test]
  fn test_commit_mm_text_in_inch_field() {
    let outcome = commit_edit("25.4mm", UnitMode::Inches, None, Bounds::unbounded());
    assert_eq!(outcome.value, Some(1.0));
    assert_eq!(outcome.display, "1");
  }

  #[test]
  fn test_commit_in_mm_mode() {
    let outcome = commit_edit("762", UnitMode::Millimeters, None, Bounds::unbounded());
    assert_abs_diff_eq!(outcome.value.unwrap(), 30.0, epsilon = 1e-9);
    assert_eq!(outcome.display, "762");
  }

  #[test]
  fn test_commit_clamps() {
    let bounds = Bounds::new(Some(0.25), Some(36.0));
    let outcome = commit_edit("40", UnitMode::Inches, Some(3.0), bounds);
    assert_eq!(outcome.value, Some(36.0));
    assert_eq!(outcome.display, "36");

    let outcome = commit_edit("1/8", UnitMode::Inches, Some(3.0), bounds);
    assert_eq!(outcome.value, Some(0.25));
  }

  #[test]
  fn test_commit_invalid_keeps_previous() {
    let outcome = commit_edit("abc", UnitMode::Inches, Some(3.25), Bounds::unbounded());
    assert_eq!(outcome.value, Some(3.25));
    assert_eq!(outcome.display, "3.25");
    assert!(!outcome.changed);

    let outcome = commit_edit("n/a", UnitMode::Millimeters, Some(1.0), Bounds::unbounded());
    assert_eq!(outcome.value, Some(1.0));
    assert_eq!(outcome.display, "25.5");
  }

  #[test]
  fn test_commit_empty_keeps_missing_value() {
    let outcome = commit_edit("   ", UnitMode::Inches, None, Bounds::unbounded());
    assert_eq!(outcome.value, None);
    assert_eq!(outcome.display, "");
    assert!(!outcome.changed);
  }

  #[test]
  fn test_normalize_inches_text_floor() {
    assert_eq!(normalize_inches_text_floor("1.99"), "1 15/16");
    assert_eq!(normalize_inches_text_floor(" 3/4 "), "3/4");
    assert_eq!(normalize_inches_text_floor("12 8/16"), "12 1/2");
    assert_eq!(normalize_inches_text_floor("0.05"), "0");
    assert_eq!(normalize_inches_text_floor("  wide "), "wide");
  }
}
