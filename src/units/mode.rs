
use thiserror::Error;
use serde::{Serialize, Deserialize};

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// The unit a length is entered in and shown in. Lengths themselves
/// are always stored as canonical inches; the mode only selects the
/// view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UnitMode {
  #[default]
  #[serde(rename = "in")]
  Inches,
  #[serde(rename = "mm")]
  Millimeters,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown unit mode '{input}', expected 'in' or 'mm'")]
pub struct ParseUnitModeError {
  pub input: String,
}

impl UnitMode {
  /// The short name used for persistence and display.
  pub fn as_str(self) -> &'static str {
    match self {
      UnitMode::Inches => "in",
      UnitMode::Millimeters => "mm",
    }
  }

  pub fn other(self) -> Self {
    match self {
      UnitMode::Inches => UnitMode::Millimeters,
      UnitMode::Millimeters => UnitMode::Inches,
    }
  }
}

impl Display for UnitMode {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Accepts exactly the persisted names, `"in"` and `"mm"`.
impl FromStr for UnitMode {
  type Err = ParseUnitModeError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "in" => Ok(UnitMode::Inches),
      "mm" => Ok(UnitMode::Millimeters),
      _ => Err(ParseUnitModeError { input: s.to_owned() }),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_default_is_inches() {
    assert_eq!(UnitMode::default(), UnitMode::Inches);
  }

  #[test]
  fn test_from_str() {
    assert_eq!(UnitMode::from_str("in"), Ok(UnitMode::Inches));
    assert_eq!(UnitMode::from_str("mm"), Ok(UnitMode::Millimeters));
    assert_eq!(
      UnitMode::from_str("cm"),
      Err(ParseUnitModeError { input: String::from("cm") }),
    );
    assert!(UnitMode::from_str("IN").is_err());
    assert!(UnitMode::from_str("").is_err());
  }

  #[test]
  fn test_display_matches_from_str() {
    for mode in [UnitMode::Inches, UnitMode::Millimeters] {
      assert_eq!(UnitMode::from_str(&mode.to_string()), Ok(mode));
    }
  }

  #[test]
  fn test_other() {
    assert_eq!(UnitMode::Inches.other(), UnitMode::Millimeters);
    assert_eq!(UnitMode::Millimeters.other(), UnitMode::Inches);
  }

  #[test]
  fn test_serde_names() {
    assert_eq!(serde_json::to_string(&UnitMode::Millimeters).unwrap(), "\"mm\"");
    assert_eq!(serde_json::from_str::<UnitMode>("\"in\"").unwrap(), UnitMode::Inches);
    assert!(serde_json::from_str::<UnitMode>("\"ft\"").is_err());
  }
}
