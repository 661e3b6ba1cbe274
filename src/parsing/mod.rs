
//! Parsing of user-entered dimensions into canonical inches.

mod inches;
mod suffix;

pub use inches::parse_inches_expression;
pub use suffix::{UnitSuffix, split_suffix};

use crate::units::{UnitMode, mm_to_inches};

use regex::Regex;
use once_cell::sync::Lazy;
use thiserror::Error;

use std::str::FromStr;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseDimensionError {
  #[error("Expected a dimension, but found empty input")]
  Empty,
  #[error("Fraction has a zero denominator")]
  ZeroDenominator,
  #[error("Failed to parse '{0}' as a dimension")]
  InvalidNumber(String),
}

impl ParseDimensionError {
  pub(crate) fn invalid(text: impl Into<String>) -> Self {
    Self::InvalidNumber(text.into())
  }
}

/// Parses free-form user text into canonical inches.
///
/// An explicit suffix (`mm`, `in`, `"` and their long forms) always
/// wins. Without a suffix the text is read in the `current` unit mode.
/// Inch text may be a mixed number, a simple fraction or a decimal;
/// millimeter text is a decimal.
pub fn parse_dimension(text: &str, current: UnitMode) -> Result<f64, ParseDimensionError> {
  let text = text.trim();
  if text.is_empty() {
    return Err(ParseDimensionError::Empty);
  }
  match split_suffix(text) {
    (body, Some(UnitSuffix::Millimeters)) => parse_mm_text(body).map(mm_to_inches),
    (body, Some(UnitSuffix::Inches)) => parse_inches_expression(body),
    (body, None) => match current {
      UnitMode::Millimeters => parse_mm_text(body).map(mm_to_inches),
      UnitMode::Inches => parse_inches_expression(body),
    },
  }
}

/// Parses millimeter text as a decimal, ignoring every character other
/// than digits, `.` and `-`. Returns millimeters.
pub fn parse_mm_text(text: &str) -> Result<f64, ParseDimensionError> {
  static NON_NUMERIC_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9.\-]").unwrap());
  let digits = NON_NUMERIC_RE.replace_all(text, "");
  if digits.is_empty() {
    return Err(ParseDimensionError::invalid(text));
  }
  match f64::from_str(&digits) {
    Ok(mm) if mm.is_finite() => Ok(mm),
    _ => Err(ParseDimensionError::invalid(text)),
  }
}
