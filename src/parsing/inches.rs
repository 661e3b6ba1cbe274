
use super::ParseDimensionError;

use regex::{Regex, Captures};
use once_cell::sync::Lazy;

use std::str::FromStr;

static MIXED_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^([+-]?)([0-9]+)\s+([0-9]+)\s*/\s*([0-9]+)$").unwrap());

static FRACTION_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^([+-]?)([0-9]+)\s*/\s*([0-9]+)$").unwrap());

static DECIMAL_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$").unwrap());

/// Parses an inches expression: a mixed number (`1 1/2`), a simple
/// fraction (`3/8`) or a decimal (`24`, `-1.5`, `.75`). A leading sign
/// applies to the whole expression, so `-1 1/2` is `-1.5`.
pub fn parse_inches_expression(text: &str) -> Result<f64, ParseDimensionError> {
  let text = text.trim();
  if text.is_empty() {
    return Err(ParseDimensionError::Empty);
  }
  let value = if let Some(caps) = MIXED_RE.captures(text) {
    let whole = capture_f64(&caps, 2)?;
    let fraction = ratio(capture_f64(&caps, 3)?, capture_f64(&caps, 4)?)?;
    apply_sign(&caps[1], whole + fraction)
  } else if let Some(caps) = FRACTION_RE.captures(text) {
    let fraction = ratio(capture_f64(&caps, 2)?, capture_f64(&caps, 3)?)?;
    apply_sign(&caps[1], fraction)
  } else if DECIMAL_RE.is_match(text) {
    f64::from_str(text).map_err(|_| ParseDimensionError::invalid(text))?
  } else {
    return Err(ParseDimensionError::invalid(text));
  };
  if value.is_finite() {
    Ok(value)
  } else {
    Err(ParseDimensionError::invalid(text))
  }
}

fn capture_f64(caps: &Captures<'_>, index: usize) -> Result<f64, ParseDimensionError> {
  let digits = &caps[index];
  f64::from_str(digits).map_err(|_| ParseDimensionError::invalid(digits))
}

fn ratio(numer: f64, denom: f64) -> Result<f64, ParseDimensionError> {
  if denom == 0.0 {
    Err(ParseDimensionError::ZeroDenominator)
  } else {
    Ok(numer / denom)
  }
}

fn apply_sign(sign: &str, value: f64) -> f64 {
  if sign == "-" { - value } else { value }
}

#[cfg(test)]
mod tests {
  use super::*;

  use approx::assert_abs_diff_eq;

  #[test]
  fn test_mixed_number() {
    assert_abs_diff_eq!(parse_inches_expression("1 1/2").unwrap(), 1.5);
    assert_abs_diff_eq!(parse_inches_expression("12 3/4").unwrap(), 12.75);
    assert_abs_diff_eq!(parse_inches_expression("  23   15/16 ").unwrap(), 23.9375);
    assert_abs_diff_eq!(parse_inches_expression("1 1 / 2").unwrap(), 1.5);
    // Improper fractions are accepted as written.
    assert_abs_diff_eq!(parse_inches_expression("1 5/4").unwrap(), 2.25);
  }

  #[test]
  fn test_simple_fraction() {
    assert_abs_diff_eq!(parse_inches_expression("3/8").unwrap(), 0.375);
    assert_abs_diff_eq!(parse_inches_expression("1/16").unwrap(), 0.0625);
    assert_abs_diff_eq!(parse_inches_expression("5/4").unwrap(), 1.25);
  }

  #[test]
  fn test_decimal() {
    assert_abs_diff_eq!(parse_inches_expression("24").unwrap(), 24.0);
    assert_abs_diff_eq!(parse_inches_expression("24.5").unwrap(), 24.5);
    assert_abs_diff_eq!(parse_inches_expression(".75").unwrap(), 0.75);
    assert_abs_diff_eq!(parse_inches_expression("3.").unwrap(), 3.0);
    assert_abs_diff_eq!(parse_inches_expression("+2").unwrap(), 2.0);
    assert_abs_diff_eq!(parse_inches_expression("1e1").unwrap(), 10.0);
  }

  #[test]
  fn test_negative_values() {
    assert_abs_diff_eq!(parse_inches_expression("-1.5").unwrap(), -1.5);
    assert_abs_diff_eq!(parse_inches_expression("-3/8").unwrap(), -0.375);
    assert_abs_diff_eq!(parse_inches_expression("-1 1/2").unwrap(), -1.5);
  }

  #[test]
  fn test_zero_denominator() {
    assert_eq!(parse_inches_expression("1/0"), Err(ParseDimensionError::ZeroDenominator));
    assert_eq!(parse_inches_expression("2 1/0"), Err(ParseDimensionError::ZeroDenominator));
  }

  #[test]
  fn test_invalid() {
    assert_eq!(parse_inches_expression(""), Err(ParseDimensionError::Empty));
    assert_eq!(parse_inches_expression("   "), Err(ParseDimensionError::Empty));
    assert_eq!(
      parse_inches_expression("abc"),
      Err(ParseDimensionError::InvalidNumber(String::from("abc"))),
    );
    assert!(parse_inches_expression("inf").is_err());
    assert!(parse_inches_expression("NaN").is_err());
    assert!(parse_inches_expression("1.2.3").is_err());
    assert!(parse_inches_expression("1/2/3").is_err());
    assert!(parse_inches_expression("1 -1/2").is_err());
    assert!(parse_inches_expression("1e999").is_err());
  }
}
