
use regex::Regex;
use once_cell::sync::Lazy;

/// An explicit unit written after a dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitSuffix {
  /// `mm`, `millimeter(s)` or `millimetre(s)`.
  Millimeters,
  /// `in`, `inch`, `inches` or a trailing `"`.
  Inches,
}

static MM_SUFFIX_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r"(?i)(?:mm|millimeter|millimetre)s?$").unwrap());

static INCH_SUFFIX_RE: Lazy<Regex> =
  Lazy::new(|| Regex::new(r#"(?i)(?:in(?:ch(?:es)?)?|")$"#).unwrap());

/// Splits a trailing unit suffix off of `text`. Returns the remaining
/// body, with trailing whitespace removed, and the suffix if one was
/// present. Millimeter suffixes are checked first.
pub fn split_suffix(text: &str) -> (&str, Option<UnitSuffix>) {
  if let Some(m) = MM_SUFFIX_RE.find(text) {
    (text[..m.start()].trim_end(), Some(UnitSuffix::Millimeters))
  } else if let Some(m) = INCH_SUFFIX_RE.find(text) {
    (text[..m.start()].trim_end(), Some(UnitSuffix::Inches))
  } else {
    (text, None)
  }
}
