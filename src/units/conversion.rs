
/// Millimeters per inch. Exact by definition of the international
/// inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Converts canonical inches to millimeters. Non-finite inputs stay
/// non-finite.
pub fn inches_to_mm(inches: f64) -> f64 {
  inches * MM_PER_INCH
}

/// Converts millimeters to canonical inches. Non-finite inputs stay
/// non-finite.
pub fn mm_to_inches(mm: f64) -> f64 {
  mm / MM_PER_INCH
}
