
use crate::units::rounding::{Rounding, SIXTEENTHS_PER_INCH};

use num::{Zero, ToPrimitive};
use num::rational::Ratio;

use std::fmt::{self, Display, Formatter};

/// An inch length at 1/16" resolution, held as a sign, a whole number
/// of inches and a proper fraction in lowest terms.
///
/// Zero is never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MixedFraction {
  negative: bool,
  whole: u64,
  fraction: Ratio<u64>,
}

impl MixedFraction {
  /// Builds a mixed fraction from a count of sixteenths. Sixteenths
  /// beyond a whole inch carry into `whole`.
  pub fn from_sixteenths(negative: bool, sixteenths: u64) -> Self {
    let whole = sixteenths / 16;
    let fraction = Ratio::new(sixteenths % 16, 16);
    Self {
      negative: negative && sixteenths != 0,
      whole,
      fraction,
    }
  }

  /// Rounds `inches` to 1/16" under the given policy. Returns `None`
  /// for non-finite input and for lengths whose count of sixteenths
  /// does not fit in a `u64` (beyond about 1.15e18 inches).
  pub fn from_inches(inches: f64, rounding: Rounding) -> Option<Self> {
    if !inches.is_finite() {
      return None;
    }
    let sixteenths = rounding.steps(inches.abs(), SIXTEENTHS_PER_INCH).to_u64()?;
    Some(Self::from_sixteenths(inches.is_sign_negative(), sixteenths))
  }

  pub fn is_negative(&self) -> bool {
    self.negative
  }

  pub fn whole(&self) -> u64 {
    self.whole
  }

  /// The fractional part, reduced. Zero when the length is a whole
  /// number of inches.
  pub fn fraction(&self) -> Ratio<u64> {
    self.fraction
  }

  pub fn to_f64(&self) -> f64 {
    let fraction = *self.fraction.numer() as f64 / *self.fraction.denom() as f64;
    let magnitude = self.whole as f64 + fraction;
    if self.negative { - magnitude } else { magnitude }
  }
}

/// Renders as `W N/D`, `N/D` or `W`, with a leading `-` for negative
/// lengths.
impl Display for MixedFraction {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    if self.negative {
      write!(f, "-")?;
    }
    let numer = self.fraction.numer();
    let denom = self.fraction.denom();
    if self.fraction.is_zero() {
      write!(f, "{}", self.whole)
    } else if self.whole == 0 {
      write!(f, "{}/{}", numer, denom)
    } else {
      write!(f, "{} {}/{}", self.whole, numer, denom)
    }
  }
}
