
use crate::parsing::ParseDimensionError;
use crate::prefs::PrefsError;
use crate::units::ParseUnitModeError;

use thiserror::Error;

/// Crate-level error, for callers that handle every failure of this
/// crate in one place.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
  #[error("{0}")]
  ParseDimension(#[from] ParseDimensionError),
  #[error("{0}")]
  ParseUnitMode(#[from] ParseUnitModeError),
  #[error("{0}")]
  Prefs(#[from] PrefsError),
}
