
//! Length units: the inches/millimeters selector, conversion between
//! the two, and rounding to each unit's display resolution.

pub mod conversion;
pub mod mode;
pub mod rounding;

pub use conversion::{MM_PER_INCH, inches_to_mm, mm_to_inches};
pub use mode::{UnitMode, ParseUnitModeError};
pub use rounding::Rounding;
