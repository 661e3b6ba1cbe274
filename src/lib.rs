
//! Dimension handling for cabinet layouts.
//!
//! Lengths are canonical decimal inches (`f64`). User text is parsed
//! with [`parsing::parse_dimension`] and shown with
//! [`display::format_for_display`] or
//! [`display::format_floored_for_display`]. The unit mode is always an
//! explicit argument; [`prefs`] loads and stores the user's choice.

pub mod display;
pub mod edit;
pub mod error;
pub mod parsing;
pub mod prefs;
pub mod units;

pub use error::Error;
