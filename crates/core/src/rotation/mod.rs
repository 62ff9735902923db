//! Rotation calendar
//!
//! Decides whether an agent is on duty on a date from nothing but the
//! rotation anchor and a pattern looked up by name.

pub mod calendar;
pub mod pattern;

pub use calendar::{is_working_day, RotationCalendar};
pub use pattern::{PatternRegistry, RotationPattern};
