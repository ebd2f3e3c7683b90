//! ISO-8601 calendrical enumerations, the temporal field protocol they speak,
//! and the tagged binary codec for the date-time value family.

pub mod calendar;
pub mod error;
pub mod ser;
pub mod temporal;
pub mod value;

pub use calendar::{DayOfWeek, Month, WeekDefinition};
pub use error::{TemporalError, TemporalResult};
