//! Closed calendrical enumerations and week layouts.

mod cyclic;
mod day_of_week;
mod month;
mod week;

pub use day_of_week::DayOfWeek;
pub use month::Month;
pub use week::WeekDefinition;
