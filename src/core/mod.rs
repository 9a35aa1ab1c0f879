pub mod anchor;
pub mod builder;
pub mod calendar;
#[cfg(feature = "cli")]
pub mod engine;
pub mod export;
pub mod foreign;
pub mod hardcoded;
pub mod search;

pub use crate::domain::model::{
    CalendarKind, Country, EasterVariant, ForeignDate, HolidayDefinition, HolidayEntry,
    HolidayRow, ResolvedHoliday, UnsupportedYear,
};
pub use crate::domain::ports::{AnchorFunction, CalendarConverter};
pub use crate::utils::error::Result;
