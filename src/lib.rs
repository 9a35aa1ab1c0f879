pub mod adapters;
pub mod config;
pub mod core;
pub mod countries;
pub mod domain;
pub mod utils;

use std::sync::Arc;

#[cfg(feature = "cli")]
pub use config::{cli::LocalOutput, CliConfig};
#[cfg(feature = "cli")]
pub use crate::core::engine::HolidayEngine;

pub use adapters::{CalendarProviders, SupportedYears};
pub use config::toml_config::HolidayConfig;
pub use crate::core::{builder::HolidaySet, calendar::CountryCalendar, export::OutputFormat};
pub use countries::CountryRegistry;
pub use domain::model::{Country, HolidayEntry, HolidayRow, ResolvedHoliday};
pub use utils::error::{HolidayError, Result};

/// Observed holidays of a built-in country for one year, with default
/// converter settings.
pub fn holidays(country: &str, year: i32) -> Result<HolidaySet> {
    let country = CountryRegistry::with_builtin().resolve(country)?;
    let mut calendar = CountryCalendar::new(country, Arc::new(CalendarProviders::default()));
    Ok(calendar.populate(year)?.clone())
}
