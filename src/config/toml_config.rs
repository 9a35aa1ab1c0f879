use crate::adapters::{CalendarProviders, SupportedYears};
use crate::core::export::OutputFormat;
use crate::core::foreign::AnchorDay;
use crate::countries::CountryRegistry;
use crate::domain::model::Country;
use crate::utils::error::{HolidayError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HolidayConfig {
    #[serde(default)]
    pub calendar: CalendarSettings,
    #[serde(default)]
    pub converters: ConverterSettings,
    #[serde(default)]
    pub output: OutputSettings,
    #[serde(default)]
    pub countries: Vec<Country>,
}

fn default_observed() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarSettings {
    #[serde(default = "default_observed")]
    pub observed: bool,
    #[serde(default)]
    pub foreign_anchor: AnchorDay,
}

impl Default for CalendarSettings {
    fn default() -> Self {
        Self {
            observed: true,
            foreign_anchor: AnchorDay::default(),
        }
    }
}

fn default_lunar_years() -> SupportedYears {
    SupportedYears::LUNAR
}

fn default_hijri_years() -> SupportedYears {
    SupportedYears::HIJRI
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConverterSettings {
    #[serde(default = "default_lunar_years")]
    pub lunar_years: SupportedYears,
    #[serde(default = "default_hijri_years")]
    pub hijri_years: SupportedYears,
}

impl Default for ConverterSettings {
    fn default() -> Self {
        Self {
            lunar_years: SupportedYears::LUNAR,
            hijri_years: SupportedYears::HIJRI,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default)]
    pub format: OutputFormat,
    pub path: Option<String>,
}

impl HolidayConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(HolidayError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| HolidayError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn validate_config(&self) -> Result<()> {
        let anchor = self.calendar.foreign_anchor;
        validation::validate_month_day("calendar.foreign_anchor", anchor.month, anchor.day)?;
        // 29 February would fail in three of every four years.
        if (anchor.month, anchor.day) == (2, 29) {
            return Err(HolidayError::InvalidConfigValueError {
                field: "calendar.foreign_anchor".to_string(),
                value: "2/29".to_string(),
                reason: "Anchor must exist in every year".to_string(),
            });
        }

        let lunar = self.converters.lunar_years;
        validation::validate_year_bounds("converters.lunar_years", lunar.first, lunar.last)?;
        let hijri = self.converters.hijri_years;
        validation::validate_year_bounds("converters.hijri_years", hijri.first, hijri.last)?;

        let mut codes = HashSet::new();
        for country in &self.countries {
            country.validate()?;
            if !codes.insert(country.code.to_uppercase()) {
                return Err(HolidayError::InvalidConfigValueError {
                    field: "countries.code".to_string(),
                    value: country.code.clone(),
                    reason: "Country defined more than once".to_string(),
                });
            }
        }

        if let Some(path) = &self.output.path {
            validation::validate_non_empty_string("output.path", path)?;
        }

        Ok(())
    }

    pub fn providers(&self) -> CalendarProviders {
        CalendarProviders::new(
            self.converters.lunar_years,
            self.converters.hijri_years,
            self.calendar.foreign_anchor,
        )
    }

    /// Built-in countries overlaid with the ones defined in this file.
    pub fn registry(&self) -> Result<CountryRegistry> {
        let mut registry = CountryRegistry::with_builtin();
        for country in &self.countries {
            tracing::debug!("Registering country {} from config", country.code);
            registry.register(country.clone())?;
        }
        Ok(registry)
    }
}

impl Validate for HolidayConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{HolidayDefinition, HolidayEntry};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_from_empty_file() {
        let config = HolidayConfig::from_toml_str("").unwrap();
        assert!(config.calendar.observed);
        assert_eq!(config.calendar.foreign_anchor, AnchorDay { month: 7, day: 1 });
        assert_eq!(config.converters.lunar_years, SupportedYears::LUNAR);
        assert_eq!(config.output.format, OutputFormat::Csv);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_custom_country() {
        let toml_content = r#"
[calendar]
observed = false
foreign_anchor = { month = 6, day = 15 }

[output]
format = "json"

[[countries]]
code = "XK"
name = "Exampleland"
aliases = ["EXL"]

[[countries.holidays]]
name = "Founding Day"
rule = { kind = "fixed_date", month = 3, day = 14 }

[[countries.holidays]]
name = "Ascension"
rule = { kind = "easter_relative", offset_days = 39, variant = "western" }

[[countries.holidays]]
name = "Eid al-Adha"
rule = { kind = "foreign_calendar_date", calendar = "hijri", month = 12, day = 10, day_count = 3 }
active = { since = 2000 }

[[countries.holidays]]
name = "Harvest"
rule = { kind = "hardcoded_year_table", table = { entries = [
    { year = 2019, month = 9, day = 1 },
    { year = 2020, month = 9, day = 6 },
] } }
"#;

        let config = HolidayConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());
        assert!(!config.calendar.observed);
        assert_eq!(config.output.format, OutputFormat::Json);

        let country = &config.countries[0];
        assert_eq!(country.holidays.len(), 4);
        assert_eq!(
            country.holidays[2],
            HolidayEntry::hijri("Eid al-Adha", 12, 10).days(3).since(2000)
        );
        assert!(matches!(
            country.holidays[3].rule,
            HolidayDefinition::HardcodedYearTable { .. }
        ));

        let registry = config.registry().unwrap();
        assert_eq!(registry.resolve("exl").unwrap().code, "XK");
        assert_eq!(registry.len(), 10);
    }

    #[test]
    fn test_invalid_configs() {
        let leap_anchor = HolidayConfig::from_toml_str(
            "[calendar]\nforeign_anchor = { month = 2, day = 29 }\n",
        )
        .unwrap();
        assert!(leap_anchor.validate().is_err());

        let reversed = HolidayConfig::from_toml_str(
            "[converters]\nlunar_years = { first = 2100, last = 1900 }\n",
        )
        .unwrap();
        assert!(reversed.validate().is_err());

        assert!(HolidayConfig::from_toml_str("[output]\nformat = \"xlsx\"\n").is_err());
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[converters]\nhijri_years = { first = 1900, last = 2100 }\n")
            .unwrap();

        let config = HolidayConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.converters.hijri_years, SupportedYears { first: 1900, last: 2100 });
        assert!(HolidayConfig::from_file("/nonexistent/hdays.toml").is_err());
    }
}
