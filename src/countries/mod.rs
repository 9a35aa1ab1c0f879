//! Built-in country holiday tables and the code/alias registry.

mod india;
mod indonesia;
mod pakistan;
mod philippines;
mod post_soviet;
mod thailand;

use crate::domain::model::Country;
use crate::utils::error::{HolidayError, Result};
use crate::utils::validation::Validate;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

pub use india::india;
pub use indonesia::indonesia;
pub use pakistan::pakistan;
pub use philippines::philippines;
pub use post_soviet::{belarus, georgia, kyrgyzstan, russia};
pub use thailand::thailand;

pub fn builtin() -> Vec<Country> {
    vec![
        indonesia(),
        india(),
        kyrgyzstan(),
        thailand(),
        philippines(),
        pakistan(),
        russia(),
        belarus(),
        georgia(),
    ]
}

/// Maps country codes, names and aliases (case-insensitive) to one country.
#[derive(Debug, Clone, Default)]
pub struct CountryRegistry {
    countries: BTreeMap<String, Arc<Country>>,
    aliases: HashMap<String, String>,
}

impl CountryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        for country in builtin() {
            registry.insert(country);
        }
        registry
    }

    fn key(name: &str) -> String {
        name.trim().to_uppercase()
    }

    /// Adds or replaces a country. Aliases pointing at a replaced country
    /// are dropped first.
    pub fn insert(&mut self, country: Country) {
        let code = Self::key(&country.code);
        if self.countries.contains_key(&code) {
            self.aliases.retain(|_, target| *target != code);
        }

        self.aliases.insert(code.clone(), code.clone());
        self.aliases.insert(Self::key(&country.name), code.clone());
        for alias in &country.aliases {
            self.aliases.insert(Self::key(alias), code.clone());
        }
        self.countries.insert(code, Arc::new(country));
    }

    /// Validates then inserts.
    pub fn register(&mut self, country: Country) -> Result<()> {
        country.validate()?;
        self.insert(country);
        Ok(())
    }

    pub fn resolve(&self, name: &str) -> Result<Arc<Country>> {
        self.aliases
            .get(&Self::key(name))
            .and_then(|code| self.countries.get(code))
            .cloned()
            .ok_or_else(|| HolidayError::UnknownCountry(name.to_string()))
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.countries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::HolidayEntry;

    #[test]
    fn test_builtin_tables_are_valid() {
        for country in builtin() {
            assert!(country.validate().is_ok(), "{} failed validation", country.code);
        }
    }

    #[test]
    fn test_resolve_by_code_and_name() {
        let registry = CountryRegistry::with_builtin();
        assert_eq!(registry.len(), 9);
        assert_eq!(registry.resolve("id").unwrap().name, "Indonesia");
        assert_eq!(registry.resolve("Indonesia").unwrap().code, "ID");
        assert_eq!(registry.resolve(" pakistan ").unwrap().code, "PK");
        assert!(matches!(
            registry.resolve("Atlantis"),
            Err(HolidayError::UnknownCountry(_))
        ));
    }

    #[test]
    fn test_replacing_a_country_drops_old_aliases() {
        let mut registry = CountryRegistry::with_builtin();
        registry
            .register(Country {
                code: "BY".to_string(),
                name: "Belarus (custom)".to_string(),
                aliases: vec!["BLR".to_string()],
                holidays: vec![HolidayEntry::fixed("New Year's Day", 1, 1)],
            })
            .unwrap();

        assert_eq!(registry.resolve("blr").unwrap().holidays.len(), 1);
        assert!(registry.resolve("Belarus").is_err());
        assert_eq!(registry.len(), 9);
    }
}
