pub mod toml_config;

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(feature = "cli")]
pub use cli_args::CliConfig;

#[cfg(feature = "cli")]
mod cli_args {
    use crate::core::export::OutputFormat;
    use crate::utils::error::Result;
    use crate::utils::validation::{self, Validate};
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "hdays")]
    #[command(about = "Public holiday tables for countries on lunar, Islamic and Gregorian calendars")]
    pub struct CliConfig {
        #[arg(long, value_delimiter = ',', required = true, help = "Country codes or names, comma separated")]
        pub countries: Vec<String>,

        #[arg(long, help = "First year to generate")]
        pub from: i32,

        #[arg(long, help = "Last year to generate (defaults to --from)")]
        pub to: Option<i32>,

        #[arg(long, help = "Output format: csv or json (overrides the config file)")]
        pub format: Option<OutputFormat>,

        #[arg(long, help = "Write to this file instead of stdout")]
        pub output: Option<String>,

        #[arg(long, help = "TOML file with calendar settings and custom countries")]
        pub config: Option<String>,

        #[arg(long, help = "Drop holidays that only count when observed (e.g. Indonesian New Year) if they fall on a weekend")]
        pub not_observed: bool,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,
    }

    impl CliConfig {
        pub fn last_year(&self) -> i32 {
            self.to.unwrap_or(self.from)
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            for country in &self.countries {
                validation::validate_non_empty_string("countries", country)?;
            }
            validation::validate_range("from", self.from, 1, 9999)?;
            validation::validate_year_bounds("to", self.from, self.last_year())?;
            if let Some(output) = &self.output {
                validation::validate_non_empty_string("output", output)?;
            }
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parse_arguments() {
            let config = CliConfig::try_parse_from([
                "hdays",
                "--countries",
                "ID,in",
                "--from",
                "2019",
                "--to",
                "2020",
                "--format",
                "json",
            ])
            .unwrap();

            assert_eq!(config.countries, vec!["ID", "in"]);
            assert_eq!(config.last_year(), 2020);
            assert_eq!(config.format, Some(OutputFormat::Json));
            assert!(!config.not_observed);
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_not_observed_help_names_the_dropped_holidays() {
            use clap::CommandFactory;
            let help = CliConfig::command().render_long_help().to_string();
            assert!(help.contains("only count when observed"));
            assert!(!help.contains("Do not move"));
        }

        #[test]
        fn test_single_year_and_reversed_range() {
            let single =
                CliConfig::try_parse_from(["hdays", "--countries", "PK", "--from", "2024"]).unwrap();
            assert_eq!(single.last_year(), 2024);

            let reversed = CliConfig::try_parse_from([
                "hdays", "--countries", "PK", "--from", "2024", "--to", "2020",
            ])
            .unwrap();
            assert!(reversed.validate().is_err());
        }
    }
}
