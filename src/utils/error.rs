use crate::domain::model::CalendarKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HolidayError {
    #[error("{calendar} conversion failed: {message}")]
    CalendarConversion {
        calendar: CalendarKind,
        message: String,
    },

    #[error("Anchor '{anchor}' is undefined for year {year}")]
    AnchorUndefined { anchor: String, year: i32 },

    #[error("Invalid holiday definition '{name}': {reason}")]
    InvalidDefinition { name: String, reason: String },

    #[error("Unknown country: {0}")]
    UnknownCountry(String),

    #[error("Date arithmetic overflow: {message}")]
    DateOverflow { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Worker task failed: {message}")]
    TaskError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl HolidayError {
    pub fn conversion(calendar: CalendarKind, err: impl std::fmt::Display) -> Self {
        HolidayError::CalendarConversion {
            calendar,
            message: err.to_string(),
        }
    }

    pub fn invalid_definition(name: &str, reason: impl Into<String>) -> Self {
        HolidayError::InvalidDefinition {
            name: name.to_string(),
            reason: reason.into(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            HolidayError::UnknownCountry(_)
            | HolidayError::ConfigError { .. }
            | HolidayError::InvalidConfigValueError { .. }
            | HolidayError::InvalidDefinition { .. } => ErrorSeverity::Medium,
            HolidayError::CalendarConversion { .. }
            | HolidayError::AnchorUndefined { .. }
            | HolidayError::DateOverflow { .. } => ErrorSeverity::High,
            HolidayError::IoError(_)
            | HolidayError::CsvError(_)
            | HolidayError::SerializationError(_)
            | HolidayError::TaskError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            HolidayError::CalendarConversion { .. } => {
                "Pick a year inside the converter's supported range or widen it in [converters]"
            }
            HolidayError::AnchorUndefined { .. } => {
                "Easter is only computed for Gregorian years 1583 to 4099"
            }
            HolidayError::InvalidDefinition { .. } => {
                "Check month/day values and day_count in the holiday table"
            }
            HolidayError::UnknownCountry(_) => {
                "Use an ISO code or country name listed by the registry (e.g. ID, IN, PK)"
            }
            HolidayError::DateOverflow { .. } => "Use a smaller offset or a nearer year",
            HolidayError::TaskError { .. } => "Re-run with --verbose and report the failing country",
            HolidayError::IoError(_) => "Check the file path and permissions",
            HolidayError::CsvError(_) | HolidayError::SerializationError(_) => {
                "Check the output destination is writable"
            }
            HolidayError::ConfigError { .. } | HolidayError::InvalidConfigValueError { .. } => {
                "Fix the configuration file and retry"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            HolidayError::UnknownCountry(code) => {
                format!("No holiday calendar is registered for '{}'", code)
            }
            HolidayError::CalendarConversion { calendar, .. } => {
                format!("The {} calendar could not be converted for this year", calendar)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, HolidayError>;
