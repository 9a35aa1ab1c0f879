use hdays::core::export::rows_to_string;
use hdays::{HolidayConfig, HolidayEngine, LocalOutput, OutputFormat};
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

const CUSTOM_CONFIG: &str = r#"
[calendar]
observed = true

[output]
format = "csv"

[[countries]]
code = "KG"
name = "Kyrgyzstan (short)"

[[countries.holidays]]
name = "New Year's Day"
rule = { kind = "fixed_date", month = 1, day = 1 }

[[countries.holidays]]
name = "Orozo Ait"
rule = { kind = "foreign_calendar_date", calendar = "hijri", month = 10, day = 1, day_count = 2 }
"#;

#[tokio::test]
async fn test_end_to_end_csv_export() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("holidays.csv");

    let config = HolidayConfig::default();
    let engine = HolidayEngine::new(config.registry().unwrap(), config.providers());
    let countries = vec!["ID".to_string(), "IN".to_string()];
    let result = engine.run(&countries, 2019, 2020).await.unwrap();

    let output = LocalOutput::new(
        Some(output_path.to_string_lossy().into_owned()),
        OutputFormat::Csv,
    );
    output.write(&result.rows).unwrap();

    let written = std::fs::read_to_string(&output_path).unwrap();
    let mut lines = written.lines();
    assert_eq!(lines.next(), Some("country,ds,holiday"));
    assert!(written.contains("ID,2019-06-05,Eid al-Fitr"));
    assert!(written.contains("IN,2019-06-06,Eid al-Fitr"));
    assert!(written.contains("ID,2019-03-07,Day of Silence/ Nyepi"));
    assert!(!written.contains("ID,2020-03-25"));
    assert_eq!(written.lines().count(), result.rows.len() + 1);
}

#[tokio::test]
async fn test_custom_country_from_toml_replaces_builtin() {
    let mut config_file = NamedTempFile::new().unwrap();
    config_file.write_all(CUSTOM_CONFIG.as_bytes()).unwrap();

    let config = HolidayConfig::from_file(config_file.path()).unwrap();
    let engine = HolidayEngine::new(config.registry().unwrap(), config.providers());
    let result = engine.run(&["kg".to_string()], 2019, 2019).await.unwrap();

    let csv = rows_to_string(&result.rows, config.output.format).unwrap();
    assert_eq!(
        csv,
        "country,ds,holiday\n\
         KG,2019-01-01,New Year's Day\n\
         KG,2019-06-05,Orozo Ait\n\
         KG,2019-06-06,Orozo Ait\n"
    );
}

#[tokio::test]
async fn test_json_export_round_trips_dates() {
    let config = HolidayConfig::default();
    let engine = HolidayEngine::new(config.registry().unwrap(), config.providers());
    let result = engine.run(&["Belarus".to_string()], 2024, 2024).await.unwrap();

    let json = rows_to_string(&result.rows, OutputFormat::Json).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    let rows = parsed.as_array().unwrap();
    assert!(rows.iter().any(|r| r["ds"] == "2024-05-14" && r["holiday"] == "Commemoration Day"));
    assert!(rows.iter().all(|r| r["country"] == "BY"));
}

#[test]
fn test_library_shortcut() {
    let holidays = hdays::holidays("pakistan", 2024).unwrap();
    let pakistan_day = chrono::NaiveDate::from_ymd_opt(2024, 3, 23).unwrap();
    assert_eq!(holidays.get(&pakistan_day).map(String::as_str), Some("Pakistan Day"));
    assert!(hdays::holidays("Atlantis", 2024).is_err());
}
