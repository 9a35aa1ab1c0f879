use anyhow::Context;
use clap::Parser;
use hdays::utils::error::ErrorSeverity;
use hdays::utils::{logger, validation::Validate};
use hdays::{CliConfig, HolidayConfig, HolidayEngine, HolidayError, LocalOutput};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting hdays CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = run(config).await {
        let Some(error) = e.downcast_ref::<HolidayError>() else {
            tracing::error!("❌ {:#}", e);
            eprintln!("❌ {:#}", e);
            std::process::exit(1);
        };

        tracing::error!("❌ {:#} (Severity: {:?})", e, error.severity());
        tracing::error!("💡 Recovery suggestion: {}", error.recovery_suggestion());
        eprintln!("❌ {}", error.user_friendly_message());
        eprintln!("💡 建議: {}", error.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match error.severity() {
            ErrorSeverity::Medium => 2, // 輸入或配置錯誤
            ErrorSeverity::High => 1,   // 曆法計算錯誤
            ErrorSeverity::Critical => 3, // 系統錯誤
        };
        std::process::exit(exit_code);
    }
}

async fn run(config: CliConfig) -> anyhow::Result<()> {
    config.validate()?;

    let file_config = match &config.config {
        Some(path) => {
            tracing::info!("📄 Loading configuration from {}", path);
            HolidayConfig::from_file(path).with_context(|| format!("failed to load {}", path))?
        }
        None => HolidayConfig::default(),
    };
    file_config.validate()?;

    let observed = file_config.calendar.observed && !config.not_observed;
    let format = config.format.unwrap_or(file_config.output.format);
    let output = LocalOutput::new(
        config.output.clone().or_else(|| file_config.output.path.clone()),
        format,
    );

    let engine = HolidayEngine::new(file_config.registry()?, file_config.providers()).observed(observed);
    let result = engine
        .run(&config.countries, config.from, config.last_year())
        .await?;

    for missing in &result.unsupported {
        tracing::warn!("⚠️  No date for {}", missing);
    }

    output.write(&result.rows)?;
    tracing::info!(
        "✅ Wrote {} holidays for {} countries to {}",
        result.rows.len(),
        config.countries.len(),
        output.describe()
    );
    Ok(())
}
