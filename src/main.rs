use anyhow::Context;
use clap::Parser;
use mars_rover::config::cli::STDIO_PATH;
use mars_rover::utils::error::ErrorSeverity;
use mars_rover::utils::{logger, validation::Validate};
use mars_rover::{CliConfig, LocalStorage, MissionConfig, MissionEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    // 載入設定檔 (命令列參數優先)
    if let Some(path) = config.config.clone() {
        let file = MissionConfig::from_file(&path)
            .with_context(|| format!("failed to load config file '{}'", path))?;
        file.validate()
            .with_context(|| format!("invalid config file '{}'", path))?;
        config.merge_file(&file);
    }

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting mars-rover");
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    let print_report = config.output.is_none();
    let writes_stdout = config.output.as_deref() == Some(STDIO_PATH);
    let engine = MissionEngine::new(LocalStorage::new(".".to_string()), config);

    match engine.run().await {
        Ok(report) => {
            if print_report {
                println!("{}", report);
            } else if writes_stdout {
                println!();
            }
            tracing::info!("✅ Mission completed");
        }
        Err(e) => {
            tracing::error!(
                "❌ Mission failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
