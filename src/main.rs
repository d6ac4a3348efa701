use clap::Parser;
use reframe_kit::core::ConfigProvider;
use reframe_kit::utils::error::{ErrorSeverity, ReframeError};
use reframe_kit::utils::{logger, validation::Validate};
use reframe_kit::{AppContext, CliConfig, LocalStorage, TomlConfig};

fn load_config(cli: &CliConfig) -> Result<TomlConfig, ReframeError> {
    let mut config = TomlConfig::from_file_or_default(&cli.config)?;

    // 命令列覆蓋資料目錄
    if let Some(dir) = &cli.data_dir {
        config.set_storage_path(dir.clone());
    }

    config.validate()?;
    Ok(config)
}

fn exit_code(severity: ErrorSeverity) -> i32 {
    match severity {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

fn report(e: &ReframeError) -> i32 {
    tracing::error!(
        "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    exit_code(e.severity())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            logger::init_cli_logger(cli.verbose, None);
            eprintln!("❌ Failed to load config '{}'", cli.config);
            std::process::exit(report(&e).max(1));
        }
    };

    if config.json_logging() {
        logger::init_json_logger(cli.verbose, config.log_level());
    } else {
        logger::init_cli_logger(cli.verbose, config.log_level());
    }

    tracing::debug!("CLI config: {:?}", cli);
    tracing::debug!("📁 Data directory: {}", config.storage_path());

    let storage = LocalStorage::new(config.storage_path().to_string());
    let context = AppContext::new(config, storage);

    match context.execute(&cli.command) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            let code = report(&e);
            if code > 0 {
                std::process::exit(code);
            }
        }
    }

    Ok(())
}
