use anyhow::Context;
use clap::Parser;
use receipt_points::app::server;
use receipt_points::core::ConfigProvider;
use receipt_points::utils::logger::{self, LogFormat};
use receipt_points::utils::validation::Validate;
use receipt_points::{CliConfig, TomlConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入 TOML 配置 (若有指定)，命令列參數覆蓋設定檔
    let file_config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(mut config) => {
                cli.apply_to(&mut config);
                Some(config)
            }
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => None,
    };

    let (verbose, json_logs) = match &file_config {
        Some(config) => (config.verbose(), config.json_logs()),
        None => (cli.verbose(), cli.json_logs()),
    };

    // 初始化日誌
    let format = if json_logs {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(format, verbose);

    tracing::info!("Starting receipt-points service");
    if verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let result = match file_config {
        Some(config) => {
            tracing::debug!("Effective config: {:?}", config);
            start(&config).await
        }
        None => start(&cli).await,
    };

    if let Err(e) = &result {
        tracing::error!("❌ Service failed: {}", e);
    }

    result.context("receipt-points service failed")
}

async fn start<C: ConfigProvider + Validate>(config: &C) -> receipt_points::Result<()> {
    // 驗證配置
    config.validate()?;
    server::run(config).await
}
