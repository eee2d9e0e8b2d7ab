use crate::config::TomlConfig;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_socket_addr, Validate};
use clap::Parser;

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, Parser)]
#[command(name = "receipt-points")]
#[command(about = "Stores purchase receipts and scores them with loyalty points")]
pub struct CliConfig {
    /// Address the HTTP server binds to [default: 127.0.0.1:8080]
    #[arg(long = "bind", env = "RECEIPT_POINTS_BIND")]
    pub bind_address: Option<String>,

    /// Path to a TOML configuration file. Flags given on the command line
    /// override the values it sets
    #[arg(short, long)]
    pub config: Option<String>,

    /// Do not preload the example receipt
    #[arg(long)]
    pub no_seed: bool,

    /// Emit JSON log lines
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn bind_address(&self) -> &str {
        self.bind_address.as_deref().unwrap_or(DEFAULT_BIND_ADDRESS)
    }

    fn seed_example(&self) -> bool {
        !self.no_seed
    }

    fn json_logs(&self) -> bool {
        self.json_logs
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}

impl CliConfig {
    /// 命令列參數優先於設定檔
    pub fn apply_to(&self, config: &mut TomlConfig) {
        if let Some(bind_address) = &self.bind_address {
            config.server.bind_address = bind_address.clone();
        }
        if self.no_seed {
            config.store.seed_example = false;
        }
        if self.json_logs {
            config.logging.json = true;
        }
        if self.verbose {
            config.logging.verbose = true;
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_socket_addr("bind", self.bind_address())?;
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}
