use crate::config::{LogEnv, ServiceConfig};
use crate::utils::error::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "config/local.toml";

#[derive(Debug, Clone, Parser)]
#[command(name = "inn-checker")]
#[command(about = "Checks INNs against the registry of invalid taxpayer numbers")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, env = "CONFIG_PATH")]
    pub config: Option<PathBuf>,

    /// Listen address, overrides `server.address`
    #[arg(long)]
    pub address: Option<String>,

    /// Logging environment (local, dev, prod), overrides `logging.env`
    #[arg(long)]
    pub env: Option<LogEnv>,

    /// Registry URL, overrides `registry.endpoint`
    #[arg(long)]
    pub registry_endpoint: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Loads the configuration file (explicit path, then `config/local.toml`, then
    /// built-in defaults) and applies command line overrides on top.
    pub fn load(&self) -> Result<ServiceConfig> {
        let mut config = match &self.config {
            Some(path) => ServiceConfig::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                ServiceConfig::from_file(DEFAULT_CONFIG_PATH)?
            }
            None => ServiceConfig::default(),
        };

        self.apply_overrides(&mut config);
        Ok(config)
    }

    fn apply_overrides(&self, config: &mut ServiceConfig) {
        if let Some(address) = &self.address {
            config.server.address = address.clone();
        }
        if let Some(env) = self.env {
            config.logging.env = env;
        }
        if let Some(endpoint) = &self.registry_endpoint {
            config.registry.endpoint = endpoint.clone();
        }
    }
}
