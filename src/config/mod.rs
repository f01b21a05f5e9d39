#[cfg(feature = "cli")]
pub mod cli;

use crate::domain::ports::RegistrySettings;
use crate::utils::error::{CheckError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

pub const DEFAULT_REGISTRY_ENDPOINT: &str = "https://service.nalog.ru/invalid-inn-proc.json";

/// Service configuration loaded from TOML. Every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    pub server: ServerConfig,
    pub registry: RegistryConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub address: String,
    /// Upper bound for a whole request, registry calls included.
    pub timeout_seconds: u64,
    pub max_body_bytes: usize,
}

impl ServerConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: "0.0.0.0:8080".to_string(),
            timeout_seconds: 60,
            max_body_bytes: 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub endpoint: String,
    /// Value of the `k` form parameter sent with every lookup.
    pub taxpayer_kind: String,
    pub timeout_seconds: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_REGISTRY_ENDPOINT.to_string(),
            taxpayer_kind: "fl".to_string(),
            timeout_seconds: 10,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub env: LogEnv,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogEnv {
    #[default]
    Local,
    Dev,
    Prod,
}

impl FromStr for LogEnv {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self> {
        let value = s.to_lowercase();
        validation::validate_one_of("logging.env", &value, &["local", "dev", "prod"])?;
        Ok(match value.as_str() {
            "local" => LogEnv::Local,
            "dev" => LogEnv::Dev,
            _ => LogEnv::Prod,
        })
    }
}

impl ServiceConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from a TOML string, expanding `${VAR}` references first.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CheckError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    // Unknown variables are left as-is so the parse error points at them.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CheckError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        validation::validate_socket_addr("server.address", &self.server.address)
    }
}

impl RegistrySettings for ServiceConfig {
    fn registry_endpoint(&self) -> &str {
        &self.registry.endpoint
    }

    fn taxpayer_kind(&self) -> &str {
        &self.registry.taxpayer_kind
    }

    fn registry_timeout(&self) -> Duration {
        Duration::from_secs(self.registry.timeout_seconds)
    }
}

impl Validate for ServiceConfig {
    fn validate(&self) -> Result<()> {
        self.socket_addr()?;
        validation::validate_positive_number("server.timeout_seconds", self.server.timeout_seconds, 1)?;
        validation::validate_positive_number(
            "server.max_body_bytes",
            self.server.max_body_bytes as u64,
            1,
        )?;

        validation::validate_url("registry.endpoint", &self.registry.endpoint)?;
        validation::validate_non_empty_string("registry.taxpayer_kind", &self.registry.taxpayer_kind)?;
        validation::validate_positive_number(
            "registry.timeout_seconds",
            self.registry.timeout_seconds,
            1,
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = ServiceConfig::from_toml_str("").unwrap();

        assert_eq!(config.server.address, "0.0.0.0:8080");
        assert_eq!(config.registry.endpoint, DEFAULT_REGISTRY_ENDPOINT);
        assert_eq!(config.registry.taxpayer_kind, "fl");
        assert_eq!(config.logging.env, LogEnv::Local);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[server]
address = "127.0.0.1:9000"
timeout_seconds = 30
max_body_bytes = 4096

[registry]
endpoint = "http://localhost:5000/invalid-inn-proc.json"
taxpayer_kind = "ul"
timeout_seconds = 3

[logging]
env = "prod"
"#;

        let config = ServiceConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.socket_addr().unwrap().port(), 9000);
        assert_eq!(config.server.request_timeout(), Duration::from_secs(30));
        assert_eq!(config.server.max_body_bytes, 4096);
        assert_eq!(config.taxpayer_kind(), "ul");
        assert_eq!(config.registry_timeout(), Duration::from_secs(3));
        assert_eq!(config.logging.env, LogEnv::Prod);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("INN_CHECKER_TEST_REGISTRY", "https://registry.test");

        let toml_content = r#"
[registry]
endpoint = "${INN_CHECKER_TEST_REGISTRY}/invalid-inn-proc.json"
"#;

        let config = ServiceConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.registry.endpoint,
            "https://registry.test/invalid-inn-proc.json"
        );

        std::env::remove_var("INN_CHECKER_TEST_REGISTRY");
    }

    #[test]
    fn test_config_validation() {
        let config = ServiceConfig::from_toml_str(
            r#"
[registry]
endpoint = "invalid-url"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());

        let config = ServiceConfig::from_toml_str(
            r#"
[registry]
timeout_seconds = 0
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());

        let config = ServiceConfig::from_toml_str(
            r#"
[server]
address = "not-an-address"
"#,
        )
        .unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_unknown_log_env_is_rejected() {
        let result = ServiceConfig::from_toml_str(
            r#"
[logging]
env = "staging"
"#,
        );
        assert!(result.is_err());
        assert!("staging".parse::<LogEnv>().is_err());
        assert_eq!("DEV".parse::<LogEnv>().unwrap(), LogEnv::Dev);
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[server]\naddress = \"127.0.0.1:8181\"\n")
            .unwrap();

        let config = ServiceConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.server.address, "127.0.0.1:8181");
    }

    #[test]
    fn test_bundled_local_config_is_valid() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("config/local.toml");
        let config = ServiceConfig::from_file(path).unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.registry.endpoint, DEFAULT_REGISTRY_ENDPOINT);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = ServiceConfig::from_file("/definitely/not/here.toml");
        assert!(matches!(result, Err(CheckError::IoError(_))));
    }
}
