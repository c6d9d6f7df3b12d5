//! API configuration
//!
//! Sources, later ones winning:
//!
//! 1. Built-in defaults
//! 2. `config/triage.{toml,yaml,json}` if present
//! 3. `TRIAGE_`-prefixed environment variables, `__` separating nested keys
//!    (`TRIAGE_PORT=9000`, `TRIAGE_RULES__NEW_POLICY_DAYS=90`)

use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use config::builder::DefaultState;
use serde::{Deserialize, Serialize};

use core_kernel::CoreError;
use domain_triage::RuleThresholds;

const CONFIG_FILE: &str = "config/triage";
const ENV_PREFIX: &str = "TRIAGE";

/// API configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log filter directive, overridden by `RUST_LOG`
    pub log_level: String,
    /// Emit logs as JSON lines
    pub log_json: bool,
    /// Thresholds for the standard triage rules
    pub rules: RuleThresholds,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            log_json: false,
            rules: RuleThresholds::default(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from the optional config file and the environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_builder(
            Config::builder()
                .add_source(File::with_name(CONFIG_FILE).required(false))
                .add_source(Self::environment()),
        )
    }

    /// Loads configuration from a TOML document
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        Self::from_builder(Config::builder().add_source(File::from_str(source, FileFormat::Toml)))
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        builder.build()?.try_deserialize()
    }

    /// Checks values that deserialize fine but cannot be served
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.port == 0 {
            return Err(CoreError::configuration("port must not be 0"));
        }
        self.rules.validate()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
