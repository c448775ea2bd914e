//! Configuration loading for the contas service
//!
//! Sources are layered: built-in defaults, then an optional YAML file, then
//! explicit overrides (environment or command line, resolved by the binary).

use crate::core::entity::NewConta;
use crate::core::validation::{Operation, PayloadRules};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default listen address
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:5000";

/// Default shared API token
pub const DEFAULT_API_TOKEN: &str = "masterkey";

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Service configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Socket address to listen on
    pub bind_addr: String,

    /// The only accepted `x-api-token` value
    pub api_token: String,

    /// Records inserted at startup, in order
    pub seed: Vec<NewConta>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            api_token: DEFAULT_API_TOKEN.to_string(),
            seed: Vec::new(),
        }
    }
}

impl ServiceConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Apply explicit overrides on top of the loaded values
    pub fn with_overrides(mut self, bind_addr: Option<String>, api_token: Option<String>) -> Self {
        if let Some(bind_addr) = bind_addr {
            self.bind_addr = bind_addr;
        }
        if let Some(api_token) = api_token {
            self.api_token = api_token;
        }
        self
    }

    /// Check the configuration before the server starts
    ///
    /// Seed records must satisfy the same rules as a `POST /contas` body.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bind_addr.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "bind_addr".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        if self.api_token.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api_token".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        let rules = PayloadRules::for_operation(Operation::Create);
        for (index, record) in self.seed.iter().enumerate() {
            let value = serde_json::to_value(record).map_err(|e| ConfigError::InvalidValue {
                field: format!("seed[{}]", index),
                message: e.to_string(),
            })?;
            rules
                .validate(&value)
                .map_err(|e| ConfigError::InvalidValue {
                    field: format!("seed[{}]", index),
                    message: e.to_string(),
                })?;
        }

        Ok(())
    }
}
