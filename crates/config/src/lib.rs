use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to load .env file from path {path}: {reason}")]
    EnvFile { path: String, reason: String },

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_host: String,
    pub api_port: u16,
    pub database_path: String,
    pub registry_data_path: PathBuf,
    pub registry_persist_on_shutdown: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_host: "0.0.0.0".to_string(),
            api_port: 8080,
            database_path: "campus.db".to_string(),
            registry_data_path: PathBuf::from("data/departments.json"),
            registry_persist_on_shutdown: false,
        }
    }
}

impl Config {
    /// Load configuration from a specified `.env` file path or default to the root `.env` file.
    /// Variables already set in the process environment win over the file.
    pub fn from_env(env_path: Option<&str>) -> Result<Self, ConfigError> {
        if let Some(path) = env_path {
            dotenv::from_path(path).map_err(|e| ConfigError::EnvFile {
                path: path.to_string(),
                reason: e.to_string(),
            })?;
        } else {
            dotenv::dotenv().ok();
        }

        let vars: HashMap<String, String> = env::vars().collect();
        Self::from_vars(&vars)
    }

    /// Builds a config from an explicit variable map. Unset keys take their defaults.
    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let get = |key: &str| vars.get(key).map(|v| v.trim()).filter(|v| !v.is_empty());

        let api_port = match get("API_PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                key: "API_PORT",
                value: value.to_string(),
            })?,
            None => defaults.api_port,
        };

        let registry_persist_on_shutdown = match get("REGISTRY_PERSIST_ON_SHUTDOWN") {
            Some(value) => parse_bool(value).ok_or_else(|| ConfigError::InvalidValue {
                key: "REGISTRY_PERSIST_ON_SHUTDOWN",
                value: value.to_string(),
            })?,
            None => defaults.registry_persist_on_shutdown,
        };

        Ok(Self {
            api_host: get("API_HOST").map_or(defaults.api_host, str::to_string),
            api_port,
            database_path: get("DATABASE_PATH").map_or(defaults.database_path, str::to_string),
            registry_data_path: get("REGISTRY_DATA_PATH")
                .map_or(defaults.registry_data_path, PathBuf::from),
            registry_persist_on_shutdown,
        })
    }

    pub fn api_address(&self) -> String {
        format!("{}:{}", self.api_host, self.api_port)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
