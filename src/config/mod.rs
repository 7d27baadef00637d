use crate::cache::DEFAULT_RESULT_CAPACITY;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Environment variables holding the PostgreSQL connection settings.
pub const ENV_VARS: [&str; 5] = ["DB_HOST", "DB_PORT", "DB_NAME", "DB_USER", "DB_PASS"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_schema")]
    pub schema: String,
    #[serde(default = "default_service_table")]
    pub service_table: String,
    /// Lifetime of the pooled connection handle.
    #[serde(default = "default_connection_ttl")]
    pub connection_ttl_secs: u64,
    /// Lifetime of a cached query result.
    #[serde(default = "default_result_ttl")]
    pub result_ttl_secs: u64,
    /// Most query results kept at once.
    #[serde(default = "default_result_capacity")]
    pub result_capacity: u64,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    /// Length of the default period (ending today) when no dates are given.
    #[serde(default = "default_days")]
    pub default_days: i64,
}

fn default_schema() -> String {
    "light".to_string()
}
fn default_service_table() -> String {
    "4600010296_servicos".to_string()
}
fn default_connection_ttl() -> u64 {
    600
}
fn default_result_ttl() -> u64 {
    300
}
fn default_result_capacity() -> u64 {
    DEFAULT_RESULT_CAPACITY
}
fn default_max_connections() -> u32 {
    5
}
fn default_acquire_timeout() -> u64 {
    30
}
fn default_days() -> i64 {
    7
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema: default_schema(),
            service_table: default_service_table(),
            connection_ttl_secs: default_connection_ttl(),
            result_ttl_secs: default_result_ttl(),
            result_capacity: default_result_capacity(),
            max_connections: default_max_connections(),
            acquire_timeout_secs: default_acquire_timeout(),
            default_days: default_days(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory (`~/.servdash`).
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".servdash")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("servdash.conf")
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Problems that would make the dashboard misbehave, one line each.
    pub fn problems(&self) -> Vec<String> {
        let mut out = Vec::new();
        if self.schema.trim().is_empty() {
            out.push("schema is empty".to_string());
        }
        if self.service_table.trim().is_empty() {
            out.push("service_table is empty".to_string());
        }
        if self.result_ttl_secs == 0 {
            out.push("result_ttl_secs is 0: every render hits the database".to_string());
        }
        if self.connection_ttl_secs < self.result_ttl_secs {
            out.push("connection_ttl_secs is shorter than result_ttl_secs".to_string());
        }
        if self.result_capacity == 0 {
            out.push("result_capacity is 0: nothing can be cached".to_string());
        }
        if self.max_connections == 0 {
            out.push("max_connections must be at least 1".to_string());
        }
        if self.default_days < 0 {
            out.push("default_days must not be negative".to_string());
        }
        out
    }
}

/// PostgreSQL connection settings, read from the environment.
#[derive(Clone)]
pub struct DbSettings {
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
}

impl DbSettings {
    /// Reads `DB_HOST`, `DB_PORT`, `DB_NAME`, `DB_USER`, `DB_PASS`.
    /// A `.env` file is expected to have been loaded by the caller.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let missing: Vec<&str> = ENV_VARS
            .iter()
            .copied()
            .filter(|k| lookup(k).is_none_or(|v| v.trim().is_empty()))
            .collect();
        if !missing.is_empty() {
            return Err(AppError::Config(format!(
                "missing environment variable(s): {}",
                missing.join(", ")
            )));
        }

        let get = |k: &str| lookup(k).unwrap_or_default().trim().to_string();
        let port_raw = get("DB_PORT");
        let port = port_raw
            .parse::<u16>()
            .map_err(|_| AppError::Config(format!("DB_PORT is not a valid port: {port_raw}")))?;

        Ok(Self {
            host: get("DB_HOST"),
            port,
            name: get("DB_NAME"),
            user: get("DB_USER"),
            // passwords may legitimately carry surrounding spaces
            password: lookup("DB_PASS").unwrap_or_default(),
        })
    }

    /// Connection URL with the password replaced by asterisks.
    pub fn masked_url(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}/{}",
            self.user,
            "*".repeat(self.password.chars().count()),
            self.host,
            self.port,
            self.name
        )
    }
}

impl fmt::Debug for DbSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked_url())
    }
}
