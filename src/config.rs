//! Configuration management for employee-record.
//!
//! Supports layered configuration: defaults → project → user → env

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub direct: DirectConfig,
}

impl AppConfig {
    /// Load configuration with hierarchy: defaults → project → user → env
    pub fn load(project_root: Option<&Path>) -> Result<Self, ConfigError> {
        let user_config =
            directories::ProjectDirs::from("com", "employee-record", "employee-record")
                .map(|dirs| dirs.config_dir().join("config.toml"));

        Self::load_layered(project_root, user_config.as_deref(), None)
    }

    /// Load configuration from explicit layers.
    ///
    /// `env` replaces the process environment when given; keys still need the
    /// `EMPLOYEE_RECORD__` prefix.
    pub fn load_layered(
        project_root: Option<&Path>,
        user_config: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        use config::{Config, Environment, File};

        let mut builder = Config::builder();

        // 1. Start with defaults
        builder = builder.add_source(
            File::from_str(
                include_str!("../default_config.toml"),
                config::FileFormat::Toml,
            )
            .required(false),
        );

        // 2. Project-specific config (.employee-record.toml in project root)
        if let Some(root) = project_root {
            let project_config = root.join(".employee-record.toml");
            if project_config.exists() {
                builder = builder.add_source(File::from(project_config).required(false));
            }
        }

        // 3. User config (~/.config/employee-record/config.toml)
        if let Some(user_config) = user_config {
            if user_config.exists() {
                builder = builder.add_source(File::from(user_config).required(false));
            }
        }

        // 4. Environment variables (EMPLOYEE_RECORD__*)
        builder = builder.add_source(
            Environment::with_prefix("EMPLOYEE_RECORD")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let config = builder
            .build()
            .map_err(|e| ConfigError::Parse(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Text source the demo reads the first employee from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_source_path")]
    pub path: PathBuf,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            path: default_source_path(),
        }
    }
}

fn default_source_path() -> PathBuf {
    PathBuf::from("employee_data.txt")
}

/// Values the demo passes to the direct constructor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectConfig {
    #[serde(default = "default_direct_name")]
    pub name: String,
    #[serde(default = "default_direct_salary")]
    pub salary: i64,
}

impl Default for DirectConfig {
    fn default() -> Self {
        Self {
            name: default_direct_name(),
            salary: default_direct_salary(),
        }
    }
}

fn default_direct_name() -> String {
    "fernando".to_string()
}

fn default_direct_salary() -> i64 {
    500000
}
