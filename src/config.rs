use crate::core::coerce::{AbsentPolicy, DecodeMode};
use crate::error::MappingError;
use crate::models::MatchInput;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;

/// Client configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub mapping: MappingSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// How match inputs are decoded from and encoded to maps
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct MappingSettings {
    #[serde(default)]
    pub mode: DecodeMode,
    #[serde(default)]
    pub absent: AbsentPolicy,
}

impl MappingSettings {
    /// Decode with the configured mode
    pub fn decode(&self, map: &Map<String, Value>) -> Result<MatchInput, MappingError> {
        MatchInput::decode(map, self.mode).map(|decoded| decoded.input)
    }

    /// Encode with the configured absent policy
    pub fn encode(&self, input: &MatchInput) -> Map<String, Value> {
        input.to_map_with(self.absent)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with CLOUDMATCH__, nested keys split on __)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., CLOUDMATCH__MAPPING__MODE -> mapping.mode
            .add_source(environment())
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?;

        settings.try_deserialize()
    }
}

fn environment() -> Environment {
    Environment::with_prefix("CLOUDMATCH")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
