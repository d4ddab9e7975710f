//! Configuration management for pictoid.
//!
//! Configuration is loaded with figment from defaults, an optional TOML file
//! and `PICTOID_` environment variables. With none of those present the
//! resolved paths are the built-in defaults.

use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::annotate::DEFAULT_INPUT_PATH;
use crate::error::{Error, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Directory under the user config dir.
const CONFIG_DIR_NAME: &str = "pictoid";

/// Environment variable prefix.
const ENV_PREFIX: &str = "PICTOID_";

/// Application configuration.
///
/// Precedence, highest first:
/// 1. Environment variables (`PICTOID_ANNOTATE__INPUT_PATH`, ...)
/// 2. TOML config file at `~/.config/pictoid/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Annotation configuration.
    pub annotate: AnnotateConfig,
}

/// Where to read and write the picto list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotateConfig {
    /// Input file, relative to the working directory unless absolute.
    pub input_path: PathBuf,
    /// Output file. Defaults to overwriting the input.
    pub output_path: Option<PathBuf>,
}

impl Default for AnnotateConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: None,
        }
    }
}

impl Config {
    /// Load configuration with an optional custom config path.
    ///
    /// A missing config file is not an error; defaults are used instead.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, parsing or validation fails.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.annotate.input_path.as_os_str().is_empty() {
            return Err(Error::ConfigValidation {
                message: "annotate.input_path must not be empty".to_string(),
            });
        }

        if self
            .annotate
            .output_path
            .as_ref()
            .is_some_and(|p| p.as_os_str().is_empty())
        {
            return Err(Error::ConfigValidation {
                message: "annotate.output_path must not be empty when set".to_string(),
            });
        }

        Ok(())
    }

    /// The configured input path.
    #[must_use]
    pub fn input_path(&self) -> &Path {
        &self.annotate.input_path
    }

    /// The configured output path, falling back to the input path.
    #[must_use]
    pub fn output_path(&self) -> &Path {
        self.annotate
            .output_path
            .as_deref()
            .unwrap_or(&self.annotate.input_path)
    }
}
