//! Runtime settings for the command-line binary.
//!
//! Read from the environment after `dotenv` has loaded any `.env` file.

use std::path::PathBuf;
use std::str::FromStr;

/// Environment variable naming the log4rs config file.
pub const ENV_LOG_CONFIG: &str = "CIDR_LOG_CONFIG";
/// Environment variable selecting `text` or `json` output.
pub const ENV_OUTPUT: &str = "CIDR_OUTPUT";

const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// How command results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_config: PathBuf,
    pub output: OutputFormat,
    /// Problems found while reading settings, logged once logging is up.
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
            output: OutputFormat::default(),
            warnings: Vec::new(),
        }
    }
}

impl Config {
    /// Build the config from process environment variables.
    pub fn from_env() -> Config {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Config
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(path) = lookup(ENV_LOG_CONFIG).filter(|p| !p.trim().is_empty()) {
            config.log_config = PathBuf::from(path.trim());
        }
        if let Some(value) = lookup(ENV_OUTPUT) {
            match value.parse() {
                Ok(output) => config.output = output,
                Err(e) => config.warnings.push(format!("{ENV_OUTPUT}: {e}, using text")),
            }
        }
        config
    }

    /// Log the warnings collected by [`Config::from_lookup`].
    ///
    /// Call after the logger is installed, otherwise they are dropped.
    pub fn log_warnings(&self) {
        for warning in &self.warnings {
            log::warn!("{warning}");
        }
    }
}
