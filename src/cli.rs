//! Command-line flags. Each flag overrides the matching config file value.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, ConfigError};
use crate::generation::Tone;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "replygen", version, about = "Generate email replies from the terminal")]
pub struct Cli {
    /// Path to a config file (default: <config dir>/replygen/config.toml).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Generation endpoint URL.
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Initial tone: none, professional, casual, friendly, enthusiastic, apologetic.
    #[arg(long, value_name = "TONE")]
    pub tone: Option<Tone>,

    /// Request timeout in seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

impl Cli {
    /// Load config (explicit path or default location), apply overrides and
    /// validate the result.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Config file this invocation reads: `--config` or the default location.
    pub fn config_file(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_path)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(endpoint) = &self.endpoint {
            config.endpoint.url = endpoint.clone();
        }
        if let Some(tone) = self.tone {
            config.ui.default_tone = tone;
        }
        if let Some(timeout) = self.timeout {
            config.endpoint.timeout_seconds = timeout;
        }
    }
}
