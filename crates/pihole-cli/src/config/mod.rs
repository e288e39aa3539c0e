//! Configuration management.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use pihole_client::ClientConfig;
use pihole_core::BlockingDuration;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::args::Cli;

/// Contents of the optional config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Pi-hole base URL.
    pub url: Option<String>,

    /// Pause duration used when none is given on the command line.
    pub default_duration: Option<String>,

    /// Per-request transport timeout in seconds.
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Get the default config file path.
    pub fn path() -> Option<PathBuf> {
        ProjectDirs::from("net", "pi-hole", "pihole-pause")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration, from `explicit` if given or the default path.
    ///
    /// A missing default file yields the defaults; a missing explicit file
    /// is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => match Self::path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("couldn't read config file {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("couldn't parse config file {}", path.display()))
    }
}

/// Effective settings for one run, after applying precedence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Connection settings for the client
    pub client: ClientConfig,

    /// How long blocking stays disabled
    pub duration: BlockingDuration,
}

impl Settings {
    /// Combine command line (including environment) with the config file.
    ///
    /// Command line wins over the file, the file wins over built-in defaults.
    pub fn resolve(cli: &Cli, config: &Config) -> Result<Self> {
        let mut client = ClientConfig::default();

        if let Some(url) = cli.url.as_ref().or(config.url.as_ref()) {
            client = client.base_url(url.clone());
        }

        match cli.timeout.or(config.timeout_secs) {
            Some(0) => anyhow::bail!("timeout_secs in config file must be at least 1"),
            Some(secs) => client = client.timeout(Duration::from_secs(secs)),
            None => {}
        }

        let duration = match (cli.duration, &config.default_duration) {
            (Some(duration), _) => duration,
            (None, Some(configured)) => configured
                .parse()
                .context("invalid default_duration in config file")?,
            (None, None) => BlockingDuration::DEFAULT,
        };

        Ok(Self { client, duration })
    }
}
