use crate::cli::output::OutputFormat;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".typofix.toml";

/// Run configuration, fixed for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub colors: bool,
    pub recursive: bool,
    pub write_changes: bool,
    pub format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            colors: true,
            recursive: false,
            write_changes: false,
            format: OutputFormat::Text,
        }
    }
}

/// On-disk form. Unset keys leave the lower layer alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub colors: Option<bool>,
    pub recursive: Option<bool>,
    pub write_changes: Option<bool>,
    pub format: Option<OutputFormat>,
}

/// Command-line flags relevant to the run configuration.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub disable_colors: bool,
    pub recursive: bool,
    pub write_changes: bool,
    pub format: Option<OutputFormat>,
    pub no_config: bool,
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(cli: &CliOverrides) -> Result<Self> {
        if cli.no_config {
            return Ok(Self::default().apply(cli));
        }

        let global = Self::global_config_path();
        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        Self::load_from(global.as_deref(), Some(&local), cli)
    }

    /// Layer the given config files (skipping missing ones) under the CLI flags.
    pub fn load_from(global: Option<&Path>, local: Option<&Path>, cli: &CliOverrides) -> Result<Self> {
        let mut config = Self::default();

        for path in [global, local].into_iter().flatten() {
            if path.exists() {
                tracing::debug!(path = %path.display(), "loading config file");
                config = config.merge(Self::from_file(path)?);
            }
        }

        Ok(config.apply(cli))
    }

    fn from_file(path: &Path) -> Result<FileConfig> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: FileConfig) -> Self {
        if let Some(colors) = other.colors {
            self.colors = colors;
        }
        if let Some(recursive) = other.recursive {
            self.recursive = recursive;
        }
        if let Some(write_changes) = other.write_changes {
            self.write_changes = write_changes;
        }
        if let Some(format) = other.format {
            self.format = format;
        }
        self
    }

    // Flags only switch behavior on (or colors off).
    fn apply(mut self, cli: &CliOverrides) -> Self {
        if cli.disable_colors {
            self.colors = false;
        }
        self.recursive |= cli.recursive;
        self.write_changes |= cli.write_changes;
        if let Some(format) = cli.format {
            self.format = format;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "typofix").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
