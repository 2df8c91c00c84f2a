use crate::case::Style;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".recase.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Naming convention used when none is given on the command line
    pub style: Style,

    /// Leave out inputs that convert to an empty string
    pub skip_empty: bool,

    /// Parse every input line as a JSON value instead of raw text
    pub json_input: bool,
}

/// One config file. Keys missing from the file leave earlier layers untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    pub style: Option<Style>,
    pub skip_empty: Option<bool>,
    pub json_input: Option<bool>,
}

/// Command-line values that take priority over any config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub style: Option<Style>,
    pub skip_empty: bool,
    pub json_input: bool,
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(overrides: Overrides) -> Result<Self> {
        Self::load_from(
            Self::global_config_path().as_deref(),
            Path::new(LOCAL_CONFIG_FILE),
            overrides,
        )
    }

    fn load_from(global_path: Option<&Path>, local_path: &Path, overrides: Overrides) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = global_path {
            if global_path.exists() {
                log::debug!("loading global config from {}", global_path.display());
                config = config.merge(Self::from_file(global_path)?);
            }
        }

        if local_path.exists() {
            log::debug!("loading local config from {}", local_path.display());
            config = config.merge(Self::from_file(local_path)?);
        }

        if let Some(style) = overrides.style {
            config.style = style;
        }
        config.skip_empty |= overrides.skip_empty;
        config.json_input |= overrides.json_input;

        log::info!(
            "style={} skip_empty={} json_input={}",
            config.style,
            config.skip_empty,
            config.json_input
        );

        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<ConfigFile> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    fn merge(mut self, other: ConfigFile) -> Self {
        if let Some(style) = other.style {
            self.style = style;
        }
        if let Some(skip_empty) = other.skip_empty {
            self.skip_empty = skip_empty;
        }
        if let Some(json_input) = other.json_input {
            self.json_input = json_input;
        }
        self
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "recase").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}
