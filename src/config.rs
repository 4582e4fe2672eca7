//! CLI configuration at ~/.config/lodge-calendar/config.toml

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate};
use config::{Environment, File};
use serde::{Deserialize, Serialize};

static DEFAULT_OUTPUT_DIR: &str = ".";
static DEFAULT_FILE_PREFIX: &str = "masonic-calendar";

/// Years up to this one fall back to the first published calendar year
const FIRST_CALENDAR_YEAR: i32 = 2026;

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

fn is_default_output_dir(p: &PathBuf) -> bool {
    *p == default_output_dir()
}

fn default_file_prefix() -> String {
    DEFAULT_FILE_PREFIX.to_string()
}

fn is_default_file_prefix(s: &String) -> bool {
    s == DEFAULT_FILE_PREFIX
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Where exported .ics files are written
    #[serde(default = "default_output_dir", skip_serializing_if = "is_default_output_dir")]
    pub output_dir: PathBuf,

    /// Exported files are named `<file_prefix>-<year>.ics`
    #[serde(default = "default_file_prefix", skip_serializing_if = "is_default_file_prefix")]
    pub file_prefix: String,

    /// Year shown when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_year: Option<i32>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output_dir: default_output_dir(),
            file_prefix: default_file_prefix(),
            default_year: None,
        }
    }
}

impl Config {
    /// Get the config file path (~/.config/lodge-calendar/config.toml)
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("lodge-calendar");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location, creating a commented file on first run.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            Self::create_default_config(&path)?;
        }

        Self::load_from(&path)
    }

    /// Load from `path` (optional) with `LODGE_CALENDAR_*` environment overrides.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config: Config = config::Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("LODGE_CALENDAR").try_parsing(true))
            .build()
            .with_context(|| format!("Failed to read config file at {}", path.display()))?
            .try_deserialize()
            .with_context(|| format!("Failed to parse config file at {}", path.display()))?;

        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory at {}", parent.display())
            })?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file at {}", path.display()))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> Result<()> {
        let contents = format!(
            "\
# lodge-calendar configuration

# Where exported .ics files are written:
# output_dir = \"{}\"

# Exported files are named <file_prefix>-<year>.ics:
# file_prefix = \"{}\"

# Year to show when none is given:
# default_year = {}
",
            DEFAULT_OUTPUT_DIR, DEFAULT_FILE_PREFIX, FIRST_CALENDAR_YEAR
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory at {}", parent.display())
            })?;
        }

        std::fs::write(path, contents)
            .with_context(|| format!("Failed to write config file at {}", path.display()))?;

        Ok(())
    }

    /// `output_dir` with `~` expanded.
    pub fn output_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.output_dir.to_string_lossy()).into_owned();
        PathBuf::from(full_path_str)
    }

    /// Pick the year to work on: the explicit one, then `default_year`, then
    /// the current year (never earlier than the first calendar year).
    pub fn resolve_year(&self, explicit: Option<i32>, today: NaiveDate) -> i32 {
        explicit
            .or(self.default_year)
            .unwrap_or_else(|| today.year().max(FIRST_CALENDAR_YEAR))
    }
}
