//! Optional TOML settings file and the defaults resolved from it.
//!
//! Resolution: `--config` flag > `PGTUNE_CONFIG` env > `~/.config/pgtune/config.toml`.
//! A file named by flag or env must exist; the home-directory file is optional.

use std::path::{Path, PathBuf};
use std::{env, fs};

use anyhow::{Context, Result};
use clap::ValueEnum;
use pgtune_catalog::Lang;
use pgtune_core::{DEFAULT_DB_VERSION, StorageType};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Conf,
    Sql,
}

/// Contents of the settings file. Every field is optional.
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub lang: Option<Lang>,
    pub db_version: Option<String>,
    pub storage: Option<StorageType>,
    pub format: Option<OutputFormat>,
}

impl Settings {
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("invalid settings file")
    }
}

/// Settings after merging the file over built-in defaults.
#[derive(Debug, Clone)]
pub struct Defaults {
    pub lang: Lang,
    pub db_version: String,
    pub storage: StorageType,
    pub format: OutputFormat,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            lang: Lang::default(),
            db_version: DEFAULT_DB_VERSION.to_string(),
            storage: StorageType::default(),
            format: OutputFormat::default(),
        }
    }
}

impl From<Settings> for Defaults {
    fn from(s: Settings) -> Self {
        let base = Defaults::default();
        Self {
            lang: s.lang.unwrap_or(base.lang),
            db_version: s.db_version.unwrap_or(base.db_version),
            storage: s.storage.unwrap_or(base.storage),
            format: s.format.unwrap_or(base.format),
        }
    }
}

/// Where the settings file should come from, and whether it must exist.
#[derive(Debug, PartialEq)]
pub struct ConfigLocation {
    pub path: PathBuf,
    pub required: bool,
}

pub fn locate(
    flag: Option<&Path>,
    env_path: Option<PathBuf>,
    home: Option<PathBuf>,
) -> Option<ConfigLocation> {
    if let Some(path) = flag {
        return Some(ConfigLocation {
            path: path.to_path_buf(),
            required: true,
        });
    }
    if let Some(path) = env_path {
        return Some(ConfigLocation {
            path,
            required: true,
        });
    }
    home.map(|h| ConfigLocation {
        path: h.join(".config").join("pgtune").join("config.toml"),
        required: false,
    })
}

/// Load defaults for this process.
pub fn load(flag: Option<&Path>) -> Result<Defaults> {
    let env_path = env::var("PGTUNE_CONFIG")
        .ok()
        .filter(|s| !s.is_empty())
        .map(PathBuf::from);
    let home = env::var("HOME")
        .or_else(|_| env::var("USERPROFILE"))
        .ok()
        .map(PathBuf::from);

    let Some(location) = locate(flag, env_path, home) else {
        tracing::debug!("no config location, using built-in defaults");
        return Ok(Defaults::default());
    };

    if !location.required && !location.path.exists() {
        tracing::debug!("no config at {}, using built-in defaults", location.path.display());
        return Ok(Defaults::default());
    }

    let content = fs::read_to_string(&location.path)
        .with_context(|| format!("failed to read {}", location.path.display()))?;
    let settings = Settings::parse(&content)
        .with_context(|| format!("failed to load {}", location.path.display()))?;
    tracing::info!("loaded settings from {}", location.path.display());
    Ok(settings.into())
}
