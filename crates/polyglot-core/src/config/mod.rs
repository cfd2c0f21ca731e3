mod defaults;


use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::PolyglotError;
use defaults::*;

/// Top-level polyglot configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub polyglot: PolyglotConfig,
    #[serde(default)]
    pub locales: LocalesConfig,
}

/// General settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolyglotConfig {
    /// Fallback log filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for PolyglotConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// How nested command keys are built in the alias table.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FlattenMode {
    /// Only the immediate parent prefixes a subcommand key, at every depth
    /// (`user.profile`, then `profile.edit`).
    #[default]
    Parent,
    /// The whole path prefixes a subcommand key (`user.profile.edit`).
    FullPath,
}

impl FlattenMode {
    pub fn display_name(&self) -> &str {
        match self {
            Self::Parent => "parent",
            Self::FullPath => "full-path",
        }
    }
}

/// Locale discovery and loading settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalesConfig {
    /// Directory scanned for locale files. `~/` is expanded.
    #[serde(default = "default_lang_dir")]
    pub dir: String,
    /// File extension (without the dot) that marks a locale file.
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Abort the whole directory load on the first bad file (default: true).
    /// When false, bad files are skipped with a warning.
    #[serde(default = "default_true")]
    pub fail_fast: bool,
    #[serde(default)]
    pub flatten: FlattenMode,
}

impl Default for LocalesConfig {
    fn default() -> Self {
        Self {
            dir: default_lang_dir(),
            extension: default_extension(),
            fail_fast: true,
            flatten: FlattenMode::default(),
        }
    }
}

/// Expand `~` to home directory.
pub fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return format!("{}/{rest}", home.to_string_lossy());
        }
    }
    path.to_string()
}

/// Load configuration from a TOML file.
///
/// Falls back to defaults if the file does not exist.
pub fn load(path: &str) -> Result<Config, PolyglotError> {
    let path = Path::new(path);
    if !path.exists() {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| PolyglotError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| PolyglotError::Config(format!("failed to parse config: {}", e)))?;

    Ok(config)
}
