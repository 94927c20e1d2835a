//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.termselect/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::core::state::{DEFAULT_HINT, DEFAULT_PROMPT};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct TermselectConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub menu: MenuConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub sort: Option<bool>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MenuConfig {
    pub prompt: Option<String>,
    pub hint: Option<String>,
}

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub prompt: String,
    pub hint: String,
    pub sort: bool,
    pub log_level: LevelFilter,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.termselect`, where the config and log file live.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".termselect"))
}

/// Returns the path to `~/.termselect/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.termselect/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `TermselectConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<TermselectConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(TermselectConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(TermselectConfig::default());
    }

    load_config_from(&path)
}

/// Load and parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<TermselectConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: TermselectConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# termselect configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# sort = false                        # sort items before showing them
# log_level = "info"                  # "error", "warn", "info", "debug", "trace"

# [menu]
# prompt = "Select:"                  # Or set TERMSELECT_PROMPT env var
# hint = "↑/↓ to move, Enter to select, q to cancel"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_prompt` and `cli_hint` are from CLI flags (None = not specified).
/// `cli_sort` can only switch sorting on.
pub fn resolve(
    config: &TermselectConfig,
    cli_prompt: Option<&str>,
    cli_hint: Option<&str>,
    cli_sort: bool,
) -> ResolvedConfig {
    // Prompt: CLI → env → config → default
    let prompt = cli_prompt
        .map(|s| s.to_string())
        .or_else(|| std::env::var("TERMSELECT_PROMPT").ok())
        .or_else(|| config.menu.prompt.clone())
        .unwrap_or_else(|| DEFAULT_PROMPT.to_string());

    // Hint: CLI → env → config → default
    let hint = cli_hint
        .map(|s| s.to_string())
        .or_else(|| std::env::var("TERMSELECT_HINT").ok())
        .or_else(|| config.menu.hint.clone())
        .unwrap_or_else(|| DEFAULT_HINT.to_string());

    let sort = cli_sort
        || std::env::var("TERMSELECT_SORT")
            .ok()
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .or(config.general.sort)
            .unwrap_or(false);

    ResolvedConfig {
        prompt,
        hint,
        sort,
        log_level: resolve_log_level(config.general.log_level.as_deref()),
    }
}

fn resolve_log_level(level: Option<&str>) -> LevelFilter {
    match level {
        None => DEFAULT_LOG_LEVEL,
        Some(name) => LevelFilter::from_str(name).unwrap_or_else(|_| {
            warn!("Unknown log_level {:?}, using {}", name, DEFAULT_LOG_LEVEL);
            DEFAULT_LOG_LEVEL
        }),
    }
}
