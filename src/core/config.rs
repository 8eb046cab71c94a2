//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.webscrap/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct WebscrapConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BackendConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";
pub const DEFAULT_LOG_FILE: &str = "webscrap.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

/// Checked in order; the first one set wins.
pub const BACKEND_URL_ENV_VARS: [&str; 2] = ["WEBSCRAP_BACKEND_URL", "BACKEND_URL"];

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub backend_url: String,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    /// Problems found while resolving. Resolution runs before the logger
    /// exists, so the caller reports these itself.
    pub warnings: Vec<String>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    NoHomeDir,
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoHomeDir => write!(f, "could not determine home directory"),
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.webscrap/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".webscrap").join("config.toml"))
}

/// Load config from `~/.webscrap/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `WebscrapConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`; an unknown home directory or a template
/// that can't be written is also an error, so the caller can report it.
pub fn load_config() -> Result<WebscrapConfig, ConfigError> {
    let path = config_path().ok_or(ConfigError::NoHomeDir)?;
    load_config_from(&path)
}

/// Same as [`load_config`] for an explicit path.
pub fn load_config_from(path: &Path) -> Result<WebscrapConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path).map_err(ConfigError::Io)?;
        return Ok(WebscrapConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: WebscrapConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) -> std::io::Result<()> {
    let default_content = r#"# WebScrap Configuration
# All settings are optional. Defaults fill in anything left out.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [backend]
# base_url = "http://localhost:5000"   # Or set WEBSCRAP_BACKEND_URL / BACKEND_URL

# [logging]
# level = "debug"                      # "off", "error", "warn", "info", "debug", "trace"
# file = "webscrap.log"
"#;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, default_content)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_backend_url` is the `--backend-url` flag (None = not specified).
pub fn resolve(config: &WebscrapConfig, cli_backend_url: Option<&str>) -> ResolvedConfig {
    resolve_with_env(config, cli_backend_url, |key| std::env::var(key).ok())
}

/// [`resolve`] with an injectable environment lookup.
pub fn resolve_with_env(
    config: &WebscrapConfig,
    cli_backend_url: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Backend URL: CLI → env → config → default
    let backend_url = cli_backend_url
        .map(|s| s.to_string())
        .or_else(|| {
            BACKEND_URL_ENV_VARS
                .iter()
                .find_map(|key| env(key).filter(|v| !v.trim().is_empty()))
        })
        .or_else(|| config.backend.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

    let mut warnings = Vec::new();
    let log_level = match config.logging.level.as_deref() {
        Some(level) => parse_level(level).unwrap_or_else(|| {
            warnings.push(format!(
                "unknown log level '{}', using {}",
                level, DEFAULT_LOG_LEVEL
            ));
            DEFAULT_LOG_LEVEL
        }),
        None => DEFAULT_LOG_LEVEL,
    };

    let log_file = config
        .logging
        .file
        .clone()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    ResolvedConfig {
        backend_url: backend_url.trim().trim_end_matches('/').to_string(),
        log_level,
        log_file,
        warnings,
    }
}

fn parse_level(level: &str) -> Option<LevelFilter> {
    match level.trim().to_ascii_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}
