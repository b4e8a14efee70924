//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.irdash/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::card::CardKind;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DashConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub user_name: Option<String>,
    pub organization: Option<String>,
    pub initials: Option<String>,
    pub max_upload_mb: Option<u32>,
    pub open_card: Option<CardKind>,
    pub log_level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_USER_NAME: &str = "Kishorev";
pub const DEFAULT_ORGANIZATION: &str = "Investor Relations";
pub const DEFAULT_INITIALS: &str = "IR";
pub const DEFAULT_MAX_UPLOAD_MB: u32 = 50;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub user_name: String,
    pub organization: String,
    pub initials: String,
    pub max_upload_mb: u32,
    pub open_card: Option<CardKind>,
}

/// Values given on the command line. `None` means not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub user_name: Option<String>,
    pub open_card: Option<CardKind>,
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

/// Returns the path to `~/.irdash/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".irdash").join("config.toml"))
}

/// Load config from `~/.irdash/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `DashConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<DashConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(DashConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(DashConfig::default());
    }

    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<DashConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: DashConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

fn generate_default_config(path: &Path) {
    let default_content = r#"# irdash Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# user_name = "Kishorev"             # Or set IRDASH_USER env var / --user
# organization = "Investor Relations"
# initials = "IR"
# max_upload_mb = 50                 # Shown as guidance, not enforced
# open_card = "transcript"           # "email", "transcript" or "youtube"
# log_level = "debug"                # Or IRDASH_LOG_LEVEL / --log-level
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
pub fn resolve(config: &DashConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_with_env(
    config: &DashConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // User: CLI → env → config → default
    let user_name = cli
        .user_name
        .clone()
        .or_else(|| env("IRDASH_USER"))
        .or_else(|| config.general.user_name.clone())
        .unwrap_or_else(|| DEFAULT_USER_NAME.to_string());

    ResolvedConfig {
        user_name,
        organization: config
            .general
            .organization
            .clone()
            .unwrap_or_else(|| DEFAULT_ORGANIZATION.to_string()),
        initials: config
            .general
            .initials
            .clone()
            .unwrap_or_else(|| DEFAULT_INITIALS.to_string()),
        max_upload_mb: config.general.max_upload_mb.unwrap_or(DEFAULT_MAX_UPLOAD_MB),
        open_card: cli.open_card.or(config.general.open_card),
    }
}

/// Log level: CLI → `IRDASH_LOG_LEVEL` → config file → default.
///
/// Unparsable env or config values are skipped.
pub fn resolve_log_level(
    cli: Option<LevelFilter>,
    config: &DashConfig,
    env: impl Fn(&str) -> Option<String>,
) -> LevelFilter {
    cli.or_else(|| env("IRDASH_LOG_LEVEL").and_then(|v| v.parse().ok()))
        .or_else(|| config.general.log_level.as_deref().and_then(|v| v.parse().ok()))
        .unwrap_or(DEFAULT_LOG_LEVEL)
}
