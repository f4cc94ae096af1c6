//! # Configuration
//!
//! Centralizes start-up settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.scical/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! Only start-up values live here. The memory register and the runtime angle
//! mode are never written back.
//!
//! Config is read before the file logger exists (the logger's level and path
//! come from it), so loading and resolution record their diagnostics in
//! [`Notices`] and the caller logs them once the logger is up.

use log::{Level, LevelFilter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::state::AngleMode;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ScicalConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub angle_mode: Option<AngleMode>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "scical.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub angle_mode: AngleMode,
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
}

/// Values given on the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub angle_mode: Option<AngleMode>,
    pub log_file: Option<PathBuf>,
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
// Deferred Diagnostics
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: Level,
    pub message: String,
}

/// Log records produced before logging is initialised.
#[derive(Debug, Default)]
pub struct Notices {
    entries: Vec<Notice>,
}

impl Notices {
    pub fn push(&mut self, level: Level, message: impl Into<String>) {
        self.entries.push(Notice {
            level,
            message: message.into(),
        });
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(Level::Info, message);
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.push(Level::Warn, message);
    }

    pub fn debug(&mut self, message: impl Into<String>) {
        self.push(Level::Debug, message);
    }

    pub fn entries(&self) -> &[Notice] {
        &self.entries
    }

    /// Sends every recorded notice to the `log` facade, oldest first.
    pub fn flush(self) {
        for notice in self.entries {
            log::log!(notice.level, "{}", notice.message);
        }
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.scical/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".scical").join("config.toml"))
}

/// Load config from `~/.scical/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `ScicalConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config(notices: &mut Notices) -> Result<ScicalConfig, ConfigError> {
    let Some(path) = config_path() else {
        notices.warn("Could not determine home directory, using default config");
        return Ok(ScicalConfig::default());
    };
    load_config_from(&path, notices)
}

pub fn load_config_from(path: &Path, notices: &mut Notices) -> Result<ScicalConfig, ConfigError> {
    if !path.exists() {
        notices.info(format!(
            "No config file found, generating default at {}",
            path.display()
        ));
        generate_default_config(path, notices);
        return Ok(ScicalConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: ScicalConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    notices.info(format!("Loaded config from {}", path.display()));
    notices.debug(format!("Config: {:?}", config));
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path, notices: &mut Notices) {
    let default_content = r#"# scical configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# angle_mode = "deg"        # "deg" or "rad"; or set SCICAL_ANGLE_MODE

# [logging]
# level = "debug"           # off, error, warn, info, debug, trace; or SCICAL_LOG_LEVEL
# file = "scical.log"
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        notices.warn(format!("Failed to create config directory: {}", e));
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        notices.warn(format!("Failed to write default config: {}", e));
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &ScicalConfig, cli: &CliOverrides, notices: &mut Notices) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok(), notices)
}

/// Same as [`resolve`] with an injectable environment lookup.
pub fn resolve_with_env(
    config: &ScicalConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
    notices: &mut Notices,
) -> ResolvedConfig {
    // Angle mode: CLI → env → config → default
    let angle_mode = cli
        .angle_mode
        .or_else(|| env("SCICAL_ANGLE_MODE").and_then(|v| parse_angle_mode(&v, notices)))
        .or(config.general.angle_mode)
        .unwrap_or_default();

    // Log level: env → config → default
    let log_level = env("SCICAL_LOG_LEVEL")
        .or_else(|| config.logging.level.clone())
        .and_then(|v| match v.parse::<LevelFilter>() {
            Ok(level) => Some(level),
            Err(_) => {
                notices.warn(format!("Unknown log level '{}', using {}", v, DEFAULT_LOG_LEVEL));
                None
            }
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    // Log file: CLI → config → default
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| config.logging.file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    ResolvedConfig {
        angle_mode,
        log_level,
        log_file,
    }
}

fn parse_angle_mode(value: &str, notices: &mut Notices) -> Option<AngleMode> {
    match value.trim().to_ascii_lowercase().as_str() {
        "deg" | "degrees" => Some(AngleMode::Deg),
        "rad" | "radians" => Some(AngleMode::Rad),
        other => {
            notices.warn(format!("Ignoring unknown angle mode '{}'", other));
            None
        }
    }
}
