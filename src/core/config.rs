//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.parley/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::conversation::DEFAULT_CONTACT_NAME;
use crate::core::panel::{DEFAULT_RECIPIENT_LABEL, DEFAULT_SENDER_LABEL};
use crate::core::tone::{InteractionType, UnknownInteraction};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ParleyConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub relationship: RelationshipConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_interaction: Option<InteractionType>,
    pub panel_open: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ContactConfig {
    pub name: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RelationshipConfig {
    pub recipient_label: Option<String>,
    pub sender_label: Option<String>,
}

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub interaction: InteractionType,
    pub panel_open: bool,
    pub contact_name: String,
    pub recipient_label: String,
    pub sender_label: String,
}

/// Values taken from command-line flags (`None`/`false` = not specified).
#[derive(Debug, Default, Clone, Copy)]
pub struct CliOverrides {
    pub interaction: Option<InteractionType>,
    pub hide_panel: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    InvalidValue {
        source_name: &'static str,
        error: UnknownInteraction,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::InvalidValue { source_name, error } => {
                write!(f, "invalid value in {source_name}: {error}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.parley/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".parley").join("config.toml"))
}

/// Load config from `explicit` or `~/.parley/config.toml`.
///
/// If the default file doesn't exist, generates a commented-out default and
/// returns `ParleyConfig::default()`. An explicit path that doesn't exist is
/// an I/O error. A malformed file returns `ConfigError::Parse`.
pub fn load_config(explicit: Option<&Path>) -> Result<ParleyConfig, ConfigError> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(ParleyConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(ParleyConfig::default());
    }

    read_config(&path)
}

fn read_config(path: &Path) -> Result<ParleyConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<ParleyConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Parley Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_interaction = "low-stakes-formal"   # or low-stakes-informal, high-stakes-formal, high-stakes-informal
# panel_open = true

# [contact]
# name = "Jordan Davis"                       # Or set PARLEY_CONTACT_NAME env var

# [relationship]
# recipient_label = "Colleague"
# sender_label = "You"
"#;

    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &ParleyConfig, cli: CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`] with an injectable env lookup.
///
/// An unparseable `PARLEY_INTERACTION` is logged and ignored.
pub fn resolve_with_env(
    config: &ParleyConfig,
    cli: CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let env_interaction = env("PARLEY_INTERACTION").and_then(|raw| {
        raw.parse::<InteractionType>()
            .map_err(|error| {
                let err = ConfigError::InvalidValue {
                    source_name: "PARLEY_INTERACTION",
                    error,
                };
                warn!("{}", err);
            })
            .ok()
    });

    // Interaction: CLI → env → config → default
    let interaction = cli
        .interaction
        .or(env_interaction)
        .or(config.general.default_interaction)
        .unwrap_or_default();

    // Panel: --hide-panel wins, otherwise config, otherwise open
    let panel_open = !cli.hide_panel && config.general.panel_open.unwrap_or(true);

    // Contact name: env → config → default
    let contact_name = env("PARLEY_CONTACT_NAME")
        .filter(|s| !s.trim().is_empty())
        .or_else(|| config.contact.name.clone())
        .unwrap_or_else(|| DEFAULT_CONTACT_NAME.to_string());

    ResolvedConfig {
        interaction,
        panel_open,
        contact_name,
        recipient_label: non_blank(config.relationship.recipient_label.as_deref())
            .unwrap_or(DEFAULT_RECIPIENT_LABEL)
            .to_string(),
        sender_label: non_blank(config.relationship.sender_label.as_deref())
            .unwrap_or(DEFAULT_SENDER_LABEL)
            .to_string(),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        resolve_with_env(&ParleyConfig::default(), CliOverrides::default(), |_| None)
    }
}
