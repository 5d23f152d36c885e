//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.navbar/config.toml` unless `--config` points
//! elsewhere. If the default file is missing on first run, a commented-out
//! template is generated so users can discover all options.
//!
//! The menu is configuration too: `[[menu]]` entries replace the built-in
//! catalog and go through the same duplicate-route validation.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::menu::{ConfigurationError, MenuCatalog, MenuEntry};
use crate::core::route::Route;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NavbarConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
    /// `None` = use the built-in catalog. `Some(vec![])` = an empty bar.
    #[serde(default)]
    pub menu: Option<Vec<MenuEntry>>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub start_route: Option<Route>,
    pub animation_ms: Option<u64>,
}

/// Bar colors as written in the file (`"#1e1e2e"`, `"cyan"`, ...).
/// Parsed into terminal colors by the TUI theme.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct ThemeConfig {
    pub container: Option<String>,
    pub selected: Option<String>,
    pub unselected: Option<String>,
    pub corner_radius: Option<u16>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_ANIMATION_MS: u64 = 250;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub start_route: Route,
    pub animation: Duration,
    pub theme: ThemeConfig,
    pub catalog: MenuCatalog,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Catalog(ConfigurationError),
    InvalidColor { field: &'static str, value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Catalog(e) => write!(f, "invalid menu: {e}"),
            ConfigError::InvalidColor { field, value } => {
                write!(f, "invalid color for theme.{field}: '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Catalog(e) => Some(e),
            ConfigError::InvalidColor { .. } => None,
        }
    }
}

impl From<ConfigurationError> for ConfigError {
    fn from(e: ConfigurationError) -> Self {
        ConfigError::Catalog(e)
    }
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.navbar/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".navbar").join("config.toml"))
}

/// Load config from an explicit path, or from `~/.navbar/config.toml`.
///
/// An explicit path must exist. The default path is optional: if missing,
/// a commented-out template is generated and `NavbarConfig::default()` is
/// returned.
pub fn load_config(explicit: Option<&Path>) -> Result<NavbarConfig, ConfigError> {
    if let Some(path) = explicit {
        return read_config(path);
    }

    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(NavbarConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(NavbarConfig::default());
    }

    read_config(&path)
}

fn read_config(path: &Path) -> Result<NavbarConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<NavbarConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Written on first run. Every line is commented out, so it parses to defaults.
const DEFAULT_CONFIG_TEMPLATE: &str = r##"# Navbar Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_route = "home"          # "splash", "home", "application", "my-page"
# animation_ms = 250            # Color transition length; 0 = instant

# [theme]
# container = "#1e1e2e"         # Bar background
# selected = "#89b4fa"          # Selected item icon + title
# unselected = "#a6adc8"        # Other items
# corner_radius = 1             # 0 = square top corners

# Replaces the built-in menu. Routes must be unique.
# [[menu]]
# route = "home"
# icon = "home"
# selected_icon = "home-fill"
# title = "Home"

# [[menu]]
# route = "my-page"
# icon = "person"
# selected_icon = "person-fill"
# title = "My Page"
"##;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_TEMPLATE) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config: defaults → config file → env vars → CLI.
///
/// Fails only if the configured menu violates the catalog invariants.
pub fn resolve(config: &NavbarConfig, cli_start: Option<Route>) -> Result<ResolvedConfig, ConfigError> {
    resolve_with_env(config, cli_start, |key| std::env::var(key).ok())
}

/// `resolve` with an injectable environment lookup.
pub fn resolve_with_env(
    config: &NavbarConfig,
    cli_start: Option<Route>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<ResolvedConfig, ConfigError> {
    // Start route: CLI → env → config → default
    let start_route = cli_start
        .or_else(|| {
            env("NAVBAR_START_ROUTE").and_then(|value| {
                let route = Route::from_key(&value);
                if route.is_none() {
                    warn!("Ignoring unknown NAVBAR_START_ROUTE '{value}'");
                }
                route
            })
        })
        .or(config.general.start_route)
        .unwrap_or_default();

    // Animation: env → config → default
    let animation_ms = env("NAVBAR_ANIMATION_MS")
        .and_then(|value| match value.trim().parse::<u64>() {
            Ok(ms) => Some(ms),
            Err(e) => {
                warn!("Ignoring NAVBAR_ANIMATION_MS '{value}': {e}");
                None
            }
        })
        .or(config.general.animation_ms)
        .unwrap_or(DEFAULT_ANIMATION_MS);

    let catalog = match &config.menu {
        Some(entries) => MenuCatalog::new(entries.clone())?,
        None => MenuCatalog::default(),
    };

    Ok(ResolvedConfig {
        start_route,
        animation: Duration::from_millis(animation_ms),
        theme: config.theme.clone(),
        catalog,
    })
}
