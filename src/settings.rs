//! Generator settings loaded from `voldelig.toml`
//!
//! The settings file is optional and sits next to `appsettings.json`. CLI
//! flags take precedence over the file, and the file over the defaults.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::generator::CategoricalField;

/// File name looked up alongside the configuration document.
pub const SETTINGS_FILE: &str = "voldelig.toml";

/// Output directory used when neither the CLI nor the settings name one.
pub const DEFAULT_OUTPUT_DIR: &str = "Generated";

/// Contents of `voldelig.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Directory generated files are written to
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Run rustfmt over generated files
    #[serde(default)]
    pub format: bool,

    /// Extra fields typed as enums, appended to the built-in table
    #[serde(default)]
    pub categorical: Vec<CategoricalField>,
}

impl Settings {
    /// Output directory from the settings, or [`DEFAULT_OUTPUT_DIR`].
    #[must_use]
    pub fn output_dir_or_default(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
    }
}

/// Parse settings from TOML text.
///
/// # Errors
///
/// Returns an error if the text is not valid settings TOML or a
/// `[[categorical]]` entry would not render to a valid enum.
pub fn parse_settings(contents: &str) -> anyhow::Result<Settings> {
    let settings: Settings =
        toml::from_str(contents).context("Failed to parse generator settings")?;
    for entry in &settings.categorical {
        entry.validate().context("Invalid [[categorical]] entry")?;
    }
    Ok(settings)
}

/// Load settings from a TOML file
///
/// Returns `Ok(None)` if the file doesn't exist (not an error) and `Err` if
/// it exists but fails to parse.
pub fn load_settings(path: &Path) -> anyhow::Result<Option<Settings>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings: {}", path.display()))?;
    let settings = parse_settings(&contents)
        .with_context(|| format!("Invalid settings file: {}", path.display()))?;
    Ok(Some(settings))
}

/// Resolve the settings path
///
/// Priority:
/// 1. Explicitly provided path (via CLI)
/// 2. `voldelig.toml` alongside the configuration document
/// 3. None
#[must_use]
pub fn resolve_settings_path(explicit_path: Option<&Path>, config_path: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return Some(path.to_path_buf());
    }
    let candidate = match config_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(SETTINGS_FILE),
        _ => PathBuf::from(SETTINGS_FILE),
    };
    candidate.exists().then_some(candidate)
}

/// Load the settings that apply to `config_path`, falling back to defaults.
///
/// # Errors
///
/// Returns an error if an explicit path is missing or any found file fails to
/// parse.
pub fn load_settings_for(explicit_path: Option<&Path>, config_path: &Path) -> anyhow::Result<Settings> {
    match resolve_settings_path(explicit_path, config_path) {
        Some(path) => match load_settings(&path)? {
            Some(settings) => Ok(settings),
            None => anyhow::bail!("settings file not found: {}", path.display()),
        },
        None => Ok(Settings::default()),
    }
}
