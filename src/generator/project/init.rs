use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use askama::Template;
use tracing::info;

use crate::generator::templates::{AppSettingsTemplate, SettingsTomlTemplate};
use crate::schema::DEFAULT_CONFIG_FILE;
use crate::settings::{DEFAULT_OUTPUT_DIR, SETTINGS_FILE};

/// Write a starter `appsettings.json` and `voldelig.toml` into `dir`
///
/// Existing files are left alone unless `force` is set. Returns the paths
/// that were written.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or a file cannot be
/// written.
pub fn init_project(dir: &Path, force: bool) -> anyhow::Result<Vec<PathBuf>> {
    info!("Initializing voldelig project in {dir:?}");
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    let starters = [
        (DEFAULT_CONFIG_FILE, AppSettingsTemplate.render()?),
        (
            SETTINGS_FILE,
            SettingsTomlTemplate {
                output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            }
            .render()?,
        ),
    ];

    let mut written = Vec::new();
    for (name, content) in starters {
        let path = dir.join(name);
        if path.exists() && !force {
            info!("ℹ️  {name} already present (use --force to overwrite)");
            continue;
        }
        fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("✅ Wrote {path:?}");
        written.push(path);
    }
    info!("voldelig project initialized");
    Ok(written)
}
