use askama::Template;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use super::categorical::EnumDefinition;
use super::emitter::{ContainerModel, GeneratedUnit, MemberDef};

/// Extension of generated source files.
pub const GENERATED_EXTENSION: &str = "rs";

/// Template data for one generated container file
#[derive(Template)]
#[template(path = "container.rs.txt", escape = "none")]
pub struct ContainerTemplateData {
    /// Container name as configured, for the header comment
    pub container_name: String,
    /// Struct name
    pub type_name: String,
    /// Key field name as a Rust string literal
    pub key_literal: String,
    /// Struct members in emission order
    pub members: Vec<MemberDef>,
    /// Request document field names as Rust string literals
    pub fields: Vec<String>,
    /// Enum definitions to append
    pub enums: Vec<EnumDefinition>,
}

impl ContainerTemplateData {
    #[must_use]
    pub fn from_model(model: &ContainerModel) -> Self {
        ContainerTemplateData {
            container_name: model.container_name.clone(),
            type_name: model.type_name.clone(),
            key_literal: format!("{:?}", model.key_field),
            members: model.members.clone(),
            fields: model
                .document_fields
                .iter()
                .map(|f| format!("{f:?}"))
                .collect(),
            enums: model.enums.clone(),
        }
    }
}

/// Template data for generating mod.rs module declarations
#[derive(Template)]
#[template(path = "mod.rs.txt", escape = "none")]
pub struct ModRsTemplateData {
    /// Module names to declare
    pub modules: Vec<String>,
}

/// Starter `appsettings.json` written by `voldelig init`
#[derive(Template)]
#[template(path = "appsettings.json.txt", escape = "none")]
pub struct AppSettingsTemplate;

/// Starter `voldelig.toml` written by `voldelig init`
#[derive(Template)]
#[template(path = "voldelig.toml.txt", escape = "none")]
pub struct SettingsTomlTemplate {
    pub output_dir: String,
}

/// Path a unit is written to inside `dir`.
#[must_use]
pub fn unit_path(dir: &Path, unit: &GeneratedUnit) -> PathBuf {
    dir.join(format!("{}.{GENERATED_EXTENSION}", unit.file_base_name))
}

/// Write one generated unit into `dir`
///
/// Returns `Ok(None)` when the file exists and `force` is not set.
///
/// # Errors
///
/// Returns an error if file writing fails
pub fn write_unit(dir: &Path, unit: &GeneratedUnit, force: bool) -> anyhow::Result<Option<PathBuf>> {
    let path = unit_path(dir, unit);
    if path.exists() && !force {
        info!("⚠️  Skipping existing file: {path:?}");
        return Ok(None);
    }
    fs::write(&path, &unit.text)?;
    info!("✅ Generated {path:?}");
    Ok(Some(path))
}

/// Write a mod.rs declaring every generated module
///
/// # Errors
///
/// Returns an error if template rendering or file writing fails
pub fn write_mod_rs(dir: &Path, modules: &[String]) -> anyhow::Result<PathBuf> {
    let path = dir.join("mod.rs");
    let rendered = render_mod_rs(modules)?;
    fs::write(&path, rendered)?;
    info!("✅ Updated mod.rs → {path:?}");
    Ok(path)
}

pub(crate) fn render_mod_rs(modules: &[String]) -> anyhow::Result<String> {
    Ok(ModRsTemplateData {
        modules: modules.to_vec(),
    }
    .render()?)
}
