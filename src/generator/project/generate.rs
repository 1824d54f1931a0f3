use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::info;

use crate::generator::categorical::CategoricalRegistry;
use crate::generator::emitter::{emit, GeneratedUnit};
use crate::generator::templates::{render_mod_rs, unit_path, write_mod_rs, write_unit};
use crate::schema::{load_schemas, ContainerSchema};

/// Options for a generation run
///
/// The output directory is always explicit; nothing is derived from the
/// process working directory beyond what relative paths already imply.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Directory generated files are written to (created if missing)
    pub output_dir: PathBuf,
    /// Overwrite files that already exist
    pub force: bool,
    /// Render everything but write nothing
    pub dry_run: bool,
    /// Categorical fields used for type inference
    pub registry: CategoricalRegistry,
}

impl GenerateOptions {
    #[must_use]
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        GenerateOptions {
            output_dir: output_dir.into(),
            force: false,
            dry_run: false,
            registry: CategoricalRegistry::builtin(),
        }
    }
}

/// What a generation run did
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub output_dir: PathBuf,
    /// Units rendered, in container name order
    pub units: Vec<GeneratedUnit>,
    /// Files written (empty on a dry run)
    pub written: Vec<PathBuf>,
    /// Files left alone because they already existed
    pub skipped_existing: Vec<PathBuf>,
    /// Containers skipped for lacking `keyfield` or `fields`
    pub skipped_containers: Vec<String>,
}

/// Render every container without touching the filesystem.
///
/// # Errors
///
/// Returns an error if template rendering fails or two containers normalize
/// to the same type name.
pub fn generate_units(
    containers: &[ContainerSchema],
    registry: &CategoricalRegistry,
) -> anyhow::Result<Vec<GeneratedUnit>> {
    let mut owners: HashMap<String, &str> = HashMap::new();
    let mut units = Vec::with_capacity(containers.len());
    for schema in containers {
        let unit = emit(schema, registry)
            .with_context(|| format!("Failed to generate container '{}'", schema.name))?;
        if let Some(previous) = owners.insert(unit.file_base_name.clone(), &schema.name) {
            anyhow::bail!(
                "containers '{previous}' and '{}' both generate `{}`",
                schema.name,
                unit.file_base_name
            );
        }
        units.push(unit);
    }
    Ok(units)
}

/// Generate one source file per container declared in `config_path`
///
/// Writes `<output_dir>/<TypeName>.rs` for every complete container and a
/// `mod.rs` declaring them. Incomplete containers are skipped with a warning
/// and listed in the report.
///
/// # Errors
///
/// Returns an error if the registry is invalid, the configuration cannot be
/// loaded, two containers share a type name, the output directory cannot be
/// created, or a file cannot be written. Nothing is written in the first
/// three cases.
pub fn generate_from_config(
    config_path: &Path,
    options: &GenerateOptions,
) -> anyhow::Result<GenerationReport> {
    info!("📦 Generating containers from {config_path:?}");
    options.registry.validate()?;
    let schemas = load_schemas(config_path)?;

    let units = generate_units(&schemas.containers, &options.registry)?;
    let mut report = GenerationReport {
        output_dir: options.output_dir.clone(),
        skipped_containers: schemas.skipped,
        ..GenerationReport::default()
    };

    let modules: Vec<String> = units.iter().map(|u| u.file_base_name.clone()).collect();

    if options.dry_run {
        for unit in &units {
            info!("🔍 Would write {:?}", unit_path(&options.output_dir, unit));
        }
        // Render mod.rs too so a dry run surfaces the same failures.
        render_mod_rs(&modules)?;
        report.units = units;
        return Ok(report);
    }

    fs::create_dir_all(&options.output_dir).with_context(|| {
        format!(
            "Failed to create output directory {}",
            options.output_dir.display()
        )
    })?;

    for unit in &units {
        match write_unit(&options.output_dir, unit, options.force)? {
            Some(path) => report.written.push(path),
            None => report
                .skipped_existing
                .push(unit_path(&options.output_dir, unit)),
        }
    }
    if !units.is_empty() {
        let mod_path = write_mod_rs(&options.output_dir, &modules)?;
        report.written.push(mod_path);
    }

    info!(
        "✅ Generated {} container(s) into {:?}",
        units.len(),
        options.output_dir
    );
    report.units = units;
    Ok(report)
}
