use super::types::{CardSection, ContainerEntry, ContainerSchema, SchemaSet};
use anyhow::Context;
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::{debug, warn};

/// Default configuration file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "appsettings.json";

/// Load container schemas from an `appsettings` document
///
/// YAML (`.yaml` / `.yml`) and JSON are both accepted; the extension decides.
/// The document must contain `Maconomy.containers`. Each container needs a
/// `card` block with `keyfield` and `fields`; containers without them are
/// listed in [`SchemaSet::skipped`] and logged, never treated as errors.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not valid JSON/YAML, or
/// lacks the `Maconomy.containers` structure.
pub fn load_schemas(path: &Path) -> anyhow::Result<SchemaSet> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            anyhow::anyhow!("{} not found", path.display())
        } else {
            anyhow::Error::new(e).context(format!("Failed to read {}", path.display()))
        }
    })?;
    let is_yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e == "yaml" || e == "yml");
    let document: Value = if is_yaml {
        serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML in {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON in {}", path.display()))?
    };
    parse_schemas(&document)
        .with_context(|| format!("Invalid configuration in {}", path.display()))
}

/// Extract container schemas from an already parsed configuration document.
///
/// # Errors
///
/// Returns an error if `Maconomy.containers` is missing or is not an object.
pub fn parse_schemas(document: &Value) -> anyhow::Result<SchemaSet> {
    let containers = document
        .get("Maconomy")
        .and_then(|m| m.get("containers"))
        .and_then(Value::as_object)
        .ok_or_else(|| {
            anyhow::anyhow!("required structure `Maconomy.containers` not found")
        })?;

    // Name order regardless of serde_json's `preserve_order` feature.
    let sorted: BTreeMap<&String, &Value> = containers.iter().collect();

    let mut set = SchemaSet::default();
    for (name, raw) in sorted {
        match container_from_value(name, raw) {
            Some(schema) => {
                debug!(
                    container = %name,
                    keyfield = %schema.key_field,
                    fields = schema.fields.len(),
                    "loaded container schema"
                );
                set.containers.push(schema);
            }
            None => {
                warn!(container = %name, "skipping container without card keyfield/fields");
                set.skipped.push(name.clone());
            }
        }
    }
    Ok(set)
}

fn container_from_value(name: &str, raw: &Value) -> Option<ContainerSchema> {
    let entry: ContainerEntry = serde_json::from_value(raw.clone()).ok()?;
    let CardSection { keyfield, fields } = entry.card?;
    Some(ContainerSchema {
        name: name.to_string(),
        key_field: keyfield?,
        fields: fields?,
    })
}
