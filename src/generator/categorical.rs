//! Reserved field names that are typed as closed enumerations.
//!
//! A field whose name matches an entry exactly is emitted with the entry's
//! enum type instead of `String`, and the enum definition is appended to the
//! generated file. The built-in table covers `country` and `gender`; more
//! entries come from `[[categorical]]` tables in `voldelig.toml`.

use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::naming::{to_pascal_case, to_screaming_snake_case};
use crate::schema::ContainerSchema;

/// A reserved field name mapped to an enum type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoricalField {
    /// Exact, case-sensitive field name that triggers the mapping
    #[serde(rename = "field")]
    pub field_name: String,
    /// Name of the generated enum type (e.g. `GenderType`)
    pub type_name: String,
    /// Wire values in declaration order; the first is the not-present sentinel
    pub variants: Vec<String>,
}

/// One variant of a generated enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumVariant {
    /// Rust identifier (`CountryNotHere`)
    pub ident: String,
    /// Value as sent by the store (`COUNTRY_NOT_HERE`)
    pub wire: String,
}

/// Render-ready enum definition derived from a [`CategoricalField`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumDefinition {
    pub name: String,
    pub variants: Vec<EnumVariant>,
    /// `true` when every wire value equals the `SCREAMING_SNAKE_CASE` form of
    /// its identifier, so a single `rename_all` covers the enum
    pub screaming_snake: bool,
}

impl EnumVariant {
    /// Wire value as a Rust string literal.
    #[must_use]
    pub fn wire_literal(&self) -> String {
        format!("{:?}", self.wire)
    }
}

impl CategoricalField {
    #[must_use]
    pub fn new(
        field_name: impl Into<String>,
        type_name: impl Into<String>,
        variants: &[&str],
    ) -> Self {
        CategoricalField {
            field_name: field_name.into(),
            type_name: type_name.into(),
            variants: variants.iter().map(|v| (*v).to_string()).collect(),
        }
    }

    /// Build the enum definition for this field.
    #[must_use]
    pub fn enum_definition(&self) -> EnumDefinition {
        let variants: Vec<EnumVariant> = self
            .variants
            .iter()
            .map(|wire| EnumVariant {
                ident: to_pascal_case(&wire.to_lowercase()),
                wire: wire.clone(),
            })
            .collect();
        let screaming_snake = variants
            .iter()
            .all(|v| to_screaming_snake_case(&v.ident) == v.wire);
        EnumDefinition {
            name: to_pascal_case(&self.type_name),
            variants,
            screaming_snake,
        }
    }

    /// Check that this entry renders to a well-formed enum.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry has no variants, if the type name or a
    /// variant does not normalize to a usable identifier, or if two variants
    /// normalize to the same identifier.
    pub fn validate(&self) -> anyhow::Result<()> {
        let definition = self.enum_definition();
        if let Err(reason) = check_identifier(&definition.name) {
            bail!(
                "categorical field '{}': type name {:?} {reason}",
                self.field_name,
                self.type_name
            );
        }
        if definition.variants.is_empty() {
            bail!("categorical field '{}' declares no variants", self.field_name);
        }
        let mut seen: HashMap<&str, &str> = HashMap::new();
        for variant in &definition.variants {
            if let Err(reason) = check_identifier(&variant.ident) {
                bail!(
                    "categorical field '{}': variant {:?} {reason}",
                    self.field_name,
                    variant.wire
                );
            }
            if let Some(previous) = seen.insert(&variant.ident, &variant.wire) {
                bail!(
                    "categorical field '{}': variants {:?} and {:?} both map to `{}`",
                    self.field_name,
                    previous,
                    variant.wire,
                    variant.ident
                );
            }
        }
        Ok(())
    }
}

/// PascalCase output of [`to_pascal_case`] is an identifier unless it is
/// empty, starts with a digit or is the one capitalized keyword.
fn check_identifier(ident: &str) -> Result<(), &'static str> {
    match ident.chars().next() {
        None => Err("has no alphanumeric characters"),
        Some(first) if first.is_ascii_digit() => Err("starts with a digit"),
        _ if ident == "Self" => Err("is the reserved word `Self`"),
        _ => Ok(()),
    }
}

/// Ordered table of categorical fields.
///
/// Order matters: enum definitions are emitted in registry order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoricalRegistry {
    entries: Vec<CategoricalField>,
}

impl Default for CategoricalRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CategoricalRegistry {
    /// The built-in table: `country` then `gender`.
    #[must_use]
    pub fn builtin() -> Self {
        CategoricalRegistry {
            entries: vec![
                CategoricalField::new(
                    "country",
                    "CountryType",
                    &["COUNTRY_NOT_HERE", "DENMARK", "UK", "SWEDEN", "NORWAY", "FINLAND"],
                ),
                CategoricalField::new(
                    "gender",
                    "GenderType",
                    &["GENDER_NOT_HERE", "MALE", "FEMALE", "NIL"],
                ),
            ],
        }
    }

    /// A registry with no entries; every field is plain text.
    #[must_use]
    pub fn empty() -> Self {
        CategoricalRegistry {
            entries: Vec::new(),
        }
    }

    /// Add entries after the existing ones. An entry for a field name that is
    /// already registered replaces it in place.
    #[must_use]
    pub fn with_extra(mut self, extra: impl IntoIterator<Item = CategoricalField>) -> Self {
        for field in extra {
            match self
                .entries
                .iter_mut()
                .find(|e| e.field_name == field.field_name)
            {
                Some(existing) => *existing = field,
                None => self.entries.push(field),
            }
        }
        self
    }

    /// Exact, case-sensitive lookup.
    #[must_use]
    pub fn lookup(&self, field_name: &str) -> Option<&CategoricalField> {
        self.entries.iter().find(|e| e.field_name == field_name)
    }

    /// Entries whose field appears in `schema.fields`, in registry order.
    #[must_use]
    pub fn present_in<'a>(&'a self, schema: &ContainerSchema) -> Vec<&'a CategoricalField> {
        self.entries
            .iter()
            .filter(|e| schema.has_field(&e.field_name))
            .collect()
    }

    #[must_use]
    pub fn entries(&self) -> &[CategoricalField] {
        &self.entries
    }

    /// Validate every entry and check that no two entries share an enum name.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, see [`CategoricalField::validate`].
    pub fn validate(&self) -> anyhow::Result<()> {
        let mut seen: HashMap<String, &str> = HashMap::new();
        for entry in &self.entries {
            entry.validate()?;
            let name = to_pascal_case(&entry.type_name);
            if let Some(previous) = seen.insert(name.clone(), &entry.field_name) {
                bail!(
                    "categorical fields '{previous}' and '{}' both generate enum `{name}`",
                    entry.field_name
                );
            }
        }
        Ok(())
    }
}
