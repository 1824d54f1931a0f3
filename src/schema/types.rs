use serde::Deserialize;

/// One container (record type) read from the configuration document.
///
/// `fields` may or may not repeat `key_field`; the generator always emits the
/// key exactly once, first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerSchema {
    /// Container name as written in the configuration (e.g. `employee`)
    pub name: String,
    /// Raw name of the key field (e.g. `employeenumber`)
    pub key_field: String,
    /// Raw field names in configuration order
    pub fields: Vec<String>,
}

impl ContainerSchema {
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        key_field: impl Into<String>,
        fields: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        ContainerSchema {
            name: name.into(),
            key_field: key_field.into(),
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Fields other than the key, in configuration order.
    #[must_use]
    pub fn non_key_fields(&self) -> impl Iterator<Item = &str> {
        self.fields
            .iter()
            .map(String::as_str)
            .filter(move |f| *f != self.key_field)
    }

    /// Whether `field` appears verbatim in the field list.
    #[must_use]
    pub fn has_field(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f == field)
    }
}

/// Result of reading a configuration document.
#[derive(Debug, Clone, Default)]
pub struct SchemaSet {
    /// Containers with a complete `card` declaration, ordered by name
    pub containers: Vec<ContainerSchema>,
    /// Names of containers that were skipped for lacking `keyfield` or `fields`
    pub skipped: Vec<String>,
}

/// The `card` block of a container entry.
///
/// Both members are optional so an incomplete entry deserializes and can be
/// reported as skipped instead of failing the whole document.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct CardSection {
    #[serde(default)]
    pub keyfield: Option<String>,
    #[serde(default)]
    pub fields: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ContainerEntry {
    #[serde(default)]
    pub card: Option<CardSection>,
}
