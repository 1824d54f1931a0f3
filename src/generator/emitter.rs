use askama::Template;
use tracing::debug;

use super::categorical::{CategoricalRegistry, EnumDefinition};
use super::documents::{ordered_field_list, CREATED_DATE_FIELD};
use super::templates::ContainerTemplateData;
use crate::naming::to_pascal_case;
use crate::schema::ContainerSchema;

/// Rust type of plain members and of the key.
pub const TEXT_TYPE: &str = "String";
/// Rust type of the fixed `CreatedDate` member.
pub const TIMESTAMP_TYPE: &str = "chrono::DateTime<chrono::Utc>";

/// How a single schema field is typed in the generated struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldClassification {
    /// The container's key; always text
    KeyField,
    /// A registered categorical field, typed as the named enum
    Categorical { type_name: String },
    /// Anything else
    PlainText,
}

impl FieldClassification {
    #[must_use]
    pub fn rust_type(&self) -> String {
        match self {
            FieldClassification::KeyField | FieldClassification::PlainText => {
                TEXT_TYPE.to_string()
            }
            FieldClassification::Categorical { type_name } => to_pascal_case(type_name),
        }
    }
}

/// Classify `field` for `schema` against `registry`.
#[must_use]
pub fn classify_field(
    schema: &ContainerSchema,
    field: &str,
    registry: &CategoricalRegistry,
) -> FieldClassification {
    if field == schema.key_field {
        return FieldClassification::KeyField;
    }
    match registry.lookup(field) {
        Some(entry) => FieldClassification::Categorical {
            type_name: entry.type_name.clone(),
        },
        None => FieldClassification::PlainText,
    }
}

/// A member of the generated struct
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDef {
    /// Canonical member name (`Empnr`)
    pub name: String,
    /// Raw field name used on the wire (`empnr`)
    pub wire: String,
    /// Rust type
    pub ty: String,
    pub is_key: bool,
}

impl MemberDef {
    /// Wire name as a Rust string literal.
    #[must_use]
    pub fn wire_literal(&self) -> String {
        format!("{:?}", self.wire)
    }
}

/// Everything the container template needs, computed from one schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerModel {
    pub container_name: String,
    pub type_name: String,
    pub key_field: String,
    pub members: Vec<MemberDef>,
    /// Raw names for both request documents, see [`ordered_field_list`]
    pub document_fields: Vec<String>,
    pub enums: Vec<EnumDefinition>,
}

/// Generated source for one container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedUnit {
    /// Canonical container name; the writer appends the extension
    pub file_base_name: String,
    pub type_name: String,
    pub text: String,
}

/// Build the render model for `schema`.
///
/// Member order is the key, the remaining fields in schema order (a repeat
/// of the key is dropped), then `CreatedDate`. Enum definitions follow
/// registry order.
#[must_use]
pub fn build_model(schema: &ContainerSchema, registry: &CategoricalRegistry) -> ContainerModel {
    // Decided up front so enum emission never depends on field order.
    let enums: Vec<EnumDefinition> = registry
        .present_in(schema)
        .into_iter()
        .map(|entry| entry.enum_definition())
        .collect();

    let mut members = Vec::with_capacity(schema.fields.len() + 2);
    members.push(MemberDef {
        name: to_pascal_case(&schema.key_field),
        wire: schema.key_field.clone(),
        ty: FieldClassification::KeyField.rust_type(),
        is_key: true,
    });
    for field in schema.non_key_fields() {
        members.push(MemberDef {
            name: to_pascal_case(field),
            wire: field.to_string(),
            ty: classify_field(schema, field, registry).rust_type(),
            is_key: false,
        });
    }
    members.push(MemberDef {
        name: "CreatedDate".to_string(),
        wire: CREATED_DATE_FIELD.to_string(),
        ty: TIMESTAMP_TYPE.to_string(),
        is_key: false,
    });

    ContainerModel {
        container_name: schema.name.clone(),
        type_name: to_pascal_case(&schema.name),
        key_field: schema.key_field.clone(),
        members,
        document_fields: ordered_field_list(schema)
            .into_iter()
            .map(str::to_string)
            .collect(),
        enums,
    }
}

/// Generate the Rust source for one container.
///
/// # Errors
///
/// Returns an error only if template rendering fails.
pub fn emit(
    schema: &ContainerSchema,
    registry: &CategoricalRegistry,
) -> anyhow::Result<GeneratedUnit> {
    let model = build_model(schema, registry);
    debug!(
        container = %model.container_name,
        type_name = %model.type_name,
        members = model.members.len(),
        enums = model.enums.len(),
        "emitting container"
    );
    let mut text = ContainerTemplateData::from_model(&model).render()?;
    // Exactly one trailing newline.
    text.truncate(text.trim_end().len());
    text.push('\n');
    Ok(GeneratedUnit {
        file_base_name: model.type_name.clone(),
        type_name: model.type_name,
        text,
    })
}

/// [`emit`] with the built-in categorical fields.
///
/// # Errors
///
/// Returns an error only if template rendering fails.
pub fn emit_container(schema: &ContainerSchema) -> anyhow::Result<GeneratedUnit> {
    emit(schema, &CategoricalRegistry::builtin())
}
