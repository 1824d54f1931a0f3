//! The two request documents a generated type knows how to build.
//!
//! Both embed the same field list, built once by [`ordered_field_list`]:
//!
//! ```text
//! instances: { "panes": { "card": { "fields": [key, f1, ..., "createddate"] } } }
//! filter:    { "restriction": expr, "fields": [key, f1, ..., "createddate"], "limit": n }
//! ```
//!
//! The structs serialize members in declaration order, which is the order the
//! store's existing callers expect.

use serde::Serialize;

use crate::schema::ContainerSchema;

/// Field name of the timestamp every generated type carries.
pub const CREATED_DATE_FIELD: &str = "createddate";

/// Raw field names in request order: key, the other fields in schema order
/// with any repeat of the key dropped, then [`CREATED_DATE_FIELD`].
#[must_use]
pub fn ordered_field_list(schema: &ContainerSchema) -> Vec<&str> {
    std::iter::once(schema.key_field.as_str())
        .chain(schema.non_key_fields())
        .chain(std::iter::once(CREATED_DATE_FIELD))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstancesDocument<'a> {
    pub panes: Panes<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Panes<'a> {
    pub card: CardPane<'a>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardPane<'a> {
    pub fields: Vec<&'a str>,
}

/// Filter request. `restriction` and `limit` are passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterDocument<'a> {
    pub restriction: &'a str,
    pub fields: Vec<&'a str>,
    pub limit: i32,
}

#[must_use]
pub fn instances_document(schema: &ContainerSchema) -> InstancesDocument<'_> {
    InstancesDocument {
        panes: Panes {
            card: CardPane {
                fields: ordered_field_list(schema),
            },
        },
    }
}

#[must_use]
pub fn filter_document<'a>(
    schema: &'a ContainerSchema,
    restriction: &'a str,
    limit: i32,
) -> FilterDocument<'a> {
    FilterDocument {
        restriction,
        fields: ordered_field_list(schema),
        limit,
    }
}
