//! # Generator Module
//!
//! Turns container schemas into Rust source. Each container becomes one file
//! holding a struct, two request-document builders and any enums its
//! categorical fields need.
//!
//! ## Architecture
//!
//! ```text
//! appsettings.json → schema::load_schemas → emitter::build_model → askama → <TypeName>.rs
//! ```
//!
//! 1. **Schema loading** - [`crate::schema`] yields complete containers and
//!    the names of skipped ones
//! 2. **Model building** - [`build_model`] names members, infers types and
//!    collects enum definitions
//! 3. **Template rendering** - `templates/container.rs.txt`
//! 4. **Writing** - [`generate_from_config`] writes one file per container and
//!    a `mod.rs`
//!
//! ## Generated Code
//!
//! For `keyfield = "empnr"` and `fields = ["empnr", "name", "gender"]`:
//!
//! ```rust,ignore
//! #[allow(non_snake_case)]
//! #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
//! pub struct Employee {
//!     /// Key field.
//!     #[serde(rename = "empnr")]
//!     pub Empnr: String,
//!     #[serde(rename = "name")]
//!     pub Name: String,
//!     #[serde(rename = "gender")]
//!     pub Gender: GenderType,
//!     #[serde(rename = "createddate")]
//!     pub CreatedDate: chrono::DateTime<chrono::Utc>,
//! }
//!
//! impl Employee {
//!     pub const KEY_FIELD: &'static str = "empnr";
//!     pub fn instances_document() -> serde_json::Value { /* ... */ }
//!     pub fn filter_document(restriction: &str, limit: i32) -> serde_json::Value { /* ... */ }
//! }
//!
//! pub enum GenderType { GenderNotHere, Male, Female, Nil }
//! ```
//!
//! Generated code depends on `serde`, `serde_json` and `chrono` (with its
//! `serde` feature) in the consuming crate.
//!
//! ## Type Inference
//!
//! - The key field is always `String`
//! - Fields registered in the [`CategoricalRegistry`] get the registry's enum
//!   type (`country` → `CountryType`, `gender` → `GenderType`)
//! - Everything else is `String`
//! - `CreatedDate` is appended to every struct

mod categorical;
mod documents;
mod emitter;
mod project;
mod templates;

pub use categorical::*;
pub use documents::*;
pub use emitter::*;
pub use project::*;
pub use templates::*;
