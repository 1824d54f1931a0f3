//! # Schema Module
//!
//! Reads the container declarations the generator works from. The input is
//! the `Maconomy` section of an `appsettings.json` (or YAML) file:
//!
//! ```json
//! {
//!   "Maconomy": {
//!     "containers": {
//!       "employee": {
//!         "card": {
//!           "keyfield": "employeenumber",
//!           "fields": ["employeenumber", "name1", "gender", "country"]
//!         }
//!       }
//!     }
//!   }
//! }
//! ```
//!
//! Containers without a complete `card` block are skipped and reported in
//! [`SchemaSet::skipped`].

mod load;
mod types;

pub use load::*;
pub use types::{ContainerSchema, SchemaSet};
