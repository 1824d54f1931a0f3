//! # voldelig
//!
//! **voldelig** generates Rust types for Maconomy containers. Each container
//! declared in `appsettings.json` becomes a `serde` struct plus two builders
//! for the JSON bodies the Maconomy web API expects on its `instances` and
//! `filter` endpoints.
//!
//! ## Overview
//!
//! - **[`naming`]** - identifier normalization (`employee_card` → `EmployeeCard`)
//! - **[`schema`]** - reads container declarations from the configuration
//! - **[`generator`]** - type inference, request documents, rendering and writing
//! - **[`settings`]** - optional `voldelig.toml`
//! - **[`cli`]** - the `voldelig` binary (`init`, `generate`)
//! - **[`logging`]** - `tracing` subscriber setup
//!
//! ## Usage
//!
//! ```rust
//! use voldelig::generator::emit_container;
//! use voldelig::schema::ContainerSchema;
//!
//! let schema = ContainerSchema::new("employee", "empnr", ["empnr", "name", "gender"]);
//! let unit = emit_container(&schema).unwrap();
//! assert_eq!(unit.file_base_name, "Employee");
//! assert!(unit.text.contains("pub Gender: GenderType,"));
//! assert!(unit.text.contains("pub enum GenderType"));
//! ```

pub mod cli;
pub mod generator;
pub mod logging;
pub mod naming;
pub mod schema;
pub mod settings;
