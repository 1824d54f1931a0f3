//! # CLI Module
//!
//! Command-line interface for the `voldelig` binary.
//!
//! ## Commands
//!
//! ### `init`
//!
//! Write a starter `appsettings.json` and `voldelig.toml`:
//!
//! ```bash
//! voldelig init --dir my-project
//! ```
//!
//! ### `generate`
//!
//! Generate one Rust file per container:
//!
//! ```bash
//! voldelig generate --config appsettings.json --output src/maconomy
//! ```
//!
//! Options:
//! - `--config <FILE>` - configuration document (default: `appsettings.json`)
//! - `--output <DIR>` - output directory (default: settings, else `Generated`)
//! - `--settings <FILE>` - `voldelig.toml` (default: next to the configuration)
//! - `--force` - overwrite existing files
//! - `--dry-run` - render without writing
//! - `--fmt` - run rustfmt over written files

mod commands;


pub use commands::{run, run_cli, Cli, Commands};
