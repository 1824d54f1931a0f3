mod format;
mod generate;
mod init;

pub use format::{format_generated, RUSTFMT_BIN_ENV};
pub use generate::{generate_from_config, generate_units, GenerateOptions, GenerationReport};
pub use init::init_project;
