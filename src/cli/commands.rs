use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use crate::generator::{
    format_generated, generate_from_config, init_project, CategoricalRegistry, GenerateOptions,
};
use crate::schema::DEFAULT_CONFIG_FILE;
use crate::settings::load_settings_for;

/// Command-line interface for voldelig
///
/// Generates Rust types for Maconomy containers declared in
/// `appsettings.json`.
#[derive(Parser)]
#[command(name = "voldelig")]
#[command(about = "Voldelig CLI tool", version, long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new Voldelig project
    ///
    /// Writes a starter appsettings.json and voldelig.toml. Existing files are
    /// kept unless --force is given.
    Init {
        /// Directory to initialize
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,

        /// Overwrite existing files
        #[arg(short, long, default_value_t = false)]
        force: bool,
    },
    /// Generate one Rust type per container declared in the configuration
    Generate {
        /// Path to the configuration document (JSON or YAML)
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,

        /// Output directory (default: settings `output_dir`, else "Generated")
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Path to voldelig.toml; auto-detected next to the configuration if omitted
        #[arg(long)]
        settings: Option<PathBuf>,

        /// Overwrite existing files
        #[arg(short, long, default_value_t = false)]
        force: bool,

        /// Show what would be written without writing files
        #[arg(long, default_value_t = false)]
        dry_run: bool,

        /// Run rustfmt over the generated files
        #[arg(long, default_value_t = false)]
        fmt: bool,
    },
}

/// Execute the parsed CLI command
///
/// # Errors
///
/// Returns an error if:
/// - The configuration or settings cannot be loaded or parsed
/// - Generated files cannot be written
/// - rustfmt fails when formatting was requested
pub fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Commands::Init { dir, force } => {
            init_project(&dir, force)?;
            Ok(())
        }
        Commands::Generate {
            config,
            output,
            settings,
            force,
            dry_run,
            fmt,
        } => {
            let settings = load_settings_for(settings.as_deref(), &config)?;
            let output_dir = output.unwrap_or_else(|| settings.output_dir_or_default());
            let options = GenerateOptions {
                output_dir,
                force,
                dry_run,
                registry: CategoricalRegistry::builtin().with_extra(settings.categorical),
            };
            let report = generate_from_config(&config, &options)?;
            if (fmt || settings.format) && !dry_run {
                format_generated(&report.written)?;
            }
            if !report.skipped_containers.is_empty() {
                info!(
                    "Skipped {} incomplete container(s): {}",
                    report.skipped_containers.len(),
                    report.skipped_containers.join(", ")
                );
            }
            Ok(())
        }
    }
}

/// Parse arguments from the process and run
///
/// # Errors
///
/// See [`run`].
pub fn run_cli() -> anyhow::Result<()> {
    run(Cli::parse())
}
