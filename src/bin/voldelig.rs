use voldelig::cli::run_cli;
use voldelig::logging::{init_logging_with_config, LogConfig};

fn main() {
    if let Err(err) = init_logging_with_config(&LogConfig::from_env()) {
        eprintln!("warning: {err:#}");
    }
    if let Err(err) = run_cli() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
