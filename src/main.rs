#![forbid(unsafe_code)]

//! Kex CLI entry point.

use clap::FromArgMatches;
use kex::catalog::{Catalog, LoadError};
use kex::cli::exit_codes::{EXIT_ERROR, EXIT_LOAD_ERROR, EXIT_SUCCESS, EXIT_USAGE};
use kex::cli::{GlobalArgs, Registry};
use kex::config::{self, Settings};
use kex::output::Renderer;
use std::io::{self, IsTerminal};
use std::process::ExitCode;
use tracing_subscriber::{fmt, EnvFilter};

fn init_tracing(directive: &str) {
    let filter = EnvFilter::try_new(directive)
        .unwrap_or_else(|_| EnvFilter::new(config::DEFAULT_LOG_FILTER));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let settings = Settings::from_env();
    init_tracing(&settings.log_filter);

    // Catalog records become subcommands, so the catalog must load before parsing
    let catalog = match Catalog::load(&settings.catalog_path) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Error: {}", e);
            if matches!(e, LoadError::Read { .. }) {
                eprintln!(
                    "hint: set {} to the path of your commands file (default: {})",
                    config::KEX_FILE,
                    config::DEFAULT_CATALOG_FILE
                );
            }
            return ExitCode::from(EXIT_LOAD_ERROR);
        }
    };

    let registry = Registry::new(catalog);
    let matches = registry.command().get_matches();
    let globals = GlobalArgs::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let Some(action) = registry.resolve(&matches) else {
        eprintln!("Error: no command given");
        return ExitCode::from(EXIT_USAGE);
    };

    let renderer = Renderer::new(globals.output, globals.color.for_stdout());
    match renderer.render_to_stdout(action.target()) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("Error: failed to write output: {}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}
