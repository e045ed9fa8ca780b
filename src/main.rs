//! Technicolor - inline color markup for terminal text.
//!
//! This binary provides the CLI interface to the technicolor library,
//! filtering `/target/paths/` markup from files or stdin into styled
//! terminal output.

mod cli;
mod demo;

use clap::Parser as ClapParser;
use cli::Cli;
use log::{debug, error, info, trace, LevelFilter};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use technicolor_config::{Config, Mode, Registry};
use technicolor_core::Result;
use technicolor_markup::colorize;

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Handle --paths flag
    if cli.show_paths {
        cli::show_paths();
        return;
    }

    // Set up logging
    setup_logging(&cli.log_level);
    info!("Technicolor v{}", env!("CARGO_PKG_VERSION"));

    // Run the main application
    if let Err(e) = run(&cli) {
        error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    // Load and merge configuration
    let config = load_config(cli)?;
    debug!("Loaded config with palette: {:?}", config.palette);

    // One process-wide switch gates every render
    technicolor_core::set_enabled(config.palette.enabled && !cli.no_color);

    let registry = config.registry();

    if cli.demo {
        demo::show(&registry, cli.effective_width())
    } else if cli.should_read_stdin() {
        run_stdin(&registry)
    } else {
        run_files(cli, &registry)
    }
}

/// Load configuration with optional overrides.
fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = Config::load_with_override(cli.config.as_deref())?;
    if let Some(ref config_arg) = cli.config {
        debug!("Merged config override: {}", config_arg);
    }

    // -m beats the config file
    if let Some(ref mode_arg) = cli.mode {
        let mode: Mode = mode_arg.parse()?;
        debug!("Mode override: {}", mode);
        config.palette.mode = mode;
    }

    Ok(config)
}

/// Process input from stdin.
fn run_stdin(registry: &Registry) -> Result<()> {
    info!("Reading from stdin");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Read stdin line by line for streaming
    for line in stdin.lock().lines() {
        let line = line?;
        trace!("Input line: {}", line);

        writeln!(out, "{}", colorize(&line, registry)?)?;
        out.flush()?;
    }

    Ok(())
}

/// Process input files.
fn run_files(cli: &Cli, registry: &Registry) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    for path in &cli.files {
        info!("Processing file: {}", path.display());

        let file = File::open(path)?;
        let reader = BufReader::new(file);

        for line in reader.lines() {
            let line = line?;
            writeln!(out, "{}", colorize(&line, registry)?)?;
        }
        out.flush()?;
    }

    Ok(())
}
