//! Command-line interface for Technicolor.
//!
//! Provides argument parsing for the `tc` markup filter.

use clap::Parser;
use std::path::PathBuf;

/// Technicolor - inline color markup for terminal text.
///
/// Filters text through the `/target/paths/` markup language, replacing
/// each directive with ANSI-styled output.
#[derive(Parser, Debug)]
#[command(
    name = "tc",
    author = "Technicolor Contributors",
    version,
    about = "Inline color markup for terminal text",
    after_help = "Repository: https://github.com/fed-stew/technicolor-rs\n\n\
                  Examples:\n  \
                  echo 'a /x/FG.RED/ b' | tc\n  \
                  tc notes.txt\n  \
                  tc -m dark -c palette.toml notes.txt\n  \
                  tc --demo"
)]
pub struct Cli {
    /// Input files to process (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn")]
    pub log_level: String,

    /// Override the palette mode (light or dark)
    #[arg(short = 'm', long = "mode")]
    pub mode: Option<String>,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config")]
    pub config: Option<String>,

    /// Set the output width (0 = auto-detect from terminal)
    #[arg(short = 'w', long = "width", default_value = "0")]
    pub width: u16,

    /// Emit plain text, with resolved markup stripped of styling
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Show the palette and attribute table and exit
    #[arg(long = "demo")]
    pub demo: bool,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,
}

impl Cli {
    /// Get the effective width (0 means auto-detect).
    pub fn effective_width(&self) -> usize {
        if self.width == 0 {
            // Auto-detect from terminal
            crossterm::terminal::size()
                .map(|(cols, _)| cols as usize)
                .unwrap_or(80)
        } else {
            self.width as usize
        }
    }

    /// Check if we should read from stdin.
    pub fn should_read_stdin(&self) -> bool {
        self.files.is_empty() && !self.demo
    }
}

/// Show paths information.
pub fn show_paths() {
    use technicolor_config::Config;

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
}
