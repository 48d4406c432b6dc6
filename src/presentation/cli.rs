//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - There are no subcommands: every run is the interactive workflow
//! - `--config` replaces the `one-start.toml` lookup in the working directory

use std::path::PathBuf;

use clap::Parser;

use crate::config::CONFIG_FILE_NAME;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// one-start - pick a host, stage and mode, then start, build, upload or extract
#[derive(Parser, Debug)]
#[command(name = "one-start")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Reads one-start.toml from the current directory.")]
pub struct Cli {
    /// Path to the config file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Config path: `--config` if given, else `one-start.toml` under `cwd`
    pub fn config_path(&self, cwd: &std::path::Path) -> PathBuf {
        match &self.config {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => cwd.join(path),
            None => cwd.join(CONFIG_FILE_NAME),
        }
    }
}
