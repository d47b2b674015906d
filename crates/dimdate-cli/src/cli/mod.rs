use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{ColorMode, GlobalFlags, OutputFormat, ProgressMode};
pub use root_commands::Commands;

/// Top-level CLI parser for the `dimdate` binary.
#[derive(Debug, Parser)]
#[command(name = "dimdate", version, about = "Dimdate - date-dimension table generator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: table, csv, json
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Table colouring
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,

    /// Progress spinners
    #[arg(long, global = true, default_value = "auto")]
    pub progress: ProgressMode,

    /// Configuration file layered over dimdate.toml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            color: self.color,
            progress: self.progress,
            config: self.config.clone(),
        }
    }
}
