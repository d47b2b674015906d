use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Subcommand, ValueEnum};
use dimdate_config::DimdateConfig;
use dimdate_core::FieldGroup;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Generate the full table and write it to a file.
    Generate(GenerateArgs),
    /// Print the first rows of the table.
    Preview(PreviewArgs),
    /// List the field registry.
    Fields(FieldsArgs),
    /// Print the effective configuration.
    Config,
    /// Print the JSON Schema of the configuration file.
    Schema,
}

/// Range bounds that override `[range]` for one run.
#[derive(Clone, Debug, Default, Args)]
pub struct RangeArgs {
    /// First date, inclusive (YYYY-MM-DD).
    #[arg(long)]
    pub start: Option<NaiveDate>,

    /// Last date, inclusive (YYYY-MM-DD).
    #[arg(long)]
    pub end: Option<NaiveDate>,
}

impl RangeArgs {
    pub fn apply(&self, config: &mut DimdateConfig) {
        if let Some(start) = self.start {
            config.range.start = start;
        }
        if let Some(end) = self.end {
            config.range.end = end;
        }
    }
}

#[derive(Clone, Debug, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub range: RangeArgs,

    /// Output file. Defaults to `output.file_name`; a `.json` extension
    /// writes JSON, anything else CSV.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// CSV field separator.
    #[arg(long)]
    pub separator: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub range: RangeArgs,

    /// Number of rows. Defaults to `output.preview_rows`.
    #[arg(short, long)]
    pub rows: Option<usize>,
}

#[derive(Clone, Debug, Args)]
pub struct FieldsArgs {
    /// Only list fields of this group.
    #[arg(short, long)]
    pub group: Option<GroupArg>,

    /// Only list active fields.
    #[arg(long)]
    pub active: bool,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum GroupArg {
    Basic,
    Calendar,
    Fiscal,
    Flags,
}

impl From<GroupArg> for FieldGroup {
    fn from(value: GroupArg) -> Self {
        match value {
            GroupArg::Basic => Self::Basic,
            GroupArg::Calendar => Self::Calendar,
            GroupArg::Fiscal => Self::Fiscal,
            GroupArg::Flags => Self::Flags,
        }
    }
}
