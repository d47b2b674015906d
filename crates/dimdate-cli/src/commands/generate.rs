use std::path::{Path, PathBuf};

use anyhow::Context;
use dimdate_config::DimdateConfig;
use dimdate_core::GenerationOptions;
use dimdate_export::ExportFormat;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::GenerateArgs;
use crate::commands::csv_options;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct GenerateSummary {
    path: String,
    format: String,
    rows: usize,
    columns: usize,
}

/// Handle `dimdate generate`.
pub fn handle(
    args: &GenerateArgs,
    mut config: DimdateConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    args.range.apply(&mut config);
    if let Some(separator) = &args.separator {
        config.output.separator.clone_from(separator);
    }

    let path = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.output.file_name));
    let summary = run(&config, &path)?;

    if !flags.quiet {
        output(&summary, flags.format)?;
    }
    Ok(())
}

fn run(config: &DimdateConfig, path: &Path) -> anyhow::Result<GenerateSummary> {
    let request = config.to_request().context("invalid configuration")?;
    let format = export_format(path, config);

    let progress = Progress::spinner("generating date dimension");
    let table = match dimdate_engine::generate(&request, GenerationOptions::full()) {
        Ok(table) => table,
        Err(error) => {
            progress.finish_err("generation failed");
            return Err(error).context("failed to generate the date dimension");
        }
    };

    progress.set_message(&format!("writing {}", path.display()));
    if let Err(error) = dimdate_export::export_file(&table, &format, path) {
        progress.finish_err("export failed");
        return Err(error).with_context(|| format!("failed to write {}", path.display()));
    }
    progress.finish_clear();

    Ok(GenerateSummary {
        path: path.display().to_string(),
        format: format.to_string(),
        rows: table.len(),
        columns: table.width(),
    })
}

/// `.json` writes JSON; any other extension writes CSV.
fn export_format(path: &Path, config: &DimdateConfig) -> ExportFormat {
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        ExportFormat::Json
    } else {
        ExportFormat::Csv(csv_options(&config.output))
    }
}
