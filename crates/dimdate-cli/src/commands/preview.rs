use anyhow::Context;
use dimdate_config::DimdateConfig;
use dimdate_core::GeneratedTable;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::PreviewArgs;
use crate::commands::csv_options;
use crate::output::render_generated;

/// Handle `dimdate preview`.
pub fn handle(
    args: &PreviewArgs,
    mut config: DimdateConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    args.range.apply(&mut config);
    let table = build(&config, args.rows)?;
    let rendered = render_generated(&table, flags.format, &csv_options(&config.output))?;
    println!("{rendered}");
    Ok(())
}

fn build(config: &DimdateConfig, rows: Option<usize>) -> anyhow::Result<GeneratedTable> {
    let request = config.to_request().context("invalid configuration")?;
    let options = config.preview_options(rows);
    dimdate_engine::generate(&request, options).context("failed to generate preview")
}
