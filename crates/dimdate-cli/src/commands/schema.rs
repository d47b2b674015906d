use dimdate_config::DimdateConfig;

use crate::cli::GlobalFlags;

/// Handle `dimdate schema`.
///
/// Always JSON; the schema has no tabular form.
pub fn handle(_flags: &GlobalFlags) -> anyhow::Result<()> {
    println!("{}", render()?);
    Ok(())
}

fn render() -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&DimdateConfig::json_schema())?)
}
