use anyhow::Context;
use dimdate_config::DimdateConfig;
use dimdate_core::{FieldGroup, FieldRegistry};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::FieldsArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
struct FieldRow {
    group: String,
    key: String,
    name: String,
    active: bool,
    order: u32,
    format: String,
}

/// Handle `dimdate fields`.
pub fn handle(args: &FieldsArgs, config: &DimdateConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let request = config.to_request().context("invalid configuration")?;
    let rows = rows(&request.registry, args.group.map(FieldGroup::from), args.active);
    output(&rows, flags.format)
}

/// Registry rows sorted by column order.
fn rows(registry: &FieldRegistry, group: Option<FieldGroup>, active_only: bool) -> Vec<FieldRow> {
    let mut rows: Vec<FieldRow> = registry
        .iter()
        .filter(|d| group.is_none_or(|g| d.group() == g))
        .filter(|d| !active_only || d.active)
        .map(|d| FieldRow {
            group: d.group().to_string(),
            key: d.key.to_string(),
            name: d.display_name.clone(),
            active: d.active,
            order: d.order,
            format: d.format.pattern().unwrap_or_default().to_string(),
        })
        .collect();
    rows.sort_by_key(|row| row.order);
    rows
}
