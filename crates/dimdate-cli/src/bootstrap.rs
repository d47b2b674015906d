use anyhow::Context;
use dimdate_config::DimdateConfig;

use crate::cli::GlobalFlags;

/// Load the layered configuration, `.env` included.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<DimdateConfig> {
    let config = DimdateConfig::load_with_dotenv(flags.config.as_deref())
        .context("failed to load dimdate configuration")?;

    tracing::debug!(
        explicit = ?flags.config,
        start = %config.range.start,
        end = %config.range.end,
        "bootstrap: configuration loaded"
    );
    Ok(config)
}
