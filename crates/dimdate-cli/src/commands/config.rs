use dimdate_config::DimdateConfig;

use crate::cli::{GlobalFlags, OutputFormat};

/// Handle `dimdate config`.
///
/// Prints the effective configuration after every layer is applied: TOML
/// unless `--format json` is given.
pub fn handle(config: &DimdateConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let rendered = render(config, flags.format)?;
    println!("{}", rendered.trim_end());
    Ok(())
}

fn render(config: &DimdateConfig, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(config)?),
        OutputFormat::Table | OutputFormat::Csv => Ok(config.to_toml()?),
    }
}

#[cfg(test)]
mod tests {
    use dimdate_config::DimdateConfig;

    use super::render;
    use crate::cli::OutputFormat;

    #[test]
    fn toml_output_loads_back_to_the_same_config() {
        let mut config = DimdateConfig::default();
        config.fiscal.start_month = 4;
        config.output.separator = String::from(";");

        let toml = render(&config, OutputFormat::Table).expect("renders");
        assert!(toml.contains("[fiscal]"));
        let back: DimdateConfig = toml::from_str(&toml).expect("parses");
        assert_eq!(back, config);
    }

    #[test]
    fn json_output_has_sections() {
        let json = render(&DimdateConfig::default(), OutputFormat::Json).expect("renders");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["range"]["start"], "1999-06-28");
        assert_eq!(value["fiscal"]["start_month"], 7);
    }
}
